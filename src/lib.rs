//! heatid - 住宅采暖设备识别与燃料转换效率估算

// 导出全局错误类型
pub use self::error::{HeatIdError, HeatResult};

// 导出配置模块
pub use self::config::{ClassifierConfig, ConfigManager, CustomConfigBuilder, TableOrigin};

// 导出规则模块核心接口
pub use self::rule::{
    collects_state, collects_year_and_certification, equipment_options, state_name, Appliance,
    CanonicalSubtype, Efficiency, EfficiencyReport, EquipmentCategory, FuelType, Region,
    RegionMatch, RuleTables, SubtypeEntry, TableLoader,
};

// 导出解析与引擎核心接口
pub use self::engine::{EfficiencyEngine, EfficiencyInput};
pub use self::resolver::{RegionResolver, SubtypeResolver};

// 导出工具模块核心接口
pub use self::utils::{TitleCaser, YearParser};

// 导出分类模块核心接口（含全局单例的简化接口）
pub use self::classifier::{
    compute_efficiency, global_classifier, init_classifier, init_classifier_with_config, region_of,
    resolve_subtype, HeatingClassifier,
};

// 导出调查模块
pub use self::survey::{parse_energy_star, EquipmentDetails, HeatingSurvey, SurveyWizard};

// 声明所有子模块
pub mod classifier;
pub mod config;
pub mod engine;
pub mod error;
pub mod resolver;
pub mod rule;
pub mod survey;
pub mod utils;
