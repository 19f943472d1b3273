//! 规则模块：负责规则表的数据模型、内置数据与加载
pub mod catalog;
pub mod loader;
pub mod model;
pub mod tables;

// 导出核心接口
pub use self::catalog::state_name;
pub use self::loader::{TableLoader, EMBEDDED_TABLES};
pub use self::model::{
    collects_state, collects_year_and_certification, equipment_options, Appliance,
    CanonicalSubtype, Efficiency, EfficiencyReport, EquipmentCategory, FuelType, Region,
    RegionMatch,
};
pub use self::tables::{RegionLists, RuleTables, SubtypeEntry, TableFile};
