//! 分类模块：整合子类型解析、气候区解析与效率引擎
pub mod classifier;
pub mod global;

// 导出核心接口
pub use self::classifier::HeatingClassifier;
pub use self::global::{
    compute_efficiency, global_classifier, init_classifier, init_classifier_with_config, region_of,
    resolve_subtype,
};
