//! 效率引擎：按合法组合分派到对应的规则集
pub mod combustion;
pub mod efficiency;
pub mod electric;

pub use self::efficiency::{EfficiencyEngine, EfficiencyInput};
