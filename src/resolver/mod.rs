//! 解析模块：设备描述 -> 规范子类型，州代码 -> 气候区
pub mod region;
pub mod subtype;

pub use self::region::RegionResolver;
pub use self::subtype::SubtypeResolver;
