//! 全局错误类型定义

use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeatIdError {
    // 分类输入相关错误
    #[error("未知燃料类型：{0}")]
    UnknownFuel(String),
    #[error("未知设备类别：{0}")]
    UnknownEquipment(String),
    #[error("[{key}] 下未找到匹配的设备描述：{description}")]
    SubtypeNotFound { key: String, description: String },

    // 规则表相关错误
    #[error("规则表加载失败：{0}")]
    TableLoadError(String),
    #[error("规则表校验失败：{0}")]
    TableParseError(String),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),

    // 全局单例
    #[error("全局分类器已初始化，新配置未生效")]
    ClassifierAlreadyInitialized,
}

impl HeatIdError {
    /// 是否为“描述未匹配”错误（调用方应重新提示用户选择）
    pub fn is_subtype_not_found(&self) -> bool {
        matches!(self, HeatIdError::SubtypeNotFound { .. })
    }
}

// 全局Result类型
pub type HeatResult<T> = Result<T, HeatIdError>;
