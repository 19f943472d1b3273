//! 全局配置管理,存储所有可配置项

use std::path::PathBuf;

/// 规则表来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableOrigin {
    Embedded,           // 内置规则表（编译期固化）
    LocalFile(PathBuf), // 本地 JSON 规则表（启动时加载一次）
}

/// 全局配置
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    // 规则表来源
    pub table_origin: TableOrigin,
    // 州代码未命中南北名单时是否输出告警日志
    pub log_region_fallback: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            table_origin: TableOrigin::Embedded,
            log_region_fallback: true,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> ClassifierConfig {
        ClassifierConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: ClassifierConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ClassifierConfig::default(),
        }
    }

    pub fn table_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.table_origin = TableOrigin::LocalFile(path.into());
        self
    }

    pub fn table_origin(mut self, origin: TableOrigin) -> Self {
        self.config.table_origin = origin;
        self
    }

    pub fn log_region_fallback(mut self, enabled: bool) -> Self {
        self.config.log_region_fallback = enabled;
        self
    }

    pub fn build(self) -> ClassifierConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_embedded_tables() {
        let config = ConfigManager::get_default();
        assert_eq!(config.table_origin, TableOrigin::Embedded);
        assert!(config.log_region_fallback);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ConfigManager::custom()
            .table_file("rules/heating.json")
            .log_region_fallback(false)
            .build();

        assert_eq!(
            config.table_origin,
            TableOrigin::LocalFile(PathBuf::from("rules/heating.json"))
        );
        assert!(!config.log_region_fallback);
    }
}
