//! 规则表加载管理器
//! 负责内置规则表的单例构建，以及本地 JSON 规则文件的加载与校验

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::{debug, warn};

use super::model::Appliance;
use super::tables::{RuleTables, TableFile};
use crate::config::{ClassifierConfig, TableOrigin};
use crate::error::{HeatIdError, HeatResult};

/// 内置规则表单例（首次访问时构建，全进程共享一份只读实例）
pub static EMBEDDED_TABLES: Lazy<Arc<RuleTables>> = Lazy::new(|| {
    let tables = RuleTables::embedded();
    debug!(
        "内置规则表构建完成，子类型描述{}条，北方州{}个，南方州{}个",
        tables.subtype_count(),
        tables.north_states.len(),
        tables.south_states.len()
    );
    Arc::new(tables)
});

/// 规则表加载管理器
pub struct TableLoader;

impl TableLoader {
    /// 按配置加载规则表
    pub fn load(config: &ClassifierConfig) -> HeatResult<Arc<RuleTables>> {
        match &config.table_origin {
            TableOrigin::Embedded => Ok(Arc::clone(&EMBEDDED_TABLES)),
            TableOrigin::LocalFile(path) => Self::load_from_file(path).map(Arc::new),
        }
    }

    /// 从本地 JSON 文件加载规则表
    pub fn load_from_file(path: &Path) -> HeatResult<RuleTables> {
        let data = std::fs::read_to_string(path).map_err(|e| {
            HeatIdError::TableLoadError(format!("读取规则文件 {} 失败：{}", path.display(), e))
        })?;
        let tables = Self::parse(&data)?;
        debug!(
            "从 {} 加载规则表成功，子类型描述{}条",
            path.display(),
            tables.subtype_count()
        );
        Ok(tables)
    }

    /// 解析并校验 JSON 规则文本
    pub fn parse(data: &str) -> HeatResult<RuleTables> {
        let file: TableFile = serde_json::from_str(data)?;
        Self::build(file)
    }

    /// 导出规则表为格式化 JSON
    pub fn to_json(tables: &RuleTables) -> HeatResult<String> {
        Ok(serde_json::to_string_pretty(&tables.to_table_file())?)
    }

    /// 文件格式 -> 运行期规则表
    fn build(file: TableFile) -> HeatResult<RuleTables> {
        let mut subtypes = HashMap::new();

        for (key, entries) in file.subtypes {
            let appliance = Appliance::from_key(&key).ok_or_else(|| {
                HeatIdError::TableParseError(format!("规则键 [{}] 不是合法的燃料与设备组合", key))
            })?;

            let mut seen = HashSet::new();
            for entry in &entries {
                if entry.description.trim().is_empty() || entry.code.trim().is_empty() {
                    return Err(HeatIdError::TableParseError(format!(
                        "[{}] 存在空的描述或子类型代码",
                        key
                    )));
                }
                if !seen.insert(entry.description.as_str()) {
                    return Err(HeatIdError::TableParseError(format!(
                        "[{}] 描述重复：{}",
                        key, entry.description
                    )));
                }
            }

            if entries.is_empty() {
                warn!("规则键 [{}] 没有任何描述，将无法解析该组合的子类型", key);
            }
            if subtypes.insert(appliance, entries).is_some() {
                return Err(HeatIdError::TableParseError(format!(
                    "组合 [{}] 出现了多次（键名仅大小写不同）",
                    appliance
                )));
            }
        }

        let north_states: HashSet<String> = file.regions.north.into_iter().collect();
        let south_states: HashSet<String> = file.regions.south.into_iter().collect();

        let mut overlap: Vec<&String> = north_states.intersection(&south_states).collect();
        if !overlap.is_empty() {
            overlap.sort();
            return Err(HeatIdError::TableParseError(format!(
                "南北气候区名单存在重叠：{:?}",
                overlap
            )));
        }

        Ok(RuleTables {
            subtypes,
            north_states,
            south_states,
        })
    }
}
