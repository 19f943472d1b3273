//! 规则表数据结构
//! 运行期使用的 RuleTables 与磁盘上的 JSON 规则文件格式

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::catalog::{NORTH_STATES, SOUTH_STATES, SUBTYPE_DESCRIPTORS};
use super::model::Appliance;

/// 单条子类型描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtypeEntry {
    pub description: String,
    pub code: String,
}

/// 气候区名单（文件格式）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegionLists {
    #[serde(default)]
    pub north: Vec<String>,
    #[serde(default)]
    pub south: Vec<String>,
}

/// JSON 规则文件格式
///
/// ```json
/// {
///   "subtypes": { "Gas Furnace": [ { "description": "...", "code": "Condensing" } ] },
///   "regions": { "north": ["ME"], "south": ["TX"] }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableFile {
    #[serde(default)]
    pub subtypes: BTreeMap<String, Vec<SubtypeEntry>>,
    #[serde(default)]
    pub regions: RegionLists,
}

/// 运行期规则表（启动时构建一次，之后只读共享）
#[derive(Debug, Clone, Default)]
pub struct RuleTables {
    pub subtypes: HashMap<Appliance, Vec<SubtypeEntry>>,
    pub north_states: HashSet<String>,
    pub south_states: HashSet<String>,
}

impl RuleTables {
    /// 由内置静态数据构建
    pub fn embedded() -> Self {
        let subtypes: HashMap<Appliance, Vec<SubtypeEntry>> = SUBTYPE_DESCRIPTORS
            .iter()
            .map(|(appliance, entries)| {
                let entries: Vec<SubtypeEntry> = entries
                    .iter()
                    .map(|(description, code)| SubtypeEntry {
                        description: description.to_string(),
                        code: code.to_string(),
                    })
                    .collect();
                (*appliance, entries)
            })
            .collect();

        Self {
            subtypes,
            north_states: NORTH_STATES.iter().map(|s| s.to_string()).collect(),
            south_states: SOUTH_STATES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// 某组合的子类型描述（保持声明顺序），组合无表时为空
    pub fn entries_for(&self, appliance: Appliance) -> &[SubtypeEntry] {
        self.subtypes
            .get(&appliance)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 子类型描述总条数
    pub fn subtype_count(&self) -> usize {
        self.subtypes.values().map(Vec::len).sum()
    }

    /// 转换为文件格式（名单排序输出，便于比对）
    pub fn to_table_file(&self) -> TableFile {
        let subtypes = self
            .subtypes
            .iter()
            .map(|(appliance, entries)| (appliance.key(), entries.clone()))
            .collect();

        let mut north: Vec<String> = self.north_states.iter().cloned().collect();
        let mut south: Vec<String> = self.south_states.iter().cloned().collect();
        north.sort();
        south.sort();

        TableFile {
            subtypes,
            regions: RegionLists { north, south },
        }
    }
}
