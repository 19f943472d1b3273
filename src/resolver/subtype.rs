//! 子类型解析器
//! 在（燃料, 设备类别）对应的描述表内查找用户选择的描述，返回规范子类型

use std::sync::Arc;

use tracing::debug;

use crate::error::{HeatIdError, HeatResult};
use crate::rule::{Appliance, CanonicalSubtype, EquipmentCategory, FuelType, RuleTables};

/// 子类型解析器（无状态，只读共享规则表）
#[derive(Debug, Clone)]
pub struct SubtypeResolver {
    tables: Arc<RuleTables>,
}

impl SubtypeResolver {
    pub fn new(tables: Arc<RuleTables>) -> Self {
        Self { tables }
    }

    /// 解析设备描述
    ///
    /// 描述必须与表中文本完全一致；组合不合法、组合无表或描述未命中
    /// 均返回 `SubtypeNotFound`，调用方据此重新提示用户。
    pub fn resolve(
        &self,
        fuel: FuelType,
        equipment: EquipmentCategory,
        description: &str,
    ) -> HeatResult<CanonicalSubtype> {
        match Appliance::from_parts(fuel, equipment) {
            Some(appliance) => self.resolve_for(appliance, description),
            None => Err(HeatIdError::SubtypeNotFound {
                key: format!("{} {}", fuel, equipment),
                description: description.to_string(),
            }),
        }
    }

    /// 按合法组合解析设备描述
    pub fn resolve_for(&self, appliance: Appliance, description: &str) -> HeatResult<CanonicalSubtype> {
        let found = self
            .tables
            .entries_for(appliance)
            .iter()
            .find(|entry| entry.description == description);

        match found {
            Some(entry) => {
                let subtype = CanonicalSubtype::from_code(&entry.code);
                debug!("子类型解析成功：[{}] -> {}", appliance, subtype);
                Ok(subtype)
            }
            None => {
                debug!("子类型解析失败：[{}] 下无描述 {:?}", appliance, description);
                Err(HeatIdError::SubtypeNotFound {
                    key: appliance.key(),
                    description: description.to_string(),
                })
            }
        }
    }

    /// 组合可选的描述文本（保持声明顺序，不排序）
    pub fn options_for(&self, fuel: FuelType, equipment: EquipmentCategory) -> Vec<&str> {
        Appliance::from_parts(fuel, equipment)
            .map(|appliance| {
                self.tables
                    .entries_for(appliance)
                    .iter()
                    .map(|entry| entry.description.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }
}
