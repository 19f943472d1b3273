//! 分类器核心：对外暴露三个纯操作，并提供一站式的“描述 -> 明细记录”接口
use std::sync::Arc;

use tracing::debug;

use crate::config::ClassifierConfig;
use crate::engine::{EfficiencyEngine, EfficiencyInput};
use crate::error::HeatResult;
use crate::resolver::{RegionResolver, SubtypeResolver};
use crate::rule::{
    CanonicalSubtype, EfficiencyReport, EquipmentCategory, FuelType, Region, RegionMatch,
    RuleTables, TableLoader, EMBEDDED_TABLES,
};
use crate::survey::EquipmentDetails;

/// 采暖设备分类器
#[derive(Debug, Clone)]
pub struct HeatingClassifier {
    tables: Arc<RuleTables>,
    subtypes: SubtypeResolver,
    regions: RegionResolver,
    engine: EfficiencyEngine,
}

impl HeatingClassifier {
    /// 按配置创建分类器（规则表只在此处加载一次）
    pub fn new(config: &ClassifierConfig) -> HeatResult<Self> {
        let tables = TableLoader::load(config)?;
        debug!("分类器初始化，规则来源：{:?}", config.table_origin);
        Ok(Self::with_tables(tables, config.log_region_fallback))
    }

    /// 使用内置规则表创建
    pub fn builtin() -> Self {
        Self::with_tables(Arc::clone(&EMBEDDED_TABLES), true)
    }

    /// 使用已加载的规则表创建
    pub fn with_tables(tables: Arc<RuleTables>, log_region_fallback: bool) -> Self {
        let regions = RegionResolver::new(Arc::clone(&tables), log_region_fallback);
        Self {
            subtypes: SubtypeResolver::new(Arc::clone(&tables)),
            engine: EfficiencyEngine::new(regions.clone()),
            regions,
            tables,
        }
    }

    pub fn tables(&self) -> &RuleTables {
        &self.tables
    }

    /// 设备描述 -> 规范子类型
    pub fn resolve_subtype(
        &self,
        fuel: FuelType,
        equipment: EquipmentCategory,
        description: &str,
    ) -> HeatResult<CanonicalSubtype> {
        self.subtypes.resolve(fuel, equipment, description)
    }

    /// 组合可选的描述文本
    pub fn options_for(&self, fuel: FuelType, equipment: EquipmentCategory) -> Vec<&str> {
        self.subtypes.options_for(fuel, equipment)
    }

    /// 州代码 -> 气候区
    pub fn region_of(&self, state: &str) -> Region {
        self.regions.region_of(state)
    }

    /// 州代码 -> 命中结果（可区分兜底）
    pub fn classify_region(&self, state: &str) -> RegionMatch {
        self.regions.classify(state)
    }

    /// 计算效率
    pub fn compute_efficiency(
        &self,
        fuel: FuelType,
        equipment: EquipmentCategory,
        subtype: &CanonicalSubtype,
        year: Option<i32>,
        energy_star: bool,
        state: Option<&str>,
    ) -> EfficiencyReport {
        self.engine
            .compute_efficiency(fuel, equipment, subtype, year, energy_star, state)
    }

    /// 一站式识别：解析描述、计算效率，组装展示用明细记录
    pub fn classify(
        &self,
        fuel: FuelType,
        equipment: EquipmentCategory,
        description: &str,
        year: Option<i32>,
        energy_star: bool,
        state: Option<&str>,
    ) -> HeatResult<EquipmentDetails> {
        let subtype = self.resolve_subtype(fuel, equipment, description)?;
        let report = self.engine.compute(&EfficiencyInput {
            fuel,
            equipment,
            subtype: &subtype,
            year,
            energy_star,
            state,
        });
        Ok(EquipmentDetails::from_report(fuel, equipment, subtype, &report))
    }
}

impl Default for HeatingClassifier {
    fn default() -> Self {
        Self::builtin()
    }
}
