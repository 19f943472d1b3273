//! 全局分类器单例管理
use once_cell::sync::OnceCell;

use super::classifier::HeatingClassifier;
use crate::config::{ClassifierConfig, ConfigManager};
use crate::error::{HeatIdError, HeatResult};
use crate::rule::{CanonicalSubtype, EfficiencyReport, EquipmentCategory, FuelType, Region};

/// 全局分类器实例
static GLOBAL_CLASSIFIER: OnceCell<HeatingClassifier> = OnceCell::new();

/// 初始化全局分类器（默认配置）
pub fn init_classifier() -> HeatResult<()> {
    init_classifier_with_config(ConfigManager::get_default())
}

/// 带自定义配置初始化全局分类器
///
/// 全局实例只能写入一次：显式初始化过、或已被简化接口按内置规则表创建过时返回
/// `ClassifierAlreadyInitialized`，传入的配置不会生效。
pub fn init_classifier_with_config(config: ClassifierConfig) -> HeatResult<()> {
    if GLOBAL_CLASSIFIER.get().is_some() {
        return Err(HeatIdError::ClassifierAlreadyInitialized);
    }

    let classifier = HeatingClassifier::new(&config)?;
    GLOBAL_CLASSIFIER
        .set(classifier)
        .map_err(|_| HeatIdError::ClassifierAlreadyInitialized)?;

    Ok(())
}

/// 获取全局分类器，未显式初始化时使用内置规则表（此后不可再初始化）
pub fn global_classifier() -> &'static HeatingClassifier {
    GLOBAL_CLASSIFIER.get_or_init(HeatingClassifier::builtin)
}

pub fn resolve_subtype(
    fuel: FuelType,
    equipment: EquipmentCategory,
    description: &str,
) -> HeatResult<CanonicalSubtype> {
    global_classifier().resolve_subtype(fuel, equipment, description)
}

pub fn region_of(state: &str) -> Region {
    global_classifier().region_of(state)
}

pub fn compute_efficiency(
    fuel: FuelType,
    equipment: EquipmentCategory,
    subtype: &CanonicalSubtype,
    year: Option<i32>,
    energy_star: bool,
    state: Option<&str>,
) -> EfficiencyReport {
    global_classifier().compute_efficiency(fuel, equipment, subtype, year, energy_star, state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{TableLoader, EMBEDDED_TABLES};

    // 全局实例在整个测试进程内共享，只在这一个用例里触碰
    #[test]
    fn test_global_free_functions_and_late_init() {
        let subtype = resolve_subtype(
            FuelType::Electric,
            EquipmentCategory::HeatPump,
            "It has a large outside unit (Electric Air Source Heat Pump).",
        )
        .unwrap();
        let report = compute_efficiency(
            FuelType::Electric,
            EquipmentCategory::HeatPump,
            &subtype,
            Some(2000),
            false,
            None,
        );
        assert_eq!(report.efficiency.to_string(), "7.1");
        assert_eq!(region_of("ME"), Region::North);
        assert_eq!(region_of("TX"), Region::South);

        // 简化接口已按内置规则表创建了全局实例，之后的自定义初始化必须报错
        let mut file = EMBEDDED_TABLES.to_table_file();
        file.regions.south.retain(|state| state != "TX");
        file.regions.north.push("TX".to_string());
        let path = std::env::temp_dir().join(format!("heatid_global_{}.json", std::process::id()));
        std::fs::write(&path, serde_json::to_string(&file).unwrap()).unwrap();
        assert!(TableLoader::load_from_file(&path).unwrap().north_states.contains("TX"));

        let config = ConfigManager::custom().table_file(&path).build();
        let err = init_classifier_with_config(config).unwrap_err();
        assert!(matches!(err, HeatIdError::ClassifierAlreadyInitialized));
        assert!(matches!(
            init_classifier(),
            Err(HeatIdError::ClassifierAlreadyInitialized)
        ));
        assert_eq!(region_of("TX"), Region::South);

        let _ = std::fs::remove_file(&path);
    }
}
