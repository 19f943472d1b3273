//! 效率引擎核心
//! 对合法组合做穷尽匹配，选出唯一适用的规则集并组装回显字段

use tracing::debug;

use super::{combustion, electric};
use crate::resolver::RegionResolver;
use crate::rule::{
    collects_state, collects_year_and_certification, Appliance, CanonicalSubtype, Efficiency,
    EfficiencyReport, EquipmentCategory, FuelType, Region,
};
use crate::utils::YearParser;

/// 效率计算输入
#[derive(Debug, Clone, Copy)]
pub struct EfficiencyInput<'a> {
    pub fuel: FuelType,
    pub equipment: EquipmentCategory,
    pub subtype: &'a CanonicalSubtype,
    pub year: Option<i32>,
    pub energy_star: bool,
    pub state: Option<&'a str>,
}

/// 效率引擎（无状态，可重入）
#[derive(Debug, Clone)]
pub struct EfficiencyEngine {
    regions: RegionResolver,
}

impl EfficiencyEngine {
    pub fn new(regions: RegionResolver) -> Self {
        Self { regions }
    }

    /// 计算效率
    pub fn compute(&self, input: &EfficiencyInput<'_>) -> EfficiencyReport {
        let state = input.state.filter(|s| !s.is_empty());
        let efficiency = match Appliance::from_parts(input.fuel, input.equipment) {
            Some(appliance) => self.rate(appliance, input, state),
            None => {
                debug!("组合 [{} {}] 没有效率规则", input.fuel, input.equipment);
                Efficiency::NotAvailable
            }
        };

        let mut report = EfficiencyReport::new(efficiency);
        if collects_year_and_certification(input.fuel, input.equipment) {
            report.year = input.year;
            report.energy_star = Some(input.energy_star);
        }
        if collects_state(input.fuel, input.equipment) {
            report.state = state.map(str::to_string);
        }
        report
    }

    /// 参数形式的便捷入口
    pub fn compute_efficiency(
        &self,
        fuel: FuelType,
        equipment: EquipmentCategory,
        subtype: &CanonicalSubtype,
        year: Option<i32>,
        energy_star: bool,
        state: Option<&str>,
    ) -> EfficiencyReport {
        self.compute(&EfficiencyInput {
            fuel,
            equipment,
            subtype,
            year,
            energy_star,
            state,
        })
    }

    fn rate(&self, appliance: Appliance, input: &EfficiencyInput<'_>, state: Option<&str>) -> Efficiency {
        let subtype = input.subtype.as_str();
        let year = YearParser::coerce(input.year);
        let energy_star = input.energy_star;

        let efficiency = match appliance {
            Appliance::GasFurnace => {
                // 未提供州时直接按南方处理，不计为兜底
                let region = state.map_or(Region::South, |s| self.regions.region_of(s));
                combustion::gas_furnace(subtype, year, energy_star, region)
            }
            Appliance::GasBoiler => combustion::gas_boiler(subtype, year, energy_star),
            Appliance::OilFurnace => combustion::oil_furnace(subtype, energy_star),
            Appliance::OilBoiler => combustion::oil_boiler(subtype, year, energy_star),
            Appliance::ElectricFurnace => Efficiency::Afue("0.99"),
            Appliance::ElectricBoiler => Efficiency::Afue("0.97"),
            Appliance::ElectricLocalEquipment => Efficiency::Afue("0.99"),
            Appliance::ElectricHeatPump => electric::heat_pump(subtype, year, energy_star),
            Appliance::GeothermalHeatPump => Efficiency::NotProvided,
            Appliance::GasLocalEquipment | Appliance::WoodCoalLocalEquipment => Efficiency::NotAvailable,
        };

        debug!(
            "效率计算：[{}] 子类型={} 年份={} 认证={} -> {}",
            appliance, subtype, year, energy_star, efficiency
        );
        efficiency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::SubtypeResolver;
    use crate::rule::EMBEDDED_TABLES;
    use std::sync::Arc;

    fn engine() -> EfficiencyEngine {
        EfficiencyEngine::new(RegionResolver::new(Arc::clone(&EMBEDDED_TABLES), false))
    }

    fn subtype(fuel: FuelType, equipment: EquipmentCategory, description: &str) -> CanonicalSubtype {
        SubtypeResolver::new(Arc::clone(&EMBEDDED_TABLES))
            .resolve(fuel, equipment, description)
            .unwrap()
    }

    fn gas_furnace_condensing() -> CanonicalSubtype {
        subtype(
            FuelType::Gas,
            EquipmentCategory::Furnace,
            "The furnace has white PVC pipe exhaust venting (Condensing).",
        )
    }

    #[test]
    fn test_gas_furnace_north_certified() {
        let condensing = gas_furnace_condensing();
        let report = engine().compute_efficiency(
            FuelType::Gas,
            EquipmentCategory::Furnace,
            &condensing,
            Some(2020),
            true,
            Some("ME"),
        );
        assert_eq!(report.efficiency.to_string(), "AFUE 0.95");
        assert_eq!(report.year, Some(2020));
        assert_eq!(report.energy_star, Some(true));
        assert_eq!(report.state.as_deref(), Some("ME"));
    }

    #[test]
    fn test_gas_furnace_south_certified() {
        let condensing = gas_furnace_condensing();
        let report = engine().compute_efficiency(
            FuelType::Gas,
            EquipmentCategory::Furnace,
            &condensing,
            Some(2020),
            true,
            Some("TX"),
        );
        assert_eq!(report.efficiency.to_string(), "AFUE 0.90");
    }

    #[test]
    fn test_gas_furnace_without_state_uses_south() {
        let condensing = gas_furnace_condensing();
        let engine = engine();
        for state in [None, Some("")] {
            let report = engine.compute_efficiency(
                FuelType::Gas,
                EquipmentCategory::Furnace,
                &condensing,
                Some(2020),
                true,
                state,
            );
            assert_eq!(report.efficiency.to_string(), "AFUE 0.90");
            assert_eq!(report.state, None);
        }
    }

    #[test]
    fn test_gas_furnace_missing_year_is_oldest_tier() {
        let condensing = gas_furnace_condensing();
        let report = engine().compute_efficiency(
            FuelType::Gas,
            EquipmentCategory::Furnace,
            &condensing,
            YearParser::parse("not a year"),
            true,
            Some("ME"),
        );
        assert_eq!(report.efficiency.to_string(), "AFUE 0.90");
        assert_eq!(report.year, None);
    }

    #[test]
    fn test_oil_furnace_condensing_short_circuits() {
        let condensing = subtype(
            FuelType::Oil,
            EquipmentCategory::Furnace,
            "The furnace has white PVC pipe sealed exhaust venting (Condensing).",
        );
        let report = engine().compute_efficiency(
            FuelType::Oil,
            EquipmentCategory::Furnace,
            &condensing,
            Some(1990),
            false,
            None,
        );
        assert_eq!(report.efficiency.to_string(), "AFUE 0.90");
        assert_eq!(report.state, None);
    }

    #[test]
    fn test_heat_pump_values_are_bare() {
        let engine = engine();
        let minisplit = subtype(
            FuelType::Electric,
            EquipmentCategory::HeatPump,
            "It has a thin profile outside unit (Minisplit (Ductless) Heat Pump).",
        );
        let report = engine.compute_efficiency(
            FuelType::Electric,
            EquipmentCategory::HeatPump,
            &minisplit,
            Some(1990),
            true,
            None,
        );
        assert_eq!(report.efficiency.to_string(), "10.0");

        let air_source = subtype(
            FuelType::Electric,
            EquipmentCategory::HeatPump,
            "It has a large outside unit (Electric Air Source Heat Pump).",
        );
        let report = engine.compute_efficiency(
            FuelType::Electric,
            EquipmentCategory::HeatPump,
            &air_source,
            Some(2000),
            false,
            None,
        );
        assert_eq!(report.efficiency.to_string(), "7.1");
        assert_eq!(report.energy_star, Some(false));
    }

    #[test]
    fn test_constant_and_sentinel_rules() {
        let engine = engine();
        let cases = [
            (FuelType::Electric, EquipmentCategory::Furnace, "Electric Furnace", "AFUE 0.99"),
            (FuelType::Electric, EquipmentCategory::Boiler, "Electric Boiler", "AFUE 0.97"),
            (
                FuelType::Electric,
                EquipmentCategory::LocalEquipment,
                "Electric Baseboard Heater",
                "AFUE 0.99",
            ),
            (
                FuelType::Geothermal,
                EquipmentCategory::HeatPump,
                "Geothermal Heat Pump (Ground Coupled)",
                "Efficiency data not provided",
            ),
            (
                FuelType::WoodCoal,
                EquipmentCategory::LocalEquipment,
                "Wood Stove",
                "Efficiency data not available",
            ),
            (
                FuelType::Gas,
                EquipmentCategory::LocalEquipment,
                "Room (through-the-wall) gas furnace",
                "Efficiency data not available",
            ),
        ];

        for (fuel, equipment, description, expected) in cases {
            let resolved = subtype(fuel, equipment, description);
            let report = engine.compute_efficiency(fuel, equipment, &resolved, None, false, None);
            assert_eq!(report.efficiency.to_string(), expected, "{} {}", fuel, equipment);
        }
    }

    #[test]
    fn test_echo_fields_follow_collection_rules() {
        let engine = engine();
        let furnace = subtype(FuelType::Electric, EquipmentCategory::Furnace, "Electric Furnace");
        let report = engine.compute_efficiency(
            FuelType::Electric,
            EquipmentCategory::Furnace,
            &furnace,
            Some(2001),
            true,
            Some("ME"),
        );
        assert_eq!(report.year, None);
        assert_eq!(report.energy_star, None);
        assert_eq!(report.state, None);
    }

    #[test]
    fn test_uncovered_pair_is_not_available() {
        let stove = subtype(FuelType::WoodCoal, EquipmentCategory::LocalEquipment, "Wood Stove");
        let report = engine().compute_efficiency(
            FuelType::Oil,
            EquipmentCategory::HeatPump,
            &stove,
            Some(2020),
            true,
            None,
        );
        assert_eq!(report.efficiency, Efficiency::NotAvailable);
        // 燃油类仍回显年份与认证
        assert_eq!(report.year, Some(2020));
    }

    #[test]
    fn test_compute_is_idempotent() {
        let engine = engine();
        let condensing = gas_furnace_condensing();
        let input = EfficiencyInput {
            fuel: FuelType::Gas,
            equipment: EquipmentCategory::Furnace,
            subtype: &condensing,
            year: Some(2016),
            energy_star: true,
            state: Some("MN"),
        };
        assert_eq!(engine.compute(&input), engine.compute(&input));
    }
}
