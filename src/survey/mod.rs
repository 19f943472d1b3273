//! 调查模块：识别结果的明细记录、多台设备的累积与交互式向导
//! 该层只持有状态与负责展示，所有判定都委托给分类器
pub mod wizard;

use std::fmt;

use serde::Serialize;

use crate::error::HeatResult;
use crate::rule::{CanonicalSubtype, EfficiencyReport, EquipmentCategory, FuelType};

pub use self::wizard::SurveyWizard;

/// 单台设备的明细记录（字段名与展示表头一致）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquipmentDetails {
    #[serde(rename = "Fuel")]
    pub fuel: FuelType,
    #[serde(rename = "Equipment")]
    pub equipment: EquipmentCategory,
    #[serde(rename = "Subtype")]
    pub subtype: CanonicalSubtype,
    #[serde(rename = "Year")]
    pub year: Option<i32>,
    #[serde(rename = "ENERGY STAR Status")]
    pub energy_star_status: String,
    #[serde(rename = "Efficiency")]
    pub efficiency: String,
    #[serde(rename = "State")]
    pub state: Option<String>,
}

impl EquipmentDetails {
    /// 由效率计算结果组装明细
    pub fn from_report(
        fuel: FuelType,
        equipment: EquipmentCategory,
        subtype: CanonicalSubtype,
        report: &EfficiencyReport,
    ) -> Self {
        let energy_star_status = if report.energy_star == Some(true) {
            "ENERGY STAR"
        } else {
            "not ENERGY STAR"
        };

        Self {
            fuel,
            equipment,
            subtype,
            year: report.year,
            energy_star_status: energy_star_status.to_string(),
            efficiency: report.efficiency.to_string(),
            state: report.state.clone(),
        }
    }
}

impl fmt::Display for EquipmentDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fuel: {}", self.fuel)?;
        writeln!(f, "Equipment: {}", self.equipment)?;
        writeln!(f, "Subtype: {}", self.subtype)?;
        match self.year {
            Some(year) => writeln!(f, "Year: {}", year)?,
            None => writeln!(f, "Year: N/A")?,
        }
        writeln!(f, "ENERGY STAR Status: {}", self.energy_star_status)?;
        writeln!(f, "Efficiency: {}", self.efficiency)?;
        write!(f, "State: {}", self.state.as_deref().unwrap_or("N/A"))
    }
}

/// 多台设备的识别结果清单（按录入顺序）
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct HeatingSurvey {
    entries: Vec<EquipmentDetails>,
}

impl HeatingSurvey {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, details: EquipmentDetails) {
        self.entries.push(details);
    }

    pub fn entries(&self) -> &[EquipmentDetails] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 重新开始（清空已录入的设备）
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// 导出为格式化 JSON
    pub fn to_json(&self) -> HeatResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for HeatingSurvey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return write!(f, "No equipment recorded.");
        }
        for (idx, details) in self.entries.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            writeln!(f, "#{}", idx + 1)?;
            writeln!(f, "{}", details)?;
        }
        Ok(())
    }
}

/// ENERGY STAR 回答解析：仅 `yes`（忽略大小写）视为已认证
pub fn parse_energy_star(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::HeatingClassifier;

    fn wood_stove() -> EquipmentDetails {
        HeatingClassifier::builtin()
            .classify(FuelType::WoodCoal, EquipmentCategory::LocalEquipment, "Wood Stove", None, false, None)
            .unwrap()
    }

    #[test]
    fn test_parse_energy_star() {
        assert!(parse_energy_star("yes"));
        assert!(parse_energy_star(" YES "));
        assert!(!parse_energy_star("no"));
        assert!(!parse_energy_star("y"));
        assert!(!parse_energy_star(""));
    }

    #[test]
    fn test_details_display() {
        let text = wood_stove().to_string();
        assert!(text.contains("Fuel: Wood/Coal"));
        assert!(text.contains("Subtype: Wood Stove"));
        assert!(text.contains("Year: N/A"));
        assert!(text.contains("ENERGY STAR Status: not ENERGY STAR"));
        assert!(text.contains("Efficiency: Efficiency data not available"));
    }

    #[test]
    fn test_survey_accumulates_and_exports() {
        let mut survey = HeatingSurvey::new();
        assert!(survey.is_empty());
        survey.record(wood_stove());
        survey.record(wood_stove());
        assert_eq!(survey.len(), 2);

        let json: serde_json::Value = serde_json::from_str(&survey.to_json().unwrap()).unwrap();
        assert_eq!(json[0]["Fuel"], "Wood/Coal");
        assert_eq!(json[0]["Equipment"], "Local Equipment");
        assert_eq!(json[1]["Efficiency"], "Efficiency data not available");
        assert!(json[0]["State"].is_null());

        survey.clear();
        assert_eq!(survey.to_string(), "No equipment recorded.");
    }
}
