//! 交互式识别向导
//! 按 燃料 -> 设备类别 -> 子类型 -> 明细 的顺序逐步提问，输入源与输出端可替换（便于测试）

use std::io::{BufRead, Write};

use tracing::debug;

use super::{parse_energy_star, EquipmentDetails, HeatingSurvey};
use crate::classifier::HeatingClassifier;
use crate::error::HeatResult;
use crate::rule::{
    collects_state, collects_year_and_certification, equipment_options, state_name,
    EquipmentCategory, FuelType,
};
use crate::utils::YearParser;

const INVALID_SELECTION: &str = "Invalid selection. Please try again.";

/// 交互式向导
pub struct SurveyWizard<'a, R, W> {
    classifier: &'a HeatingClassifier,
    input: R,
    output: W,
    survey: HeatingSurvey,
}

impl<'a, R: BufRead, W: Write> SurveyWizard<'a, R, W> {
    pub fn new(classifier: &'a HeatingClassifier, input: R, output: W) -> Self {
        Self {
            classifier,
            input,
            output,
            survey: HeatingSurvey::new(),
        }
    }

    /// 运行向导直到用户结束或输入耗尽，返回已完成的设备清单
    pub fn run(mut self) -> HeatResult<HeatingSurvey> {
        loop {
            match self.identify_one()? {
                Some(details) => {
                    writeln!(self.output, "\n{}\n", details)?;
                    self.survey.record(details);
                }
                None => {
                    debug!("输入已结束，未完成的设备记录被丢弃");
                    break;
                }
            }

            match self.prompt("Identify another piece of equipment? (yes/no): ")? {
                Some(answer) if answer.trim().eq_ignore_ascii_case("yes") => continue,
                _ => break,
            }
        }

        writeln!(self.output, "Summary")?;
        writeln!(self.output, "{}", self.survey)?;
        self.output.flush()?;
        Ok(self.survey)
    }

    /// 完成一台设备的识别；输入耗尽时返回 None
    fn identify_one(&mut self) -> HeatResult<Option<EquipmentDetails>> {
        let Some(fuel) = self.select_fuel()? else {
            return Ok(None);
        };
        let Some(equipment) = self.select_equipment(fuel)? else {
            return Ok(None);
        };
        let Some(subtype) = self.select_subtype(fuel, equipment)? else {
            return Ok(None);
        };

        let mut year = None;
        let mut energy_star = false;
        let mut state = None;

        if collects_year_and_certification(fuel, equipment) {
            let Some(raw_year) = self.prompt("Year of manufacture: ")? else {
                return Ok(None);
            };
            year = YearParser::parse(&raw_year);

            let Some(answer) = self.prompt("Is it ENERGY STAR certified? (yes/no): ")? else {
                return Ok(None);
            };
            energy_star = parse_energy_star(&answer);
        }

        if collects_state(fuel, equipment) {
            match self.select_state()? {
                Some(selected) => state = selected,
                None => return Ok(None),
            }
        }

        let report = self.classifier.compute_efficiency(
            fuel,
            equipment,
            &subtype,
            year,
            energy_star,
            state.as_deref(),
        );
        Ok(Some(EquipmentDetails::from_report(fuel, equipment, subtype, &report)))
    }

    fn select_fuel(&mut self) -> HeatResult<Option<FuelType>> {
        let labels: Vec<&str> = FuelType::ALL.iter().map(|fuel| fuel.label()).collect();
        loop {
            self.show_options("Select the fuel type:", &labels)?;
            let Some(answer) = self.prompt("> ")? else {
                return Ok(None);
            };
            match pick(&answer, &FuelType::ALL, |fuel| fuel.label()) {
                Some(fuel) => return Ok(Some(fuel)),
                None => writeln!(self.output, "{}", INVALID_SELECTION)?,
            }
        }
    }

    fn select_equipment(&mut self, fuel: FuelType) -> HeatResult<Option<EquipmentCategory>> {
        let options = equipment_options(fuel);
        let labels: Vec<&str> = options.iter().map(|equipment| equipment.label()).collect();
        loop {
            self.show_options("Select the equipment type:", &labels)?;
            let Some(answer) = self.prompt("> ")? else {
                return Ok(None);
            };
            match pick(&answer, &options, |equipment| equipment.label()) {
                Some(equipment) => return Ok(Some(equipment)),
                None => writeln!(self.output, "{}", INVALID_SELECTION)?,
            }
        }
    }

    fn select_subtype(
        &mut self,
        fuel: FuelType,
        equipment: EquipmentCategory,
    ) -> HeatResult<Option<crate::rule::CanonicalSubtype>> {
        let classifier = self.classifier;
        let options = classifier.options_for(fuel, equipment);
        loop {
            self.show_options("Which description matches the equipment?", &options)?;
            let Some(answer) = self.prompt("> ")? else {
                return Ok(None);
            };
            // 序号或完整描述文本均可
            let description = pick(&answer, &options, |option| option).unwrap_or(answer.as_str());
            match classifier.resolve_subtype(fuel, equipment, description) {
                Ok(subtype) => return Ok(Some(subtype)),
                Err(e) if e.is_subtype_not_found() => writeln!(self.output, "{}", INVALID_SELECTION)?,
                Err(e) => return Err(e),
            }
        }
    }

    /// 州代码：空输入表示不提供；非空时必须是已知州代码
    fn select_state(&mut self) -> HeatResult<Option<Option<String>>> {
        loop {
            let Some(answer) = self.prompt("Enter the state abbreviation (e.g. CA for California): ")? else {
                return Ok(None);
            };
            let abbrev = answer.trim().to_uppercase();
            if abbrev.is_empty() {
                return Ok(Some(None));
            }
            match state_name(&abbrev) {
                Some(name) => {
                    debug!("州代码 {} -> {}", abbrev, name);
                    return Ok(Some(Some(abbrev)));
                }
                None => writeln!(self.output, "Invalid state abbreviation. Please try again.")?,
            }
        }
    }

    fn show_options(&mut self, title: &str, labels: &[&str]) -> HeatResult<()> {
        writeln!(self.output, "{}", title)?;
        for (idx, label) in labels.iter().enumerate() {
            writeln!(self.output, "  {}. {}", idx + 1, label)?;
        }
        Ok(())
    }

    /// 输出提示并读取一行；输入耗尽返回 None
    fn prompt(&mut self, message: &str) -> HeatResult<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// 按序号（从 1 开始）或名称（忽略大小写）选择
fn pick<T: Copy, L: AsRef<str>>(answer: &str, options: &[T], label: impl Fn(T) -> L) -> Option<T> {
    let answer = answer.trim();
    if let Ok(index) = answer.parse::<usize>() {
        return index.checked_sub(1).and_then(|i| options.get(i)).copied();
    }
    options
        .iter()
        .copied()
        .find(|option| label(*option).as_ref().eq_ignore_ascii_case(answer))
}
