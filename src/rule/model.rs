//! 分类数据模型定义
//! 燃料、设备类别、合法组合、规范子类型、气候区与效率结果，仅承载数据，不含判定逻辑

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{HeatIdError, HeatResult};
use crate::utils::TitleCaser;

/// 燃料类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    Gas,
    Oil,
    Electric,
    #[serde(rename = "Wood/Coal")]
    WoodCoal,
    Geothermal,
}

impl FuelType {
    /// 展示顺序（向导第一步的选项顺序）
    pub const ALL: [FuelType; 5] = [
        FuelType::Gas,
        FuelType::Oil,
        FuelType::Electric,
        FuelType::WoodCoal,
        FuelType::Geothermal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FuelType::Gas => "Gas",
            FuelType::Oil => "Oil",
            FuelType::Electric => "Electric",
            FuelType::WoodCoal => "Wood/Coal",
            FuelType::Geothermal => "Geothermal",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FuelType {
    type Err = HeatIdError;

    fn from_str(s: &str) -> HeatResult<Self> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "gas" => Ok(FuelType::Gas),
            "oil" => Ok(FuelType::Oil),
            "electric" => Ok(FuelType::Electric),
            "wood/coal" | "wood-coal" | "woodcoal" => Ok(FuelType::WoodCoal),
            "geothermal" => Ok(FuelType::Geothermal),
            _ => Err(HeatIdError::UnknownFuel(s.to_string())),
        }
    }
}

/// 设备类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentCategory {
    Furnace,
    Boiler,
    #[serde(rename = "Heat Pump")]
    HeatPump,
    #[serde(rename = "Local Equipment")]
    LocalEquipment,
}

impl EquipmentCategory {
    pub fn label(self) -> &'static str {
        match self {
            EquipmentCategory::Furnace => "Furnace",
            EquipmentCategory::Boiler => "Boiler",
            EquipmentCategory::HeatPump => "Heat Pump",
            EquipmentCategory::LocalEquipment => "Local Equipment",
        }
    }
}

impl fmt::Display for EquipmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EquipmentCategory {
    type Err = HeatIdError;

    fn from_str(s: &str) -> HeatResult<Self> {
        // 空格、连字符、下划线视为同一分隔符
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(*c, ' ' | '-' | '_'))
            .collect();
        match normalized.as_str() {
            "furnace" => Ok(EquipmentCategory::Furnace),
            "boiler" => Ok(EquipmentCategory::Boiler),
            "heatpump" => Ok(EquipmentCategory::HeatPump),
            "localequipment" | "local" => Ok(EquipmentCategory::LocalEquipment),
            _ => Err(HeatIdError::UnknownEquipment(s.to_string())),
        }
    }
}

/// 合法的（燃料, 设备类别）组合
///
/// 不在此枚举内的组合没有子类型表，也没有效率规则。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Appliance {
    GasFurnace,
    GasBoiler,
    GasLocalEquipment,
    OilFurnace,
    OilBoiler,
    ElectricFurnace,
    ElectricBoiler,
    ElectricHeatPump,
    ElectricLocalEquipment,
    GeothermalHeatPump,
    WoodCoalLocalEquipment,
}

impl Appliance {
    /// 声明顺序即同一燃料下设备类别的展示顺序
    pub const ALL: [Appliance; 11] = [
        Appliance::GasFurnace,
        Appliance::GasBoiler,
        Appliance::GasLocalEquipment,
        Appliance::OilFurnace,
        Appliance::OilBoiler,
        Appliance::ElectricFurnace,
        Appliance::ElectricBoiler,
        Appliance::ElectricHeatPump,
        Appliance::ElectricLocalEquipment,
        Appliance::GeothermalHeatPump,
        Appliance::WoodCoalLocalEquipment,
    ];

    pub fn from_parts(fuel: FuelType, equipment: EquipmentCategory) -> Option<Self> {
        use EquipmentCategory as E;
        use FuelType as F;

        match (fuel, equipment) {
            (F::Gas, E::Furnace) => Some(Appliance::GasFurnace),
            (F::Gas, E::Boiler) => Some(Appliance::GasBoiler),
            (F::Gas, E::LocalEquipment) => Some(Appliance::GasLocalEquipment),
            (F::Oil, E::Furnace) => Some(Appliance::OilFurnace),
            (F::Oil, E::Boiler) => Some(Appliance::OilBoiler),
            (F::Electric, E::Furnace) => Some(Appliance::ElectricFurnace),
            (F::Electric, E::Boiler) => Some(Appliance::ElectricBoiler),
            (F::Electric, E::HeatPump) => Some(Appliance::ElectricHeatPump),
            (F::Electric, E::LocalEquipment) => Some(Appliance::ElectricLocalEquipment),
            (F::Geothermal, E::HeatPump) => Some(Appliance::GeothermalHeatPump),
            (F::WoodCoal, E::LocalEquipment) => Some(Appliance::WoodCoalLocalEquipment),
            _ => None,
        }
    }

    pub fn fuel(self) -> FuelType {
        match self {
            Appliance::GasFurnace | Appliance::GasBoiler | Appliance::GasLocalEquipment => FuelType::Gas,
            Appliance::OilFurnace | Appliance::OilBoiler => FuelType::Oil,
            Appliance::ElectricFurnace
            | Appliance::ElectricBoiler
            | Appliance::ElectricHeatPump
            | Appliance::ElectricLocalEquipment => FuelType::Electric,
            Appliance::GeothermalHeatPump => FuelType::Geothermal,
            Appliance::WoodCoalLocalEquipment => FuelType::WoodCoal,
        }
    }

    pub fn equipment(self) -> EquipmentCategory {
        match self {
            Appliance::GasFurnace | Appliance::OilFurnace | Appliance::ElectricFurnace => {
                EquipmentCategory::Furnace
            }
            Appliance::GasBoiler | Appliance::OilBoiler | Appliance::ElectricBoiler => {
                EquipmentCategory::Boiler
            }
            Appliance::ElectricHeatPump | Appliance::GeothermalHeatPump => EquipmentCategory::HeatPump,
            Appliance::GasLocalEquipment
            | Appliance::ElectricLocalEquipment
            | Appliance::WoodCoalLocalEquipment => EquipmentCategory::LocalEquipment,
        }
    }

    /// 子类型表的键：`"<燃料> <设备类别>"`
    pub fn key(self) -> String {
        format!("{} {}", self.fuel(), self.equipment())
    }

    /// 从规则表键反查组合（忽略大小写，兼容 `Wood/coal Local Equipment` 写法）
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|appliance| appliance.key().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for Appliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.fuel(), self.equipment())
    }
}

/// 某燃料可选的设备类别（按展示顺序）
pub fn equipment_options(fuel: FuelType) -> Vec<EquipmentCategory> {
    Appliance::ALL
        .into_iter()
        .filter(|appliance| appliance.fuel() == fuel)
        .map(Appliance::equipment)
        .collect()
}

/// 是否需要采集出厂年份与 ENERGY STAR 认证
pub fn collects_year_and_certification(fuel: FuelType, equipment: EquipmentCategory) -> bool {
    matches!(fuel, FuelType::Gas | FuelType::Oil)
        || (fuel == FuelType::Electric && equipment == EquipmentCategory::HeatPump)
}

/// 是否需要采集所在州（仅燃气炉的效率与气候区相关）
pub fn collects_state(fuel: FuelType, equipment: EquipmentCategory) -> bool {
    fuel == FuelType::Gas && equipment == EquipmentCategory::Furnace
}

/// 规范子类型代码
///
/// 只能通过子类型表查找得到，保证去除首尾空白并统一为标题大小写。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CanonicalSubtype(String);

impl CanonicalSubtype {
    pub(crate) fn from_code(code: &str) -> Self {
        Self(TitleCaser::apply(code.trim()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 粗粒度气候区
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    North,
    South,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::North => f.write_str("North"),
            Region::South => f.write_str("South"),
        }
    }
}

/// 气候区解析结果（区分名单命中与兜底）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionMatch {
    Matched(Region),
    Defaulted,
}

impl RegionMatch {
    /// 兜底为 South
    pub fn region(self) -> Region {
        match self {
            RegionMatch::Matched(region) => region,
            RegionMatch::Defaulted => Region::South,
        }
    }

    pub fn is_fallback(self) -> bool {
        matches!(self, RegionMatch::Defaulted)
    }
}

/// 效率结果
///
/// 数值以字面字符串保存，保证 `0.90` 这类写法原样输出。
/// 热泵分支为裸数值（HSPF 口径），不带 `AFUE ` 前缀。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Efficiency {
    Afue(&'static str),
    HeatPump(&'static str),
    UnknownAfue,
    NotAvailable,
    NotProvided,
}

impl fmt::Display for Efficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Efficiency::Afue(value) => write!(f, "AFUE {}", value),
            Efficiency::HeatPump(value) => f.write_str(value),
            Efficiency::UnknownAfue => f.write_str("Unknown AFUE"),
            Efficiency::NotAvailable => f.write_str("Efficiency data not available"),
            Efficiency::NotProvided => f.write_str("Efficiency data not provided"),
        }
    }
}

impl Serialize for Efficiency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// 效率计算结果 + 回显输入（回显字段仅用于展示）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EfficiencyReport {
    pub efficiency: Efficiency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_star: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl EfficiencyReport {
    pub fn new(efficiency: Efficiency) -> Self {
        Self {
            efficiency,
            year: None,
            energy_star: None,
            state: None,
        }
    }
}
