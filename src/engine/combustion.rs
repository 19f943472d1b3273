//! 燃烧类设备规则（燃气/燃油 炉与锅炉）
//! 输出均为 AFUE，子类型无对应档位时返回 `Unknown AFUE`

use crate::rule::{Efficiency, Region};

// 子类型代码（规范化后的标题大小写形式）
const CONDENSING: &str = "Condensing";
const INDUCED_DRAFT: &str = "Induced Draft";
const NATURAL_DRAFT: &str = "Natural Draft";
const FLAME_RETENTION_HEAD: &str = "Flame-Retention Head";
const CONVENTIONAL: &str = "Conventional";

/// 燃气炉：认证 + 2015 年后 + 北方 0.95；其余认证 0.90；否则按子类型
pub fn gas_furnace(subtype: &str, year: i32, energy_star: bool, region: Region) -> Efficiency {
    if energy_star {
        if year >= 2015 && region == Region::North {
            Efficiency::Afue("0.95")
        } else {
            Efficiency::Afue("0.90")
        }
    } else {
        gas_by_subtype(subtype)
    }
}

/// 燃气锅炉：认证按 2014 年分档；否则按子类型
pub fn gas_boiler(subtype: &str, year: i32, energy_star: bool) -> Efficiency {
    if energy_star {
        if year >= 2014 {
            Efficiency::Afue("0.90")
        } else {
            Efficiency::Afue("0.85")
        }
    } else {
        gas_by_subtype(subtype)
    }
}

/// 燃油炉：冷凝式优先于认证判断
pub fn oil_furnace(subtype: &str, energy_star: bool) -> Efficiency {
    if subtype == CONDENSING {
        return Efficiency::Afue("0.90");
    }
    if energy_star {
        return Efficiency::Afue("0.85");
    }
    match subtype {
        FLAME_RETENTION_HEAD => Efficiency::Afue("0.80"),
        CONVENTIONAL => Efficiency::Afue("0.72"),
        _ => Efficiency::UnknownAfue,
    }
}

/// 燃油锅炉：认证按 2014 年分档；否则按子类型
pub fn oil_boiler(subtype: &str, year: i32, energy_star: bool) -> Efficiency {
    if energy_star {
        if year >= 2014 {
            Efficiency::Afue("0.87")
        } else {
            Efficiency::Afue("0.85")
        }
    } else {
        match subtype {
            INDUCED_DRAFT => Efficiency::Afue("0.82"),
            NATURAL_DRAFT => Efficiency::Afue("0.78"),
            _ => Efficiency::UnknownAfue,
        }
    }
}

fn gas_by_subtype(subtype: &str) -> Efficiency {
    match subtype {
        CONDENSING => Efficiency::Afue("0.90"),
        INDUCED_DRAFT => Efficiency::Afue("0.82"),
        NATURAL_DRAFT => Efficiency::Afue("0.78"),
        _ => Efficiency::UnknownAfue,
    }
}
