//! 电热泵规则
//! 输出为裸数值（HSPF 口径），与 AFUE 分支格式不同

use crate::rule::Efficiency;

const MINISPLIT: &str = "Minisplit (Ductless) Heat Pump";

/// 电热泵：迷你分体式固定 10.0；其余按认证与年份分档
pub fn heat_pump(subtype: &str, year: i32, energy_star: bool) -> Efficiency {
    if subtype == MINISPLIT {
        return Efficiency::HeatPump("10.0");
    }

    let value = if energy_star {
        if year >= 2015 {
            "8.5"
        } else {
            "8.2"
        }
    } else if year >= 2015 {
        "8.2"
    } else if year >= 2006 {
        "7.7"
    } else if year >= 1992 {
        "7.1"
    } else {
        "6.6"
    };

    Efficiency::HeatPump(value)
}
