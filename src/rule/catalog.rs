//! 内置规则表
//! 子类型描述表、南北气候区名单、州名目录，全部为固化的静态数据

use super::model::Appliance;

/// 子类型描述表：组合 -> 有序的（描述文本, 子类型代码）
///
/// 描述顺序即展示顺序，最常见、最容易辨认的放在前面。
pub static SUBTYPE_DESCRIPTORS: &[(Appliance, &[(&str, &str)])] = &[
    (
        Appliance::GasFurnace,
        &[
            (
                "The furnace has white PVC pipe exhaust venting (Condensing).",
                "Condensing",
            ),
            ("It has an inducer fan unit (Induced Draft).", "Induced Draft"),
            (
                "It has a draft hood or opening that enters directly into the flue, with heat exchanger and gas burner ports behind louvered cover panel (Natural Draft).",
                "Natural Draft",
            ),
        ],
    ),
    (
        Appliance::GasBoiler,
        &[
            ("Condensing", "Condensing"),
            ("Induced Draft", "Induced Draft"),
            ("Natural Draft", "Natural Draft"),
        ],
    ),
    (
        Appliance::GasLocalEquipment,
        &[(
            "Room (through-the-wall) gas furnace",
            "Room (through-the-wall) gas furnace",
        )],
    ),
    (
        Appliance::OilFurnace,
        &[
            (
                "The furnace has white PVC pipe sealed exhaust venting (Condensing).",
                "Condensing",
            ),
            (
                "It has motor RPM 3450, standard since mid-1980's, with natural draft exhaust venting with barometric damper on metal flue (Flame-Retention Head).",
                "Flame-Retention Head",
            ),
            (
                "It has motor RPM 1725, phased out in 1980's, with natural draft exhaust venting with barometric damper on metal flue (Conventional).",
                "Conventional",
            ),
        ],
    ),
    (
        Appliance::OilBoiler,
        &[
            ("Induced Draft", "Induced Draft"),
            ("Natural Draft", "Natural Draft"),
        ],
    ),
    (
        Appliance::ElectricFurnace,
        &[("Electric Furnace", "Electric Furnace")],
    ),
    (
        Appliance::ElectricBoiler,
        &[("Electric Boiler", "Electric Boiler")],
    ),
    (
        Appliance::ElectricHeatPump,
        &[
            (
                "It has a large outside unit (Electric Air Source Heat Pump).",
                "Electric Air Source Heat Pump",
            ),
            (
                "It has a thin profile outside unit (Minisplit (Ductless) Heat Pump).",
                "Minisplit (Ductless) Heat Pump",
            ),
        ],
    ),
    (
        Appliance::ElectricLocalEquipment,
        &[("Electric Baseboard Heater", "Electric Baseboard Heater")],
    ),
    (
        Appliance::GeothermalHeatPump,
        &[(
            "Geothermal Heat Pump (Ground Coupled)",
            "Ground Coupled Heat Pump",
        )],
    ),
    (
        Appliance::WoodCoalLocalEquipment,
        &[("Wood Stove", "Wood Stove"), ("Pellet Stove", "Pellet Stove")],
    ),
];

/// 北方气候区（29）
pub static NORTH_STATES: &[&str] = &[
    "AK", "CO", "CT", "ID", "IL", "IN", "IA", "KS", "ME", "MA", "MI", "MN", "MO", "NE", "NH",
    "NJ", "NY", "ND", "OH", "OR", "PA", "RI", "SD", "UT", "VT", "WA", "WV", "WI", "WY",
];

/// 南方气候区（21）
pub static SOUTH_STATES: &[&str] = &[
    "AL", "AZ", "AR", "CA", "DE", "DC", "FL", "GA", "HI", "KY", "LA", "MD", "MS", "NV", "NM",
    "NC", "OK", "SC", "TN", "TX", "VA",
];

/// 州代码 -> 州名（50 州 + 哥伦比亚特区）
pub static STATE_NAMES: &[(&str, &str)] = &[
    ("AK", "Alaska"), ("AL", "Alabama"), ("AR", "Arkansas"), ("AZ", "Arizona"),
    ("CA", "California"), ("CO", "Colorado"), ("CT", "Connecticut"), ("DE", "Delaware"),
    ("FL", "Florida"), ("GA", "Georgia"), ("HI", "Hawaii"), ("IA", "Iowa"),
    ("ID", "Idaho"), ("IL", "Illinois"), ("IN", "Indiana"), ("KS", "Kansas"),
    ("KY", "Kentucky"), ("LA", "Louisiana"), ("MA", "Massachusetts"), ("MD", "Maryland"),
    ("ME", "Maine"), ("MI", "Michigan"), ("MN", "Minnesota"), ("MO", "Missouri"),
    ("MS", "Mississippi"), ("MT", "Montana"), ("NC", "North Carolina"), ("ND", "North Dakota"),
    ("NE", "Nebraska"), ("NH", "New Hampshire"), ("NJ", "New Jersey"), ("NM", "New Mexico"),
    ("NV", "Nevada"), ("NY", "New York"), ("OH", "Ohio"), ("OK", "Oklahoma"),
    ("OR", "Oregon"), ("PA", "Pennsylvania"), ("RI", "Rhode Island"), ("SC", "South Carolina"),
    ("SD", "South Dakota"), ("TN", "Tennessee"), ("TX", "Texas"), ("UT", "Utah"),
    ("VA", "Virginia"), ("VT", "Vermont"), ("WA", "Washington"), ("WI", "Wisconsin"),
    ("WV", "West Virginia"), ("WY", "Wyoming"), ("DC", "District of Columbia"),
];

/// 州代码查州名（大小写敏感）
pub fn state_name(abbrev: &str) -> Option<&'static str> {
    STATE_NAMES
        .iter()
        .find(|(code, _)| *code == abbrev)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_appliance_has_descriptors() {
        assert_eq!(SUBTYPE_DESCRIPTORS.len(), Appliance::ALL.len());
        for appliance in Appliance::ALL {
            let entries = SUBTYPE_DESCRIPTORS
                .iter()
                .find(|(a, _)| *a == appliance)
                .map(|(_, e)| *e);
            assert!(entries.is_some_and(|e| !e.is_empty()), "{} 缺少描述", appliance);
        }
    }

    #[test]
    fn test_region_lists_are_disjoint() {
        assert_eq!(NORTH_STATES.len(), 29);
        assert_eq!(SOUTH_STATES.len(), 21);
        let north: HashSet<_> = NORTH_STATES.iter().collect();
        assert!(SOUTH_STATES.iter().all(|s| !north.contains(s)));
    }

    #[test]
    fn test_state_name_lookup() {
        assert_eq!(state_name("ME"), Some("Maine"));
        assert_eq!(state_name("DC"), Some("District of Columbia"));
        assert_eq!(state_name("me"), None);
        assert_eq!(state_name("PR"), None);
        assert_eq!(STATE_NAMES.len(), 51);
    }
}
