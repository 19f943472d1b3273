//! 气候区解析器
//! 州代码大小写敏感地匹配南北名单，未命中一律兜底为 South

use std::sync::Arc;

use tracing::warn;

use crate::rule::{Region, RegionMatch, RuleTables};

/// 气候区解析器
#[derive(Debug, Clone)]
pub struct RegionResolver {
    tables: Arc<RuleTables>,
    log_fallback: bool,
}

impl RegionResolver {
    pub fn new(tables: Arc<RuleTables>, log_fallback: bool) -> Self {
        Self {
            tables,
            log_fallback,
        }
    }

    /// 州代码 -> 气候区（全函数，任何输入都有结果）
    pub fn region_of(&self, state: &str) -> Region {
        self.classify(state).region()
    }

    /// 州代码 -> 命中结果，可区分真实命中 South 与兜底
    pub fn classify(&self, state: &str) -> RegionMatch {
        if self.tables.north_states.contains(state) {
            RegionMatch::Matched(Region::North)
        } else if self.tables.south_states.contains(state) {
            RegionMatch::Matched(Region::South)
        } else {
            if self.log_fallback {
                warn!("州代码 {:?} 不在气候区名单中，兜底为 South", state);
            }
            RegionMatch::Defaulted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::EMBEDDED_TABLES;

    fn resolver() -> RegionResolver {
        RegionResolver::new(Arc::clone(&EMBEDDED_TABLES), false)
    }

    #[test]
    fn test_listed_states() {
        let resolver = resolver();
        assert_eq!(resolver.region_of("ME"), Region::North);
        assert_eq!(resolver.region_of("WY"), Region::North);
        assert_eq!(resolver.region_of("TX"), Region::South);
        assert_eq!(resolver.classify("DC"), RegionMatch::Matched(Region::South));
    }

    #[test]
    fn test_unmatched_input_defaults_to_south() {
        let resolver = resolver();
        for input in ["", "me", "Tx", "PR", "XX", "MAINE", "MT"] {
            assert_eq!(resolver.region_of(input), Region::South, "输入 {:?}", input);
            assert!(resolver.classify(input).is_fallback());
        }
    }

    #[test]
    fn test_logging_fallback_does_not_change_result() {
        let resolver = RegionResolver::new(Arc::clone(&EMBEDDED_TABLES), true);
        assert_eq!(resolver.classify("ZZ"), RegionMatch::Defaulted);
    }
}
