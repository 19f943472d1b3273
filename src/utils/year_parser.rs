//! 出厂年份容错解析
//! 表单中的年份是自由文本，非法值一律视为“未知年代”，不向上报错

/// 年份解析工具类
pub struct YearParser;

impl YearParser {
    /// 解析年份文本，空白或非法返回 None
    pub fn parse(raw: &str) -> Option<i32> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse::<i32>().ok()
    }

    /// 可选年份文本解析
    pub fn parse_opt(raw: Option<&str>) -> Option<i32> {
        raw.and_then(Self::parse)
    }

    /// 规则比较用的年份：缺失按 0 处理（总是落入最老的档位）
    pub fn coerce(year: Option<i32>) -> i32 {
        year.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_years() {
        assert_eq!(YearParser::parse("2015"), Some(2015));
        assert_eq!(YearParser::parse("  1990 "), Some(1990));
        assert_eq!(YearParser::parse("+2001"), Some(2001));
    }

    #[test]
    fn test_parse_malformed_years() {
        assert_eq!(YearParser::parse(""), None);
        assert_eq!(YearParser::parse("   "), None);
        assert_eq!(YearParser::parse("circa 1990"), None);
        assert_eq!(YearParser::parse("1990.5"), None);
        assert_eq!(YearParser::parse_opt(None), None);
    }

    #[test]
    fn test_coerce_missing_year_to_zero() {
        assert_eq!(YearParser::coerce(None), 0);
        assert_eq!(YearParser::coerce(YearParser::parse("abc")), 0);
        assert_eq!(YearParser::coerce(Some(2020)), 2020);
    }
}
