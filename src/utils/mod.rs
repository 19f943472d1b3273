//! 工具模块：文本规范化与输入容错解析
pub mod title_case;
pub mod year_parser;

pub use self::title_case::TitleCaser;
pub use self::year_parser::YearParser;
