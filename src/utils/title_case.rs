//! 标题大小写转换工具
//! 规则：有大小写之分的字母，若前一个字符不是有大小写之分的字母则大写，否则小写

/// 标题大小写转换工具类
pub struct TitleCaser;

impl TitleCaser {
    /// 转换为标题大小写
    ///
    /// 数字、空白、括号、连字符、撇号都会开启新的“单词”，
    /// 因此 `through-the-wall` 会变为 `Through-The-Wall`。
    pub fn apply(input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut prev_cased = false;

        for ch in input.chars() {
            if Self::is_cased(ch) {
                if prev_cased {
                    output.extend(ch.to_lowercase());
                } else {
                    output.extend(ch.to_uppercase());
                }
                prev_cased = true;
            } else {
                output.push(ch);
                prev_cased = false;
            }
        }

        output
    }

    fn is_cased(ch: char) -> bool {
        ch.is_lowercase() || ch.is_uppercase()
    }
}
