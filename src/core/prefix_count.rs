use regex::Regex;

use crate::domain::model::{Design, ParsedPattern};
use crate::domain::ports::Comparator;

/// 解析尾端的「標記數字 + 計數」樣式
///
/// 找到時，前綴 = 標記數字之前的文字 + 標記數字本身，
/// 預期長度 = 前綴長度 + 尾端數字串的十進位值。
/// 找不到（包含只有單一尾端數字）就退回完全比對。
pub fn parse_string(s: &str) -> ParsedPattern {
    // 尾端數字串至少要兩位：第一位當標記，其餘當計數
    let re = Regex::new(r"([0-9])([0-9]+)$").unwrap();

    if let Some(caps) = re.captures(s) {
        if let Some(run) = caps.get(2) {
            let prefix = &s[..run.start()];
            // 計數是十進位整數（"13" 代表 13），放不進 usize 就退回完全比對
            if let Ok(count) = run.as_str().parse::<usize>() {
                return ParsedPattern {
                    expected_prefix: prefix.to_string(),
                    expected_length: prefix.chars().count() + count,
                };
            }
        }
    }

    ParsedPattern {
        expected_prefix: s.to_string(),
        expected_length: s.chars().count(),
    }
}

/// 第二個字串定義樣式，第一個字串被比對：長度要剛好、前綴要吻合
pub fn compare_strings(left: &str, right: &str) -> bool {
    let pattern = parse_string(right);

    left.chars().count() == pattern.expected_length && left.starts_with(&pattern.expected_prefix)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixCountComparator;

impl Comparator for PrefixCountComparator {
    fn design(&self) -> Design {
        Design::PrefixCount
    }

    fn compare(&self, left: &str, right: &str) -> bool {
        compare_strings(left, right)
    }
}
