use crate::domain::model::Design;
use crate::domain::ports::Comparator;

/// 計算字串的權重：數字加其數值、字母加 1、其他字元不計
pub fn expand_string(s: &str) -> u32 {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => d,
            None if c.is_alphabetic() => 1,
            None => 0,
        })
        .sum()
}

/// 權重相同時，再檢查字母子序列是否互為前綴
pub fn compare_strings(left: &str, right: &str) -> bool {
    if expand_string(left) != expand_string(right) {
        return false;
    }

    // 只取字母，保留原本順序
    let letters_left: String = left.chars().filter(|c| c.is_alphabetic()).collect();
    let letters_right: String = right.chars().filter(|c| c.is_alphabetic()).collect();

    if letters_left.len() <= letters_right.len() {
        letters_right.starts_with(&letters_left)
    } else {
        letters_left.starts_with(&letters_right)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedComparator;

impl Comparator for WeightedComparator {
    fn design(&self) -> Design {
        Design::Weighted
    }

    fn compare(&self, left: &str, right: &str) -> bool {
        compare_strings(left, right)
    }
}
