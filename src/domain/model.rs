use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// 可選的比較規則
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Design {
    /// 權重展開比較：字母算 1，數字算其數值
    Weighted,
    /// 前綴+長度比較：第二個字串定義樣式
    PrefixCount,
}

/// 從第二個字串解析出的比對描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPattern {
    pub expected_prefix: String,
    pub expected_length: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub design: Design,
    pub left: String,
    pub right: String,
    pub equivalent: bool,
}
