use small_compare::core::{prefix_count, weighted};
use small_compare::{
    CliConfig, CompareEngine, Design, PrefixCountComparator, WeightedComparator,
};

#[test]
fn test_weighted_comparison_is_symmetric() {
    let pairs = [
        ("abc", "abc"),
        ("a1", "ab"),
        ("a1", "b1"),
        ("A", "a"),
        ("", ""),
        ("", "a"),
        ("123", "abc111"),
    ];

    for (left, right) in pairs {
        assert_eq!(
            weighted::compare_strings(left, right),
            weighted::compare_strings(right, left),
            "weighted comparison disagreed with itself for ({:?}, {:?})",
            left,
            right
        );
    }
}

#[test]
fn test_prefix_count_comparison_is_not_symmetric() {
    // "abc13" 定義樣式時 "abc1234" 吻合，反過來就不吻合
    assert!(prefix_count::compare_strings("abc1234", "abc13"));
    assert!(!prefix_count::compare_strings("abc13", "abc1234"));

    assert!(prefix_count::compare_strings("ab2xyz", "ab23"));
    assert!(!prefix_count::compare_strings("ab23", "ab2xyz"));
}

#[test]
fn test_prefix_count_pattern_string_need_not_match_itself() {
    // "abc13" 要求長度 7 的字串，自己只有 5 個字元
    assert!(!prefix_count::compare_strings("abc13", "abc13"));
}

#[test]
fn test_designs_disagree_on_shared_inputs() {
    // 兩套規則對同一組輸入各說各話
    assert!(weighted::compare_strings("a1", "ab"));
    assert!(!prefix_count::compare_strings("a1", "ab"));

    assert!(prefix_count::compare_strings("abc1234", "abc13"));
    assert!(!weighted::compare_strings("abc1234", "abc13"));
}

#[test]
fn test_designs_agree_on_identical_letter_strings() {
    for s in ["", "abc", "hello"] {
        assert!(weighted::compare_strings(s, s));
        assert!(prefix_count::compare_strings(s, s));
    }
}

#[test]
fn test_engine_with_cli_config_weighted() {
    let config = CliConfig {
        left: Some("a1".to_string()),
        right: Some("ab".to_string()),
        design: Design::Weighted,
        json: false,
        verbose: false,
    };

    let report = CompareEngine::new(WeightedComparator, config).run();

    assert_eq!(report.design, Design::Weighted);
    assert!(report.equivalent);
}

#[test]
fn test_engine_with_cli_config_prefix_count() {
    let config = CliConfig {
        left: Some("abc12".to_string()),
        right: Some("abc13".to_string()),
        design: Design::PrefixCount,
        json: false,
        verbose: false,
    };

    let report = CompareEngine::new(PrefixCountComparator, config).run();

    assert_eq!(report.design, Design::PrefixCount);
    assert!(!report.equivalent);
}
