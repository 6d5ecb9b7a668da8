//! End-to-end tests for the public describe API.
//!
//! These tests exercise the integration of:
//! - policy construction and defaults,
//! - the recursive descriptor transform, and
//! - pluggable example index selection.

use describe_json::{DescribePolicy, Describer, IndexSource, SeededSource, describe};
use serde_json::{Value, json};

/// Always picks the same index; for deterministic randomize tests.
struct FixedIndex(usize);

impl IndexSource for FixedIndex {
    fn index(&mut self, len: usize) -> usize {
        assert!(self.0 < len);
        self.0
    }
}

mod scalars {
    use super::*;

    #[test]
    fn pass_through_unchanged() {
        let policy = DescribePolicy::new();
        for value in [json!(null), json!(false), json!(true), json!(0), json!(1.5)] {
            assert_eq!(describe(&value, &policy), value);
        }
    }
}

mod strings {
    use super::*;

    #[test]
    fn at_or_below_threshold_are_kept() {
        let policy = DescribePolicy::new().with_max_string_size(4);
        assert_eq!(describe(&json!(""), &policy), json!(""));
        assert_eq!(describe(&json!("abcd"), &policy), json!("abcd"));
    }

    #[test]
    fn above_threshold_carry_prefix_length_and_digest() {
        let value = json!({"a": "a".repeat(44)});
        assert_eq!(
            describe(&value, &DescribePolicy::new()),
            json!({"a": "aaaaaaaaaa... len: 44, md5: 4c3c7c067634daec9716a80ea886d123"}),
        );
    }

    #[test]
    fn identical_originals_summarize_identically() {
        let policy = DescribePolicy::new();
        let first = describe(&json!("x".repeat(100)), &policy);
        let second = describe(&json!("x".repeat(100)), &policy);
        assert_eq!(first, second);
    }

    #[test]
    fn different_originals_with_equal_prefixes_differ_by_digest() {
        let policy = DescribePolicy::new();
        let first = describe(&json!(format!("{}1", "x".repeat(20))), &policy);
        let second = describe(&json!(format!("{}2", "x".repeat(20))), &policy);
        assert_ne!(first, second);
    }

    #[test]
    fn zero_threshold_summarizes_every_non_empty_string() {
        let policy = DescribePolicy::new().with_max_string_size(0);
        let described = describe(&json!("ab"), &policy);
        let text = described.as_str().unwrap();
        assert!(text.starts_with("... len: 2, md5: "));
        // Empty strings are at the threshold and stay as-is.
        assert_eq!(describe(&json!(""), &policy), json!(""));
    }
}

mod arrays {
    use super::*;

    #[test]
    fn within_threshold_describes_each_element() {
        let policy = DescribePolicy::new().with_max_array_size(4);
        let value = json!([1, "b", ["x".repeat(30)], null]);
        let described = describe(&value, &policy);
        let items = described.as_array().unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0], json!(1));
        assert_eq!(items[1], json!("b"));
        assert_eq!(items[3], json!(null));
        // The nested long string is still summarized.
        let inner = items[2].as_array().unwrap();
        assert!(inner[0].as_str().unwrap().contains("len: 30, md5: "));
    }

    #[test]
    fn default_policy_collapses_three_numbers() {
        assert_eq!(
            describe(&json!([1, 2, 3]), &DescribePolicy::new()),
            json!(["length: 3; example:", 1]),
        );
    }

    #[test]
    fn collapsed_example_is_itself_described() {
        let value = json!([{"big": "y".repeat(25)}, {"big": "z"}]);
        let described = describe(&value, &DescribePolicy::new());
        let items = described.as_array().unwrap();
        assert_eq!(items[0], json!("length: 2; example:"));
        let example = items[1].as_object().unwrap();
        assert!(example["big"].as_str().unwrap().contains("len: 25, md5: "));
    }

    #[test]
    fn empty_arrays_stay_empty() {
        let policy = DescribePolicy::new().with_max_array_size(0);
        assert_eq!(describe(&json!([]), &policy), json!([]));
    }
}

mod objects {
    use super::*;

    #[test]
    fn key_set_is_preserved() {
        let value = json!({"a": "b", "c": "d"});
        assert_eq!(describe(&value, &DescribePolicy::new()), value);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let value = json!({"z": 1, "a": 2, "m": 3});
        let described = describe(&value, &DescribePolicy::new());
        let keys: Vec<&String> = described.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn values_are_transformed_independently() {
        let value = json!({"c": "d", "e": [1, 2, 3]});
        assert_eq!(
            describe(&value, &DescribePolicy::new()),
            json!({"c": "d", "e": ["length: 3; example:", 1]}),
        );
    }

    #[test]
    fn deeply_nested_mixed_document() {
        let value = json!({
            "e": [{"e": "f", "g": "g", "h": "aaaaaaaaaaaa"}]
        });
        assert_eq!(
            describe(&value, &DescribePolicy::new()),
            json!({
                "e": [{"e": "f", "g": "g",
                       "h": "aaaaaaaaaa... len: 12, md5: 45e4812014d83dde5666ebdf5a8ed1ed"}]
            }),
        );
    }
}

mod path_keys {
    use super::*;

    #[test]
    fn keys_become_jq_access_paths() {
        let policy = DescribePolicy::new().with_path_keys(true);
        let value = json!({"a": {"b": [{"c": 1}]}});
        assert_eq!(
            describe(&value, &policy),
            json!({".a": {".a.b": [{".a.b[0].c": 1}]}}),
        );
    }

    #[test]
    fn array_indices_appear_in_descendant_keys() {
        let policy = DescribePolicy::new()
            .with_path_keys(true)
            .with_max_array_size(2);
        let value = json!({"a": [{"c": 1}, {"c": 2}]});
        assert_eq!(
            describe(&value, &policy),
            json!({".a": [{".a[0].c": 1}, {".a[1].c": 2}]}),
        );
    }

    #[test]
    fn non_alphanumeric_keys_are_quoted_and_escaped() {
        let policy = DescribePolicy::new().with_path_keys(true);
        let value = json!({"a key": {"\"quoted\"": 1}});
        assert_eq!(
            describe(&value, &policy),
            json!({".\"a key\"": {".\"a key\".\"\\\"quoted\\\"\"": 1}}),
        );
    }

    #[test]
    fn disabled_by_default() {
        let value = json!({"a": {"b": 1}});
        assert_eq!(describe(&value, &DescribePolicy::new()), value);
    }
}

mod randomize {
    use super::*;

    #[test]
    fn stubbed_source_selects_the_example() {
        let policy = DescribePolicy::new().with_randomize(true);
        let mut describer = Describer::with_source(policy, FixedIndex(3));
        assert_eq!(
            describer.describe(&json!(["a", "b", "c", "d"])),
            json!(["length: 4; example:", "d"]),
        );
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let policy = DescribePolicy::new().with_randomize(true);
        let value = json!({"items": (0..50).collect::<Vec<i64>>()});

        let mut first = Describer::with_source(policy, SeededSource::from_seed(7));
        let mut second = Describer::with_source(policy, SeededSource::from_seed(7));
        assert_eq!(first.describe(&value), second.describe(&value));
    }

    #[test]
    fn random_example_always_comes_from_the_input() {
        let policy = DescribePolicy::new().with_randomize(true);
        let values: Vec<Value> = (0..20).map(|n| json!(n)).collect();
        let input = Value::Array(values.clone());
        let mut describer = Describer::new(policy);
        for _ in 0..32 {
            let described = describer.describe(&input);
            let items = described.as_array().unwrap();
            assert_eq!(items[0], json!("length: 20; example:"));
            assert!(values.contains(&items[1]));
        }
    }
}
