//! Property tests for dot-path access and session tokens.
//!
//! These check laws that should hold for any key path and value, not just
//! the hand-picked cases in the unit tests.

use std::collections::HashSet;

use proptest::prelude::*;
use serde_json::{json, Value};
use web_helpers::array;
use web_helpers::session::{MemoryHost, MemoryRegistry, Session, SessionConfig};
use web_helpers::{strings, Attributes};

// Strategy: dot paths of one to four lowercase segments
fn arb_path() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,6}", 1..=4).prop_map(|segments| segments.join("."))
}

// Strategy: non-null leaf values
fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        "[ -~]{0,12}".prop_map(Value::from),
        prop::collection::vec(any::<u8>(), 0..4).prop_map(|v| json!(v)),
    ]
}

proptest! {
    /// Property: a value written at a path reads back unchanged
    #[test]
    fn proptest_set_then_get(path in arb_path(), value in arb_leaf()) {
        let mut root = Attributes::new();
        array::set(&mut root, &path, value.clone());
        prop_assert_eq!(array::get(&root, &path), Some(&value));
    }

    /// Property: a later write to the same path wins
    #[test]
    fn proptest_overwrite(path in arb_path(), first in arb_leaf(), second in arb_leaf()) {
        let mut root = Attributes::new();
        array::set(&mut root, &path, first);
        array::set(&mut root, &path, second.clone());
        prop_assert_eq!(array::get(&root, &path), Some(&second));
    }

    /// Property: forgetting a path makes it unreadable
    #[test]
    fn proptest_forget_removes(path in arb_path(), value in arb_leaf()) {
        let mut root = Attributes::new();
        array::set(&mut root, &path, value);
        array::forget(&mut root, &path);
        prop_assert_eq!(array::get(&root, &path), None);
    }

    /// Property: writes under one top-level key never disturb another
    #[test]
    fn proptest_disjoint_writes_independent(
        a in arb_path(),
        b in arb_path(),
        va in arb_leaf(),
        vb in arb_leaf(),
    ) {
        let a = format!("left.{a}");
        let b = format!("right.{b}");

        let mut root = Attributes::new();
        array::set(&mut root, &a, va.clone());
        array::set(&mut root, &b, vb.clone());

        prop_assert_eq!(array::get(&root, &a), Some(&va));
        prop_assert_eq!(array::get(&root, &b), Some(&vb));
    }

    /// Property: session set/get agrees with the raw accessor
    #[test]
    fn proptest_session_matches_accessor(path in arb_path(), value in arb_leaf()) {
        let mut session = Session::new(MemoryHost::new(MemoryRegistry::new()));
        session.start().unwrap();
        session.set(&path, value.clone());

        let all = session.all();
        prop_assert_eq!(session.get(&path), array::get(&all, &path));
    }

    /// Property: token length follows the configured byte count
    #[test]
    fn proptest_token_length(bytes in 0usize..64) {
        let config = SessionConfig::new().token_bytes(bytes);
        let expected = config.token_len();
        let mut session = Session::with_config(MemoryHost::new(MemoryRegistry::new()), config);
        session.start().unwrap();

        prop_assert_eq!(session.token().map(str::len), Some(expected));
        prop_assert!(expected >= 16);
    }

    /// Property: random strings have the requested length and alphabet
    #[test]
    fn proptest_random_string_shape(length in 0usize..80) {
        let value = strings::random(length);
        prop_assert_eq!(value.len(), length);
        prop_assert!(value.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}

#[test]
fn regenerated_tokens_are_distinct() {
    let mut session = Session::new(MemoryHost::new(MemoryRegistry::new()));
    session.start().unwrap();

    let mut seen = HashSet::new();
    for _ in 0..200 {
        session.regenerate_token();
        assert!(seen.insert(session.token().unwrap().to_owned()));
    }
}
