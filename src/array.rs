//! Dot-notation access to nested maps.
//!
//! A dot path such as `"user.profile.name"` is split on `.` and each segment
//! addresses one level of nested [`Attributes`]. Sequences are walked too: a
//! segment that is a canonical non-negative integer (`"0"`, `"12"`, not
//! `"01"`) indexes into a sequence. Scalars are leaves.
//!
//! Paths are not validated. Empty segments (`"a..b"`, `"a."`, `""`) address
//! the empty-string key at that level, which is what a plain split produces.

use serde_json::{Map, Value};

/// A string-keyed map of session values, kept in insertion order.
pub type Attributes = Map<String, Value>;

/// Gets a value by dot path.
///
/// An exact top-level key wins over traversal, even if it contains literal
/// dots. The exact match is skipped when the stored value is `null`, in which
/// case the path is traversed as usual.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use web_helpers::array;
///
/// let mut root = array::Attributes::new();
/// array::set(&mut root, "user.name", json!("ada"));
/// array::set(&mut root, "cart", json!(["apple", "pear"]));
/// root.insert("user.name".to_string(), json!("literal"));
///
/// assert_eq!(array::get(&root, "user.name"), Some(&json!("literal")));
/// assert_eq!(array::get(&root, "cart.1"), Some(&json!("pear")));
/// assert_eq!(array::get(&root, "user.missing"), None);
/// ```
pub fn get<'a>(root: &'a Attributes, key: &str) -> Option<&'a Value> {
    if let Some(value) = root.get(key).filter(|v| !v.is_null()) {
        return Some(value);
    }

    let mut segments = key.split('.');
    let mut current = root.get(segments.next()?)?;
    for segment in segments {
        current = child(current, segment)?;
    }
    Some(current)
}

/// Gets a value by dot path, falling back to `default` when it is absent.
pub fn get_or<'a>(root: &'a Attributes, key: &str, default: &'a Value) -> &'a Value {
    get(root, key).unwrap_or(default)
}

/// Sets a value by dot path, creating intermediate maps as needed.
///
/// Any intermediate segment that holds neither a map nor a sequence is
/// overwritten with an empty map, discarding whatever was stored there.
///
/// In a sequence, an index segment overwrites an existing element, and an
/// index equal to the length appends. Any other segment turns the sequence
/// into a map keyed by the old indices (`"0"`, `"1"`, ..) so no element is
/// lost.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use web_helpers::array;
///
/// let mut root = array::Attributes::new();
/// root.insert("a".to_string(), json!(1));
/// root.insert("cart".to_string(), json!(["apple", "pear"]));
///
/// array::set(&mut root, "a.b", json!(2));
/// array::set(&mut root, "cart.1", json!("plum"));
/// assert_eq!(
///     serde_json::Value::Object(root),
///     json!({"a": {"b": 2}, "cart": ["apple", "plum"]})
/// );
/// ```
pub fn set(root: &mut Attributes, key: &str, value: Value) {
    let segments: Vec<&str> = key.split('.').collect();
    // split always yields at least one segment
    let Some((first, rest)) = segments.split_first() else {
        return;
    };

    if rest.is_empty() {
        root.insert((*first).to_owned(), value);
        return;
    }

    let slot = root.entry(*first).or_insert(Value::Null);
    set_in(slot, rest, value);
}

fn set_in(node: &mut Value, segments: &[&str], value: Value) {
    let Some((segment, rest)) = segments.split_first() else {
        *node = value;
        return;
    };

    if let Some(slot) = slot_for_write(node, segment) {
        set_in(slot, rest, value);
    }
}

/// Makes room for `segment` under `node` and returns its slot.
fn slot_for_write<'a>(node: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    if let Value::Array(items) = node {
        match list_index(segment) {
            Some(i) if i < items.len() => {}
            Some(i) if i == items.len() => items.push(Value::Null),
            _ => {
                let map = list_to_map(std::mem::take(items));
                *node = Value::Object(map);
            }
        }
    } else if !node.is_object() {
        *node = Value::Object(Map::new());
    }

    match node {
        Value::Array(items) => items.get_mut(list_index(segment)?),
        Value::Object(map) => Some(map.entry(segment).or_insert(Value::Null)),
        _ => None,
    }
}

/// Removes a value by dot path.
///
/// Nothing is created: if any intermediate segment is missing or is neither
/// a map nor a sequence, this is a no-op.
///
/// Removing the last element of a sequence leaves a shorter sequence.
/// Removing any other element keeps the remaining indices stable by turning
/// the sequence into a map keyed by index, so `"cart.2"` still addresses the
/// same element afterwards.
pub fn forget(root: &mut Attributes, key: &str) {
    let mut segments: Vec<&str> = key.split('.').collect();
    let last = segments.pop().unwrap_or_default();

    let mut segments = segments.into_iter();
    let Some(first) = segments.next() else {
        root.shift_remove(last);
        return;
    };

    let Some(mut current) = root.get_mut(first) else {
        return;
    };
    for segment in segments {
        match child_mut(current, segment) {
            Some(next) => current = next,
            None => return,
        }
    }

    remove_child(current, last);
}

fn child<'a>(node: &'a Value, segment: &str) -> Option<&'a Value> {
    match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => items.get(list_index(segment)?),
        _ => None,
    }
}

fn child_mut<'a>(node: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    match node {
        Value::Object(map) => map.get_mut(segment),
        Value::Array(items) => items.get_mut(list_index(segment)?),
        _ => None,
    }
}

fn remove_child(node: &mut Value, segment: &str) {
    match node {
        Value::Object(map) => {
            map.shift_remove(segment);
        }
        Value::Array(items) => match list_index(segment) {
            Some(i) if i + 1 == items.len() => {
                items.pop();
            }
            Some(i) if i < items.len() => {
                let mut map = list_to_map(std::mem::take(items));
                map.shift_remove(segment);
                *node = Value::Object(map);
            }
            _ => {}
        },
        _ => {}
    }
}

/// Parses a canonical sequence index: digits only, no leading zeros.
fn list_index(segment: &str) -> Option<usize> {
    segment
        .parse::<usize>()
        .ok()
        .filter(|i| i.to_string() == segment)
}

fn list_to_map(items: Vec<Value>) -> Attributes {
    items
        .into_iter()
        .enumerate()
        .map(|(i, value)| (i.to_string(), value))
        .collect()
}

/// Returns the first value whose entry passes `predicate`, in insertion order.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use web_helpers::array;
///
/// let mut root = array::Attributes::new();
/// root.insert("a".to_string(), json!(1));
/// root.insert("b".to_string(), json!(10));
/// root.insert("c".to_string(), json!(20));
///
/// let big = array::first(&root, |_, v| v.as_i64().is_some_and(|n| n > 5));
/// assert_eq!(big, Some(&json!(10)));
/// ```
pub fn first<'a, F>(root: &'a Attributes, mut predicate: F) -> Option<&'a Value>
where
    F: FnMut(&str, &Value) -> bool,
{
    root.iter()
        .find(|(key, value)| predicate(key, value))
        .map(|(_, value)| value)
}

/// Returns the first value in insertion order.
pub fn head(root: &Attributes) -> Option<&Value> {
    root.values().next()
}
