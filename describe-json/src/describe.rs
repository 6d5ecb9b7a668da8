//! The descriptor transform.
//!
//! A [`Describer`] walks a [`serde_json::Value`] and produces a freshly
//! constructed value of the same broad shape with bulk replaced by compact
//! placeholders:
//!
//! - scalars pass through unchanged
//! - over-long strings become `"<prefix>... len: <N>, md5: <hex>"`
//! - over-long arrays collapse to `["length: <N>; example:", <element>]`
//! - object keys optionally become full jq-style access paths
//!
//! The transform is total over the JSON value domain, performs no I/O, and
//! never mutates its input.

use serde_json::{Map, Value};

use crate::{
    path,
    policy::DescribePolicy,
    select::{IndexSource, ThreadRngSource},
};

/// The recursive transform producing a summarized JSON value.
///
/// A describer pairs a [`DescribePolicy`] with an [`IndexSource`] used to
/// pick example elements when `randomize` is enabled. Each invocation of
/// [`describe`](Describer::describe) is independent; the only state carried
/// across calls is the index source's generator.
///
/// # Example
///
/// ```rust
/// use describe_json::{DescribePolicy, Describer};
/// use serde_json::json;
///
/// let mut describer = Describer::new(DescribePolicy::new());
/// assert_eq!(
///     describer.describe(&json!([1, 2, 3])),
///     json!(["length: 3; example:", 1]),
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Describer<S = ThreadRngSource> {
    policy: DescribePolicy,
    source: S,
}

impl Describer {
    /// Constructs a describer backed by the thread-local random generator.
    #[must_use]
    pub fn new(policy: DescribePolicy) -> Self {
        Self {
            policy,
            source: ThreadRngSource,
        }
    }
}

impl<S: IndexSource> Describer<S> {
    /// Constructs a describer with an explicit example index source.
    ///
    /// The source is only consulted when the policy has `randomize` enabled;
    /// tests can pass a deterministic stub.
    #[must_use]
    pub fn with_source(policy: DescribePolicy, source: S) -> Self {
        Self { policy, source }
    }

    /// The policy this describer applies.
    pub fn policy(&self) -> &DescribePolicy {
        &self.policy
    }

    /// Produces a summarized copy of `value`.
    pub fn describe(&mut self, value: &Value) -> Value {
        self.describe_at(value, "")
    }

    fn describe_at(&mut self, value: &Value, current_path: &str) -> Value {
        match value {
            Value::Null | Value::Bool(_) | Value::Number(_) => value.clone(),
            Value::String(text) => self.describe_string(text),
            Value::Array(items) => self.describe_array(items, current_path),
            Value::Object(members) => self.describe_object(members, current_path),
        }
    }

    /// Lengths are measured in Unicode scalar values, not bytes, so the
    /// reported length matches what a reader counts and the prefix never
    /// splits a character.
    fn describe_string(&self, text: &str) -> Value {
        let length = text.chars().count();
        if length <= self.policy.max_string_size() {
            return Value::String(text.to_owned());
        }

        let prefix: String = text.chars().take(self.policy.max_string_size()).collect();
        let digest = md5::compute(text.as_bytes());
        Value::String(format!("{prefix}... len: {length}, md5: {digest:x}"))
    }

    fn describe_array(&mut self, items: &[Value], current_path: &str) -> Value {
        if items.len() <= self.policy.max_array_size() {
            let mut described = Vec::with_capacity(items.len());
            for (index, element) in items.iter().enumerate() {
                let element_path = path::array_index(current_path, index);
                described.push(self.describe_at(element, &element_path));
            }
            return Value::Array(described);
        }

        // Collapse requires len > max_array_size >= 0, so the slice is
        // non-empty and the chosen index is always valid.
        let chosen = if self.policy.randomize() {
            self.source.index(items.len())
        } else {
            0
        };
        let element_path = path::array_index(current_path, chosen);
        Value::Array(vec![
            Value::String(format!("length: {}; example:", items.len())),
            self.describe_at(&items[chosen], &element_path),
        ])
    }

    fn describe_object(&mut self, members: &Map<String, Value>, current_path: &str) -> Value {
        let mut described = Map::new();
        for (key, value) in members {
            // The full path is threaded regardless of the policy switch so
            // nested path keys come out right; the switch only controls which
            // key is emitted. Colliding rewritten keys are last-write-wins.
            let member_path = path::object_member(current_path, key);
            let effective_key = if self.policy.path_keys_enabled() {
                member_path.clone()
            } else {
                key.clone()
            };
            described.insert(effective_key, self.describe_at(value, &member_path));
        }
        Value::Object(described)
    }
}

/// Produces a summarized copy of `value` under `policy`.
///
/// Convenience wrapper constructing a one-shot [`Describer`] backed by the
/// thread-local random generator.
///
/// # Example
///
/// ```rust
/// use describe_json::{DescribePolicy, describe};
/// use serde_json::json;
///
/// assert_eq!(describe(&json!(0), &DescribePolicy::new()), json!(0));
/// ```
#[must_use]
pub fn describe(value: &Value, policy: &DescribePolicy) -> Value {
    Describer::new(*policy).describe(value)
}
