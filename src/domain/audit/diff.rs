//! Field-level change detection for the audit trail.
//!
//! Records are flat JSON objects (the serialized form of an entity). Only the
//! top-level keys of the new record are inspected on update, so a key that
//! disappears between the two states is not reported.

use super::entity::AuditAction;
use serde_json::{Map, Value};

pub type Record = Map<String, Value>;

/// Keys never reported as changes.
pub const IGNORED_FIELDS: &[&str] = &["updated_at"];

/// The part of an entity's state worth writing to the audit trail.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeSet {
    pub old_values: Option<Record>,
    pub new_values: Option<Record>,
    pub changed_fields: Option<Vec<String>>,
}

/// Computes the change record for `action`.
///
/// Returns `None` when an update touches no tracked field; the caller must not
/// write a log row in that case.
pub fn compute_changes(
    action: AuditAction,
    old: Option<&Record>,
    new: Option<&Record>,
) -> Option<ChangeSet> {
    match action {
        AuditAction::Create => Some(ChangeSet {
            old_values: None,
            new_values: new.cloned(),
            changed_fields: None,
        }),
        AuditAction::Delete => Some(ChangeSet {
            old_values: old.cloned(),
            new_values: None,
            changed_fields: None,
        }),
        AuditAction::Update => diff_records(old, new?),
    }
}

fn diff_records(old: Option<&Record>, new: &Record) -> Option<ChangeSet> {
    let mut changed_fields = Vec::new();
    let mut old_values = Record::new();
    let mut new_values = Record::new();

    for (key, new_value) in new {
        if IGNORED_FIELDS.contains(&key.as_str()) {
            continue;
        }

        let previous = old.and_then(|record| record.get(key));
        let unchanged = previous.is_some_and(|old_value| values_equal(old_value, new_value));
        if unchanged {
            continue;
        }

        changed_fields.push(key.clone());
        old_values.insert(key.clone(), previous.cloned().unwrap_or(Value::Null));
        new_values.insert(key.clone(), new_value.clone());
    }

    if changed_fields.is_empty() {
        return None;
    }

    Some(ChangeSet {
        old_values: Some(old_values),
        new_values: Some(new_values),
        changed_fields: Some(changed_fields),
    })
}

/// Deep structural equality over JSON values.
///
/// Objects are equal when they hold the same keys with equal values in any
/// order. Arrays are compared position by position. Numbers compare by value,
/// so `1` equals `1.0`.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left.iter().all(|(key, value)| {
                    right
                        .get(key)
                        .is_some_and(|other| values_equal(value, other))
                })
        }
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .zip(right)
                    .all(|(value, other)| values_equal(value, other))
        }
        (Value::Number(left), Value::Number(right)) => {
            if let (Some(l), Some(r)) = (left.as_i64(), right.as_i64()) {
                l == r
            } else if let (Some(l), Some(r)) = (left.as_u64(), right.as_u64()) {
                l == r
            } else {
                match (left.as_f64(), right.as_f64()) {
                    (Some(l), Some(r)) => l == r,
                    _ => false,
                }
            }
        }
        _ => a == b,
    }
}
