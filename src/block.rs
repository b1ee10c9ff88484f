//! Block Validator
//!
//! Checks one block's own values against its schema. Child blocks are the
//! caller's business.
//!
//! Diagnostics come out in a fixed order: missing required fields first, in
//! schema order, then per-value findings in source order.

use std::collections::HashMap;

use crate::schema::{BlockSchema, FieldRule};
use crate::tree::ConfigNode;
use crate::validators::FieldContext;

/// Validate the values of `block`, whose opening line is `line`.
///
/// A field that appears more than once is reported as a duplicate *and*
/// validated again at every occurrence.
pub fn check_fields(block: &ConfigNode, line: usize, schema: &BlockSchema, cx: &mut FieldContext<'_>) {
    for rule in schema.required() {
        if !block.has_value(rule.name) {
            cx.sink.report(rule.severity, cx.path, line, rule.message);
        }
    }

    let mut seen: HashMap<&str, usize> = HashMap::new();
    for field in block.values() {
        match seen.get(field.name.as_str()) {
            Some(first) => cx.warning(
                field.line,
                format!("duplicate field {}, first seen on line {}", field.name, first),
            ),
            None => {
                seen.insert(&field.name, field.line);
            }
        }

        match schema.resolve(&field.name) {
            FieldRule::Checked(validator) => validator.check(&field.name, &field.value, field.line, cx),
            FieldRule::Accepted => {}
            FieldRule::Unlisted => {
                let claimed = schema
                    .fallback()
                    .map(|hook| hook(block, field, cx))
                    .unwrap_or(false);
                if !claimed {
                    cx.warning(
                        field.line,
                        format!("{} not a known {} field", field.name, schema.kind()),
                    );
                }
            }
        }
    }
}
