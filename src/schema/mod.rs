//! Schema Tables
//!
//! Declarative per-kind rules: which fields must be present (and how loudly
//! to complain when they are not), which fields are known and how each is
//! checked, and the escape hatches for dynamically named keys.
//!
//! ## Field resolution order
//! 1. exact field name in the field table
//! 2. first matching prefix rule (`node_`, `sound_`, ...)
//! 3. the kind's fallback hook, if any
//! 4. otherwise the field is unknown

mod enums;
mod part;
mod resource;

pub use enums::*;

use std::collections::HashMap;
use std::fmt;

use crate::diagnostics::Severity;
use crate::tree::{ConfigNode, ConfigValue};
use crate::validators::{FieldContext, FieldValidator};

// =============================================================================
// Block Kinds
// =============================================================================

/// Block kinds that have a schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Part,
    Resource,
    ResourceDefinition,
    ResourceDrainDefinition,
}

impl BlockKind {
    pub const ALL: [BlockKind; 4] = [
        Self::Part,
        Self::Resource,
        Self::ResourceDefinition,
        Self::ResourceDrainDefinition,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Part => "PART",
            Self::Resource => "RESOURCE",
            Self::ResourceDefinition => "RESOURCE_DEFINITION",
            Self::ResourceDrainDefinition => "RESOURCE_DRAIN_DEFINITION",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == name)
    }

    /// Kinds validated when they appear at the top of a document. The rest
    /// are only checked as children of one of these.
    pub fn is_top_level(&self) -> bool {
        matches!(self, Self::Part | Self::ResourceDefinition)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Rules
// =============================================================================

/// A field that must be present, and what to say when it is not
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredField {
    pub name: &'static str,
    pub severity: Severity,
    /// Reported verbatim
    pub message: &'static str,
}

impl RequiredField {
    pub const fn error(name: &'static str, message: &'static str) -> Self {
        Self {
            name,
            severity: Severity::Error,
            message,
        }
    }

    pub const fn warning(name: &'static str, message: &'static str) -> Self {
        Self {
            name,
            severity: Severity::Warning,
            message,
        }
    }
}

/// Accepts every field whose name starts with `prefix`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixRule {
    pub prefix: &'static str,
    pub validator: Option<FieldValidator>,
}

/// Last-chance handler for fields not in the table. Returns true if it
/// claimed the field.
pub type FallbackHook = fn(&ConfigNode, &ConfigValue, &mut FieldContext<'_>) -> bool;

/// How a field name resolved against a schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Known, run this validator
    Checked(FieldValidator),
    /// Known, no checks
    Accepted,
    /// Not in the table and no prefix matched
    Unlisted,
}

// =============================================================================
// Block Schema
// =============================================================================

/// The complete rule set for one block kind
#[derive(Clone)]
pub struct BlockSchema {
    kind: BlockKind,
    required: Vec<RequiredField>,
    fields: HashMap<&'static str, Option<FieldValidator>>,
    prefixes: Vec<PrefixRule>,
    fallback: Option<FallbackHook>,
}

impl fmt::Debug for BlockSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockSchema")
            .field("kind", &self.kind)
            .field("required", &self.required)
            .field("fields", &self.fields.len())
            .field("prefixes", &self.prefixes)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

impl BlockSchema {
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            required: Vec::new(),
            fields: HashMap::new(),
            prefixes: Vec::new(),
            fallback: None,
        }
    }

    pub fn with_required(mut self, rules: &[RequiredField]) -> Self {
        self.required.extend_from_slice(rules);
        self
    }

    pub fn with_fields(mut self, fields: &[(&'static str, Option<FieldValidator>)]) -> Self {
        self.fields.extend(fields.iter().copied());
        self
    }

    pub fn with_prefix(mut self, prefix: &'static str, validator: Option<FieldValidator>) -> Self {
        self.prefixes.push(PrefixRule { prefix, validator });
        self
    }

    pub fn with_fallback(mut self, hook: FallbackHook) -> Self {
        self.fallback = Some(hook);
        self
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    /// Required-field rules in declaration order
    pub fn required(&self) -> &[RequiredField] {
        &self.required
    }

    pub fn fallback(&self) -> Option<FallbackHook> {
        self.fallback
    }

    pub fn resolve(&self, field: &str) -> FieldRule {
        let validator = match self.fields.get(field) {
            Some(validator) => *validator,
            None => match self.prefixes.iter().find(|p| field.starts_with(p.prefix)) {
                Some(rule) => rule.validator,
                None => return FieldRule::Unlisted,
            },
        };
        match validator {
            Some(v) => FieldRule::Checked(v),
            None => FieldRule::Accepted,
        }
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Schemas for every known block kind, built once per run
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: HashMap<BlockKind, BlockSchema>,
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SchemaRegistry {
    pub fn builtin() -> Self {
        let schemas = [
            part::schema(),
            resource::resource_schema(),
            resource::definition_schema(),
            resource::drain_definition_schema(),
        ]
        .into_iter()
        .map(|s| (s.kind(), s))
        .collect();
        Self { schemas }
    }

    pub fn get(&self, kind: BlockKind) -> Option<&BlockSchema> {
        self.schemas.get(&kind)
    }

    /// Replace or add a schema
    pub fn register(&mut self, schema: BlockSchema) {
        self.schemas.insert(schema.kind(), schema);
    }
}
