//! cfglint
//!
//! A schema-driven linter for the hierarchical key/value config trees used by
//! Kerbal Space Program content files (`PART`, `RESOURCE_DEFINITION`, ...).
//!
//! ## Features
//!
//! - **Schema Tables**: required fields with per-field severity and message,
//!   known fields mapped to value validators, prefix rules for dynamically
//!   named keys
//! - **Field Validators**: numeric ranges, booleans, enumerations, vectors,
//!   quaternions, colors, attach-rule flags, attach-node geometry
//! - **Cross-References**: resource names checked against definitions
//!   collected from a game data tree; part cost compared with the value of
//!   the resources it carries
//! - **Deterministic Output**: diagnostics in file order, then source order
//!
//! ## Architecture
//!
//! ```text
//! tree::parse ──► Linter (walker) ──► block::check_fields ──► FieldValidator
//!                    │                        │
//!                    ▼                        ▼
//!              ResourceTable            DiagnosticSink ──► report
//! ```

pub mod block;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod report;
pub mod resources;
pub mod schema;
pub mod tree;
pub mod validators;
pub mod walker;

pub use config::{LintConfig, OutputFormat};
pub use diagnostics::{Diagnostic, DiagnosticSink, Severity};
pub use error::{LintError, ParseError, Result};
pub use resources::ResourceTable;
pub use schema::{BlockKind, BlockSchema, RequiredField, SchemaRegistry};
pub use tree::{ConfigNode, ConfigValue};
pub use validators::{EnumRule, FieldValidator};
pub use walker::{LintReport, Linter};
