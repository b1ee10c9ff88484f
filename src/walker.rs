//! Tree Walker
//!
//! Dispatches the top-level blocks of each document to their kind's
//! validator and recurses into the children those validators understand:
//!
//! ```text
//! PART                      -> part schema, then every RESOURCE child
//!   RESOURCE                -> resource schema, returns its cost
//! RESOURCE_DEFINITION       -> definition schema, then drain children
//!   RESOURCE_DRAIN_DEFINITION
//! anything else             -> skipped silently
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::block::check_fields;
use crate::diagnostics::DiagnosticSink;
use crate::resources::{walk_config_files, ResourceTable};
use crate::schema::{BlockKind, SchemaRegistry};
use crate::tree::{self, ConfigNode};
use crate::validators::{parse_float, FieldContext};

/// Outcome of linting a batch of files
#[derive(Debug, Default)]
pub struct LintReport {
    /// Files that were read and parsed
    pub files_checked: usize,
    /// Files that could not be read or parsed
    pub files_failed: usize,
    pub diagnostics: DiagnosticSink,
}

impl LintReport {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    pub fn files_total(&self) -> usize {
        self.files_checked + self.files_failed
    }
}

/// Validates documents against the built-in schemas
#[derive(Debug)]
pub struct Linter {
    registry: SchemaRegistry,
    resources: ResourceTable,
}

impl Linter {
    pub fn new(resources: ResourceTable) -> Self {
        Self::with_registry(SchemaRegistry::builtin(), resources)
    }

    pub fn with_registry(registry: SchemaRegistry, resources: ResourceTable) -> Self {
        Self { registry, resources }
    }

    pub fn resources(&self) -> &ResourceTable {
        &self.resources
    }

    /// Lint every registered top-level block of a parsed document
    pub fn lint_document(&self, path: &Path, document: &ConfigNode, sink: &mut DiagnosticSink) {
        let mut cx = FieldContext::new(path, sink, &self.resources);
        for child in document.nodes() {
            match BlockKind::from_name(&child.name) {
                Some(BlockKind::Part) => self.lint_part(&child.node, child.line, &mut cx),
                Some(BlockKind::ResourceDefinition) => {
                    self.lint_resource_definition(&child.node, child.line, &mut cx)
                }
                _ => {}
            }
        }
    }

    /// Parse and lint config text. A parse failure becomes one error at the
    /// parser's line.
    pub fn lint_source(&self, path: &Path, text: &str, sink: &mut DiagnosticSink) -> bool {
        match tree::parse(text) {
            Ok(document) => {
                self.lint_document(path, &document, sink);
                true
            }
            Err(e) => {
                sink.error(path, e.line, e.message);
                false
            }
        }
    }

    /// Read, parse and lint one file. Returns false if the file could not be
    /// read or parsed; that failure is already in `sink`.
    pub fn lint_file(&self, path: &Path, sink: &mut DiagnosticSink) -> bool {
        debug!(path = %path.display(), "linting");
        match std::fs::read(path) {
            Ok(bytes) => self.lint_source(path, &String::from_utf8_lossy(&bytes), sink),
            Err(e) => {
                sink.error(path, 0, e.to_string());
                false
            }
        }
    }

    /// Lint files in the order given. Directories expand to the config files
    /// beneath them, in file-name order.
    pub fn lint_paths(&self, inputs: &[PathBuf], extension: &str) -> LintReport {
        let mut report = LintReport::default();
        for path in expand_inputs(inputs, extension, &mut report.diagnostics) {
            if self.lint_file(&path, &mut report.diagnostics) {
                report.files_checked += 1;
            } else {
                report.files_failed += 1;
            }
        }
        info!(
            files = report.files_total(),
            errors = report.diagnostics.error_count(),
            warnings = report.diagnostics.warning_count(),
            "lint finished"
        );
        report
    }

    fn lint_part(&self, part: &ConfigNode, line: usize, cx: &mut FieldContext<'_>) {
        let Some(schema) = self.registry.get(BlockKind::Part) else { return };
        check_fields(part, line, schema, cx);

        let resource_cost: f64 = part
            .get_nodes(BlockKind::Resource.as_str())
            .map(|child| self.lint_resource(&child.node, child.line, cx))
            .sum();

        if let Some(cost) = part.get_value("cost").and_then(parse_float) {
            if cost < resource_cost {
                cx.warning(
                    line,
                    format!(
                        "part cost {} is not greater than resource cost {}",
                        cost, resource_cost
                    ),
                );
            }
        }
    }

    /// Validate a RESOURCE block and return what its contents are worth:
    /// unit cost times `amount`, or 0 when either cannot be determined.
    fn lint_resource(&self, resource: &ConfigNode, line: usize, cx: &mut FieldContext<'_>) -> f64 {
        if let Some(schema) = self.registry.get(BlockKind::Resource) {
            check_fields(resource, line, schema, cx);
        }

        let unit_cost = resource
            .get_value("name")
            .map(|name| self.resources.unit_cost(name))
            .unwrap_or(0.0);

        let Some(amount) = resource.get_value("amount").and_then(parse_float) else {
            return 0.0;
        };
        if let Some(max_amount) = resource.get_value("maxAmount") {
            match parse_float(max_amount) {
                Some(max_amount) if amount > max_amount => {
                    cx.warning(line, format!("amount {} > maxAmount {}", amount, max_amount))
                }
                Some(_) => {}
                None => return 0.0,
            }
        }
        unit_cost * amount
    }

    fn lint_resource_definition(&self, definition: &ConfigNode, line: usize, cx: &mut FieldContext<'_>) {
        if let Some(schema) = self.registry.get(BlockKind::ResourceDefinition) {
            check_fields(definition, line, schema, cx);
        }
        if let Some(schema) = self.registry.get(BlockKind::ResourceDrainDefinition) {
            for drain in definition.get_nodes(BlockKind::ResourceDrainDefinition.as_str()) {
                check_fields(&drain.node, drain.line, schema, cx);
            }
        }
    }
}

/// Flatten files and directories into the list of files to lint
fn expand_inputs(inputs: &[PathBuf], extension: &str, sink: &mut DiagnosticSink) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for input in inputs {
        if !input.is_dir() {
            files.push(input.clone());
            continue;
        }
        for entry in walk_config_files(input, extension) {
            match entry {
                Ok(path) => files.push(path),
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| input.clone());
                    sink.error(&path, 0, e.to_string());
                }
            }
        }
    }
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;

    fn fuel_table() -> ResourceTable {
        let mut table = ResourceTable::new();
        table.insert(
            "LiquidFuel",
            ConfigNode::new("RESOURCE_DEFINITION")
                .with_value("name", "LiquidFuel", 2)
                .with_value("unitCost", "0.8", 3),
        );
        table
    }

    fn resource(name: &str, amount: &str, max_amount: &str) -> ConfigNode {
        ConfigNode::new("RESOURCE")
            .with_value("name", name, 21)
            .with_value("amount", amount, 22)
            .with_value("maxAmount", max_amount, 23)
    }

    fn resource_cost(linter: &Linter, node: &ConfigNode) -> (f64, DiagnosticSink) {
        let mut sink = DiagnosticSink::new();
        let mut cx = FieldContext::new(Path::new("r.cfg"), &mut sink, &linter.resources);
        let cost = linter.lint_resource(node, 20, &mut cx);
        (cost, sink)
    }

    #[test]
    fn test_resource_cost_uses_amount() {
        let linter = Linter::new(fuel_table());
        let (cost, sink) = resource_cost(&linter, &resource("LiquidFuel", "50", "100"));
        assert_eq!(cost, 40.0);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_amount_over_max_warns_but_still_costs() {
        let linter = Linter::new(fuel_table());
        let (cost, sink) = resource_cost(&linter, &resource("LiquidFuel", "150", "100"));
        assert_eq!(cost, 120.0);
        let diags = sink.into_vec();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].line, 20);
        assert_eq!(diags[0].severity, Severity::Warning);
        assert_eq!(diags[0].message, "amount 150 > maxAmount 100");
    }

    #[test]
    fn test_unknown_resource_costs_nothing() {
        let linter = Linter::new(fuel_table());
        let (cost, sink) = resource_cost(&linter, &resource("Kethane", "50", "100"));
        assert_eq!(cost, 0.0);
        let diags = sink.into_vec();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].line, 21);
        assert_eq!(diags[0].message, "'Kethane' not a known resource");
    }

    #[test]
    fn test_unparseable_amounts_cost_nothing() {
        let linter = Linter::new(fuel_table());
        let (cost, sink) = resource_cost(&linter, &resource("LiquidFuel", "lots", "100"));
        assert_eq!(cost, 0.0);
        assert!(sink.has_errors());

        let (cost, _) = resource_cost(&linter, &resource("LiquidFuel", "50", "lots"));
        assert_eq!(cost, 0.0);
    }

    #[test]
    fn test_unregistered_blocks_are_skipped() {
        let linter = Linter::new(ResourceTable::new());
        let document = ConfigNode::new("")
            .with_node(ConfigNode::new("MODULE").with_value("bogus", "1", 2), 1)
            .with_node(ConfigNode::new("RESOURCE").with_value("bogus", "1", 5), 4);
        let mut sink = DiagnosticSink::new();
        linter.lint_document(Path::new("x.cfg"), &document, &mut sink);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_parse_failure_is_one_error() {
        let linter = Linter::new(ResourceTable::new());
        let mut sink = DiagnosticSink::new();
        let ok = linter.lint_source(Path::new("bad.cfg"), "PART\n{\n", &mut sink);
        assert!(!ok);
        assert_eq!(sink.len(), 1);
        assert!(sink.has_errors());
        assert_eq!(sink.as_slice()[0].line, 3);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let linter = Linter::new(ResourceTable::new());
        let report = linter.lint_paths(&[PathBuf::from("/no/such/part.cfg")], "cfg");
        assert_eq!(report.files_failed, 1);
        assert_eq!(report.files_checked, 0);
        assert!(report.has_errors());
        assert_eq!(report.diagnostics.as_slice()[0].line, 0);
    }
}
