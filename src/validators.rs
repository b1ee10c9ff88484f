//! Field Validators
//!
//! A closed set of value checkers. Each one inspects a single field's raw
//! text and reports findings to the sink; none of them fail on malformed
//! input, since malformed input is exactly what they report.

use std::path::Path;

use crate::diagnostics::DiagnosticSink;
use crate::resources::ResourceTable;

/// Where a field lives and where its findings go
pub struct FieldContext<'a> {
    pub path: &'a Path,
    pub sink: &'a mut DiagnosticSink,
    pub resources: &'a ResourceTable,
}

impl<'a> FieldContext<'a> {
    pub fn new(path: &'a Path, sink: &'a mut DiagnosticSink, resources: &'a ResourceTable) -> Self {
        Self {
            path,
            sink,
            resources,
        }
    }

    pub fn error(&mut self, line: usize, message: impl Into<String>) {
        self.sink.error(self.path, line, message);
    }

    pub fn warning(&mut self, line: usize, message: impl Into<String>) {
        self.sink.warning(self.path, line, message);
    }
}

/// Allowed values for an enumerated field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumRule {
    values: &'static [&'static str],
    case_insensitive: bool,
}

impl EnumRule {
    pub const fn new(values: &'static [&'static str]) -> Self {
        Self {
            values,
            case_insensitive: false,
        }
    }

    /// Upper-case the value before the lookup. The allowed set must then be
    /// spelled in upper case.
    pub const fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    pub fn accepts(&self, value: &str) -> bool {
        if self.case_insensitive {
            let upper = value.to_uppercase();
            self.values.contains(&upper.as_str())
        } else {
            self.values.contains(&value)
        }
    }
}

/// A value checker for one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValidator {
    /// Float, warns unless > 0
    PositiveNonzeroFloat,
    /// Float, warns if < 0
    PositiveFloat,
    /// Integer, warns if < 0
    PositiveInt,
    Boolean,
    Vector3,
    Quaternion,
    /// `#rrggbb` or `r,g,b` with components in [0, 1]
    Color,
    Enum(EnumRule),
    /// 5 to 8 comma-separated 0/1 flags
    AttachRules,
    /// `node_stack_<id>`, `node_dock_<id>`, `node_attach` geometry
    NodeReference,
    /// Must name an entry in the resource table
    ResourceName,
    /// Legacy numeric form of `physicalSignificance`
    PhysicsSignificance,
    /// Always warns that the field has no effect
    Ignored,
    /// Always warns with the given advice
    Discouraged(&'static str),
}

impl FieldValidator {
    pub fn check(&self, name: &str, value: &str, line: usize, cx: &mut FieldContext<'_>) {
        match self {
            Self::PositiveNonzeroFloat => match parse_float(value) {
                None => cx.error(line, format!("{} not a valid float", name)),
                Some(v) if v <= 0.0 => cx.warning(line, format!("{} should be > 0", name)),
                Some(_) => {}
            },
            Self::PositiveFloat => match parse_float(value) {
                None => cx.error(line, format!("{} not a valid float", name)),
                Some(v) if v < 0.0 => cx.warning(line, format!("{} should be >= 0", name)),
                Some(_) => {}
            },
            Self::PositiveInt => match parse_int(value) {
                None => cx.error(line, format!("{} not a valid int", name)),
                Some(v) if v < 0 => cx.warning(line, format!("{} should be >= 0", name)),
                Some(_) => {}
            },
            Self::Boolean => {
                let upper = value.to_uppercase();
                if upper != "TRUE" && upper != "FALSE" {
                    cx.error(line, format!("{} not a valid bool", name));
                }
            }
            Self::Vector3 => check_float_tuple(name, value, 3, "a vector", line, cx),
            Self::Quaternion => check_float_tuple(name, value, 4, "a quaternion", line, cx),
            Self::Color => check_color(name, value, line, cx),
            Self::Enum(rule) => {
                if !rule.accepts(value) {
                    cx.error(line, format!("{} not valid for {}", value, name));
                }
            }
            Self::AttachRules => check_attach_rules(name, value, line, cx),
            Self::NodeReference => check_node(name, value, line, cx),
            Self::ResourceName => {
                if !cx.resources.contains(value) {
                    cx.error(line, format!("'{}' not a known resource", value));
                }
            }
            Self::PhysicsSignificance => {
                cx.warning(
                    line,
                    "use of PhysicsSignificance is discouraged. use physicalSignificance instead",
                );
                if value != "0" && value != "1" {
                    cx.error(
                        line,
                        format!("{} must be 0 (full physics) or 1 (physicsless)", name),
                    );
                }
            }
            Self::Ignored => cx.warning(line, format!("{} is ignored", name)),
            Self::Discouraged(advice) => cx.warning(line, *advice),
        }
    }
}

pub(crate) fn parse_float(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

pub(crate) fn parse_int(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok()
}

fn check_float_tuple(
    name: &str,
    value: &str,
    arity: usize,
    shape: &str,
    line: usize,
    cx: &mut FieldContext<'_>,
) {
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != arity {
        cx.error(
            line,
            format!("{} must be {}: {} comma-separated floats", name, shape, arity),
        );
    }
    for (i, part) in parts.iter().enumerate() {
        if parse_float(part).is_none() {
            cx.error(line, format!("{}[{}] not a valid float", name, i));
        }
    }
}

fn check_color(name: &str, value: &str, line: usize, cx: &mut FieldContext<'_>) {
    if let Some(hex) = value.strip_prefix('#') {
        if value.len() != 7 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            cx.error(line, format!("{} must be # followed by 6 hex digits", name));
        }
        return;
    }

    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != 3 {
        cx.error(line, format!("{} must be 3 comma-separated floats", name));
    }
    for (i, part) in parts.iter().enumerate() {
        match parse_float(part) {
            None => cx.error(line, format!("{}[{}] not a valid float", name, i)),
            Some(v) if !(0.0..=1.0).contains(&v) => {
                cx.error(line, format!("{}[{}] should be in the range 0 to 1", name, i))
            }
            Some(_) => {}
        }
    }
}

fn check_attach_rules(name: &str, value: &str, line: usize, cx: &mut FieldContext<'_>) {
    let mut flags: Vec<&str> = value.split(',').collect();
    if flags.len() < 5 {
        cx.error(
            line,
            format!("{} must have at least 5 comma-separated 0 or 1 values", name),
        );
        return;
    }
    if flags.len() > 8 {
        cx.warning(line, format!("only 8 values are significant for {}", name));
        flags.truncate(8);
    }
    for (i, flag) in flags.iter().enumerate() {
        if *flag != "1" && *flag != "0" {
            cx.warning(
                line,
                format!(
                    "{}[{}]: {} not a valid flag (anything but 1 is treated as 0)",
                    name, i, flag
                ),
            );
        }
    }
}

/// Position (3), orientation (3), then up to 6 integer extras
const NODE_MIN_VALUES: usize = 6;
const NODE_MAX_VALUES: usize = 12;

fn check_node(name: &str, value: &str, line: usize, cx: &mut FieldContext<'_>) {
    let key: Vec<&str> = name.split('_').collect();
    match key.get(1).copied() {
        Some("stack") | Some("dock") => {
            if key.len() < 3 {
                cx.warning(line, format!("no id given for {}", name));
            }
            if key.len() > 3 {
                cx.warning(
                    line,
                    format!("excess tags ignored in {}. should be only 2 _", name),
                );
            }
        }
        Some("attach") => {
            if key.len() > 2 {
                cx.warning(
                    line,
                    format!("excess tags ignored in {}. should be only 1 _", name),
                );
            }
        }
        _ => cx.warning(line, format!("{} not a known node type", name)),
    }

    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() < NODE_MIN_VALUES {
        cx.error(
            line,
            "need at least 6 comma-separated floats for a valid node",
        );
        return;
    }
    for (i, part) in parts.iter().take(NODE_MIN_VALUES).enumerate() {
        if parse_float(part).is_none() {
            cx.error(line, format!("{}[{}] not a valid float", name, i));
        }
    }
    if parts.len() > NODE_MAX_VALUES {
        cx.warning(
            line,
            format!("excess items in {} ignored (up to 12 values)", name),
        );
    }
    for (i, part) in parts
        .iter()
        .enumerate()
        .take(NODE_MAX_VALUES)
        .skip(NODE_MIN_VALUES)
    {
        if parse_int(part).is_none() {
            cx.error(line, format!("{}[{}] not a valid int", name, i));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{Diagnostic, Severity};
    use crate::tree::ConfigNode;

    fn run_with(validator: FieldValidator, name: &str, value: &str, resources: &ResourceTable) -> Vec<Diagnostic> {
        let mut sink = DiagnosticSink::new();
        let mut cx = FieldContext::new(Path::new("test.cfg"), &mut sink, resources);
        validator.check(name, value, 7, &mut cx);
        sink.into_vec()
    }

    fn run(validator: FieldValidator, name: &str, value: &str) -> Vec<Diagnostic> {
        run_with(validator, name, value, &ResourceTable::new())
    }

    fn messages(diags: &[Diagnostic]) -> Vec<(Severity, &str)> {
        diags.iter().map(|d| (d.severity, d.message.as_str())).collect()
    }

    #[test]
    fn test_positive_nonzero_float() {
        assert!(run(FieldValidator::PositiveNonzeroFloat, "mass", "0.125").is_empty());
        assert_eq!(
            messages(&run(FieldValidator::PositiveNonzeroFloat, "mass", "0")),
            vec![(Severity::Warning, "mass should be > 0")]
        );
        assert_eq!(
            messages(&run(FieldValidator::PositiveNonzeroFloat, "mass", "heavy")),
            vec![(Severity::Error, "mass not a valid float")]
        );
    }

    #[test]
    fn test_positive_float_allows_zero() {
        assert!(run(FieldValidator::PositiveFloat, "cost", "0").is_empty());
        assert_eq!(
            messages(&run(FieldValidator::PositiveFloat, "cost", "-1.5")),
            vec![(Severity::Warning, "cost should be >= 0")]
        );
    }

    #[test]
    fn test_positive_int() {
        assert!(run(FieldValidator::PositiveInt, "entryCost", "4200").is_empty());
        assert_eq!(
            messages(&run(FieldValidator::PositiveInt, "entryCost", "-3")),
            vec![(Severity::Warning, "entryCost should be >= 0")]
        );
        assert_eq!(
            messages(&run(FieldValidator::PositiveInt, "entryCost", "4.5")),
            vec![(Severity::Error, "entryCost not a valid int")]
        );
    }

    #[test]
    fn test_boolean_is_case_insensitive() {
        assert!(run(FieldValidator::Boolean, "fuelCrossFeed", "True").is_empty());
        assert!(run(FieldValidator::Boolean, "fuelCrossFeed", "false").is_empty());
        assert_eq!(
            messages(&run(FieldValidator::Boolean, "fuelCrossFeed", "yes")),
            vec![(Severity::Error, "fuelCrossFeed not a valid bool")]
        );
    }

    #[test]
    fn test_vector3() {
        assert!(run(FieldValidator::Vector3, "CoMOffset", "1,2,3").is_empty());
        assert_eq!(
            messages(&run(FieldValidator::Vector3, "CoMOffset", "1,2")),
            vec![(Severity::Error, "CoMOffset must be a vector: 3 comma-separated floats")]
        );
        assert_eq!(
            messages(&run(FieldValidator::Vector3, "CoMOffset", "1,x,3")),
            vec![(Severity::Error, "CoMOffset[1] not a valid float")]
        );
    }

    #[test]
    fn test_quaternion_needs_four() {
        assert!(run(FieldValidator::Quaternion, "initRotation", "0, 0, 0, 1").is_empty());
        let diags = run(FieldValidator::Quaternion, "initRotation", "0,0,1");
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("4 comma-separated floats"));
    }

    #[test]
    fn test_color() {
        assert!(run(FieldValidator::Color, "color", "#ff00ff").is_empty());
        assert!(run(FieldValidator::Color, "color", "0.2,1,0").is_empty());
        assert_eq!(
            messages(&run(FieldValidator::Color, "color", "#zz0000")),
            vec![(Severity::Error, "color must be # followed by 6 hex digits")]
        );
        assert_eq!(
            messages(&run(FieldValidator::Color, "color", "#fff")),
            vec![(Severity::Error, "color must be # followed by 6 hex digits")]
        );
        assert_eq!(
            messages(&run(FieldValidator::Color, "color", "1.0,0.5,2.0")),
            vec![(Severity::Error, "color[2] should be in the range 0 to 1")]
        );
    }

    #[test]
    fn test_enum_case_sensitivity() {
        const AB: &[&str] = &["A", "B"];
        let strict = FieldValidator::Enum(EnumRule::new(AB));
        let loose = FieldValidator::Enum(EnumRule::new(AB).case_insensitive());

        assert_eq!(
            messages(&run(strict, "kind", "a")),
            vec![(Severity::Error, "a not valid for kind")]
        );
        assert!(run(loose, "kind", "a").is_empty());
        assert!(run(strict, "kind", "B").is_empty());
    }

    #[test]
    fn test_attach_rules() {
        assert!(run(FieldValidator::AttachRules, "attachRules", "1,0,1,1,0").is_empty());
        assert_eq!(
            messages(&run(FieldValidator::AttachRules, "attachRules", "1,0,1")),
            vec![(Severity::Error, "attachRules must have at least 5 comma-separated 0 or 1 values")]
        );
        assert_eq!(
            messages(&run(FieldValidator::AttachRules, "attachRules", "1,0,1,1,0,0,0,0,2")),
            vec![(Severity::Warning, "only 8 values are significant for attachRules")]
        );
        assert_eq!(
            messages(&run(FieldValidator::AttachRules, "attachRules", "1,0,2,1,0")),
            vec![(
                Severity::Warning,
                "attachRules[2]: 2 not a valid flag (anything but 1 is treated as 0)"
            )]
        );
    }

    #[test]
    fn test_node_geometry() {
        assert!(run(FieldValidator::NodeReference, "node_stack_top", "0,0,1,0,0,1").is_empty());
        assert!(run(FieldValidator::NodeReference, "node_attach", "0,0,1,0,0,1,2").is_empty());
        assert_eq!(
            messages(&run(FieldValidator::NodeReference, "node_stack_top", "0,0,1,0")),
            vec![(Severity::Error, "need at least 6 comma-separated floats for a valid node")]
        );
    }

    #[test]
    fn test_node_key_shape() {
        assert_eq!(
            messages(&run(FieldValidator::NodeReference, "node_stack", "0,0,1,0,0,1")),
            vec![(Severity::Warning, "no id given for node_stack")]
        );
        assert_eq!(
            messages(&run(FieldValidator::NodeReference, "node_dock_a_b", "0,0,1,0,0,1")),
            vec![(Severity::Warning, "excess tags ignored in node_dock_a_b. should be only 2 _")]
        );
        assert_eq!(
            messages(&run(FieldValidator::NodeReference, "node_attach_x", "0,0,1,0,0,1")),
            vec![(Severity::Warning, "excess tags ignored in node_attach_x. should be only 1 _")]
        );
        assert_eq!(
            messages(&run(FieldValidator::NodeReference, "node_hinge_a", "0,0,1,0,0,1")),
            vec![(Severity::Warning, "node_hinge_a not a known node type")]
        );
    }

    #[test]
    fn test_node_extra_values() {
        assert_eq!(
            messages(&run(FieldValidator::NodeReference, "node_stack_top", "0,0,q,0,0,1,1.5")),
            vec![
                (Severity::Error, "node_stack_top[2] not a valid float"),
                (Severity::Error, "node_stack_top[6] not a valid int"),
            ]
        );
        assert_eq!(
            messages(&run(
                FieldValidator::NodeReference,
                "node_stack_top",
                "0,0,1,0,0,1,1,0,0,0,0,0,9"
            )),
            vec![(Severity::Warning, "excess items in node_stack_top ignored (up to 12 values)")]
        );
    }

    #[test]
    fn test_resource_name_lookup() {
        let mut table = ResourceTable::new();
        table.insert(
            "LiquidFuel",
            ConfigNode::new("RESOURCE_DEFINITION").with_value("name", "LiquidFuel", 2),
        );
        assert!(run_with(FieldValidator::ResourceName, "name", "LiquidFuel", &table).is_empty());
        assert_eq!(
            messages(&run_with(FieldValidator::ResourceName, "name", "Kethane", &table)),
            vec![(Severity::Error, "'Kethane' not a known resource")]
        );
    }

    #[test]
    fn test_physics_significance() {
        assert_eq!(
            messages(&run(FieldValidator::PhysicsSignificance, "PhysicsSignificance", "1")),
            vec![(
                Severity::Warning,
                "use of PhysicsSignificance is discouraged. use physicalSignificance instead"
            )]
        );
        let diags = run(FieldValidator::PhysicsSignificance, "PhysicsSignificance", "NONE");
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[1].severity, Severity::Error);
    }

    #[test]
    fn test_ignored_and_discouraged() {
        assert_eq!(
            messages(&run(FieldValidator::Ignored, "subcategory", "0")),
            vec![(Severity::Warning, "subcategory is ignored")]
        );
        assert_eq!(
            messages(&run(FieldValidator::Discouraged("use MODEL {} instead"), "mesh", "x.mu")),
            vec![(Severity::Warning, "use MODEL {} instead")]
        );
    }

    #[test]
    fn test_diagnostics_carry_line_and_path() {
        let diags = run(FieldValidator::Boolean, "TechHidden", "maybe");
        assert_eq!(diags[0].line, 7);
        assert_eq!(diags[0].path, Path::new("test.cfg"));
    }
}
