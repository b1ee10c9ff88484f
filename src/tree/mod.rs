//! Config Trees
//!
//! The hierarchical key/value document model used by the game's content
//! files: named blocks holding ordered `key = value` pairs and ordered child
//! blocks, every entry tagged with the 1-based line it came from.
//!
//! ```text
//! PART
//! {
//!     name = fuelTankSmall
//!     cost = 150
//!     RESOURCE
//!     {
//!         name = LiquidFuel
//!         amount = 45
//!         maxAmount = 45
//!     }
//! }
//! ```
//!
//! The linter only ever reads a tree; building one is the parser's job.

mod parser;

pub use parser::parse;

use std::fs;
use std::path::Path;

use crate::error::Result;

/// A single `key = value` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValue {
    pub name: String,
    pub value: String,
    /// 1-based source line
    pub line: usize,
}

/// A named child block and the line of its name
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigChild {
    pub name: String,
    pub node: ConfigNode,
    pub line: usize,
}

/// A block of values and child blocks, both kept in source order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigNode {
    name: String,
    values: Vec<ConfigValue>,
    nodes: Vec<ConfigChild>,
}

impl ConfigNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
            nodes: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All values in source order, duplicates included
    pub fn values(&self) -> &[ConfigValue] {
        &self.values
    }

    /// All child blocks in source order
    pub fn nodes(&self) -> &[ConfigChild] {
        &self.nodes
    }

    pub fn has_value(&self, name: &str) -> bool {
        self.values.iter().any(|v| v.name == name)
    }

    /// First value stored under `name`
    pub fn get_value(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.name == name)
            .map(|v| v.value.as_str())
    }

    /// First child block named `name`
    pub fn get_node(&self, name: &str) -> Option<&ConfigNode> {
        self.nodes.iter().find(|c| c.name == name).map(|c| &c.node)
    }

    /// Every child block named `name`, in source order
    pub fn get_nodes<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ConfigChild> + 'a {
        self.nodes.iter().filter(move |c| c.name == name)
    }

    pub fn add_value(&mut self, name: impl Into<String>, value: impl Into<String>, line: usize) {
        self.values.push(ConfigValue {
            name: name.into(),
            value: value.into(),
            line,
        });
    }

    pub fn add_node(&mut self, node: ConfigNode, line: usize) {
        self.nodes.push(ConfigChild {
            name: node.name.clone(),
            node,
            line,
        });
    }

    /// Builder form of [`add_value`](Self::add_value)
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>, line: usize) -> Self {
        self.add_value(name, value, line);
        self
    }

    /// Builder form of [`add_node`](Self::add_node)
    pub fn with_node(mut self, node: ConfigNode, line: usize) -> Self {
        self.add_node(node, line);
        self
    }
}

/// Read and parse a config file.
///
/// Bytes are decoded lossily; content files in the wild are not reliably UTF-8.
pub fn load_file(path: &Path) -> Result<ConfigNode> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(parse(&text)?)
}
