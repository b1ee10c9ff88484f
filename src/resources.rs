//! Resource Table
//!
//! Resource name -> defining `RESOURCE_DEFINITION` block, collected from a
//! game data tree before any linting starts and read-only afterwards. An
//! empty table is valid: every lookup then misses and every cost is 0.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::{LintError, Result};
use crate::schema::BlockKind;
use crate::tree::{self, ConfigNode};
use crate::validators::parse_float;

#[derive(Debug, Clone, Default)]
pub struct ResourceTable {
    definitions: HashMap<String, ConfigNode>,
}

impl ResourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a definition
    pub fn insert(&mut self, name: impl Into<String>, definition: ConfigNode) {
        self.definitions.insert(name.into(), definition);
    }

    pub fn get(&self, name: &str) -> Option<&ConfigNode> {
        self.definitions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Resource names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.definitions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// `unitCost` of `name`, or 0 when the resource is unknown or its cost
    /// is missing or not a number
    pub fn unit_cost(&self, name: &str) -> f64 {
        self.get(name)
            .and_then(|def| def.get_value("unitCost"))
            .and_then(parse_float)
            .unwrap_or(0.0)
    }

    /// Collect the top-level `RESOURCE_DEFINITION` blocks of a parsed document.
    /// Returns how many were added.
    pub fn collect(&mut self, document: &ConfigNode) -> usize {
        let mut added = 0;
        for child in document.get_nodes(BlockKind::ResourceDefinition.as_str()) {
            match child.node.get_value("name") {
                Some(name) => {
                    self.insert(name, child.node.clone());
                    added += 1;
                }
                None => debug!(line = child.line, "RESOURCE_DEFINITION without a name skipped"),
            }
        }
        added
    }

    /// Load definitions from one file. Unreadable or unparseable files are
    /// skipped and count as zero definitions.
    pub fn load_file(&mut self, path: &Path) -> usize {
        match tree::load_file(path) {
            Ok(document) => self.collect(&document),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping resource file");
                0
            }
        }
    }

    /// Recursively load every `*.{extension}` file under `root`.
    ///
    /// Entries are visited in file-name order. Anything whose name starts
    /// with `.` or `_` is skipped, directories included.
    pub fn load_directory(&mut self, root: &Path, extension: &str) -> Result<usize> {
        if !root.exists() {
            return Err(LintError::MissingRoot {
                path: root.to_path_buf(),
            });
        }

        let mut added = 0;
        for entry in walk_config_files(root, extension) {
            match entry {
                Ok(path) => added += self.load_file(&path),
                Err(e) => warn!(error = %e, "error walking resource tree"),
            }
        }
        info!(root = %root.display(), added, total = self.len(), "loaded resource definitions");
        Ok(added)
    }
}

/// Config files under `root` in sorted order, skipping hidden and
/// underscore-prefixed entries
pub(crate) fn walk_config_files<'a>(
    root: &Path,
    extension: &'a str,
) -> impl Iterator<Item = std::result::Result<std::path::PathBuf, walkdir::Error>> + 'a {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped(e))
        .filter_map(move |entry| match entry {
            Ok(e) if e.file_type().is_file() && has_extension(e.path(), extension) => {
                Some(Ok(e.into_path()))
            }
            Ok(_) => None,
            Err(e) => Some(Err(e)),
        })
}

fn is_skipped(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.') || name.starts_with('_'))
        .unwrap_or(false)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}
