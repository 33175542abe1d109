// Copyright (c) 2025 - Cowboy AI, Inc.
//! Manifest Projection
//!
//! Renders a resource back into manifest-language source:
//!
//! ```text
//! file { '/etc/motd':
//!     ensure => 'present',
//!     groups => ['adm','wheel']
//! }
//! ```
//!
//! The output is for humans and diffs. Every scalar is single-quoted after
//! string conversion, lists become `['a','b']`, and parameters appear in
//! insertion order.

use serde::{Deserialize, Serialize};

use crate::domain::{Resource, Value};

/// Formatting options for manifest rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// Spaces before each parameter line
    #[serde(default = "default_indent")]
    pub indent: usize,
}

fn default_indent() -> usize {
    4
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
        }
    }
}

impl Resource {
    /// Render the resource as manifest source with default formatting
    pub fn to_manifest(&self) -> String {
        self.to_manifest_with(&ManifestConfig::default())
    }

    /// Render the resource as manifest source
    pub fn to_manifest_with(&self, config: &ManifestConfig) -> String {
        let indent = " ".repeat(config.indent);

        let body = self
            .iter()
            .map(|(key, value)| format!("{}{} => {}", indent, key, render_value(value)))
            .collect::<Vec<_>>()
            .join(",\n");

        format!(
            "{} {{ {}:\n{}\n}}",
            self.kind().to_lowercase(),
            quote(self.title()),
            body
        )
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::List(items) => {
            let items: Vec<String> = items.iter().map(|item| quote(&item.to_string())).collect();
            format!("[{}]", items.join(","))
        }
        other => quote(&other.to_string()),
    }
}

/// Single-quote a string, escaping backslashes and quotes
fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('\'');
    for c in text.chars() {
        if matches!(c, '\'' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}
