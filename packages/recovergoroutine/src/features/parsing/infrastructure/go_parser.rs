//! Tree-sitter based Go parser

use std::path::Path;

use tree_sitter::{Node as TSNode, Parser as TSParser};

use super::inspect::{inspect, Visit};
use crate::features::parsing::domain::SourceUnit;
use crate::features::parsing::ports::SourceParser;
use crate::shared::models::{RecoverError, Result};

/// Go parser backed by tree-sitter-go
#[derive(Debug, Clone, Copy, Default)]
pub struct GoParser;

impl GoParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse an in-memory file
    pub fn parse_str(&self, source: impl Into<String>, path: impl AsRef<Path>) -> Result<SourceUnit> {
        self.parse(source.into(), path.as_ref())
    }
}

impl SourceParser for GoParser {
    fn parse(&self, source: String, path: &Path) -> Result<SourceUnit> {
        let mut parser = TSParser::new();
        parser
            .set_language(&tree_sitter_go::language())
            .map_err(|e| RecoverError::Language(format!("Failed to set language: {}", e)))?;

        let tree = parser.parse(&source, None).ok_or_else(|| RecoverError::Parse {
            path: path.to_path_buf(),
            line: 0,
            column: 0,
            message: "Failed to parse source code".to_string(),
        })?;

        if let Some(bad) = first_syntax_error(tree.root_node()) {
            let position = bad.start_position();
            let message = if bad.is_missing() {
                format!("missing {}", bad.kind())
            } else {
                let text = source.get(bad.byte_range()).unwrap_or("");
                format!("unexpected `{}`", text.lines().next().unwrap_or("").trim())
            };
            return Err(RecoverError::Parse {
                path: path.to_path_buf(),
                line: position.row as u32 + 1,
                column: position.column as u32 + 1,
                message,
            });
        }

        Ok(SourceUnit::new(path, source, tree))
    }

    fn supports_extension(&self, ext: &str) -> bool {
        ext == "go"
    }

    fn language_name(&self) -> &'static str {
        "go"
    }
}

/// First ERROR or MISSING node in source order
fn first_syntax_error(root: TSNode<'_>) -> Option<TSNode<'_>> {
    if !root.has_error() {
        return None;
    }

    let mut found = None;
    let mut cursor = root.walk();
    // MISSING nodes may be anonymous tokens the inspector never visits
    inspect(root, |node| {
        if node.is_error() || node.is_missing() {
            found = Some(node);
            return Visit::Stop;
        }
        if let Some(missing) = node
            .children(&mut cursor)
            .find(|child| !child.is_named() && child.is_missing())
        {
            found = Some(missing);
            return Visit::Stop;
        }
        if node.has_error() {
            Visit::Descend
        } else {
            Visit::Skip
        }
    });
    found
}
