//! Output formatter implementations.

use serde::Serialize;

use crate::path::{PathEntity, WalkEntry};
use crate::{Error, Result};

use super::{OutputFormatter, PathInfo};

/// Plain text, one record per line.
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format_entities(&self, entities: &[PathEntity]) -> Result<String> {
        Ok(entities
            .iter()
            .map(PathEntity::as_str)
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn format_walk(&self, entries: &[WalkEntry]) -> Result<String> {
        let mut lines = Vec::new();
        for entry in entries {
            lines.push(format!("{}:", entry.path()));
            for file in entry.files() {
                lines.push(format!("  {}", file.name()));
            }
        }
        Ok(lines.join("\n"))
    }

    fn format_info(&self, info: &PathInfo) -> Result<String> {
        let lines = [
            format!("path: {}", info.path),
            format!("name: {}", info.name),
            format!("suffix: {}", info.suffix),
            format!("suffixes: {}", info.suffixes.join(" ")),
            format!("stem: {}", info.stem),
            format!("exists: {}", info.exists),
            format!("is_dir: {}", info.is_dir),
            format!("is_file: {}", info.is_file),
        ];
        Ok(lines.join("\n"))
    }
}

/// Pretty-printed JSON.
pub struct JsonFormatter;

impl JsonFormatter {
    fn render<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        serde_json::to_string_pretty(value).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_entities(&self, entities: &[PathEntity]) -> Result<String> {
        Self::render(entities)
    }

    fn format_walk(&self, entries: &[WalkEntry]) -> Result<String> {
        Self::render(entries)
    }

    fn format_info(&self, info: &PathInfo) -> Result<String> {
        Self::render(info)
    }
}
