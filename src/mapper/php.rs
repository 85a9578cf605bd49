use super::{DEFAULT_RULE, PHPCOMPAT, PHPCS};
use crate::input::{line_of, list_at, object_at, section, severity_or, text_or};
use crate::types::finding::Finding;
use serde_json::Value;

pub fn map_phpcs(doc: &Value) -> Vec<Finding> {
    map_file_messages(doc, PHPCS, PHPCS)
}

pub fn map_phpcompat(doc: &Value) -> Vec<Finding> {
    map_file_messages(doc, PHPCOMPAT, PHPCOMPAT)
}

/// Walks the PHP_CodeSniffer report shape shared by phpcs and PHPCompatibility:
/// `{"files": {"<path>": {"messages": [...]}}}`.
pub fn map_file_messages(doc: &Value, section_name: &str, tool: &str) -> Vec<Finding> {
    let Some(files) = section(doc, section_name).and_then(|s| object_at(s, "files")) else {
        tracing::debug!(section = section_name, "no files in section");
        return Vec::new();
    };

    let mut findings = Vec::new();
    for (file, record) in files {
        if !record.is_object() {
            tracing::warn!(section = section_name, file = %file, "file entry is not an object, skipping");
            continue;
        }
        let Some(messages) = list_at(record, "messages") else {
            continue;
        };
        for message in messages {
            if !message.is_object() {
                tracing::warn!(section = section_name, file = %file, "message is not an object, skipping");
                continue;
            }
            findings.push(Finding::new(
                tool,
                text_or(message, "source", DEFAULT_RULE),
                file.as_str(),
                line_of(message.get("line")),
                severity_or(message, "type", "WARNING"),
                text_or(message, "message", ""),
            ));
        }
    }
    tracing::debug!(section = section_name, count = findings.len(), "mapped section");
    findings
}
