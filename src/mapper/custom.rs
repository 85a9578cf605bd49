use super::DEFAULT_RULE;
use crate::input::{line_of, list_at, section, severity_or, text_or};
use crate::types::finding::Finding;
use serde_json::Value;

/// Custom checkers (`readme_i18n`, `a11y_static`) share one flat result shape.
/// The section name doubles as the tool tag.
pub fn map_custom(doc: &Value, section_name: &str) -> Vec<Finding> {
    let Some(results) = section(doc, section_name).and_then(|s| list_at(s, "results")) else {
        tracing::debug!(section = section_name, "no results in section");
        return Vec::new();
    };

    let mut findings = Vec::with_capacity(results.len());
    for result in results {
        if !result.is_object() {
            tracing::warn!(section = section_name, "result is not an object, skipping");
            continue;
        }
        findings.push(Finding::new(
            section_name,
            text_or(result, "rule", DEFAULT_RULE),
            text_or(result, "file", ""),
            line_of(result.get("line")),
            severity_or(result, "severity", "NOTICE"),
            text_or(result, "message", ""),
        ));
    }
    tracing::debug!(section = section_name, count = findings.len(), "mapped section");
    findings
}
