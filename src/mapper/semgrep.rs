use super::{DEFAULT_RULE, SEMGREP};
use crate::input::{line_of, list_at, non_empty_text, object_at, section, text_or};
use crate::types::finding::Finding;
use serde_json::Value;

/// Semgrep results carry no error/warning/note tag, so every one is a warning.
const SEMGREP_SEVERITY: &str = "WARNING";

pub fn map_semgrep(doc: &Value) -> Vec<Finding> {
    let Some(results) = section(doc, SEMGREP).and_then(|s| list_at(s, "results")) else {
        tracing::debug!(section = SEMGREP, "no results in section");
        return Vec::new();
    };

    let mut findings = Vec::with_capacity(results.len());
    for result in results {
        if !result.is_object() {
            tracing::warn!(section = SEMGREP, "result is not an object, skipping");
            continue;
        }
        findings.push(map_result(result));
    }
    tracing::debug!(section = SEMGREP, count = findings.len(), "mapped section");
    findings
}

fn map_result(result: &Value) -> Finding {
    let path = non_empty_text(result, &["path"])
        .or_else(|| non_empty_text(result, &["extra", "metadata", "file"]))
        .unwrap_or_default();
    let line = object_at(result, "start").map_or(1, |start| line_of(start.get("line")));
    let message = non_empty_text(result, &["extra", "message"])
        .or_else(|| non_empty_text(result, &["extra", "metadata", "message"]))
        .unwrap_or_default();

    Finding::new(
        SEMGREP,
        text_or(result, "check_id", DEFAULT_RULE),
        path,
        line,
        SEMGREP_SEVERITY,
        message,
    )
}
