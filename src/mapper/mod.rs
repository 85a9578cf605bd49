//! Per-section extraction of findings from the aggregated input document.
//!
//! Section order is fixed: phpcs, phpcompat, semgrep, then the custom checkers
//! in `CUSTOM_SECTIONS` order. Within a section, input order is kept.

pub mod custom;
pub mod php;
pub mod semgrep;

use crate::types::finding::Finding;
use serde_json::Value;

pub use custom::map_custom;
pub use php::{map_phpcompat, map_phpcs};
pub use semgrep::map_semgrep;

pub const PHPCS: &str = "phpcs";
pub const PHPCOMPAT: &str = "phpcompat";
pub const SEMGREP: &str = "semgrep";
pub const CUSTOM_SECTIONS: [&str; 2] = ["readme_i18n", "a11y_static"];

pub const DEFAULT_RULE: &str = "rule";

pub fn map_all(doc: &Value) -> Vec<Finding> {
    let mut findings = map_phpcs(doc);
    findings.extend(map_phpcompat(doc));
    findings.extend(map_semgrep(doc));
    for section in CUSTOM_SECTIONS {
        findings.extend(map_custom(doc, section));
    }
    tracing::debug!(total = findings.len(), "mapped all sections");
    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_document_yields_no_findings() {
        assert!(map_all(&json!({})).is_empty());
    }

    #[test]
    fn sections_are_concatenated_in_fixed_order() {
        let doc = json!({
            "a11y_static": {"results": [{"rule": "alt", "file": "i.html"}]},
            "semgrep": {"results": [{"check_id": "s1", "path": "x.py"}]},
            "readme_i18n": {"results": [{"rule": "lang", "file": "README.md"}]},
            "phpcompat": {"files": {"c.php": {"messages": [{"source": "C"}]}}},
            "phpcs": {"files": {"p.php": {"messages": [{"source": "P"}]}}}
        });

        let rule_ids: Vec<String> = map_all(&doc)
            .iter()
            .map(Finding::qualified_rule_id)
            .collect();
        assert_eq!(
            rule_ids,
            vec![
                "phpcs/P",
                "phpcompat/C",
                "semgrep/s1",
                "readme_i18n/lang",
                "a11y_static/alt"
            ]
        );
    }
}
