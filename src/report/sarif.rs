//! SARIF 2.1.0 envelope for converted findings.

use crate::types::finding::{Finding, Level};
use serde::Serialize;
use serde_json::Value;

pub const SARIF_VERSION: &str = "2.1.0";
pub const SARIF_SCHEMA: &str =
    "https://schemastore.azurewebsites.net/schemas/json/sarif-2.1.0-rtm.5.json";
pub const DRIVER_NAME: &str = "phantom";

#[derive(Debug, Serialize)]
pub struct SarifLog {
    pub version: &'static str,
    #[serde(rename = "$schema")]
    pub schema: &'static str,
    pub runs: Vec<SarifRun>,
}

#[derive(Debug, Serialize)]
pub struct SarifRun {
    pub tool: SarifTool,
    pub results: Vec<SarifResult>,
}

#[derive(Debug, Serialize)]
pub struct SarifTool {
    pub driver: SarifDriver,
}

#[derive(Debug, Serialize)]
pub struct SarifDriver {
    pub name: &'static str,
    /// Never populated; results reference rules by id only.
    pub rules: Vec<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifResult {
    pub rule_id: String,
    pub level: Level,
    pub message: SarifMessage,
    pub locations: Vec<SarifLocation>,
}

#[derive(Debug, Serialize)]
pub struct SarifMessage {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifLocation {
    pub physical_location: SarifPhysicalLocation,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifPhysicalLocation {
    pub artifact_location: SarifArtifactLocation,
    pub region: SarifRegion,
}

#[derive(Debug, Serialize)]
pub struct SarifArtifactLocation {
    pub uri: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifRegion {
    pub start_line: u64,
}

impl From<&Finding> for SarifResult {
    fn from(finding: &Finding) -> Self {
        SarifResult {
            rule_id: finding.qualified_rule_id(),
            level: finding.level(),
            message: SarifMessage {
                text: finding.message.clone(),
            },
            locations: vec![SarifLocation {
                physical_location: SarifPhysicalLocation {
                    artifact_location: SarifArtifactLocation {
                        uri: finding.file.clone(),
                    },
                    region: SarifRegion {
                        start_line: finding.line,
                    },
                },
            }],
        }
    }
}

pub fn build_sarif(findings: &[Finding]) -> SarifLog {
    SarifLog {
        version: SARIF_VERSION,
        schema: SARIF_SCHEMA,
        runs: vec![SarifRun {
            tool: SarifTool {
                driver: SarifDriver {
                    name: DRIVER_NAME,
                    rules: Vec::new(),
                },
            },
            results: findings.iter().map(SarifResult::from).collect(),
        }],
    }
}

/// Single-line JSON, no indentation.
pub fn to_sarif(log: &SarifLog) -> Result<String, serde_json::Error> {
    serde_json::to_string(log)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_log_has_fixed_envelope() {
        let rendered = to_sarif(&build_sarif(&[])).expect("sarif should serialize");
        assert_eq!(
            rendered,
            concat!(
                r#"{"version":"2.1.0","#,
                r#""$schema":"https://schemastore.azurewebsites.net/schemas/json/sarif-2.1.0-rtm.5.json","#,
                r#""runs":[{"tool":{"driver":{"name":"phantom","rules":[]}},"results":[]}]}"#
            )
        );
    }

    #[test]
    fn result_carries_rule_level_message_and_location() {
        let finding = Finding::new("phpcs", "PSR2.x", "a.php", 10, "ERROR", "bad indent");
        let value = serde_json::to_value(build_sarif(&[finding])).expect("sarif should convert");

        let result = &value["runs"][0]["results"][0];
        assert_eq!(result["ruleId"], "phpcs/PSR2.x");
        assert_eq!(result["level"], "error");
        assert_eq!(result["message"]["text"], "bad indent");
        let location = &result["locations"][0]["physicalLocation"];
        assert_eq!(location["artifactLocation"]["uri"], "a.php");
        assert_eq!(location["region"]["startLine"], 10);
    }

    #[test]
    fn result_keys_keep_sarif_order() {
        let finding = Finding::new("semgrep", "r1", "b.py", 1, "WARNING", "m");
        let rendered = to_sarif(&build_sarif(&[finding])).expect("sarif should serialize");
        assert!(rendered.contains(
            r#"{"ruleId":"semgrep/r1","level":"warning","message":{"text":"m"},"locations":[{"physicalLocation":{"artifactLocation":{"uri":"b.py"},"region":{"startLine":1}}}]}"#
        ));
        assert!(!rendered.contains('\n'));
    }

    #[test]
    fn results_preserve_finding_order() {
        let findings = vec![
            Finding::new("phpcs", "b", "1.php", 1, "NOTICE", ""),
            Finding::new("phpcs", "a", "2.php", 2, "NOTICE", ""),
        ];
        let log = build_sarif(&findings);
        let ids: Vec<_> = log.runs[0]
            .results
            .iter()
            .map(|result| result.rule_id.as_str())
            .collect();
        assert_eq!(ids, vec!["phpcs/b", "phpcs/a"]);
        assert_eq!(log.runs[0].results[0].level, Level::Note);
    }
}
