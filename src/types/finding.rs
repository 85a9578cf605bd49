use serde::Serialize;

/// SARIF result level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Error,
    Warning,
    Note,
}

impl Level {
    /// Exact, case-sensitive match on the upstream severity label.
    /// Anything unrecognised, including lower-case labels, is a warning.
    pub fn from_severity(raw: &str) -> Self {
        match raw {
            "ERROR" => Level::Error,
            "WARNING" => Level::Warning,
            "NOTICE" => Level::Note,
            _ => Level::Warning,
        }
    }
}

/// One issue reported by an upstream tool, normalised across input formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub tool: String,
    pub rule_id: String,
    pub file: String,
    /// Already clamped to >= 1.
    pub line: u64,
    pub severity: String,
    pub message: String,
}

impl Finding {
    pub fn new(
        tool: impl Into<String>,
        rule_id: impl Into<String>,
        file: impl Into<String>,
        line: u64,
        severity: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            tool: tool.into(),
            rule_id: rule_id.into(),
            file: file.into(),
            line: line.max(1),
            severity: severity.into(),
            message: message.into(),
        }
    }

    /// `tool/rule` as emitted in `ruleId`.
    pub fn qualified_rule_id(&self) -> String {
        format!("{}/{}", self.tool, self.rule_id)
    }

    pub fn level(&self) -> Level {
        Level::from_severity(&self.severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_labels_map_exactly() {
        assert_eq!(Level::from_severity("ERROR"), Level::Error);
        assert_eq!(Level::from_severity("WARNING"), Level::Warning);
        assert_eq!(Level::from_severity("NOTICE"), Level::Note);
    }

    #[test]
    fn unknown_or_lowercase_severity_is_warning() {
        assert_eq!(Level::from_severity("error"), Level::Warning);
        assert_eq!(Level::from_severity("Notice"), Level::Warning);
        assert_eq!(Level::from_severity("INFO"), Level::Warning);
        assert_eq!(Level::from_severity(""), Level::Warning);
    }

    #[test]
    fn level_serializes_lowercase() {
        let rendered = serde_json::to_string(&Level::Note).expect("level should serialize");
        assert_eq!(rendered, "\"note\"");
    }

    #[test]
    fn finding_builds_qualified_rule_and_clamps_line() {
        let finding = Finding::new("phpcs", "PSR2.x", "a.php", 0, "ERROR", "bad indent");
        assert_eq!(finding.qualified_rule_id(), "phpcs/PSR2.x");
        assert_eq!(finding.line, 1);
        assert_eq!(finding.level(), Level::Error);
    }
}
