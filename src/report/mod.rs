pub mod sarif;

use crate::error::ConvertError;
use crate::types::finding::Finding;

/// Printed verbatim when no input path is given.
pub const EMPTY_OUTPUT: &str = "{}";

pub fn render(findings: &[Finding]) -> Result<String, ConvertError> {
    sarif::to_sarif(&sarif::build_sarif(findings)).map_err(ConvertError::Serialize)
}
