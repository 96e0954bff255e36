use std::path::Path;

use serde::Deserialize;

use crate::intake::{SampleForm, SessionContext};
use crate::ConfigError;

/// A researcher's answers for one session, as written in a YAML file.
///
/// ```yaml
/// context:
///   country: Lebanon
///   publicIssues: "electricity cuts; port blast inquiry"
/// samples:
///   - mediaCategory: TV
///     mediaDate: 2025-02-10
///     transcriptAvailable: "No"
///     reachScore: 0.8
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponsesFile {
    #[serde(default)]
    pub context: SessionContext,
    #[serde(default)]
    pub samples: Vec<SampleForm>,
}

/// Load a responses file from disk.
///
/// Only YAML syntax and field types are checked here; the questionnaire
/// constraints are applied per sample at intake.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or parsed.
pub fn load_responses(path: &Path) -> Result<ResponsesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ResponsesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_responses(&content)
}

fn parse_responses(content: &str) -> Result<ResponsesFile, ConfigError> {
    serde_yaml::from_str(content).map_err(ConfigError::ResponsesFileParse)
}
