//! The session descriptor the host shell writes to stdin.

use crate::core::error::{Result, StatuslineError};
use serde::{Deserialize, Deserializer, Serialize};
use std::io::Read;

/// Decode JSON `null` the same way as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(deserialize_with = "null_as_default")]
    pub current_dir: String,
    /// May be absent, JSON `null`, empty, or the literal string `"null"`
    #[serde(default)]
    pub project_dir: Option<String>,
}

impl Workspace {
    /// Project directory with every "not set" form normalised to `""`
    pub fn project_dir(&self) -> &str {
        match self.project_dir.as_deref() {
            Some("null") | None => "",
            Some(dir) => dir,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputStyle {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusLineInput {
    #[serde(default, deserialize_with = "null_as_default")]
    pub session_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub transcript_path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cwd: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub model: ModelInfo,
    pub workspace: Workspace,
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub output_style: OutputStyle,
}

impl StatusLineInput {
    /// Read the whole stream and decode it
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut raw = String::new();
        reader
            .read_to_string(&mut raw)
            .map_err(StatuslineError::input_read)?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(StatuslineError::input_parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_INPUT: &str = r#"{
        "session_id": "test-session",
        "transcript_path": "/tmp/transcript",
        "cwd": "/tmp",
        "model": {"id": "model-1", "display_name": "Model One"},
        "workspace": {"current_dir": "/Users/test/project", "project_dir": "/Users/test"},
        "version": "1.0.0",
        "output_style": {"name": "default"}
    }"#;

    #[test]
    fn test_parse_full_input() {
        let input = StatusLineInput::parse(FULL_INPUT).unwrap();
        assert_eq!(input.session_id, "test-session");
        assert_eq!(input.model.display_name, "Model One");
        assert_eq!(input.workspace.current_dir, "/Users/test/project");
        assert_eq!(input.workspace.project_dir(), "/Users/test");
        assert_eq!(input.output_style.name, "default");
    }

    #[test]
    fn test_parse_minimal_input() {
        let input = StatusLineInput::parse(r#"{"workspace": {"current_dir": "/a"}}"#).unwrap();
        assert_eq!(input.workspace.current_dir, "/a");
        assert_eq!(input.workspace.project_dir(), "");
        assert_eq!(input.session_id, "");
    }

    #[test]
    fn test_project_dir_not_set_forms() {
        for raw in [
            r#"{"workspace": {"current_dir": "/a", "project_dir": null}}"#,
            r#"{"workspace": {"current_dir": "/a", "project_dir": "null"}}"#,
            r#"{"workspace": {"current_dir": "/a", "project_dir": ""}}"#,
        ] {
            let input = StatusLineInput::parse(raw).unwrap();
            assert_eq!(input.workspace.project_dir(), "");
        }
    }

    #[test]
    fn test_empty_input_is_parse_error() {
        let err = StatusLineInput::from_reader("".as_bytes()).unwrap_err();
        assert!(matches!(err, StatuslineError::InputParse { .. }));
        assert!(err.to_string().contains("Error parsing JSON"));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = StatusLineInput::parse("{invalid json}").unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_null_fields_decode_as_defaults() {
        for field in [
            "session_id",
            "transcript_path",
            "cwd",
            "model",
            "version",
            "output_style",
        ] {
            let raw = format!(r#"{{"workspace": {{"current_dir": "/a"}}, "{field}": null}}"#);
            let input = StatusLineInput::parse(&raw).unwrap();
            assert_eq!(input.workspace.current_dir, "/a", "field {field}");
        }
    }

    #[test]
    fn test_null_nested_fields_decode_as_defaults() {
        let input = StatusLineInput::parse(
            r#"{
                "workspace": {"current_dir": null, "project_dir": null},
                "model": {"id": null, "display_name": null},
                "output_style": {"name": null}
            }"#,
        )
        .unwrap();
        assert_eq!(input.workspace.current_dir, "");
        assert_eq!(input.model, ModelInfo::default());
        assert_eq!(input.output_style.name, "");
    }

    #[test]
    fn test_missing_workspace_is_parse_error() {
        assert!(StatusLineInput::parse(r#"{"session_id": "x"}"#).is_err());
    }
}
