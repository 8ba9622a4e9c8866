//! Configuration for the purify pipeline.

use serde::{Deserialize, Serialize};

use crate::error::PurifyError;
use crate::sanitize::DEFAULT_STRIPPED_ATTRIBUTES;

/// Which part of the purified document is serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// Body content only, without the `<body>` wrapper (default)
    #[default]
    Body,
    /// `<!DOCTYPE html>` followed by the whole `<html>` element
    FullDocument,
}

/// Options controlling which passes run after whitelist filtering.
///
/// The whitelist filter always runs and its tables are not configurable.
/// The defaults reproduce [`purify_html`](super::purify_html) exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurifyOptions {
    /// Remove `<img>` elements whose `src` ends with `.svg` (default: false)
    pub remove_svg_images: bool,

    /// Attribute names removed from every element (default: empty)
    ///
    /// Only names that also pass the whitelist can still be present at this
    /// point, so this is mainly useful for `class`, `style` and `alt`.
    pub strip_attributes: Vec<String>,

    /// Prune content-empty elements under `<body>` (default: false)
    ///
    /// Runs last so that elements emptied by the other passes are pruned too.
    pub remove_empty_nodes: bool,

    /// Output serialization mode (default: [`OutputMode::Body`])
    pub output: OutputMode,
}

impl Default for PurifyOptions {
    fn default() -> Self {
        Self {
            remove_svg_images: false,
            strip_attributes: Vec::new(),
            remove_empty_nodes: false,
            output: OutputMode::Body,
        }
    }
}

impl PurifyOptions {
    /// Whitelist filtering only, body output
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every cleanup pass enabled, with the default attribute blacklist
    #[must_use]
    pub fn cleanup() -> Self {
        Self {
            remove_svg_images: true,
            strip_attributes: DEFAULT_STRIPPED_ATTRIBUTES
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
            remove_empty_nodes: true,
            output: OutputMode::Body,
        }
    }

    #[must_use]
    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    /// Parse options from JSON. Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`PurifyError::InvalidOptions`] if the JSON is malformed or a
    /// field has the wrong type.
    pub fn from_json_str(json: &str) -> Result<Self, PurifyError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_run_no_extra_passes() {
        let options = PurifyOptions::default();
        assert!(!options.remove_svg_images);
        assert!(!options.remove_empty_nodes);
        assert!(options.strip_attributes.is_empty());
        assert_eq!(options.output, OutputMode::Body);
        assert_eq!(options, PurifyOptions::new());
    }

    #[test]
    fn test_cleanup_preset() {
        let options = PurifyOptions::cleanup();
        assert!(options.remove_svg_images);
        assert!(options.remove_empty_nodes);
        assert!(options.strip_attributes.iter().any(|name| name == "style"));
    }

    #[test]
    fn test_partial_json_uses_defaults() -> Result<(), PurifyError> {
        let options = PurifyOptions::from_json_str(
            r#"{"remove_empty_nodes": true, "output": "full_document"}"#,
        )?;
        assert!(options.remove_empty_nodes);
        assert!(!options.remove_svg_images);
        assert_eq!(options.output, OutputMode::FullDocument);
        Ok(())
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let err = PurifyOptions::from_json_str(r#"{"remove_empty_nodes": "yes"}"#).unwrap_err();
        assert!(matches!(err, PurifyError::InvalidOptions(_)));
        assert!(err.to_string().starts_with("Invalid purify options"));
    }

    #[test]
    fn test_json_round_trip() -> Result<(), PurifyError> {
        let options = PurifyOptions::cleanup().with_output(OutputMode::FullDocument);
        let json = serde_json::to_string(&options)?;
        assert_eq!(PurifyOptions::from_json_str(&json)?, options);
        Ok(())
    }
}
