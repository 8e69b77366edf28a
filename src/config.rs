//! Converter options and the environment a conversion runs in.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::binding::BindingResolver;

/// Knobs the surrounding driver may turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterOptions {
    /// Convert annotations written on annotatable types. When off, they are
    /// dropped, which matches translators that predate type annotations.
    pub type_annotations: bool,
    /// Keep comments that are not attached to a declaration on the unit.
    pub free_floating_comments: bool,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            type_annotations: true,
            free_floating_comments: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid YAML options: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON options: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConverterOptions {
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Resolver and options for one conversion.
///
/// The environment only borrows the resolver; independent units may share a
/// resolver as long as it tolerates the caller's threading.
#[derive(Clone, Copy)]
pub struct Environment<'r> {
    pub resolver: &'r dyn BindingResolver,
    pub options: ConverterOptions,
}

impl<'r> Environment<'r> {
    pub fn new(resolver: &'r dyn BindingResolver) -> Self {
        Self {
            resolver,
            options: ConverterOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ConverterOptions) -> Self {
        self.options = options;
        self
    }
}

impl fmt::Debug for Environment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_everything() {
        let options = ConverterOptions::default();
        assert!(options.type_annotations);
        assert!(options.free_floating_comments);
    }

    #[test]
    fn yaml_overrides_only_named_fields() {
        let options = ConverterOptions::from_yaml_str("type_annotations: false\n").unwrap();
        assert!(!options.type_annotations);
        assert!(options.free_floating_comments);
    }

    #[test]
    fn json_loads_and_rejects_garbage() {
        let options =
            ConverterOptions::from_json_str(r#"{"free_floating_comments": false}"#).unwrap();
        assert!(options.type_annotations);
        assert!(!options.free_floating_comments);
        assert!(matches!(
            ConverterOptions::from_json_str("{"),
            Err(ConfigError::Json(_))
        ));
    }
}
