//! flkit project configuration
//!
//! Optional `.flkit.yaml` holding project defaults for the CLI. The nearest
//! file walking up from the working directory wins; command-line flags
//! override it.
//!
//! ```yaml
//! version: 1
//! generate:
//!   style: chained
//!   comments: false
//!   defaultSpacing: 12
//! convert:
//!   migrationStrategy: aggressive
//! validate:
//!   checkLevel: syntax
//! ```

use crate::convert::{ConversionOptions, MigrationStrategy};
use crate::error::{Error, Result};
use crate::generate::{ConfigStyle, GenerateConfig};
use crate::validate::CheckLevel;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file name
pub const CONFIG_FILE: &str = ".flkit.yaml";

/// Supported schema version
pub const CONFIG_VERSION: u32 = 1;

/// Root of `.flkit.yaml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfig {
    /// Schema version for migrations
    pub version: u32,

    #[serde(default)]
    pub generate: GenerateSection,

    #[serde(default)]
    pub convert: ConvertSection,

    #[serde(default)]
    pub validate: ValidateSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSection {
    /// Force `statements` or `chained` facets for every layout kind
    #[serde(default)]
    pub style: Option<ConfigStyle>,

    /// Emit section comments
    #[serde(default = "default_true")]
    pub comments: bool,

    /// Filler spacing between stack views
    #[serde(default = "default_spacing")]
    pub default_spacing: f64,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            generate: GenerateSection::default(),
            convert: ConvertSection::default(),
            validate: ValidateSection::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_spacing() -> f64 {
    8.0
}

impl Default for GenerateSection {
    fn default() -> Self {
        Self {
            style: None,
            comments: default_true(),
            default_spacing: default_spacing(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConvertSection {
    #[serde(default)]
    pub migration_strategy: MigrationStrategy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateSection {
    #[serde(default)]
    pub check_level: CheckLevel,
}

impl ToolConfig {
    /// Parse and version-check config text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: ToolConfig = serde_norway::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))?;

        if config.version != CONFIG_VERSION {
            return Err(Error::Config(format!(
                "Unsupported {} version: {}",
                CONFIG_FILE, config.version
            )));
        }

        Ok(config)
    }

    /// Load `.flkit.yaml` from a directory
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_file = dir.join(CONFIG_FILE);
        if !config_file.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_file).map_err(Error::Io)?;
        Self::from_yaml(&content).map(Some)
    }

    /// Nearest config walking up from `start_dir`
    pub fn find(start_dir: &Path) -> Result<Option<(PathBuf, Self)>> {
        let mut current = Some(start_dir);

        while let Some(dir) = current {
            if let Some(config) = Self::load_from_dir(dir)? {
                tracing::debug!(path = %dir.display(), "loaded {}", CONFIG_FILE);
                return Ok(Some((dir.join(CONFIG_FILE), config)));
            }
            current = dir.parent();
        }

        Ok(None)
    }

    pub fn generate_config(&self) -> GenerateConfig {
        GenerateConfig {
            comments: self.generate.comments,
            style: self.generate.style,
            default_spacing: self.generate.default_spacing,
        }
    }

    pub fn conversion_options(&self) -> ConversionOptions {
        ConversionOptions {
            migration_strategy: self.convert.migration_strategy,
        }
    }

    pub fn check_level(&self) -> CheckLevel {
        self.validate.check_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let config = ToolConfig::from_yaml(
            r#"
version: 1
generate:
  style: chained
  comments: false
  defaultSpacing: 12
convert:
  migrationStrategy: aggressive
validate:
  checkLevel: syntax
"#,
        )
        .unwrap();

        let generate = config.generate_config();
        assert_eq!(generate.style, Some(ConfigStyle::Chained));
        assert!(!generate.comments);
        assert_eq!(generate.default_spacing, 12.0);
        assert_eq!(
            config.conversion_options().migration_strategy,
            MigrationStrategy::Aggressive
        );
        assert_eq!(config.check_level(), CheckLevel::Syntax);
    }

    #[test]
    fn test_sections_default() {
        let config = ToolConfig::from_yaml("version: 1\n").unwrap();
        assert_eq!(config.generate, GenerateSection::default());
        assert!(config.generate_config().comments);
        assert_eq!(config.check_level(), CheckLevel::Full);
    }

    #[test]
    fn test_rejects_unknown_version() {
        let err = ToolConfig::from_yaml("version: 2\n").unwrap_err();
        assert!(err.to_string().contains("Unsupported .flkit.yaml version: 2"));
    }

    #[test]
    fn test_find_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "version: 1\nvalidate:\n  checkLevel: semantic\n")
            .unwrap();
        let nested = dir.path().join("App").join("Views");
        std::fs::create_dir_all(&nested).unwrap();

        let (path, config) = ToolConfig::find(&nested).unwrap().unwrap();
        assert_eq!(path, dir.path().join(CONFIG_FILE));
        assert_eq!(config.check_level(), CheckLevel::Semantic);
    }
}
