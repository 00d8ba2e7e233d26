use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

const DEFAULT_INDENT_UNIT: f32 = 15.0;
const DEFAULT_ROW_HEIGHT: f32 = 24.0;
const DEFAULT_ICON_SIZE: f32 = 14.0;

/// Presentation settings for source tree rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeItemSettings {
    /// Horizontal indentation per depth level.
    pub indent_unit: f32,
    pub row_height: f32,
    pub icon_size: f32,
    pub menu: MenuStrings,
}

impl Default for TreeItemSettings {
    fn default() -> Self {
        Self {
            indent_unit: DEFAULT_INDENT_UNIT,
            row_height: DEFAULT_ROW_HEIGHT,
            icon_size: DEFAULT_ICON_SIZE,
            menu: MenuStrings::default(),
        }
    }
}

impl TreeItemSettings {
    pub fn with_indent_unit(mut self, unit: f32) -> Self {
        self.indent_unit = unit.max(0.0);
        self
    }

    pub fn with_row_height(mut self, height: f32) -> Self {
        self.row_height = height.max(0.0);
        self
    }

    pub fn with_icon_size(mut self, size: f32) -> Self {
        self.icon_size = size.max(0.0);
        self
    }

    pub fn with_menu(mut self, menu: MenuStrings) -> Self {
        self.menu = menu;
        self
    }

    /// Parse settings from JSON. Missing fields keep their defaults.
    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load settings from a JSON file, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!(
                    "no tree item settings at {}, using defaults",
                    path.display()
                );
                return Ok(Self::default());
            },
            Err(err) => return Err(err.into()),
        };
        Self::from_json_str(&content)
    }
}

/// Label and access key of a single context-menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuString {
    pub label: String,
    #[serde(default)]
    pub accesskey: Option<char>,
}

impl MenuString {
    fn new(label: &str, accesskey: Option<char>) -> Self {
        Self {
            label: label.to_string(),
            accesskey,
        }
    }
}

/// User-visible strings for the tree item context menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuStrings {
    pub set_directory_root: MenuString,
    pub remove_directory_root: MenuString,
    pub copy_source_uri: MenuString,
}

impl Default for MenuStrings {
    fn default() -> Self {
        Self {
            set_directory_root: MenuString::new("Set directory root", Some('r')),
            remove_directory_root: MenuString::new(
                "Remove directory root",
                None,
            ),
            copy_source_uri: MenuString::new("Copy source URI", Some('u')),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourcesTreeError;

    #[test]
    fn given_defaults_then_menu_strings_match_builtin_labels() {
        let settings = TreeItemSettings::default();

        assert_eq!(settings.menu.set_directory_root.label, "Set directory root");
        assert_eq!(settings.menu.set_directory_root.accesskey, Some('r'));
        assert_eq!(settings.menu.remove_directory_root.accesskey, None);
        assert_eq!(settings.menu.copy_source_uri.accesskey, Some('u'));
        assert_eq!(settings.indent_unit, DEFAULT_INDENT_UNIT);
    }

    #[test]
    fn given_partial_json_when_parsed_then_other_fields_keep_defaults() {
        let settings = TreeItemSettings::from_json_str(
            r#"{ "indent_unit": 8.0,
                 "menu": { "copy_source_uri": { "label": "Copy URL" } } }"#,
        )
        .expect("valid settings");

        assert_eq!(settings.indent_unit, 8.0);
        assert_eq!(settings.row_height, DEFAULT_ROW_HEIGHT);
        assert_eq!(settings.menu.copy_source_uri.label, "Copy URL");
        assert_eq!(settings.menu.copy_source_uri.accesskey, None);
        assert_eq!(
            settings.menu.set_directory_root,
            MenuStrings::default().set_directory_root
        );
    }

    #[test]
    fn given_malformed_json_when_parsed_then_settings_error_is_returned() {
        let err = TreeItemSettings::from_json_str("{ indent_unit: ")
            .expect_err("malformed input");

        assert!(matches!(err, SourcesTreeError::Settings(_)));
    }

    #[test]
    fn given_missing_file_when_loaded_then_defaults_are_returned() {
        let path = std::env::temp_dir()
            .join("spyglass-ui-sources-missing")
            .join("settings.json");

        let settings = TreeItemSettings::load(&path).expect("defaults");

        assert_eq!(settings, TreeItemSettings::default());
    }

    #[test]
    fn given_negative_sizes_when_building_then_values_are_clamped() {
        let settings = TreeItemSettings::default()
            .with_indent_unit(-4.0)
            .with_row_height(-2.0)
            .with_icon_size(-1.0);

        assert_eq!(settings.indent_unit, 0.0);
        assert_eq!(settings.row_height, 0.0);
        assert_eq!(settings.icon_size, 0.0);
    }
}
