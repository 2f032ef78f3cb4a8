//! Settings definitions
//! Declarative registry of all selection options

use crate::error::Result;
use crate::movement::WordMotion;
use crate::settings::descriptor::{SettingDescriptor, SettingError, SettingType, SettingValue};
use crate::settings::registry::SettingsRegistry;
use crate::snap::ClickSnap;

/// Behaviour switches for an edit field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionOptions {
    /// Token rules for word-by-word motion
    pub word_motion: WordMotion,
    /// Rounding of clicks that land inside a character
    pub click_snap: ClickSnap,
    /// Whether dragging after a click extends a selection
    pub drag_select: bool,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        SelectionOptions {
            word_motion: WordMotion::Segmented,
            click_snap: ClickSnap::Nearest,
            drag_select: true,
        }
    }
}

fn set_word_motion(options: &mut SelectionOptions, value: SettingValue) -> std::result::Result<(), SettingError> {
    match value {
        SettingValue::Enum(s) => {
            options.word_motion = match s.as_str() {
                "segmented" => WordMotion::Segmented,
                "classrun" => WordMotion::ClassRun,
                _ => {
                    return Err(SettingError::ValidationError(format!(
                        "Unknown word motion: {s}"
                    )))
                }
            };
            Ok(())
        }
        _ => Err(SettingError::ValidationError("Expected enum".to_string())),
    }
}

fn set_click_snap(options: &mut SelectionOptions, value: SettingValue) -> std::result::Result<(), SettingError> {
    match value {
        SettingValue::Enum(s) => {
            options.click_snap = match s.as_str() {
                "nearest" => ClickSnap::Nearest,
                "leading" => ClickSnap::Leading,
                _ => {
                    return Err(SettingError::ValidationError(format!(
                        "Unknown click snap: {s}"
                    )))
                }
            };
            Ok(())
        }
        _ => Err(SettingError::ValidationError("Expected enum".to_string())),
    }
}

fn set_drag_select(options: &mut SelectionOptions, value: SettingValue) -> std::result::Result<(), SettingError> {
    match value {
        SettingValue::Bool(b) => {
            options.drag_select = b;
            Ok(())
        }
        _ => Err(SettingError::ValidationError("Expected boolean".to_string())),
    }
}

const SELECTION_SETTINGS: &[SettingDescriptor<SelectionOptions>] = &[
    SettingDescriptor {
        name: "word_motion",
        aliases: &["wm"],
        ty: SettingType::Enum {
            variants: &["segmented", "classrun"],
        },
        set: set_word_motion,
    },
    SettingDescriptor {
        name: "click_snap",
        aliases: &["cs"],
        ty: SettingType::Enum {
            variants: &["nearest", "leading"],
        },
        set: set_click_snap,
    },
    SettingDescriptor {
        name: "drag_select",
        aliases: &["ds"],
        ty: SettingType::Boolean,
        set: set_drag_select,
    },
];

/// Create the settings registry for [`SelectionOptions`]
pub fn create_settings_registry() -> SettingsRegistry<SelectionOptions> {
    SettingsRegistry::new(SELECTION_SETTINGS)
}

impl SelectionOptions {
    /// Apply one option by name (aliases and unique prefixes accepted)
    pub fn set(&mut self, name: &str, value: &str) -> std::result::Result<(), SettingError> {
        create_settings_registry().execute_setting(name, value, self)
    }

    /// Build options from `name = value` lines
    ///
    /// Blank lines and lines starting with `#` are ignored. Unset options
    /// keep their defaults.
    pub fn from_assignments(text: &str) -> Result<Self> {
        let registry = create_settings_registry();
        let mut options = SelectionOptions::default();

        for (line_no, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((name, value)) = line.split_once('=') else {
                return Err(SettingError::ParseError(format!(
                    "line {}: expected `name = value`, got `{line}`",
                    line_no + 1
                ))
                .into());
            };
            registry.execute_setting(name, value, &mut options)?;
        }

        Ok(options)
    }
}
