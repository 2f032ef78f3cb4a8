//! Settings registry
//! Registry that holds setting descriptors and applies values by name

use tracing::debug;

use super::descriptor::{SettingDescriptor, SettingError, SettingType, SettingValue};

/// Settings registry
///
/// Holds static setting descriptors and provides:
/// - Option name resolution (exact name, alias, unique prefix)
/// - Value parsing against the descriptor's type
/// - Setting execution
#[derive(Debug)]
pub struct SettingsRegistry<T: 'static> {
    /// Static array of setting descriptors
    settings: &'static [SettingDescriptor<T>],
}

impl<T: 'static> Clone for SettingsRegistry<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SettingsRegistry<T> {}

impl<T: 'static> SettingsRegistry<T> {
    /// Create a new registry from static descriptors
    #[must_use]
    pub const fn new(descriptors: &'static [SettingDescriptor<T>]) -> Self {
        SettingsRegistry {
            settings: descriptors,
        }
    }

    pub fn descriptors(&self) -> &'static [SettingDescriptor<T>] {
        self.settings
    }

    /// Find the descriptor an option name refers to
    ///
    /// Exact names and aliases win over prefixes. A prefix must match the
    /// canonical name of exactly one setting.
    pub fn resolve(&self, name: &str) -> Result<&'static SettingDescriptor<T>, SettingError> {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return Err(SettingError::UnknownOption(name));
        }

        let settings = self.settings;
        if let Some(desc) = settings
            .iter()
            .find(|d| d.name == name || d.aliases.iter().any(|alias| *alias == name))
        {
            return Ok(desc);
        }

        let matches: Vec<&'static SettingDescriptor<T>> = settings
            .iter()
            .filter(|d| d.name.starts_with(&name))
            .collect();
        match matches.as_slice() {
            [] => Err(SettingError::UnknownOption(name)),
            [desc] => Ok(*desc),
            many => {
                let names: Vec<&str> = many.iter().map(|d| d.name).collect();
                Err(SettingError::AmbiguousOption(format!(
                    "'{name}' matches {}",
                    names.join(", ")
                )))
            }
        }
    }

    /// Parse string value to `SettingValue` using `SettingType`
    pub(crate) fn parse_value(ty: &SettingType, value: &str) -> Result<SettingValue, SettingError> {
        let val_lower = value.trim().to_lowercase();
        match ty {
            SettingType::Boolean => match val_lower.as_str() {
                "true" | "1" | "on" | "yes" => Ok(SettingValue::Bool(true)),
                "false" | "0" | "off" | "no" => Ok(SettingValue::Bool(false)),
                _ => Err(SettingError::ParseError(format!(
                    "Invalid boolean value: {value}"
                ))),
            },
            SettingType::Enum { variants } => {
                // Find canonical variant (case-insensitive match)
                if let Some(canonical) = variants.iter().find(|v| v.to_lowercase() == val_lower) {
                    Ok(SettingValue::Enum((*canonical).to_string()))
                } else {
                    Err(SettingError::ParseError(format!(
                        "Invalid enum value: {value}. Valid values: {variants:?}"
                    )))
                }
            }
        }
    }

    /// Execute a setting by name with string value
    ///
    /// Flow:
    /// 1. Resolve option name (aliases, prefixes)
    /// 2. Parse string value to `SettingValue` using `SettingType`
    /// 3. Call setter function with typed value
    pub fn execute_setting(&self, name: &str, value: &str, target: &mut T) -> Result<(), SettingError> {
        let desc = self.resolve(name)?;
        let typed_value = Self::parse_value(&desc.ty, value)?;
        debug!(setting = desc.name, value = ?typed_value, "applying setting");
        (desc.set)(target, typed_value)
    }
}
