//! Settings registry
//! Configuration-driven registry for selection options

pub mod definitions;
pub mod descriptor;
pub mod registry;

#[cfg(test)]
mod tests;

pub use definitions::{create_settings_registry, SelectionOptions};
pub use descriptor::{SettingDescriptor, SettingError, SettingSetter, SettingType, SettingValue};
pub use registry::SettingsRegistry;
