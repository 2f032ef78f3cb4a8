//! Tests for settings registry

use crate::error::ErrorType;
use crate::movement::WordMotion;
use crate::settings::descriptor::{SettingDescriptor, SettingError, SettingType, SettingValue};
use crate::settings::registry::SettingsRegistry;
use crate::settings::{create_settings_registry, SelectionOptions};
use crate::snap::ClickSnap;

#[derive(Debug, Default)]
struct Toggles {
    dark: bool,
    draft: bool,
}

fn set_dark(t: &mut Toggles, value: SettingValue) -> Result<(), SettingError> {
    match value {
        SettingValue::Bool(b) => {
            t.dark = b;
            Ok(())
        }
        _ => Err(SettingError::ValidationError("Expected boolean".to_string())),
    }
}

fn set_draft(t: &mut Toggles, value: SettingValue) -> Result<(), SettingError> {
    match value {
        SettingValue::Bool(b) => {
            t.draft = b;
            Ok(())
        }
        _ => Err(SettingError::ValidationError("Expected boolean".to_string())),
    }
}

const TEST_SETTINGS: &[SettingDescriptor<Toggles>] = &[
    SettingDescriptor {
        name: "dark",
        aliases: &["dk"],
        ty: SettingType::Boolean,
        set: set_dark,
    },
    SettingDescriptor {
        name: "draft",
        aliases: &[],
        ty: SettingType::Boolean,
        set: set_draft,
    },
];

fn create_test_registry() -> SettingsRegistry<Toggles> {
    SettingsRegistry::new(TEST_SETTINGS)
}

#[test]
fn test_setting_error_display() {
    assert_eq!(
        SettingError::ParseError("invalid".to_string()).to_string(),
        "Parse error: invalid"
    );
    assert_eq!(
        SettingError::ValidationError("out of range".to_string()).to_string(),
        "Validation error: out of range"
    );
    assert_eq!(
        SettingError::UnknownOption("foo".to_string()).to_string(),
        "Unknown option: foo"
    );
}

#[test]
fn test_parse_boolean() {
    let ty = SettingType::Boolean;
    for v in ["true", "1", "on", "yes", "TRUE", "On"] {
        assert_eq!(
            SettingsRegistry::<Toggles>::parse_value(&ty, v),
            Ok(SettingValue::Bool(true)),
            "{v}"
        );
    }
    for v in ["false", "0", "off", "no", "FALSE"] {
        assert_eq!(
            SettingsRegistry::<Toggles>::parse_value(&ty, v),
            Ok(SettingValue::Bool(false)),
            "{v}"
        );
    }
    for v in ["maybe", "2", ""] {
        assert!(matches!(
            SettingsRegistry::<Toggles>::parse_value(&ty, v),
            Err(SettingError::ParseError(_))
        ));
    }
}

#[test]
fn test_parse_enum_case_insensitive() {
    let ty = SettingType::Enum {
        variants: &["segmented", "classrun"],
    };
    let result = SettingsRegistry::<Toggles>::parse_value(&ty, "ClassRun");
    assert_eq!(result, Ok(SettingValue::Enum("classrun".to_string())));

    let result = SettingsRegistry::<Toggles>::parse_value(&ty, "  segmented ");
    assert_eq!(result, Ok(SettingValue::Enum("segmented".to_string())));

    let result = SettingsRegistry::<Toggles>::parse_value(&ty, "words");
    assert!(matches!(result, Err(SettingError::ParseError(_))));
}

#[test]
fn test_resolve_names() {
    let registry = create_test_registry();
    assert_eq!(registry.resolve("dark").unwrap().name, "dark");
    assert_eq!(registry.resolve("dk").unwrap().name, "dark");
    assert_eq!(registry.resolve("DRAF").unwrap().name, "draft");
    assert!(matches!(
        registry.resolve("d"),
        Err(SettingError::AmbiguousOption(_))
    ));
    assert!(matches!(
        registry.resolve("light"),
        Err(SettingError::UnknownOption(_))
    ));
    assert!(matches!(
        registry.resolve(""),
        Err(SettingError::UnknownOption(_))
    ));
}

#[test]
fn test_execute_setting() {
    let registry = create_test_registry();
    let mut toggles = Toggles::default();

    registry.execute_setting("dark", "on", &mut toggles).unwrap();
    assert!(toggles.dark);
    registry.execute_setting("dk", "off", &mut toggles).unwrap();
    assert!(!toggles.dark);
    registry.execute_setting("draf", "yes", &mut toggles).unwrap();
    assert!(toggles.draft);

    let err = registry.execute_setting("dark", "sometimes", &mut toggles);
    assert!(matches!(err, Err(SettingError::ParseError(_))));
}

#[test]
fn test_selection_defaults() {
    let opts = SelectionOptions::default();
    assert_eq!(opts.word_motion, WordMotion::Segmented);
    assert_eq!(opts.click_snap, ClickSnap::Nearest);
    assert!(opts.drag_select);
}

#[test]
fn test_selection_registry_covers_every_option() {
    let names: Vec<&str> = create_settings_registry()
        .descriptors()
        .iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names, vec!["word_motion", "click_snap", "drag_select"]);
}

#[test]
fn test_selection_set_by_alias() {
    let mut opts = SelectionOptions::default();
    opts.set("wm", "classrun").unwrap();
    opts.set("cs", "leading").unwrap();
    opts.set("ds", "no").unwrap();
    assert_eq!(opts.word_motion, WordMotion::ClassRun);
    assert_eq!(opts.click_snap, ClickSnap::Leading);
    assert!(!opts.drag_select);
}

#[test]
fn test_from_assignments() {
    let text = "\
# selection behaviour
word_motion = classrun

click_snap=Leading
";
    let opts = SelectionOptions::from_assignments(text).unwrap();
    assert_eq!(opts.word_motion, WordMotion::ClassRun);
    assert_eq!(opts.click_snap, ClickSnap::Leading);
    assert!(opts.drag_select);
}

#[test]
fn test_from_assignments_errors() {
    let err = SelectionOptions::from_assignments("word_motion classrun").unwrap_err();
    assert_eq!(err.kind, ErrorType::Parse);
    assert!(err.contains_msg("line 1"));

    let err = SelectionOptions::from_assignments("\ncolour = red").unwrap_err();
    assert_eq!(err.kind, ErrorType::Settings);
    assert_eq!(err.code, "UNKNOWN_SETTING");

    let err = SelectionOptions::from_assignments("drag_select = maybe").unwrap_err();
    assert_eq!(err.code, "SETTING_PARSE_ERROR");
}
