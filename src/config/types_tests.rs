use super::*;
use proptest::prelude::*;

// Any combination of axis fields parses back into the same definition
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_axis_fields_round_trip(
        min in 0u32..64,
        extra in 0u32..64,
        leading in 0u32..8,
        trailing in 0u32..8,
    ) {
        let max = min + extra;
        let toml_content = format!(r#"
[vertical]
min_positioner_length = {}
max_positioner_length = {}
leading_margin = {}
trailing_margin = {}
"#, min, max, leading, trailing);

        let config = Config::from_toml_str(&toml_content);
        prop_assert!(config.is_ok(), "Failed to parse axis definition");

        let config = config.unwrap();
        prop_assert_eq!(config.vertical.min_positioner_length, min);
        prop_assert_eq!(config.vertical.max_positioner_length, max);
        prop_assert_eq!(config.vertical.leading_margin, leading);
        prop_assert_eq!(config.vertical.trailing_margin, trailing);
        prop_assert_eq!(config.horizontal, AxisDefinition::default());
    }
}

// Missing sections and fields fall back to their defaults
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_missing_fields_use_defaults(
        include_scroll_section in prop::bool::ANY,
        include_step_field in prop::bool::ANY
    ) {
        let toml_content = if !include_scroll_section {
            String::new()
        } else if !include_step_field {
            "[scroll]\n".to_string()
        } else {
            "[scroll]\nstep_size = 4\n".to_string()
        };

        let config = Config::from_toml_str(&toml_content);
        prop_assert!(config.is_ok(), "Failed to parse config with missing fields");

        let config = config.unwrap();
        if include_scroll_section && include_step_field {
            prop_assert_eq!(config.scroll.step_size, 4);
        } else {
            prop_assert_eq!(config.scroll.step_size, 1);
        }
    }
}

#[test]
fn test_axis_definition_defaults() {
    let definition = AxisDefinition::default();
    assert_eq!(definition.min_positioner_length, 1);
    assert_eq!(definition.max_positioner_length, 0);
    assert_eq!(definition.leading_margin, 0);
    assert_eq!(definition.trailing_margin, 0);
}

#[test]
fn test_unrestricted_maximum_is_valid() {
    let definition = AxisDefinition {
        min_positioner_length: 10,
        max_positioner_length: 0,
        ..AxisDefinition::default()
    };
    assert!(definition.validate("vertical").is_ok());
}

#[test]
fn test_fixed_length_is_valid() {
    let definition = AxisDefinition {
        min_positioner_length: 3,
        max_positioner_length: 3,
        ..AxisDefinition::default()
    };
    assert!(definition.validate("horizontal").is_ok());
}

#[test]
fn test_inverted_bounds_error_message() {
    let toml = r#"
[vertical]
min_positioner_length = 5
max_positioner_length = 2
"#;
    let err = Config::from_toml_str(toml).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("[vertical]"), "got: {}", message);
    assert!(message.contains("maximum 2"), "got: {}", message);
}

#[test]
fn test_negative_step_size_fails() {
    let toml = "[scroll]\nstep_size = -1\n";
    assert!(Config::from_toml_str(toml).is_err());
}
