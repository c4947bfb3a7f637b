use crate::config::{ConfigError, EditorConfig};
use crate::types::Platform;
use pretty_assertions::assert_eq;

#[test]
fn test_builder_defaults() {
    let config = EditorConfig::new("Message");

    assert_eq!(config.placeholder, "Message");
    assert_eq!(config.char_limit, None);
    assert!(!config.show_char_count);
    assert_eq!(config.max_height, None);
    assert_eq!(config.platform, Platform::current());
    assert!(config.validate().is_ok());
}

#[test]
fn test_rejects_bad_max_height() {
    for height in [0.0, -4.0, f32::NAN, f32::INFINITY] {
        let config = EditorConfig::new("").max_height(height);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMaxHeight(_))
        ));
    }

    assert!(EditorConfig::new("").max_height(120.0).validate().is_ok());
}

#[test]
fn test_zero_limit_is_valid() {
    assert!(EditorConfig::new("").char_limit(0).validate().is_ok());
}

#[test]
fn test_deserializes_from_json() {
    let config: EditorConfig = serde_json::from_str(
        r#"{
            "placeholder": "Say something",
            "char_limit": 280,
            "show_char_count": true,
            "max_height": 160.0,
            "platform": "macos"
        }"#,
    )
    .unwrap();

    assert_eq!(
        config,
        EditorConfig::new("Say something")
            .char_limit(280)
            .show_char_count(true)
            .max_height(160.0)
            .platform(Platform::MacOs)
    );
}

#[test]
fn test_deserialize_fills_defaults() {
    let config: EditorConfig = serde_json::from_str(r#"{ "placeholder": "" }"#).unwrap();

    assert_eq!(config.char_limit, None);
    assert!(!config.show_char_count);
    assert_eq!(config.platform, Platform::current());
}
