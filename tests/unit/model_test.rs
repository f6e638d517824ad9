//! Tests for setting and target models

use recon7::models::{Namespace, ParseError, Setting, SettingValue, Target, ThemeColor, split_key};

#[test]
fn test_namespace_from_str() {
    assert_eq!("secret".parse::<Namespace>().unwrap(), Namespace::Secret);
    assert_eq!("secrets".parse::<Namespace>().unwrap(), Namespace::Secret);
    assert_eq!("num".parse::<Namespace>().unwrap(), Namespace::Number);
    assert_eq!("numbers".parse::<Namespace>().unwrap(), Namespace::Number);
    assert_eq!("THEME".parse::<Namespace>().unwrap(), Namespace::Theme);
}

#[test]
fn test_namespace_from_str_unknown() {
    let result = "colors".parse::<Namespace>();
    assert_eq!(result, Err(ParseError::UnknownNamespace("colors".to_string())));
}

#[test]
fn test_namespace_display_is_prefix() {
    let prefixes: Vec<String> = Namespace::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(prefixes, vec!["secret", "num", "theme"]);
}

#[test]
fn test_theme_color_validation() {
    assert!(ThemeColor::parse("#a1B2c3").is_ok());
    assert!(ThemeColor::parse("a1b2c3").is_err());
    assert!(ThemeColor::parse("#a1b2c").is_err());
    assert!(ThemeColor::parse("#a1b2c3d").is_err());
    assert!(ThemeColor::parse("#zzzzzz").is_err());
}

#[test]
fn test_setting_value_parse_per_namespace() {
    assert_eq!(
        SettingValue::parse(Namespace::Secret, "tok"),
        Ok(SettingValue::Secret("tok".to_string()))
    );
    assert_eq!(SettingValue::parse(Namespace::Number, "7"), Ok(SettingValue::Number(7)));
    assert!(SettingValue::parse(Namespace::Number, "seven").is_err());
    assert!(SettingValue::parse(Namespace::Theme, "#123456").is_ok());
    assert!(SettingValue::parse(Namespace::Theme, "blue").is_err());
}

#[test]
fn test_setting_rejects_unquotable_secret() {
    assert!(Setting::new("k", SettingValue::Secret(String::new())).is_err());
    assert!(Setting::new("k", SettingValue::Secret("a\"b".to_string())).is_err());
    assert!(Setting::new("bad name", SettingValue::Number(1)).is_err());
}

#[test]
fn test_target_accessors() {
    let t = Target::new("scan1", "http://example.com", "").unwrap();
    assert_eq!(t.name(), "scan1");
    assert_eq!(t.value(), "http://example.com");
    assert!(t.desc().is_empty());
}

#[test]
fn test_split_key_keeps_name_verbatim() {
    assert_eq!(split_key("secret:api_key"), Ok((Namespace::Secret, "api_key")));
    assert_eq!(split_key("num:a:b"), Ok((Namespace::Number, "a:b")));
}
