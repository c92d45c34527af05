mod test_utils;

use image_compression_app::settings::AppEnvironment;
use std::str::FromStr;
use test_utils::test_config;

#[test]
fn environment_names_parse_case_insensitively() {
    assert_eq!(AppEnvironment::from_str("Production").unwrap(), AppEnvironment::Production);
    assert_eq!(AppEnvironment::from_str("testing").unwrap(), AppEnvironment::Testing);
    assert!(AppEnvironment::from_str("staging").is_err());
}

#[test]
fn test_config_is_valid() {
    assert!(test_config().validate().is_ok());
}

#[test]
fn wildcard_cors_is_rejected_in_production() {
    let mut config = test_config();
    config.env = AppEnvironment::Production;

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("Wildcard CORS"));

    config.cors_allowed_origins = vec!["https://tools.example.com".to_string()];
    assert!(config.validate().is_ok());
}

#[test]
fn zero_upload_limit_is_rejected() {
    let mut config = test_config();
    config.max_upload_bytes = 0;

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("MAX_UPLOAD_BYTES"));
}

#[test]
fn cors_origins_accept_comma_separated_entries() {
    let mut config = test_config();
    config.cors_allowed_origins = vec![
        "https://a.example.com, https://b.example.com".to_string(),
        " ".to_string(),
    ];

    assert_eq!(
        config.cors_origins(),
        vec!["https://a.example.com".to_string(), "https://b.example.com".to_string()]
    );
}

#[test]
fn server_address_joins_host_and_port() {
    let mut config = test_config();
    config.port = 9090;

    assert_eq!(config.server_address(), "127.0.0.1:9090");
}
