//! Configuration layering and credential resolution.

use bardic::AppConfig;
use std::collections::HashMap;
use std::io::Write;
use std::time::Duration;

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_defaults_with_api_key() {
    let config = AppConfig::from_sources(None, false, &env(&[("API_KEY", "secret")])).unwrap();

    assert_eq!(config.api_key(), "secret");
    assert_eq!(config.model(), "gemini-1.5-flash");
    assert_eq!(config.language(), "en");
    assert_eq!(config.generation_timeout(), Duration::from_secs(120));
    assert_eq!(config.upload_timeout(), Duration::from_secs(60));
    assert_eq!(config.synthesis_timeout(), Duration::from_secs(60));
    assert_eq!(config.listen().to_string(), "127.0.0.1:8501");
    assert_eq!(*config.max_upload_bytes(), 20 * 1024 * 1024);
    assert!(config.scratch_dir().is_none());
}

#[test]
fn test_missing_api_key_is_a_config_error() {
    let err = AppConfig::from_sources(None, false, &env(&[])).unwrap_err();
    assert!(err.message.contains("API_KEY is not set"));

    let err = AppConfig::from_sources(None, false, &env(&[("API_KEY", "   ")])).unwrap_err();
    assert!(err.message.contains("API_KEY is not set"));
}

#[test]
fn test_api_key_precedence() {
    let config = AppConfig::from_sources(
        None,
        false,
        &env(&[("GEMINI_API_KEY", "gemini"), ("API_KEY", "plain")]),
    )
    .unwrap();
    assert_eq!(config.api_key(), "plain");

    let config = AppConfig::from_sources(
        None,
        false,
        &env(&[("BARDIC_API_KEY", "bardic"), ("API_KEY", "plain")]),
    )
    .unwrap();
    assert_eq!(config.api_key(), "bardic");
}

#[test]
fn test_file_then_environment_layering() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "model = \"gemini-1.5-pro\"\nlanguage = \"fr\"\ngeneration_timeout_secs = 30"
    )
    .unwrap();

    let config = AppConfig::from_sources(
        Some(file.path()),
        true,
        &env(&[("API_KEY", "k"), ("BARDIC_LANGUAGE", "de")]),
    )
    .unwrap();

    assert_eq!(config.model(), "gemini-1.5-pro");
    assert_eq!(config.language(), "de");
    assert_eq!(config.generation_timeout(), Duration::from_secs(30));

    let pipeline = config.pipeline_config().unwrap();
    assert_eq!(pipeline.language(), "de");
    assert_eq!(*pipeline.generation_timeout(), Duration::from_secs(30));
}

#[test]
fn test_required_file_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    let result = AppConfig::from_sources(Some(missing.as_path()), true, &env(&[("API_KEY", "k")]));
    assert!(result.is_err());

    let config = AppConfig::from_sources(Some(missing.as_path()), false, &env(&[("API_KEY", "k")]));
    assert!(config.is_ok());
}

#[test]
fn test_scratch_dir_and_listen_override() {
    let config = AppConfig::from_sources(
        None,
        false,
        &env(&[("API_KEY", "k"), ("BARDIC_SCRATCH_DIR", "/var/tmp/bardic")]),
    )
    .unwrap()
    .with_listen("0.0.0.0:9000".parse().unwrap());

    assert_eq!(config.listen().port(), 9000);
    assert_eq!(
        config.pipeline_config().unwrap().scratch_dir().to_str(),
        Some("/var/tmp/bardic")
    );
}

#[test]
fn test_debug_redacts_api_key() {
    let config = AppConfig::from_sources(None, false, &env(&[("API_KEY", "hunter2")])).unwrap();
    let debug = format!("{:?}", config);
    assert!(!debug.contains("hunter2"));
}

#[tokio::test]
async fn test_app_builds_from_config() {
    let config = AppConfig::from_sources(None, false, &env(&[("API_KEY", "k")])).unwrap();
    assert!(bardic::app(&config).is_ok());
}

#[test]
fn test_zero_timeout_is_rejected() {
    for var in [
        "BARDIC_UPLOAD_TIMEOUT_SECS",
        "BARDIC_GENERATION_TIMEOUT_SECS",
        "BARDIC_SYNTHESIS_TIMEOUT_SECS",
    ] {
        let err = AppConfig::from_sources(None, false, &env(&[("API_KEY", "k"), (var, "0")]))
            .unwrap_err();
        let field = var.trim_start_matches("BARDIC_").to_lowercase();
        assert!(err.message.contains(&field), "{}: {}", var, err.message);
        assert!(err.message.contains("greater than zero"));
    }
}

#[test]
fn test_pipeline_config_carries_every_setting() {
    let config = AppConfig::from_sources(
        None,
        false,
        &env(&[
            ("API_KEY", "k"),
            ("BARDIC_LANGUAGE", "es"),
            ("BARDIC_UPLOAD_TIMEOUT_SECS", "5"),
            ("BARDIC_SYNTHESIS_TIMEOUT_SECS", "7"),
        ]),
    )
    .unwrap();

    let pipeline = config.pipeline_config().unwrap();
    assert_eq!(pipeline.language(), "es");
    assert_eq!(*pipeline.upload_timeout(), Duration::from_secs(5));
    assert_eq!(*pipeline.generation_timeout(), Duration::from_secs(120));
    assert_eq!(*pipeline.synthesis_timeout(), Duration::from_secs(7));
}
