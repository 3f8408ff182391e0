//! Environment precedence and export tests for the env loader.
//!
//! Responsibilities:
//! - Test that process environment values win over env file values.
//! - Test exporting env file values into the process environment.
//! - Test full load-and-validate scenarios through `EnvLoader::validate` and `validate_env`.

use serial_test::serial;
use tempfile::TempDir;

use super::{env_lock, with_clean_env, write_env_file};
use crate::loader::builder::EnvLoader;
use crate::loader::error::{EnvError, ValidationError};
use crate::loader::location::EnvLocation;
use crate::types::{Schema, ValueType};
use crate::validate::validate_env;

fn service_schema() -> Schema {
    Schema::new().number("PORT").boolean("DEBUG").string("NAME")
}

#[test]
#[serial]
fn test_process_env_overrides_env_file() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_env_file(&temp_dir, "service.env", "PORT=8080\nNAME=from-file\n");

    with_clean_env(&[("PORT", Some("9090"))], || {
        let raw = EnvLoader::new()
            .load(Some(&EnvLocation::new(&path)))
            .unwrap();

        // Env var should take precedence over the file
        assert_eq!(raw.get("PORT"), Some("9090"));
        assert_eq!(raw.get("NAME"), Some("from-file"));
        assert_eq!(std::env::var("PORT").unwrap(), "9090");
    });
}

#[test]
#[serial]
fn test_loaded_values_are_exported() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_env_file(&temp_dir, "service.env", "NAME=svc1\n");

    with_clean_env(&[], || {
        EnvLoader::new()
            .load(Some(&EnvLocation::new(&path)))
            .unwrap();

        assert_eq!(std::env::var("NAME").unwrap(), "svc1");
    });
}

#[test]
#[serial]
fn test_export_disabled_leaves_process_env_untouched() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_env_file(&temp_dir, "service.env", "NAME=svc1\n");

    with_clean_env(&[], || {
        let raw = EnvLoader::new()
            .with_export(false)
            .load(Some(&EnvLocation::new(&path)))
            .unwrap();

        assert_eq!(raw.get("NAME"), Some("svc1"));
        assert!(std::env::var("NAME").is_err());
    });
}

#[test]
#[serial]
fn test_export_never_overrides_process_value() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_env_file(&temp_dir, "service.env", "NAME=from-file\nPORT=8080\n");

    with_clean_env(&[("NAME", Some("ambient"))], || {
        EnvLoader::new()
            .load(Some(&EnvLocation::new(&path)))
            .unwrap();

        assert_eq!(std::env::var("NAME").unwrap(), "ambient");
        assert_eq!(std::env::var("PORT").unwrap(), "8080");
    });
}

#[test]
#[serial]
fn test_padded_process_value_is_kept_verbatim() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.env");

    with_clean_env(&[("NAME", Some("  v  ")), ("SECRET_TOKEN", Some("   "))], || {
        let schema = Schema::new().string("NAME").string("SECRET_TOKEN");
        let config = validate_env(&schema, Some(&EnvLocation::new(&path))).unwrap();

        assert_eq!(config.string("NAME"), Some("  v  "));
        assert_eq!(config.string("SECRET_TOKEN"), Some("   "));
    });
}

#[test]
#[serial]
fn test_validate_env_service_scenario() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_env_file(
        &temp_dir,
        "service.env",
        "PORT=8080\nDEBUG=true\nNAME=svc1\n",
    );

    with_clean_env(&[], || {
        let config = validate_env(&service_schema(), Some(&EnvLocation::new(&path))).unwrap();

        assert_eq!(config.len(), 3);
        assert_eq!(config.number("PORT"), Some(8080.0));
        assert_eq!(config.boolean("DEBUG"), Some(true));
        assert_eq!(config.string("NAME"), Some("svc1"));
    });
}

#[test]
#[serial]
fn test_validate_env_missing_debug_names_key_and_file() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_env_file(&temp_dir, "service.env", "PORT=8080\nNAME=svc1\n");

    with_clean_env(&[], || {
        let err = validate_env(&service_schema(), Some(&EnvLocation::new(&path))).unwrap_err();

        match err {
            EnvError::Validation(ValidationError::Missing { key, searched }) => {
                assert_eq!(key, "DEBUG");
                assert_eq!(searched, Some(path.clone()));
            }
            other => panic!("Expected Missing error for DEBUG, got {:?}", other),
        }
    });
}

#[test]
#[serial]
fn test_validate_env_type_mismatch_from_file() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_env_file(
        &temp_dir,
        "service.env",
        "PORT=eighty\nDEBUG=true\nNAME=svc1\n",
    );

    with_clean_env(&[], || {
        let err = validate_env(&service_schema(), Some(&EnvLocation::new(&path))).unwrap_err();

        assert!(err.is_type_mismatch());
        assert_eq!(err.key(), Some("PORT"));
        assert_eq!(err.to_string(), "PORT must be a valid number");
    });
}

#[test]
#[serial]
fn test_validate_env_file_error_short_circuits_validation() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_env_file(&temp_dir, "broken.env", "INVALID_LINE_WITHOUT_EQUALS");

    with_clean_env(&[], || {
        let err = validate_env(&service_schema(), Some(&EnvLocation::new(&path))).unwrap_err();
        assert!(err.is_file_error());
        assert_eq!(err.key(), None);
    });
}

#[test]
#[serial]
fn test_validate_env_uses_process_env_without_file() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let absent = temp_dir.path().join("absent.env");

    with_clean_env(
        &[("PORT", Some("3000")), ("DEBUG", Some("FALSE")), ("NAME", Some("ambient"))],
        || {
            let config = validate_env(&service_schema(), Some(&EnvLocation::new(&absent))).unwrap();

            assert_eq!(config.number("PORT"), Some(3000.0));
            assert_eq!(config.boolean("DEBUG"), Some(false));
            assert_eq!(config.string("NAME"), Some("ambient"));
        },
    );
}

#[test]
#[serial]
fn test_validate_is_idempotent() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_env_file(
        &temp_dir,
        "service.env",
        "PORT=8080\nDEBUG=false\nNAME=svc1\n",
    );
    let location = EnvLocation::new(&path);

    with_clean_env(&[], || {
        let mut loader = EnvLoader::new();
        let first = loader.validate(&service_schema(), Some(&location)).unwrap();
        let second = loader.validate(&service_schema(), Some(&location)).unwrap();

        assert_eq!(first, second);
    });
}

#[test]
#[serial]
fn test_validate_does_not_mutate_schema() {
    let _lock = env_lock().lock().unwrap();
    let schema = service_schema();
    let before = schema.clone();

    with_clean_env(&[("DOTENV_DISABLED", Some("1")), ("PORT", Some("1"))], || {
        let _ = EnvLoader::new().validate(&schema, None);
    });

    assert_eq!(schema, before);
    assert_eq!(schema.get("PORT"), Some(ValueType::Number));
}
