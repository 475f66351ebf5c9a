//! Configuration loader tests
//!
//! Environment-dependent tests run inside `figment::Jail`, which serializes
//! them and restores the environment afterwards.

use bindery_domain::error::Error;
use bindery_infrastructure::config::loader::validate_config;
use bindery_infrastructure::config::{BinderyConfig, ConfigLoader, ProviderConfig};
use bindery_infrastructure::constants::DEFAULT_LOG_LEVEL;
use figment::Jail;
use tempfile::TempDir;

fn jail_error(e: Error) -> figment::Error {
    figment::Error::from(e.to_string())
}

#[test]
fn test_defaults_without_sources() {
    Jail::expect_with(|_jail| {
        let config = ConfigLoader::new().load().map_err(jail_error)?;

        assert_eq!(config.injector.binding_tag, "bind");
        assert_eq!(config.injector.transformer_tag, "xform");
        assert_eq!(config.injector.interface_kind, "interface");
        assert!(config.injector.builtin_transformers);
        assert!(config.injector.providers.is_empty());
        assert!(!config.cache.shared);
        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
        Ok(())
    });
}

#[test]
fn test_toml_file_declares_providers() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "custom.toml",
            r#"
            [injector]
            binding_tag = "inject"

            [[injector.providers]]
            type = "state"
            kind = "state"

            [[injector.providers]]
            type = "map"
            kind = "setting"
            field = "settings"
            priority = 1

            [[injector.providers]]
            type = "direct"
            kind = "const"
            priority = 2
            value = { region = "eu", replicas = 3 }
            "#,
        )?;

        let config = ConfigLoader::new()
            .with_config_path("custom.toml")
            .load()
            .map_err(jail_error)?;

        assert_eq!(config.injector.binding_tag, "inject");
        let providers = &config.injector.providers;
        assert_eq!(providers.len(), 3);
        assert_eq!(
            providers[0],
            ProviderConfig::State {
                kind: "state".into(),
                root: String::new(),
                priority: 0,
            }
        );
        assert_eq!(providers[1].kind(), "setting");
        assert_eq!(providers[2].priority(), 2);
        assert!(matches!(&providers[2], ProviderConfig::Direct { value, .. } if value["replicas"] == 3));
        Ok(())
    });
}

#[test]
fn test_default_config_file_is_discovered() {
    Jail::expect_with(|jail| {
        jail.create_file("bindery.toml", "[logging]\nlevel = \"debug\"\n")?;

        let config = ConfigLoader::new().load().map_err(jail_error)?;
        assert_eq!(config.logging.level, "debug");
        Ok(())
    });
}

#[test]
fn test_environment_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("bindery.toml", "[cache]\nshared = false\n")?;
        jail.set_env("BINDERY_CACHE__SHARED", "true");
        jail.set_env("BINDERY_LOGGING__LEVEL", "warn");

        let config = ConfigLoader::new().load().map_err(jail_error)?;
        assert!(config.cache.shared);
        assert_eq!(config.logging.level, "warn");
        Ok(())
    });
}

#[test]
fn test_custom_env_prefix() {
    Jail::expect_with(|jail| {
        jail.set_env("APP_INJECTOR__INTERFACE_KIND", "service");
        jail.set_env("BINDERY_INJECTOR__INTERFACE_KIND", "ignored");

        let config = ConfigLoader::new()
            .with_env_prefix("APP")
            .load()
            .map_err(jail_error)?;
        assert_eq!(config.injector.interface_kind, "service");
        Ok(())
    });
}

#[test]
fn test_invalid_values_fail_load() {
    Jail::expect_with(|jail| {
        jail.set_env("BINDERY_LOGGING__LEVEL", "loud");

        let err = ConfigLoader::new().load().unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("Invalid log level"));
        Ok(())
    });
}

#[test]
fn test_missing_explicit_file_falls_back_to_defaults() {
    Jail::expect_with(|_jail| {
        let loader = ConfigLoader::new().with_config_path("absent.toml");
        let config = loader.load().map_err(jail_error)?;

        assert_eq!(config.injector.binding_tag, "bind");
        assert_eq!(
            loader.config_path().map(|p| p.to_string_lossy().into_owned()),
            Some("absent.toml".to_string())
        );
        Ok(())
    });
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");
    let mut config = BinderyConfig::default();
    config.injector.providers.push(ProviderConfig::Map {
        kind: "setting".into(),
        field: "settings".into(),
        priority: 3,
    });
    config.cache.shared = true;

    let loader = ConfigLoader::new().with_env_prefix("BINDERY_SAVE_TEST");
    loader.save_to_file(&config, &path).unwrap();
    let loaded = loader.with_config_path(&path).load().unwrap();

    assert_eq!(loaded.injector.providers, config.injector.providers);
    assert!(loaded.cache.shared);
}

#[test]
fn test_validate_rejects_equal_tags() {
    let mut config = BinderyConfig::default();
    config.injector.transformer_tag = config.injector.binding_tag.clone();

    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("must differ"));
}

#[test]
fn test_validate_rejects_duplicate_provider_kinds() {
    let mut config = BinderyConfig::default();
    for priority in [0, 1] {
        config.injector.providers.push(ProviderConfig::State {
            kind: "state".into(),
            root: String::new(),
            priority,
        });
    }

    assert!(matches!(
        validate_config(&config),
        Err(Error::DuplicateKind { kind }) if kind == "state"
    ));
}

#[test]
fn test_validate_rejects_map_without_field() {
    let mut config = BinderyConfig::default();
    config.injector.providers.push(ProviderConfig::Map {
        kind: "setting".into(),
        field: " ".into(),
        priority: 0,
    });

    assert!(validate_config(&config).is_err());
}

#[test]
fn test_validate_snapshot_requirements() {
    let mut config = BinderyConfig::default();
    config.cache.save_on_shutdown = true;
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("snapshot path"));

    config.cache.snapshot_path = Some("cache.bin".into());
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("shared cache"));

    config.cache.shared = true;
    assert!(validate_config(&config).is_ok());
}
