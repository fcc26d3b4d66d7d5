//! Configuration loader tests
//!
//! Each test runs inside a `figment::Jail`, which serializes access to the
//! process environment and working directory.

use cart_domain::constants::CART_STORAGE_KEY;
use cart_infrastructure::config::{
    AppConfig, ConfigLoader, StorageProviderKind, validate_app_config,
};
use cart_infrastructure::constants::{DEFAULT_EVENT_CAPACITY, DEFAULT_LOG_LEVEL};
use figment::Jail;
use std::path::PathBuf;

fn load(loader: &ConfigLoader) -> Result<AppConfig, figment::Error> {
    loader.load().map_err(|e| figment::Error::from(e.to_string()))
}

#[test]
fn test_defaults_without_file_or_env() {
    Jail::expect_with(|_jail| {
        let config = load(&ConfigLoader::new())?;

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.storage.provider, StorageProviderKind::Filesystem);
        assert_eq!(config.storage.key, CART_STORAGE_KEY);
        assert_eq!(config.events.capacity, DEFAULT_EVENT_CAPACITY);
        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
        Ok(())
    });
}

#[test]
fn test_default_file_in_working_directory() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "cart.toml",
            r#"
            [storage]
            provider = "memory"
            key = "guest-cart"
            "#,
        )?;

        let config = load(&ConfigLoader::new())?;

        assert_eq!(config.storage.provider, StorageProviderKind::Memory);
        assert_eq!(config.storage.key, "guest-cart");
        assert_eq!(config.events.capacity, DEFAULT_EVENT_CAPACITY);
        Ok(())
    });
}

#[test]
fn test_explicit_path_and_env_override() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "custom.toml",
            r#"
            [storage]
            provider = "filesystem"
            path = "/var/lib/storefront"

            [logging]
            level = "debug"
            "#,
        )?;
        jail.set_env("CART_STORAGE__PROVIDER", "memory");
        jail.set_env("CART_EVENTS__CAPACITY", "16");

        let loader = ConfigLoader::new().with_config_path("custom.toml");
        let config = load(&loader)?;

        assert_eq!(config.storage.provider, StorageProviderKind::Memory);
        assert_eq!(config.storage.path, PathBuf::from("/var/lib/storefront"));
        assert_eq!(config.events.capacity, 16);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(
            loader.config_path(),
            Some(PathBuf::from("custom.toml").as_path())
        );
        Ok(())
    });
}

#[test]
fn test_missing_explicit_file_falls_back_to_defaults() {
    Jail::expect_with(|_jail| {
        let config = load(&ConfigLoader::new().with_config_path("absent.toml"))?;

        assert_eq!(config, AppConfig::default());
        Ok(())
    });
}

#[test]
fn test_custom_env_prefix() {
    Jail::expect_with(|jail| {
        jail.set_env("SHOP_STORAGE__KEY", "kiosk-cart");
        jail.set_env("CART_STORAGE__KEY", "ignored");

        let config = load(&ConfigLoader::new().with_env_prefix("SHOP"))?;

        assert_eq!(config.storage.key, "kiosk-cart");
        Ok(())
    });
}

#[test]
fn test_invalid_values_are_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("CART_EVENTS__CAPACITY", "0");
        assert!(ConfigLoader::new().load().is_err());

        jail.set_env("CART_EVENTS__CAPACITY", "8");
        jail.set_env("CART_LOGGING__LEVEL", "loud");
        assert!(ConfigLoader::new().load().is_err());

        jail.set_env("CART_LOGGING__LEVEL", "warn");
        jail.set_env("CART_STORAGE__PROVIDER", "cloud");
        assert!(ConfigLoader::new().load().is_err());
        Ok(())
    });
}

#[test]
fn test_validate_storage_key() {
    let mut config = AppConfig::default();
    assert!(validate_app_config(&config).is_ok());

    config.storage.key = String::new();
    assert!(validate_app_config(&config).is_err());

    config.storage.key = "../outside".to_string();
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_validate_filesystem_path() {
    let mut config = AppConfig::default();
    config.storage.path = PathBuf::new();
    assert!(validate_app_config(&config).is_err());

    config.storage.provider = StorageProviderKind::Memory;
    assert!(validate_app_config(&config).is_ok());
}

#[test]
fn test_save_and_reload() {
    Jail::expect_with(|jail| {
        let mut original = AppConfig::default();
        original.storage.provider = StorageProviderKind::Memory;
        original.storage.key = "saved-cart".to_string();
        original.events.capacity = 32;
        original.logging.json_format = true;

        let path = jail.directory().join("saved.toml");
        ConfigLoader::new()
            .save_to_file(&original, &path)
            .map_err(|e| figment::Error::from(e.to_string()))?;

        let reloaded = load(&ConfigLoader::new().with_config_path(&path))?;

        assert_eq!(reloaded, original);
        Ok(())
    });
}
