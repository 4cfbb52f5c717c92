#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use weekhours::commands::week_config;
    use weekhours::libs::config::{Config, WeekConfig, CONFIG_FILE_NAME};
    use weekhours::libs::data_storage::DataStorage;
    use weekhours::libs::week::Day;

    /// Serializes tests that repoint the home directory.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Test context that points the user's home/appdata directory at a
    /// temporary directory for the duration of one test.
    struct ConfigTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.week.is_none());

        let week = config.week_or_default();
        assert_eq!(week.week_start, Day::Monday);
        assert_eq!(week.so_far_label, "so far");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        let config = Config {
            week: Some(WeekConfig {
                week_start: Day::Sunday,
                so_far_label: "running".to_string(),
            }),
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert_eq!(read_config, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_file_format(_ctx: &mut ConfigTestContext) {
        let config = Config {
            week: Some(WeekConfig {
                week_start: Day::Wednesday,
                so_far_label: "so far".to_string(),
            }),
        };
        config.save().unwrap();

        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(json["week"]["week_start"], "wednesday");
        assert_eq!(json["week"]["so_far_label"], "so far");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_empty_config_omits_week(_ctx: &mut ConfigTestContext) {
        Config::default().save().unwrap();

        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap().trim(), "{}");
        assert_eq!(Config::read().unwrap(), Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_config(_ctx: &mut ConfigTestContext) {
        assert!(!Config::delete().unwrap());

        Config::default().save().unwrap();
        assert!(Config::delete().unwrap());
        assert_eq!(Config::read().unwrap(), Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupt_config_is_an_error(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(path, "{ not json").unwrap();
        assert!(Config::read().is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_commands_fall_back_to_defaults_on_corrupt_config(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(path, "{ not json").unwrap();
        assert_eq!(week_config(), WeekConfig::default());
    }
}
