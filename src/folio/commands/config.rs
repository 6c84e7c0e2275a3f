use crate::commands::{CmdMessage, CmdResult};
use crate::config::FolioConfig;
use crate::error::{FolioError, Result};
use std::path::Path;

/// What `folio config` was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Every key, or just the named one.
    Show(Option<String>),
    /// Set a key. An empty value unsets it.
    Set { key: String, value: String },
}

/// Applies `action` to the loaded `config`. A `Set` is written to `config_dir`
/// first and only then replaces `config`, so a rejected or unsaved change leaves
/// it as it was.
pub fn run(
    config: &mut FolioConfig,
    config_dir: &Path,
    action: ConfigAction,
) -> Result<CmdResult> {
    match action {
        ConfigAction::Show(None) => Ok(CmdResult::default().with_config(config.clone())),
        ConfigAction::Show(Some(key)) => {
            let value = config.get(&key).ok_or_else(|| unknown_key(&key))?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(value));
            Ok(result)
        }
        ConfigAction::Set { key, value } => {
            let mut updated = config.clone();
            updated.set(&key, &value).map_err(FolioError::Config)?;
            updated.save(config_dir)?;
            *config = updated;

            let mut result = CmdResult::default().with_config(config.clone());
            result.add_message(CmdMessage::success(if value.is_empty() {
                format!("{} unset", key)
            } else {
                format!("{} set to {}", key, value)
            }));
            Ok(result)
        }
    }
}

fn unknown_key(key: &str) -> FolioError {
    FolioError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        crate::config::CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    fn set(key: &str, value: &str) -> ConfigAction {
        ConfigAction::Set {
            key: key.into(),
            value: value.into(),
        }
    }

    #[test]
    fn test_show_all_returns_current_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = FolioConfig::default();
        config.researcher_id = Some("0000-0002".into());
        let result = run(&mut config, dir.path(), ConfigAction::Show(None)).unwrap();
        assert_eq!(result.config.as_ref(), Some(&config));
    }

    #[test]
    fn test_set_persists_and_updates_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = FolioConfig::default();

        let result = run(&mut config, dir.path(), set("researcher-id", "0000-0002")).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "researcher-id set to 0000-0002");
        assert_eq!(config.researcher_id.as_deref(), Some("0000-0002"));
        assert_eq!(FolioConfig::load(dir.path()).unwrap(), config);

        let shown = run(
            &mut config,
            dir.path(),
            ConfigAction::Show(Some("researcher-id".into())),
        )
        .unwrap();
        assert_eq!(shown.messages[0].content, "0000-0002");
    }

    #[test]
    fn test_empty_value_unsets() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = FolioConfig::default();
        run(&mut config, dir.path(), set("posts-file", "posts.json")).unwrap();

        let result = run(&mut config, dir.path(), set("posts-file", "")).unwrap();
        assert_eq!(result.messages[0].content, "posts-file unset");
        assert!(config.posts_file.is_none());
    }

    #[test]
    fn test_unknown_key_is_config_error_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = FolioConfig::default();

        let err = run(&mut config, dir.path(), ConfigAction::Show(Some("nope".into())))
            .unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));

        let err = run(&mut config, dir.path(), set("export-file-name", "cv.txt")).unwrap_err();
        assert!(err.to_string().contains("Unknown config key: export-file-name"));
        assert_eq!(config, FolioConfig::default());
        assert!(!dir.path().join("config.json").exists());
    }
}
