use crate::commands::{CmdMessage, CmdResult};
use crate::config::ShipregConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = ShipregConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
            return Ok(result);
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key,
                config.get(&key)?
            )));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn show_all_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(ShipregConfig::default()));
    }

    #[test]
    fn set_persists_value() {
        let dir = TempDir::new().unwrap();
        run(
            dir.path(),
            ConfigAction::Set("page-size".into(), "5".into()),
        )
        .unwrap();

        let result = run(dir.path(), ConfigAction::ShowKey("page-size".into())).unwrap();
        assert_eq!(result.messages[0].content, "page-size = 5");
    }

    #[test]
    fn unknown_key_fails() {
        let dir = TempDir::new().unwrap();
        assert!(run(dir.path(), ConfigAction::ShowKey("nope".into())).is_err());
    }
}
