use crate::config::ShipregConfig;
use crate::model::Ship;

pub mod config;
pub mod count;
pub mod create;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod list;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Ships created, changed or removed by the command.
    pub affected_ships: Vec<Ship>,
    /// Ships returned by a read.
    pub listed_ships: Vec<Ship>,
    pub count: Option<usize>,
    pub config: Option<ShipregConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_ships(mut self, ships: Vec<Ship>) -> Self {
        self.listed_ships = ships;
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_config(mut self, config: ShipregConfig) -> Self {
        self.config = Some(config);
        self
    }
}
