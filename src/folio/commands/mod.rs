//! # Command Layer
//!
//! The operations a client performs against the portfolio's records. Each lives in
//! its own submodule and is a plain function over a store and a query.
//!
//! ## What Commands Return
//!
//! Listings return dedicated structs ([`posts::BlogListing`],
//! [`publications::PublicationListing`]) that borrow from the store: everything a
//! listing page renders in one value, including the empty state. An empty listing
//! is not an error.
//!
//! Operations that change something (sync, config) return [`CmdResult`] with
//! leveled messages; the UI decides how to show them.
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O to the terminal**: No stdout, stderr, colors
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! ## Command Modules
//!
//! - [`posts`]: Blog listing, tag vocabulary, post lookup
//! - [`publications`]: Publication listing grouped by year, export, citations
//! - [`sync`]: Replace the publication store from a source
//! - [`config`]: Show and change configuration

use crate::config::FolioConfig;
use serde::Serialize;

pub mod config;
pub mod posts;
pub mod publications;
pub mod sync;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
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

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    pub config: Option<FolioConfig>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_config(mut self, config: FolioConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
