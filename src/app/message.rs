// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::navigation;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Anything that can turn a page: buttons, dots, keys, swipes and drags.
    Navigation(navigation::Message),
}

impl From<navigation::Message> for Message {
    fn from(message: navigation::Message) -> Self {
        Message::Navigation(message)
    }
}

/// Runtime flags passed from the command line into the application.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ja`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `EHON_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
