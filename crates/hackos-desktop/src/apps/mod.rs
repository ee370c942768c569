//! Desktop applications
//!
//! Six launchers. The terminal and the password cracker are live and keep
//! per-window state. The other four show fixed content.

mod content;
mod cracker;

pub use content::{FileEntry, InfoRow, StatBox, StaticContent};
pub use cracker::{CrackResult, CrackerPanel, CrackerStatus, LogEntry, LogLevel};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::math::Size;

/// Launchable application
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppKind {
    Terminal,
    FileManager,
    NetworkMonitor,
    SystemMonitor,
    CodeEditor,
    PasswordCracker,
}

impl AppKind {
    pub const ALL: [AppKind; 6] = [
        AppKind::Terminal,
        AppKind::FileManager,
        AppKind::NetworkMonitor,
        AppKind::SystemMonitor,
        AppKind::CodeEditor,
        AppKind::PasswordCracker,
    ];

    /// Launcher name, e.g. `file-manager`
    pub fn name(self) -> &'static str {
        match self {
            AppKind::Terminal => "terminal",
            AppKind::FileManager => "file-manager",
            AppKind::NetworkMonitor => "network-monitor",
            AppKind::SystemMonitor => "system-monitor",
            AppKind::CodeEditor => "code-editor",
            AppKind::PasswordCracker => "password-cracker",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AppKind::Terminal => "root@kali: ~",
            AppKind::FileManager => "File Manager",
            AppKind::NetworkMonitor => "Network Monitor",
            AppKind::SystemMonitor => "System Monitor",
            AppKind::CodeEditor => "Code Editor - exploit.py",
            AppKind::PasswordCracker => "🔓 Password Cracking Suite",
        }
    }

    pub fn default_size(self) -> Size {
        match self {
            AppKind::Terminal => Size::new(800.0, 600.0),
            AppKind::FileManager => Size::new(500.0, 400.0),
            AppKind::NetworkMonitor => Size::new(600.0, 400.0),
            AppKind::SystemMonitor => Size::new(550.0, 350.0),
            AppKind::CodeEditor => Size::new(700.0, 500.0),
            AppKind::PasswordCracker => Size::new(900.0, 700.0),
        }
    }

    /// Fixed content for apps without live state
    pub fn static_content(self) -> Option<StaticContent> {
        match self {
            AppKind::FileManager => Some(content::file_manager()),
            AppKind::NetworkMonitor => Some(content::network_monitor()),
            AppKind::SystemMonitor => Some(content::system_monitor()),
            AppKind::CodeEditor => Some(content::code_editor()),
            AppKind::Terminal | AppKind::PasswordCracker => None,
        }
    }
}

impl fmt::Display for AppKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AppKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AppKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::UnknownApp(s.to_string()))
    }
}
