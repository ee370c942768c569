//! Terminal sessions for the HackOS desktop
//!
//! A session is a pseudo-shell bound to one terminal window. It never runs
//! anything: every command resolves to canned or templated text from a
//! [`CommandRegistry`]. What it does model faithfully is the interactive
//! lifecycle:
//!
//! - a scripted boot log printed one line per timer tick
//! - line editing, history recall and tab completion
//! - the infinite cracking animation, which suspends input until Ctrl+C
//!
//! ## Architecture
//!
//! - [`output`]: styled output lines and the session log
//! - [`history`]: bounded command history with a recall cursor
//! - [`completion`]: prefix completion over a fixed vocabulary
//! - [`registry`]: literal and templated command responses
//! - [`timer`]: single-threaded timer queue and the [`Scheduler`] seam
//! - [`crack`]: fake credential cracking output shared with the desktop apps
//! - [`session`]: the [`TerminalSession`] state machine
//!
//! Sessions never own a clock or a timer loop. They ask a [`Scheduler`] for
//! repeating ticks and are driven by whoever drains the queue, which keeps
//! every transition deterministic under test.

pub mod output;
pub mod history;
pub mod completion;
pub mod registry;
pub mod timer;
pub mod crack;
pub mod time;

mod boot;
mod config;
mod key;
mod session;

pub use output::{Fragment, LineStyle, OutputLine, OutputLog};
pub use history::{History, Recall};
pub use completion::{complete, Completion};
pub use registry::{CommandContext, CommandEntry, CommandRegistry, Resolution, TemplateFn};
pub use timer::{Scheduler, SessionTask, TimerHandle, TimerQueue};
pub use crack::CrackEngine;
pub use config::{DelayRange, TerminalConfig};
pub use key::KeyInput;
pub use session::{Phase, Prompt, TerminalSession, TerminalView};

/// Default history capacity
pub const HISTORY_LIMIT: usize = 1000;
