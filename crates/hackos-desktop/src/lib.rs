//! HackOS desktop
//!
//! A simulated hacker desktop: overlapping windows over a taskbar, a live
//! clock, a handful of canned apps and any number of pseudo-terminals. This
//! crate owns everything except the terminal sessions themselves, which come
//! from `hackos-terminal`.
//!
//! ## Architecture
//!
//! - [`math`]: geometry (`Vec2`, `Size`, `Rect`) and window chrome metrics
//! - [`window`]: window records, hit regions and the [`WindowManager`]
//! - [`input`]: pointer routing and the drag/resize state machine
//! - [`taskbar`]: one entry per open window
//! - [`clock`]: the taskbar clock face
//! - [`apps`]: app kinds, static app content and the password cracker panel
//! - [`config`]: serde-loadable configuration
//! - [`shell`]: the [`DesktopShell`] composition root and its timer queue
//!
//! ## Example
//!
//! ```rust
//! use hackos_desktop::{AppKind, DesktopConfig, DesktopShell};
//!
//! let mut shell = DesktopShell::new(DesktopConfig::default());
//! shell.init(0.0);
//!
//! let id = shell.open_app(AppKind::NetworkMonitor);
//! assert_eq!(shell.windows().focused(), Some(id));
//!
//! // the welcome terminal opens one second after init
//! shell.tick(1000.0);
//! assert_eq!(shell.windows().len(), 2);
//! ```
//!
//! Nothing here touches the browser. Time always arrives as epoch
//! milliseconds passed in by the host, so every test drives the desktop
//! deterministically. The `wasm` feature adds a JSON-speaking controller.

pub mod math;
pub mod window;
pub mod input;
pub mod taskbar;
pub mod clock;
pub mod apps;
pub mod config;
pub mod error;
pub mod shell;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

pub use math::{FrameStyle, Rect, Size, Vec2, FRAME_STYLE};
pub use window::{Window, WindowId, WindowManager, WindowRegion, WindowState, WindowView};
pub use input::{DragState, InputResult, InputRouter};
pub use taskbar::{TaskbarAction, TaskbarEntry};
pub use clock::{Clock, ClockView};
pub use apps::{AppKind, CrackerPanel, CrackerStatus, StaticContent};
pub use config::{DesktopConfig, ExplicitSettings, WindowDefaults};
pub use error::Error;
pub use shell::{AppState, AppView, DesktopShell, DesktopSnapshot, DesktopTask};

pub use hackos_terminal::{KeyInput, TerminalSession};
