//! Window management
//!
//! Window lifecycle, stacking order, focus and hit testing.

mod window;
mod region;
mod manager;

pub use window::{Window, WindowState, WindowView};
pub use region::WindowRegion;
pub use manager::WindowManager;

/// Unique window identifier, never reused within a desktop
pub type WindowId = u64;
