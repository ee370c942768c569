//! WASM exports for the desktop shell
//!
//! The page owns the DOM and the animation frame loop; it forwards events
//! here and renders from the JSON this controller returns.

use log::{LevelFilter, Metadata, Record};
use wasm_bindgen::prelude::*;

use crate::apps::AppKind;
use crate::config::DesktopConfig;
use crate::shell::DesktopShell;
use crate::window::WindowId;
use hackos_terminal::KeyInput;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = Date, js_name = now)]
    fn date_now() -> f64;
}

/// Forwards `log` records to the browser console
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            log(&format!("{} {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

/// Install the console logger; later calls are ignored
#[wasm_bindgen]
pub fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Browser offset east of UTC in minutes
fn local_utc_offset() -> i32 {
    -(js_sys::Date::new_0().get_timezone_offset() as i32)
}

fn viewport_size() -> Option<(f32, f32)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width as f32, height as f32))
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
}

/// Desktop controller for WASM - wraps DesktopShell with a JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    shell: DesktopShell,
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a controller from a JSON config; empty string uses defaults
    ///
    /// Without an explicit `utc_offset_minutes` the browser's zone is used,
    /// and without a `viewport` the window's inner size.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<DesktopController, JsValue> {
        console_error_panic_hook::set_once();

        let (mut config, explicit) = DesktopConfig::from_host_json(config_json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        if !explicit.utc_offset {
            config.utc_offset_minutes = local_utc_offset();
        }
        if !explicit.viewport {
            if let Some((width, height)) = viewport_size() {
                config.viewport = crate::math::Size::new(width, height);
            }
        }

        Ok(Self {
            shell: DesktopShell::new(config),
        })
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Start the clock and schedule the welcome terminal
    #[wasm_bindgen]
    pub fn init(&mut self) {
        self.shell.init(date_now());
    }

    /// Run due timers; call once per animation frame
    ///
    /// Returns true if anything changed and the page should re-render.
    #[wasm_bindgen]
    pub fn tick(&mut self) -> bool {
        self.shell.tick(date_now()) > 0
    }

    #[wasm_bindgen]
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.shell.set_viewport(width, height);
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Open an app by launcher name, e.g. `file-manager`
    #[wasm_bindgen]
    pub fn open_app(&mut self, name: &str) -> Result<u64, JsValue> {
        self.shell
            .open_app_by_name(name)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn close_window(&mut self, id: u64) -> bool {
        self.shell.close(id)
    }

    #[wasm_bindgen]
    pub fn focus_window(&mut self, id: u64) -> bool {
        self.shell.focus(id)
    }

    #[wasm_bindgen]
    pub fn minimize_window(&mut self, id: u64) -> bool {
        self.shell.minimize(id)
    }

    #[wasm_bindgen]
    pub fn restore_window(&mut self, id: u64) -> bool {
        self.shell.restore(id)
    }

    #[wasm_bindgen]
    pub fn maximize_window(&mut self, id: u64) -> bool {
        self.shell.maximize(id)
    }

    #[wasm_bindgen]
    pub fn taskbar_click(&mut self, id: u64) -> bool {
        self.shell.taskbar_click(id)
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle pointer down event
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f32, y: f32) -> String {
        let result = self.shell.pointer_down(x, y);
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    /// Handle pointer move event
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> String {
        let result = self.shell.pointer_move(x, y);
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    /// Handle pointer up event
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> String {
        let result = self.shell.pointer_up();
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    /// Handle a DOM `keydown`; returns true if the page should prevent default
    #[wasm_bindgen]
    pub fn key_down(&mut self, key: &str, ctrl: bool) -> bool {
        match KeyInput::from_dom(key, ctrl) {
            Some(input) => self.shell.key_down(input),
            None => false,
        }
    }

    /// Mirror the contents of a terminal's `<input>` element
    #[wasm_bindgen]
    pub fn set_input(&mut self, id: u64, text: &str) -> bool {
        self.shell.set_input(id, text)
    }

    #[wasm_bindgen]
    pub fn run_command(&mut self, id: u64, text: &str) -> bool {
        self.shell.run_command(id, text)
    }

    // =========================================================================
    // Password cracker
    // =========================================================================

    #[wasm_bindgen]
    pub fn cracker_start(&mut self, id: u64) -> bool {
        self.shell.cracker_start(id)
    }

    #[wasm_bindgen]
    pub fn cracker_pause(&mut self, id: u64) -> bool {
        self.shell.cracker_pause(id)
    }

    #[wasm_bindgen]
    pub fn cracker_stop(&mut self, id: u64) -> bool {
        self.shell.cracker_stop(id)
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Windows, taskbar, clock and cursor as JSON
    #[wasm_bindgen]
    pub fn snapshot_json(&self) -> String {
        to_json(&self.shell.snapshot())
    }

    /// Content of one window as JSON; `null` for unknown ids
    #[wasm_bindgen]
    pub fn app_view_json(&self, id: u64) -> String {
        match self.shell.app_view(id as WindowId) {
            Ok(view) => to_json(&view),
            Err(_) => "null".to_string(),
        }
    }

    /// Launcher names in menu order
    #[wasm_bindgen]
    pub fn app_names_json(&self) -> String {
        let names: Vec<&str> = AppKind::ALL.iter().map(|k| k.name()).collect();
        serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
    }

    #[wasm_bindgen]
    pub fn get_focused_window(&self) -> Option<u64> {
        self.shell.windows().focused()
    }

    #[wasm_bindgen]
    pub fn cursor(&self) -> String {
        self.shell.cursor().to_string()
    }
}
