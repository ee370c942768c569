//! Desktop shell
//!
//! The composition root. One [`DesktopShell`] owns the window manager, the
//! pointer router, the clock, every app's state and the single timer queue
//! that drives all animation. Hosts feed it events and `tick(now_ms)` calls
//! and render from its serialized snapshots.

use std::collections::HashMap;
use std::rc::Rc;

use hackos_terminal::{
    CommandRegistry, KeyInput, Scheduler, SessionTask, TerminalSession, TerminalView, TimerHandle,
    TimerQueue,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::apps::{AppKind, CrackerPanel, StaticContent};
use crate::clock::{Clock, ClockView};
use crate::config::DesktopConfig;
use crate::error::Error;
use crate::input::{self, DragState, InputResult, InputRouter, GRABBING_CURSOR};
use crate::math::{Size, Vec2};
use crate::taskbar::{TaskbarAction, TaskbarEntry};
use crate::window::{WindowId, WindowManager, WindowRegion, WindowView};

const DEFAULT_CURSOR: &str = "default";

/// Work items in the shell's timer queue
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DesktopTask {
    /// Refresh the taskbar clock
    Clock,
    /// Open the welcome terminal
    Welcome,
    /// Tick owned by the terminal in a window
    Session(WindowId, SessionTask),
    /// Round of the password cracker panel in a window
    Cracker(WindowId),
}

/// Lets a terminal session schedule into the shell's queue
struct SessionScheduler<'a> {
    queue: &'a mut TimerQueue<DesktopTask>,
    window: WindowId,
}

impl Scheduler for SessionScheduler<'_> {
    fn now_ms(&self) -> f64 {
        self.queue.now_ms()
    }

    fn schedule(&mut self, delay_ms: f64, task: SessionTask) -> TimerHandle {
        self.queue.schedule(delay_ms, DesktopTask::Session(self.window, task))
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.queue.cancel(handle);
    }
}

/// Live state behind a window's content area
#[derive(Debug)]
pub enum AppState {
    Terminal(TerminalSession),
    Cracker(CrackerPanel),
    Static(StaticContent),
}

/// Serializable content of one window
#[derive(Debug, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum AppView<'a> {
    Terminal(TerminalView<'a>),
    Cracker(&'a CrackerPanel),
    Static(&'a StaticContent),
}

/// Everything the host needs to draw the desktop chrome
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesktopSnapshot<'a> {
    pub windows: Vec<WindowView>,
    pub taskbar: Vec<TaskbarEntry>,
    pub clock: &'a ClockView,
    pub focused: Option<WindowId>,
    pub cursor: &'static str,
    pub selection_suppressed: bool,
}

/// The simulated desktop
pub struct DesktopShell {
    config: DesktopConfig,
    windows: WindowManager,
    input: InputRouter,
    clock: Clock,
    timers: TimerQueue<DesktopTask>,
    clock_timer: Option<TimerHandle>,
    welcome_timer: Option<TimerHandle>,
    apps: HashMap<WindowId, AppState>,
    registry: Rc<CommandRegistry>,
    rng: StdRng,
    cursor: &'static str,
    initialized: bool,
}

impl DesktopShell {
    /// Shell with the built-in command table
    pub fn new(config: DesktopConfig) -> Self {
        Self::with_registry(config, CommandRegistry::builtin())
    }

    pub fn with_registry(mut config: DesktopConfig, registry: CommandRegistry) -> Self {
        config.terminal.utc_offset_minutes = config.utc_offset_minutes;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            windows: WindowManager::new(config.window.clone(), config.viewport),
            input: InputRouter::new(),
            clock: Clock::new(config.utc_offset_minutes),
            timers: TimerQueue::new(0.0),
            clock_timer: None,
            welcome_timer: None,
            apps: HashMap::new(),
            registry: Rc::new(registry),
            rng,
            cursor: DEFAULT_CURSOR,
            initialized: false,
            config,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Start the clock and schedule the welcome terminal; runs once
    pub fn init(&mut self, now_ms: f64) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.timers.settle(now_ms);
        self.clock.update(now_ms);
        self.clock_timer = Some(self.timers.schedule(self.config.clock_period_ms, DesktopTask::Clock));
        self.welcome_timer = Some(
            self.timers
                .schedule(self.config.welcome_delay_ms, DesktopTask::Welcome),
        );
        log::info!(
            "[desktop] initialized {}x{}",
            self.config.viewport.width,
            self.config.viewport.height
        );
    }

    /// Run every timer due at `now_ms`, earliest first
    ///
    /// Returns the number of tasks that did work.
    pub fn tick(&mut self, now_ms: f64) -> usize {
        let mut ran = 0;
        while let Some((handle, task)) = self.timers.pop_due(now_ms) {
            if self.run_task(handle, task) {
                ran += 1;
            }
        }
        self.timers.settle(now_ms);
        ran
    }

    /// Time of the next pending timer, for hosts that sleep between ticks
    pub fn next_deadline(&self) -> Option<f64> {
        self.timers.next_deadline()
    }

    #[inline]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.timers.now_ms()
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.windows.set_viewport(Size::new(width, height));
    }

    fn run_task(&mut self, handle: TimerHandle, task: DesktopTask) -> bool {
        match task {
            DesktopTask::Clock => {
                if self.clock_timer != Some(handle) {
                    return false;
                }
                self.clock.update(self.timers.now_ms());
                self.clock_timer = Some(self.timers.schedule(self.config.clock_period_ms, DesktopTask::Clock));
                true
            }
            DesktopTask::Welcome => {
                if self.welcome_timer != Some(handle) {
                    return false;
                }
                self.welcome_timer = None;
                self.open_app(AppKind::Terminal);
                true
            }
            DesktopTask::Session(id, task) => {
                let Some(AppState::Terminal(session)) = self.apps.get_mut(&id) else {
                    return false;
                };
                let mut sched = SessionScheduler {
                    queue: &mut self.timers,
                    window: id,
                };
                session.on_timer(handle, task, &mut sched)
            }
            DesktopTask::Cracker(id) => {
                let Some(AppState::Cracker(panel)) = self.apps.get_mut(&id) else {
                    return false;
                };
                if panel.timer != Some(handle) {
                    return false;
                }
                panel.timer = None;
                panel.tick(self.timers.now_ms(), &mut self.rng);
                if panel.is_active() {
                    let delay = self.config.cracker_interval_ms.sample(&mut self.rng);
                    panel.timer = Some(self.timers.schedule(delay, DesktopTask::Cracker(id)));
                }
                true
            }
        }
    }

    // =========================================================================
    // Apps and windows
    // =========================================================================

    /// Open a new window running `kind`
    pub fn open_app(&mut self, kind: AppKind) -> WindowId {
        let id = self.windows.create(kind.title(), kind, kind.default_size());
        let state = match kind.static_content() {
            Some(content) => AppState::Static(content),
            None if kind == AppKind::PasswordCracker => {
                AppState::Cracker(CrackerPanel::new(self.timers.now_ms(), self.config.utc_offset_minutes))
            }
            None => AppState::Terminal(self.spawn_terminal(id)),
        };
        self.apps.insert(id, state);
        log::info!("[desktop] opened {} in window {}", kind, id);
        id
    }

    /// Open an app by launcher name, e.g. `network-monitor`
    pub fn open_app_by_name(&mut self, name: &str) -> Result<WindowId, Error> {
        let kind = name.parse::<AppKind>().map_err(|e| {
            log::warn!("[desktop] {}", e);
            e
        })?;
        Ok(self.open_app(kind))
    }

    fn spawn_terminal(&mut self, id: WindowId) -> TerminalSession {
        let rng = StdRng::seed_from_u64(self.rng.gen());
        let mut session = TerminalSession::new(self.config.terminal.clone(), Rc::clone(&self.registry), rng);
        session.start(&mut SessionScheduler {
            queue: &mut self.timers,
            window: id,
        });
        session
    }

    /// Close a window and cancel everything its app scheduled
    pub fn close(&mut self, id: WindowId) -> bool {
        let Some(window) = self.windows.close(id) else {
            return false;
        };
        self.input.forget_window(id);

        match self.apps.remove(&id) {
            Some(AppState::Terminal(mut session)) => session.shutdown(&mut SessionScheduler {
                queue: &mut self.timers,
                window: id,
            }),
            Some(AppState::Cracker(mut panel)) => {
                if let Some(timer) = panel.timer.take() {
                    self.timers.cancel(timer);
                }
            }
            Some(AppState::Static(_)) | None => {}
        }

        log::info!("[desktop] closed window {} ({})", id, window.app);
        true
    }

    pub fn focus(&mut self, id: WindowId) -> bool {
        self.windows.focus(id)
    }

    pub fn minimize(&mut self, id: WindowId) -> bool {
        self.windows.minimize(id)
    }

    pub fn restore(&mut self, id: WindowId) -> bool {
        self.windows.restore(id)
    }

    pub fn maximize(&mut self, id: WindowId) -> bool {
        self.windows.maximize(id)
    }

    /// Minimized windows are restored, others focused
    pub fn taskbar_click(&mut self, id: WindowId) -> bool {
        let Some(window) = self.windows.get(id) else {
            return false;
        };
        match TaskbarAction::for_window(window) {
            TaskbarAction::Restore => self.windows.restore(id),
            TaskbarAction::Focus => self.windows.focus(id),
        }
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    /// Route a press to the topmost window under the pointer
    pub fn pointer_down(&mut self, x: f32, y: f32) -> InputResult {
        let pointer = Vec2::new(x, y);
        let Some((window_id, region)) = self.windows.region_at(pointer) else {
            return InputResult::Unhandled;
        };
        self.windows.focus(window_id);

        if region.is_button() {
            self.press_button(window_id, region);
            return InputResult::Control { window_id, region };
        }
        if region.is_resize() {
            self.begin_resize(pointer, window_id);
            return InputResult::Handled;
        }
        if region == WindowRegion::TitleBar {
            self.begin_drag(pointer, window_id);
            return InputResult::Handled;
        }

        let local = self
            .windows
            .get(window_id)
            .map_or(Vec2::ZERO, |w| w.rect().local(pointer));
        let focus_input = matches!(
            self.apps.get(&window_id),
            Some(AppState::Terminal(session)) if session.input_enabled()
        );
        InputResult::Forward {
            window_id,
            local_x: local.x,
            local_y: local.y,
            focus_input,
        }
    }

    fn press_button(&mut self, window_id: WindowId, region: WindowRegion) {
        match region {
            WindowRegion::CloseButton => {
                self.close(window_id);
            }
            WindowRegion::MinimizeButton => {
                self.windows.minimize(window_id);
            }
            WindowRegion::MaximizeButton => {
                self.windows.maximize(window_id);
            }
            _ => {}
        }
    }

    /// Start moving a window, keeping the pointer's offset into it
    pub fn begin_drag(&mut self, pointer: Vec2, id: WindowId) -> bool {
        let Some(window) = self.windows.get(id) else {
            return false;
        };
        let offset = pointer - window.position;
        self.windows.unmaximize(id);
        self.windows.focus(id);
        self.input.start_window_move(id, offset);
        self.cursor = GRABBING_CURSOR;
        true
    }

    /// Start resizing a window from its right/bottom edge
    pub fn begin_resize(&mut self, pointer: Vec2, id: WindowId) -> bool {
        let Some(window) = self.windows.get(id) else {
            return false;
        };
        let start_size = window.size;
        self.windows.unmaximize(id);
        self.windows.focus(id);
        self.input.start_window_resize(id, pointer, start_size);
        true
    }

    /// Apply the active drag/resize, or report the hover cursor
    pub fn pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        let pointer = Vec2::new(x, y);
        match self.input.drag_state().cloned() {
            Some(DragState::MoveWindow { window_id, offset }) => {
                let position = input::drag_position(
                    pointer,
                    offset,
                    self.windows.viewport(),
                    self.windows.defaults(),
                );
                self.windows.move_to(window_id, position);
            }
            Some(DragState::ResizeWindow {
                window_id,
                start_mouse,
                start_size,
            }) => {
                let size = input::resize_size(pointer, start_mouse, start_size, self.windows.defaults().min_size);
                self.windows.resize(window_id, size);
            }
            None => {
                self.cursor = self
                    .windows
                    .region_at(pointer)
                    .map_or(DEFAULT_CURSOR, |(_, region)| region.cursor());
            }
        }
        InputResult::Cursor { cursor: self.cursor }
    }

    /// End any drag or resize
    pub fn pointer_up(&mut self) -> InputResult {
        match self.input.end_drag() {
            Some(drag) => {
                log::debug!(
                    "[desktop] {} of window {} ended",
                    if drag.is_move() { "move" } else { "resize" },
                    drag.window_id()
                );
                self.cursor = DEFAULT_CURSOR;
                InputResult::Handled
            }
            None => InputResult::Unhandled,
        }
    }

    #[inline]
    pub fn cursor(&self) -> &'static str {
        self.cursor
    }

    #[inline]
    pub fn selection_suppressed(&self) -> bool {
        self.input.selection_suppressed()
    }

    // =========================================================================
    // Keyboard and terminals
    // =========================================================================

    /// Deliver a key press
    ///
    /// Ctrl+C stops every cracking animation on the desktop. Other keys go
    /// to the focused window if it is a terminal.
    pub fn key_down(&mut self, key: KeyInput) -> bool {
        if key == KeyInput::Interrupt {
            return self.interrupt_all();
        }
        match self.windows.focused() {
            Some(id) => self.terminal_key(id, key),
            None => false,
        }
    }

    /// Deliver a key press to a specific terminal
    pub fn terminal_key(&mut self, id: WindowId, key: KeyInput) -> bool {
        let Some(AppState::Terminal(session)) = self.apps.get_mut(&id) else {
            return false;
        };
        session.handle_key(
            key,
            &mut SessionScheduler {
                queue: &mut self.timers,
                window: id,
            },
        )
    }

    /// Replace a terminal's input line
    pub fn set_input(&mut self, id: WindowId, text: &str) -> bool {
        match self.apps.get_mut(&id) {
            Some(AppState::Terminal(session)) => session.set_input(text),
            _ => false,
        }
    }

    /// Type and submit a command in a terminal
    pub fn run_command(&mut self, id: WindowId, text: &str) -> bool {
        let Some(AppState::Terminal(session)) = self.apps.get_mut(&id) else {
            return false;
        };
        session.run_command(
            text,
            &mut SessionScheduler {
                queue: &mut self.timers,
                window: id,
            },
        )
    }

    /// Stop the cracking animation in every terminal
    pub fn interrupt_all(&mut self) -> bool {
        let mut stopped = false;
        for (&id, state) in self.apps.iter_mut() {
            if let AppState::Terminal(session) = state {
                stopped |= session.interrupt(&mut SessionScheduler {
                    queue: &mut self.timers,
                    window: id,
                });
            }
        }
        stopped
    }

    // =========================================================================
    // Password cracker panel
    // =========================================================================

    pub fn cracker_start(&mut self, id: WindowId) -> bool {
        let now = self.timers.now_ms();
        let Some(AppState::Cracker(panel)) = self.apps.get_mut(&id) else {
            return false;
        };
        if !panel.start(now) {
            return false;
        }
        let delay = self.config.cracker_interval_ms.sample(&mut self.rng);
        panel.timer = Some(self.timers.schedule(delay, DesktopTask::Cracker(id)));
        log::info!("[cracker] attack started in window {}", id);
        true
    }

    /// Toggle pause
    pub fn cracker_pause(&mut self, id: WindowId) -> bool {
        let now = self.timers.now_ms();
        match self.apps.get_mut(&id) {
            Some(AppState::Cracker(panel)) => panel.toggle_pause(now),
            _ => false,
        }
    }

    pub fn cracker_stop(&mut self, id: WindowId) -> bool {
        let now = self.timers.now_ms();
        let Some(AppState::Cracker(panel)) = self.apps.get_mut(&id) else {
            return false;
        };
        if !panel.stop(now) {
            return false;
        }
        if let Some(timer) = panel.timer.take() {
            self.timers.cancel(timer);
        }
        log::info!(
            "[cracker] attack stopped in window {}: {} cracked",
            id,
            panel.cracked()
        );
        true
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    #[inline]
    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    #[inline]
    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    #[inline]
    pub fn clock(&self) -> &ClockView {
        self.clock.view()
    }

    pub fn taskbar(&self) -> Vec<TaskbarEntry> {
        self.windows.taskbar()
    }

    pub fn terminal(&self, id: WindowId) -> Result<&TerminalSession, Error> {
        match self.apps.get(&id) {
            Some(AppState::Terminal(session)) => Ok(session),
            _ => Err(Error::UnknownWindow(id)),
        }
    }

    pub fn cracker(&self, id: WindowId) -> Result<&CrackerPanel, Error> {
        match self.apps.get(&id) {
            Some(AppState::Cracker(panel)) => Ok(panel),
            _ => Err(Error::UnknownWindow(id)),
        }
    }

    /// Content of one window for rendering
    pub fn app_view(&self, id: WindowId) -> Result<AppView<'_>, Error> {
        match self.apps.get(&id) {
            Some(AppState::Terminal(session)) => Ok(AppView::Terminal(session.view())),
            Some(AppState::Cracker(panel)) => Ok(AppView::Cracker(panel)),
            Some(AppState::Static(content)) => Ok(AppView::Static(content)),
            None => Err(Error::UnknownWindow(id)),
        }
    }

    pub fn snapshot(&self) -> DesktopSnapshot<'_> {
        DesktopSnapshot {
            windows: self.windows.views(),
            taskbar: self.windows.taskbar(),
            clock: self.clock.view(),
            focused: self.windows.focused(),
            cursor: self.cursor,
            selection_suppressed: self.input.selection_suppressed(),
        }
    }
}

impl Default for DesktopShell {
    fn default() -> Self {
        Self::new(DesktopConfig::default())
    }
}
