//! Terminal session state machine
//!
//! ```text
//!  Booting ──(script exhausted)──▶ Interactive ◀──(Ctrl+C)── Animating
//!                                       │                        ▲
//!                                       └──(crack command)───────┘
//! ```
//!
//! Timed transitions are driven from outside: the session asks a
//! [`Scheduler`] for one-shot ticks and the owner of the queue hands each
//! fired tick back through [`TerminalSession::on_timer`]. A tick is honoured
//! only if its handle is the one the session is currently waiting on, so a
//! firing that raced with a cancel has no effect.

use std::collections::VecDeque;
use std::rc::Rc;

use rand::rngs::StdRng;
use serde::Serialize;

use crate::boot;
use crate::completion::{complete, Completion};
use crate::config::TerminalConfig;
use crate::crack::CrackEngine;
use crate::history::{History, Recall};
use crate::key::KeyInput;
use crate::output::{OutputLine, OutputLog};
use crate::registry::CommandRegistry;
use crate::time;
use crate::timer::{Scheduler, SessionTask, TimerHandle};

/// Lifecycle phase of a session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Printing the boot script; input hidden
    Booting,
    /// Accepting commands
    Interactive,
    /// Running the cracking animation; input disabled until Ctrl+C
    Animating,
}

/// Shell prompt identity
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Prompt {
    pub user: String,
    pub host: String,
    pub cwd: String,
}

impl Prompt {
    /// First prompt line, e.g. `┌──(root㉿kali)-[~]`
    pub fn header(&self) -> String {
        format!("┌──({}㉿{})-[{}]", self.user, self.host, self.cwd)
    }

    /// Second prompt line, `└─#` for root and `└─$` otherwise
    pub fn marker(&self) -> &'static str {
        if self.user == "root" {
            "└─#"
        } else {
            "└─$"
        }
    }
}

/// Serializable snapshot of a session for rendering
#[derive(Debug, Serialize)]
pub struct TerminalView<'a> {
    pub phase: Phase,
    pub prompt: &'a Prompt,
    pub lines: &'a [OutputLine],
    pub input: &'a str,
    pub input_enabled: bool,
    pub history_len: usize,
}

#[derive(Debug)]
struct CrackRun {
    engine: CrackEngine,
    timer: Option<TimerHandle>,
}

/// One pseudo-shell bound to a terminal window
#[derive(Debug)]
pub struct TerminalSession {
    config: TerminalConfig,
    prompt: Prompt,
    registry: Rc<CommandRegistry>,
    log: OutputLog,
    input: String,
    history: History,
    phase: Phase,
    boot: VecDeque<OutputLine>,
    boot_timer: Option<TimerHandle>,
    cracking: Option<CrackRun>,
    rng: StdRng,
}

impl TerminalSession {
    /// Create a session in the Booting phase; call [`TerminalSession::start`]
    /// to begin printing the boot script
    pub fn new(config: TerminalConfig, registry: Rc<CommandRegistry>, rng: StdRng) -> Self {
        let prompt = Prompt {
            user: config.user.clone(),
            host: config.host.clone(),
            cwd: config.cwd.clone(),
        };
        let history = History::new(config.history_limit);
        Self {
            config,
            prompt,
            registry,
            log: OutputLog::new(),
            input: String::new(),
            history,
            phase: Phase::Booting,
            boot: VecDeque::new(),
            boot_timer: None,
            cracking: None,
            rng,
        }
    }

    /// Load the boot script and arm the first boot tick
    ///
    /// Does nothing once the session has left the Booting phase or is
    /// already ticking.
    pub fn start<S: Scheduler + ?Sized>(&mut self, sched: &mut S) {
        if self.phase != Phase::Booting || self.boot_timer.is_some() {
            return;
        }
        let now = time::local_time(sched.now_ms(), self.config.utc_offset_minutes);
        self.boot = boot::boot_script(&now);
        log::debug!("[terminal] boot started ({} lines)", self.boot.len());
        self.arm_boot(sched);
    }

    /// Handle a fired timer
    ///
    /// Returns false if the tick was stale and ignored.
    pub fn on_timer<S: Scheduler + ?Sized>(
        &mut self,
        handle: TimerHandle,
        task: SessionTask,
        sched: &mut S,
    ) -> bool {
        match task {
            SessionTask::Boot => {
                if self.boot_timer != Some(handle) {
                    return false;
                }
                self.boot_timer = None;
                match self.boot.pop_front() {
                    Some(line) => {
                        self.log.push(line);
                        self.arm_boot(sched);
                    }
                    None => self.finish_boot(),
                }
            }
            SessionTask::Crack => {
                let Some(run) = self.cracking.as_mut() else {
                    return false;
                };
                if run.timer != Some(handle) {
                    return false;
                }
                self.log.extend(run.engine.tick(&mut self.rng));
                let delay = self.config.crack_interval_ms.sample(&mut self.rng);
                run.timer = Some(sched.schedule(delay, SessionTask::Crack));
            }
        }
        true
    }

    /// Apply one key press
    ///
    /// Returns whether the key was consumed.
    pub fn handle_key<S: Scheduler + ?Sized>(&mut self, key: KeyInput, sched: &mut S) -> bool {
        if key == KeyInput::Interrupt {
            return self.interrupt(sched);
        }
        if !self.input_enabled() {
            return false;
        }

        match key {
            KeyInput::Enter => self.submit(sched),
            KeyInput::Tab => self.complete_input(),
            KeyInput::ArrowUp => {
                if let Some(entry) = self.history.older() {
                    self.input = entry.to_string();
                }
            }
            KeyInput::ArrowDown => match self.history.newer() {
                Recall::Entry(entry) => self.input = entry,
                Recall::Cleared => self.input.clear(),
                Recall::Unchanged => {}
            },
            KeyInput::Backspace => {
                self.input.pop();
            }
            KeyInput::Char(c) => self.input.push(c),
            KeyInput::Interrupt => {}
        }
        true
    }

    /// Replace the input buffer (host-side edits such as paste)
    pub fn set_input(&mut self, text: &str) -> bool {
        if !self.input_enabled() {
            return false;
        }
        self.input = text.to_string();
        true
    }

    /// Type `text` and press Enter
    pub fn run_command<S: Scheduler + ?Sized>(&mut self, text: &str, sched: &mut S) -> bool {
        if !self.set_input(text) {
            return false;
        }
        self.submit(sched);
        true
    }

    /// Stop the cracking animation (Ctrl+C)
    ///
    /// Returns false if nothing was running.
    pub fn interrupt<S: Scheduler + ?Sized>(&mut self, sched: &mut S) -> bool {
        let Some(mut run) = self.cracking.take() else {
            return false;
        };
        if let Some(timer) = run.timer.take() {
            sched.cancel(timer);
        }
        self.log.extend(run.engine.summary(sched.now_ms()));
        self.log.push(OutputLine::prompt(""));
        self.phase = Phase::Interactive;
        log::info!(
            "[terminal] cracking stopped: {} cracked in {} attempts",
            run.engine.cracked(),
            run.engine.attempts()
        );
        true
    }

    /// Cancel every pending timer; used when the window closes
    ///
    /// Safe to call more than once.
    pub fn shutdown<S: Scheduler + ?Sized>(&mut self, sched: &mut S) {
        if let Some(timer) = self.boot_timer.take() {
            sched.cancel(timer);
        }
        if let Some(timer) = self.cracking.as_mut().and_then(|run| run.timer.take()) {
            sched.cancel(timer);
            log::debug!("[terminal] cracking timer cancelled on shutdown");
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Input accepts keys only while Interactive
    #[inline]
    pub fn input_enabled(&self) -> bool {
        self.phase == Phase::Interactive
    }

    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[inline]
    pub fn log(&self) -> &OutputLog {
        &self.log
    }

    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[inline]
    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    /// Handles of timers this session is waiting on
    pub fn pending_timers(&self) -> impl Iterator<Item = TimerHandle> + '_ {
        self.boot_timer
            .into_iter()
            .chain(self.cracking.as_ref().and_then(|run| run.timer))
    }

    pub fn view(&self) -> TerminalView<'_> {
        TerminalView {
            phase: self.phase,
            prompt: &self.prompt,
            lines: self.log.lines(),
            input: &self.input,
            input_enabled: self.input_enabled(),
            history_len: self.history.len(),
        }
    }

    fn arm_boot<S: Scheduler + ?Sized>(&mut self, sched: &mut S) {
        let delay = self.config.boot_delay_ms.sample(&mut self.rng);
        self.boot_timer = Some(sched.schedule(delay, SessionTask::Boot));
    }

    fn finish_boot(&mut self) {
        self.log.push(OutputLine::prompt(""));
        self.phase = Phase::Interactive;
        log::info!("[terminal] boot complete, {}@{} ready", self.prompt.user, self.prompt.host);
    }

    fn submit<S: Scheduler + ?Sized>(&mut self, sched: &mut S) {
        let command = std::mem::take(&mut self.input).trim().to_string();
        self.history.push(&command);
        self.history.reset_cursor();
        self.log.push(OutputLine::prompt(command.as_str()));
        self.dispatch(&command, sched);
    }

    fn dispatch<S: Scheduler + ?Sized>(&mut self, command: &str, sched: &mut S) {
        if command == self.config.clear_command {
            self.log.clear();
            return;
        }
        if command == self.config.crack_command {
            self.start_cracking(sched);
            return;
        }

        let now = time::local_time(sched.now_ms(), self.config.utc_offset_minutes);
        match self.registry.resolve(command) {
            Some(resolution) => {
                let output = resolution.render(now);
                self.log.extend(output);
            }
            None if command.is_empty() => return,
            None => {
                let token = command.split_whitespace().next().unwrap_or(command);
                log::debug!("[terminal] unknown command: {token}");
                self.log.push(OutputLine::error(format!("bash: {token}: command not found")));
            }
        }
        self.log.push(OutputLine::prompt(""));
    }

    fn start_cracking<S: Scheduler + ?Sized>(&mut self, sched: &mut S) {
        self.log.extend(CrackEngine::banner());
        let delay = self.config.crack_interval_ms.sample(&mut self.rng);
        let timer = sched.schedule(delay, SessionTask::Crack);
        self.cracking = Some(CrackRun {
            engine: CrackEngine::new(),
            timer: Some(timer),
        });
        self.phase = Phase::Animating;
        log::info!("[terminal] cracking animation started");
    }

    fn complete_input(&mut self) {
        match complete(&self.input, self.registry.vocabulary()) {
            Completion::NoMatch => {}
            Completion::Unique(cmd) => self.input = format!("{cmd} "),
            Completion::Ambiguous(matches) => {
                self.log.push(OutputLine::prompt(self.input.as_str()));
                self.log.push(OutputLine::plain(matches.join("  ")));
                self.log.push(OutputLine::prompt(""));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::TimerQueue;
    use rand::SeedableRng;

    fn session() -> TerminalSession {
        TerminalSession::new(
            TerminalConfig::default(),
            Rc::new(CommandRegistry::builtin()),
            StdRng::seed_from_u64(42),
        )
    }

    #[test]
    fn test_prompt_rendering() {
        let s = session();
        assert_eq!(s.prompt().header(), "┌──(root㉿kali)-[~]");
        assert_eq!(s.prompt().marker(), "└─#");
    }

    #[test]
    fn test_keys_ignored_while_booting() {
        let mut queue = TimerQueue::new(0.0);
        let mut s = session();
        s.start(&mut queue);
        assert!(!s.handle_key(KeyInput::Char('x'), &mut queue));
        assert!(s.input().is_empty());
        assert!(!s.set_input("ls"));
    }

    #[test]
    fn test_start_is_not_repeated() {
        let mut queue = TimerQueue::new(0.0);
        let mut s = session();
        s.start(&mut queue);
        s.start(&mut queue);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_stale_tick_ignored() {
        let mut queue: TimerQueue<SessionTask> = TimerQueue::new(0.0);
        let mut s = session();
        s.start(&mut queue);
        let bogus = queue.schedule(0.0, SessionTask::Boot);
        assert!(!s.on_timer(bogus, SessionTask::Boot, &mut queue));
        assert!(s.log().is_empty());
    }

    #[test]
    fn test_view_serializes() {
        let s = session();
        let json = serde_json::to_value(s.view()).unwrap();
        assert_eq!(json["phase"], "booting");
        assert_eq!(json["input_enabled"], false);
        assert_eq!(json["prompt"]["host"], "kali");
    }
}
