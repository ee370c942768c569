//! Password cracking suite panel
//!
//! The GUI sibling of the terminal's `crack-passwords` command. It has
//! explicit start, pause and stop controls and a progress bar that creeps
//! towards, but never reaches, completion.

use std::fmt;

use hackos_terminal::crack::hash::HashKind;
use hackos_terminal::crack::wordlists::{self, pick};
use hackos_terminal::output::group_thousands;
use hackos_terminal::{time, TimerHandle};
use rand::Rng;
use serde::Serialize;

const INITIAL_SPEED: f64 = 2847.3;
const SPEED_FLOOR: f64 = 1200.0;
const PROGRESS_CAP: f64 = 97.8;
/// Simulated seconds added per round
const ROUND_SECONDS: f64 = 0.3;
/// Simulated seconds the progress bar spans
const PROGRESS_SPAN_SECONDS: f64 = 300.0;

const ATTACK_PROGRESS: &[&str] = &[
    "Wordlist position: 47.3% | Current mask: ?l?l?l?l?d?d?d?d",
    "Rule application: 23,847/50,000 rules tested",
    "Combinator progress: wordlist_a.txt × wordlist_b.txt (73% complete)",
    "Markov chain generation: 4-gram model, 89.2% coverage",
    "PRINCE algorithm: keyspace reduced by 67.4%",
    "Hybrid attack: dictionary + brute-force suffix (0-999999)",
    "Rainbow table lookup: 12.7TB scanned, 847 hits",
    "Distributed nodes: 47/47 active, load balanced",
];

/// Panel lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CrackerStatus {
    #[default]
    Idle,
    Running,
    Paused,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogLevel::Info => "INFO",
            LogLevel::Success => "SUCCESS",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        })
    }
}

/// Activity log line
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LogEntry {
    /// `HH:MM:SS`
    pub stamp: String,
    pub level: LogLevel,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] [{}] {}", self.stamp, self.level, self.message)
    }
}

/// One "cracked" credential
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrackResult {
    pub stamp: String,
    pub username: String,
    pub password: String,
    pub hash: String,
    pub hash_kind: HashKind,
}

/// State of one password cracker window
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrackerPanel {
    status: CrackerStatus,
    attempts: u64,
    cracked: u32,
    /// Simulated seconds since start
    session_time: f64,
    /// MH/s
    speed: f64,
    /// Percent, capped below 100
    progress: f64,
    /// `M:SS`, absent until the first round
    eta: Option<String>,
    results: Vec<CrackResult>,
    log: Vec<LogEntry>,
    #[serde(skip)]
    utc_offset_minutes: i32,
    #[serde(skip)]
    pub(crate) timer: Option<TimerHandle>,
}

impl CrackerPanel {
    pub fn new(now_ms: f64, utc_offset_minutes: i32) -> Self {
        let mut panel = Self {
            status: CrackerStatus::Idle,
            attempts: 0,
            cracked: 0,
            session_time: 0.0,
            speed: 0.0,
            progress: 0.0,
            eta: None,
            results: Vec::new(),
            log: Vec::new(),
            utc_offset_minutes,
            timer: None,
        };
        panel.push_log(now_ms, LogLevel::Info, "Password Cracking Suite initialized");
        panel.push_log(now_ms, LogLevel::Info, "GPU devices detected: NVIDIA RTX 4090 (24GB VRAM)");
        panel.push_log(now_ms, LogLevel::Info, "Ready to begin password cracking operations");
        panel
    }

    #[inline]
    pub fn status(&self) -> CrackerStatus {
        self.status
    }

    /// Running or paused
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status != CrackerStatus::Idle
    }

    #[inline]
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    #[inline]
    pub fn cracked(&self) -> u32 {
        self.cracked
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[inline]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn eta(&self) -> Option<&str> {
        self.eta.as_deref()
    }

    pub fn results(&self) -> &[CrackResult] {
        &self.results
    }

    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    /// Begin a fresh attack; false if one is already active
    pub fn start(&mut self, now_ms: f64) -> bool {
        if self.is_active() {
            return false;
        }
        self.status = CrackerStatus::Running;
        self.attempts = 0;
        self.cracked = 0;
        self.session_time = 0.0;
        self.speed = INITIAL_SPEED;
        self.progress = 0.0;
        self.eta = None;
        self.results.clear();

        for (level, message) in [
            (LogLevel::Info, "Advanced Password Cracking Engine v4.7.2 initializing..."),
            (LogLevel::Warning, "Loading enhanced wordlists: rockyou.txt + leaked-2024.txt (47.2M passwords)"),
            (LogLevel::Success, "GPU acceleration: NVIDIA RTX 4090 Ti (24GB VRAM) - CUDA cores active"),
            (LogLevel::Info, "Rainbow tables: 14.7 TB loaded into high-speed memory"),
            (LogLevel::Warning, "Distributed computing: 47 cloud nodes synchronized"),
            (LogLevel::Success, "Quantum-enhanced algorithms: Active"),
        ] {
            self.push_log(now_ms, level, message);
        }
        true
    }

    /// Toggle between Running and Paused; false when idle
    pub fn toggle_pause(&mut self, now_ms: f64) -> bool {
        match self.status {
            CrackerStatus::Running => {
                self.status = CrackerStatus::Paused;
                self.push_log(now_ms, LogLevel::Warning, "Password cracking attack paused by user");
                self.push_log(now_ms, LogLevel::Info, "All cracking threads suspended, preserving session state");
            }
            CrackerStatus::Paused => {
                self.status = CrackerStatus::Running;
                self.push_log(now_ms, LogLevel::Success, "Password cracking attack resumed");
                self.push_log(now_ms, LogLevel::Info, "All cracking threads reactivated, continuing from checkpoint");
            }
            CrackerStatus::Idle => return false,
        }
        true
    }

    /// End the attack; results stay visible. False when idle.
    pub fn stop(&mut self, now_ms: f64) -> bool {
        if !self.is_active() {
            return false;
        }
        self.status = CrackerStatus::Idle;
        self.push_log(now_ms, LogLevel::Warning, "Password cracking attack stopped by user");
        true
    }

    /// Advance one round
    ///
    /// Paused rounds change nothing. Returns whether anything changed.
    pub fn tick<R: Rng + ?Sized>(&mut self, now_ms: f64, rng: &mut R) -> bool {
        if self.status != CrackerStatus::Running {
            return false;
        }

        self.session_time += ROUND_SECONDS;
        self.attempts += rng.gen_range(25_000..100_000);
        self.speed = (self.speed + rng.gen_range(-100.0..100.0)).max(SPEED_FLOOR);
        self.progress = (self.session_time / PROGRESS_SPAN_SECONDS * 100.0).min(PROGRESS_CAP);
        self.eta = Some(format!("{}:{:02}", rng.gen_range(15..60), rng.gen_range(0..60)));

        if rng.gen_bool(0.18) {
            self.crack_one(now_ms, rng);
        }

        if self.attempts % 100_000 < 75_000 {
            let algorithm = pick(wordlists::ALGORITHMS, rng);
            let kind = HashKind::random(rng);
            self.push_log(
                now_ms,
                LogLevel::Info,
                format!("Speed: {:.1} MH/s | Algorithm: {algorithm} | Hash: {kind}", self.speed),
            );
            self.push_log(
                now_ms,
                LogLevel::Warning,
                format!(
                    "Progress: {} attempts | Cracked: {} passwords",
                    group_thousands(self.attempts),
                    self.cracked
                ),
            );
        }

        if rng.gen_bool(0.25) {
            let technique = pick(wordlists::TECHNIQUES, rng);
            self.push_log(now_ms, LogLevel::Info, technique);
        }
        if rng.gen_bool(0.15) {
            let stat = performance_stat(rng);
            self.push_log(now_ms, LogLevel::Warning, stat);
        }
        if rng.gen_bool(0.08) {
            let finding = pick(wordlists::VULNERABILITIES, rng);
            self.push_log(now_ms, LogLevel::Error, format!("VULNERABILITY: {finding}"));
        }
        if rng.gen_bool(0.12) {
            let progress = pick(ATTACK_PROGRESS, rng);
            self.push_log(now_ms, LogLevel::Info, progress);
        }
        true
    }

    fn crack_one<R: Rng + ?Sized>(&mut self, now_ms: f64, rng: &mut R) {
        self.cracked += 1;
        let username = pick(wordlists::USERNAMES, rng).to_string();
        let password = pick(wordlists::PASSWORDS, rng).to_string();
        let hash_kind = HashKind::random(rng);
        let hash = hash_kind.fake(rng);

        self.push_log(
            now_ms,
            LogLevel::Success,
            format!("CRACKED: {username}:{password} ({hash_kind})"),
        );
        let preview: String = hash.chars().take(32).collect();
        self.push_log(now_ms, LogLevel::Info, format!("Hash: {preview}..."));

        let stamp = self.stamp(now_ms);
        self.results.push(CrackResult {
            stamp,
            username,
            password,
            hash,
            hash_kind,
        });
    }

    fn push_log(&mut self, now_ms: f64, level: LogLevel, message: impl Into<String>) {
        let stamp = self.stamp(now_ms);
        self.log.push(LogEntry {
            stamp,
            level,
            message: message.into(),
        });
    }

    fn stamp(&self, now_ms: f64) -> String {
        time::log_stamp(&time::local_time(now_ms, self.utc_offset_minutes))
    }
}

fn performance_stat<R: Rng + ?Sized>(rng: &mut R) -> String {
    match rng.gen_range(0..6) {
        0 => format!(
            "GPU temperature: {}°C | Memory usage: {}%",
            rng.gen_range(75..90),
            rng.gen_range(75..95)
        ),
        1 => format!(
            "VRAM utilization: {}% | Power consumption: {}W",
            rng.gen_range(85..95),
            rng.gen_range(300..350)
        ),
        2 => format!(
            "Network throughput: {:.1} MB/s | Cloud sync: {}%",
            rng.gen_range(150.0..250.0_f64),
            rng.gen_range(80..100)
        ),
        3 => format!(
            "Database queries: {}/sec | Cache efficiency: {}%",
            rng.gen_range(8000..10_000),
            rng.gen_range(85..100)
        ),
        4 => format!(
            "Active threads: {} | Memory bandwidth: {:.1} GB/s",
            rng.gen_range(1500..2000),
            rng.gen_range(800.0..1000.0_f64)
        ),
        _ => format!(
            "Rainbow table hits: {}/min | Compression ratio: {:.1}:1",
            rng.gen_range(200..300),
            rng.gen_range(3.0..5.0_f64)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const NOW: f64 = 1_705_347_757_000.0;

    #[test]
    fn test_new_panel_is_idle_with_greeting() {
        let panel = CrackerPanel::new(NOW, 0);
        assert_eq!(panel.status(), CrackerStatus::Idle);
        assert_eq!(panel.log().len(), 3);
        assert_eq!(
            panel.log()[0].to_string(),
            "[19:42:37] [INFO] Password Cracking Suite initialized"
        );
    }

    #[test]
    fn test_idle_ticks_do_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut panel = CrackerPanel::new(NOW, 0);
        assert!(!panel.tick(NOW, &mut rng));
        assert_eq!(panel.attempts(), 0);
    }

    #[test]
    fn test_start_twice_is_rejected() {
        let mut panel = CrackerPanel::new(NOW, 0);
        assert!(panel.start(NOW));
        assert!(!panel.start(NOW));
        assert_eq!(panel.status(), CrackerStatus::Running);
    }

    #[test]
    fn test_pause_freezes_counters() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut panel = CrackerPanel::new(NOW, 0);
        panel.start(NOW);
        panel.tick(NOW, &mut rng);
        let attempts = panel.attempts();

        assert!(panel.toggle_pause(NOW));
        assert_eq!(panel.status(), CrackerStatus::Paused);
        assert!(!panel.tick(NOW, &mut rng));
        assert_eq!(panel.attempts(), attempts);

        assert!(panel.toggle_pause(NOW));
        assert_eq!(panel.status(), CrackerStatus::Running);
        assert!(panel.tick(NOW, &mut rng));
        assert!(panel.attempts() > attempts);
    }

    #[test]
    fn test_progress_caps_and_speed_floor() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut panel = CrackerPanel::new(NOW, 0);
        panel.start(NOW);
        for _ in 0..2000 {
            panel.tick(NOW, &mut rng);
            assert!(panel.speed() >= SPEED_FLOOR);
            assert!(panel.progress() <= PROGRESS_CAP);
        }
        assert!((panel.progress() - PROGRESS_CAP).abs() < 0.001);
        assert!(panel.eta().is_some());
    }

    #[test]
    fn test_results_match_cracked_count() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut panel = CrackerPanel::new(NOW, 0);
        panel.start(NOW);
        for _ in 0..200 {
            panel.tick(NOW, &mut rng);
        }
        assert!(panel.cracked() > 0);
        assert_eq!(panel.results().len(), panel.cracked() as usize);
        assert!(panel
            .log()
            .iter()
            .any(|e| e.level == LogLevel::Success && e.message.starts_with("CRACKED: ")));
    }

    #[test]
    fn test_stop_keeps_results_and_restart_clears_them() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut panel = CrackerPanel::new(NOW, 0);
        panel.start(NOW);
        for _ in 0..100 {
            panel.tick(NOW, &mut rng);
        }
        assert!(panel.stop(NOW));
        assert!(!panel.stop(NOW));
        assert!(!panel.results().is_empty());
        assert_eq!(panel.log().last().map(|e| e.level), Some(LogLevel::Warning));

        panel.start(NOW);
        assert!(panel.results().is_empty());
        assert_eq!(panel.attempts(), 0);
    }

    #[test]
    fn test_serializes_without_timer() {
        let panel = CrackerPanel::new(NOW, 0);
        let json = serde_json::to_value(&panel).unwrap();
        assert_eq!(json["status"], "idle");
        assert!(json.get("timer").is_none());
        assert_eq!(json["log"][0]["level"], "info");
    }
}
