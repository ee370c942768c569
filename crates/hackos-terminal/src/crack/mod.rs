//! Fake credential cracking
//!
//! Nothing is cracked. [`CrackEngine`] keeps a few counters and produces
//! plausible status lines from random draws each time it is ticked.

pub mod hash;
pub mod wordlists;

use rand::Rng;

use crate::output::{group_thousands, Fragment};
use hash::HashKind;
use wordlists::pick;

/// Speed reported before the first progress line
pub const INITIAL_SPEED: f64 = 2847.3;

/// Counters behind the infinite cracking animation
#[derive(Clone, Debug)]
pub struct CrackEngine {
    cracked: u32,
    attempts: u64,
    speed: f64,
}

impl Default for CrackEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CrackEngine {
    pub fn new() -> Self {
        Self {
            cracked: 0,
            attempts: 0,
            speed: INITIAL_SPEED,
        }
    }

    #[inline]
    pub fn cracked(&self) -> u32 {
        self.cracked
    }

    #[inline]
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Last reported speed in MH/s
    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Lines printed when the animation starts
    pub fn banner() -> Fragment {
        Fragment::new()
            .warning("[+] INFINITE PASSWORD CRACKING ENGINE v4.2.0")
            .info("[*] Initializing quantum-enhanced brute force framework...")
            .success("[+] Loading 47 billion password combinations...")
            .warning("[+] Distributed computing nodes: 1,337 active")
            .success("[+] GPU acceleration: NVIDIA RTX 4090 x 8 cards")
            .warning("[+] Hash algorithms: MD5, SHA-1, SHA-256, bcrypt, scrypt, Argon2")
            .info("[*] Target database: 250,000 password hashes loaded")
            .success("[+] Rainbow tables: 14.7 TB loaded into memory")
            .warning("[+] Network scanning for additional targets...")
            .error("[!] CRACKING INITIATED - INFINITE MODE ACTIVATED")
            .info("[*] Press Ctrl+C to stop the cracking process")
    }

    /// Advance one round and return the lines it produced
    ///
    /// A round always adds attempts; everything else is a random draw, so a
    /// round may produce no output at all.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Fragment {
        let mut out = Fragment::new();
        self.attempts += rng.gen_range(10_000..60_000);

        if rng.gen_bool(0.15) {
            self.cracked += 1;
            let user = pick(wordlists::USERNAMES, rng);
            let password = pick(wordlists::PASSWORDS, rng);
            let kind = HashKind::random(rng);
            out = out
                .success(format!("[+] CRACKED: {user}:{password} ({kind})"))
                .warning(format!("    Hash: {}", hash::quick_hash(rng)));
        }

        if self.attempts % 75_000 < 50_000 {
            self.speed = (rng.gen_range(2000.0..3000.0_f64) * 10.0).round() / 10.0;
            let algorithm = pick(wordlists::ALGORITHMS, rng);
            let kind = HashKind::random(rng);
            out = out
                .info(format!(
                    "[*] Speed: {:.1} MH/s | Algorithm: {algorithm} | Hash: {kind}",
                    self.speed
                ))
                .warning(format!(
                    "[*] Progress: {} attempts | Cracked: {} passwords",
                    group_thousands(self.attempts),
                    self.cracked
                ));

            if rng.gen_bool(0.3) {
                out = out.info(format!("[*] {}", pick(wordlists::TECHNIQUES, rng)));
            }
        }

        if self.attempts % 200_000 < 50_000 {
            out = out.warning(format!("[+] {}", system_stat(rng)));
        }

        if rng.gen_bool(0.08) {
            out = out.error(format!("[!] VULNERABILITY: {}", pick(wordlists::VULNERABILITIES, rng)));
        }

        out
    }

    /// Footer printed when the user interrupts the animation
    pub fn summary(&self, now_ms: f64) -> Fragment {
        Fragment::new()
            .plain("")
            .error("[!] CRACKING STOPPED BY USER (Ctrl+C)")
            .success(format!(
                "[+] Session summary: {} passwords cracked in {} attempts",
                self.cracked,
                group_thousands(self.attempts)
            ))
            .info(format!("[*] Average speed: {:.1} MH/s", self.speed))
            .warning(format!("[+] Results saved to: /root/cracked_passwords_{}.txt", now_ms as i64))
    }
}

fn system_stat<R: Rng + ?Sized>(rng: &mut R) -> String {
    match rng.gen_range(0..5) {
        0 => format!(
            "Temperature: GPU {}°C | CPU {}°C",
            rng.gen_range(75..90),
            rng.gen_range(65..75)
        ),
        1 => format!(
            "Memory usage: {}% | VRAM: {}%",
            rng.gen_range(70..90),
            rng.gen_range(80..95)
        ),
        2 => format!(
            "Network: {:.1} MB/s download | {:.1} MB/s upload",
            rng.gen_range(50.0..150.0_f64),
            rng.gen_range(20.0..70.0_f64)
        ),
        3 => format!(
            "Database queries: {}/sec | Cache hits: {}%",
            rng.gen_range(5000..6000),
            rng.gen_range(85..105)
        ),
        _ => format!(
            "Wordlist position: {}% | Estimated completion: {} hours",
            rng.gen_range(30..70),
            rng.gen_range(4..12)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::LineStyle;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_attempts_always_grow() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut engine = CrackEngine::new();
        let mut last = 0;
        for _ in 0..100 {
            engine.tick(&mut rng);
            assert!(engine.attempts() >= last + 10_000);
            last = engine.attempts();
        }
    }

    #[test]
    fn test_cracked_lines_match_counter() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut engine = CrackEngine::new();
        let mut seen = 0;
        for _ in 0..500 {
            seen += engine
                .tick(&mut rng)
                .lines()
                .iter()
                .filter(|l| l.text.starts_with("[+] CRACKED: "))
                .count();
        }
        assert_eq!(seen as u32, engine.cracked());
        assert!(engine.cracked() > 0);
    }

    #[test]
    fn test_speed_stays_in_band() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut engine = CrackEngine::new();
        for _ in 0..200 {
            engine.tick(&mut rng);
            let s = engine.speed();
            assert!((2000.0..=3000.0).contains(&s) || (s - INITIAL_SPEED).abs() < 0.001);
        }
    }

    #[test]
    fn test_summary_reports_counts() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut engine = CrackEngine::new();
        for _ in 0..10 {
            engine.tick(&mut rng);
        }
        let summary = engine.summary(1_705_347_757_000.0);
        let line = &summary.lines()[2];
        assert_eq!(line.style, LineStyle::Success);
        assert!(line.text.contains(&format!("{} passwords cracked", engine.cracked())));
        assert!(line.text.contains(&group_thousands(engine.attempts())));
        assert!(summary.lines()[4].text.ends_with("cracked_passwords_1705347757000.txt"));
    }

    #[test]
    fn test_banner_ends_with_hint() {
        let banner = CrackEngine::banner();
        assert!(banner.lines().last().map_or(false, |l| l.text.contains("Ctrl+C")));
    }
}
