//! Terminal session configuration

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Inclusive-exclusive range of delays in milliseconds
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DelayRange {
    pub min: f64,
    pub max: f64,
}

impl DelayRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Draw a delay; degenerate ranges yield `min`
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.max > self.min {
            rng.gen_range(self.min..self.max)
        } else {
            self.min.max(0.0)
        }
    }
}

/// Configuration shared by every terminal session
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// User shown in the prompt
    pub user: String,
    /// Host shown in the prompt
    pub host: String,
    /// Working directory shown in the prompt
    pub cwd: String,
    /// Maximum stored history entries
    pub history_limit: usize,
    /// Delay between boot log lines
    pub boot_delay_ms: DelayRange,
    /// Delay between cracking animation rounds
    pub crack_interval_ms: DelayRange,
    /// Command that wipes the log
    pub clear_command: String,
    /// Command that enters the cracking animation
    pub crack_command: String,
    /// Offset applied to printed dates
    pub utc_offset_minutes: i32,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            user: "root".to_string(),
            host: "kali".to_string(),
            cwd: "~".to_string(),
            history_limit: crate::HISTORY_LIMIT,
            boot_delay_ms: DelayRange::new(10.0, 60.0),
            crack_interval_ms: DelayRange::new(400.0, 1200.0),
            clear_command: "clear".to_string(),
            crack_command: "crack-passwords".to_string(),
            utc_offset_minutes: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_within_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let range = DelayRange::new(400.0, 1200.0);
        for _ in 0..100 {
            let d = range.sample(&mut rng);
            assert!((400.0..1200.0).contains(&d));
        }
    }

    #[test]
    fn test_degenerate_range() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!((DelayRange::new(25.0, 25.0).sample(&mut rng) - 25.0).abs() < 0.001);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: TerminalConfig = serde_json::from_str(r#"{"host":"parrot"}"#).unwrap();
        assert_eq!(config.host, "parrot");
        assert_eq!(config.user, "root");
        assert_eq!(config.history_limit, 1000);
    }
}
