use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_ATTEMPTS: u32 = 10;
pub const DEFAULT_BOT_MOVE_DELAY_MS: u64 = 500;
pub const DEFAULT_ROUND_RESET_DELAY_MS: u64 = 2000;

/// Session knobs. The delays exist purely for perceptible pacing; tests run
/// with both at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    pub attempts: u32,
    pub bot_move_delay_ms: u64,
    pub round_reset_delay_ms: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_ATTEMPTS,
            bot_move_delay_ms: DEFAULT_BOT_MOVE_DELAY_MS,
            round_reset_delay_ms: DEFAULT_ROUND_RESET_DELAY_MS,
        }
    }
}

impl SessionSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.attempts == 0 {
            return Err("attempts must be greater than 0".to_string());
        }
        if self.attempts > 100 {
            return Err("attempts must not exceed 100".to_string());
        }
        if self.bot_move_delay_ms > 10_000 {
            return Err("bot_move_delay_ms must not exceed 10000".to_string());
        }
        if self.round_reset_delay_ms > 60_000 {
            return Err("round_reset_delay_ms must not exceed 60000".to_string());
        }
        Ok(())
    }

    pub fn bot_move_delay(&self) -> Duration {
        Duration::from_millis(self.bot_move_delay_ms)
    }

    pub fn round_reset_delay(&self) -> Duration {
        Duration::from_millis(self.round_reset_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = SessionSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.attempts, 10);
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let settings = SessionSettings {
            attempts: 0,
            ..SessionSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_excessive_delays_rejected() {
        let settings = SessionSettings {
            bot_move_delay_ms: 60_000,
            ..SessionSettings::default()
        };
        assert!(settings.validate().is_err());

        let settings = SessionSettings {
            round_reset_delay_ms: 120_000,
            ..SessionSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
