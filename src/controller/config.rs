//! Blink controller configuration
//!
//! Fixed at init. Defaults come from [`crate::config::blink_defaults`]; the
//! period and mode can be overridden at build time through the
//! `BLINK_PERIOD_MS` and `BLINK_MODE` environment variables.

use crate::led::RGB8;

use super::state::BlinkMode;

/// Errors in the blink configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Period of zero would turn the bounded wait into a busy loop
    ZeroPeriod,
    /// Period is not a decimal number of milliseconds
    InvalidPeriod,
    /// Mode name not recognised
    UnknownMode,
}

/// Configuration for the blink controller
///
/// Fields are private: every value comes from [`BlinkConfig::new`] or the
/// defaults, so the period is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkConfig {
    period_ms: u32,
    color: RGB8,
    mode: BlinkMode,
}

impl Default for BlinkConfig {
    fn default() -> Self {
        use crate::config::blink_defaults;

        let (r, g, b) = blink_defaults::COLOR;
        Self {
            period_ms: blink_defaults::PERIOD_MS,
            color: RGB8::new(r, g, b),
            mode: BlinkMode::Latched,
        }
    }
}

impl BlinkConfig {
    /// Build a validated configuration
    pub fn new(period_ms: u32, color: RGB8, mode: BlinkMode) -> Result<Self, ConfigError> {
        if period_ms == 0 {
            return Err(ConfigError::ZeroPeriod);
        }
        Ok(Self {
            period_ms,
            color,
            mode,
        })
    }

    /// Wait timeout and idle blink interval, in milliseconds
    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Colour rendered while the LED is on
    pub fn color(&self) -> RGB8 {
        self.color
    }

    /// Decision rule
    pub fn mode(&self) -> BlinkMode {
        self.mode
    }

    /// Defaults with any build-time overrides applied
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::with_overrides(option_env!("BLINK_PERIOD_MS"), option_env!("BLINK_MODE"))
    }

    /// Defaults with the given textual overrides applied
    pub fn with_overrides(period: Option<&str>, mode: Option<&str>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let period_ms = match period {
            Some(s) => parse_period_ms(s)?,
            None => defaults.period_ms,
        };
        let mode = match mode {
            Some(s) => parse_mode(s)?,
            None => defaults.mode,
        };
        Self::new(period_ms, defaults.color, mode)
    }
}

/// Parse a period in milliseconds
pub fn parse_period_ms(s: &str) -> Result<u32, ConfigError> {
    let period = s
        .trim()
        .parse::<u32>()
        .map_err(|_| ConfigError::InvalidPeriod)?;
    if period == 0 {
        return Err(ConfigError::ZeroPeriod);
    }
    Ok(period)
}

/// Parse a mode name: `latched`, `armed` or `free`
pub fn parse_mode(s: &str) -> Result<BlinkMode, ConfigError> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("latched") {
        Ok(BlinkMode::Latched)
    } else if s.eq_ignore_ascii_case("armed") {
        Ok(BlinkMode::ArmedBlink)
    } else if s.eq_ignore_ascii_case("free") {
        Ok(BlinkMode::FreeRunning)
    } else {
        Err(ConfigError::UnknownMode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BlinkConfig::default();
        assert_eq!(config.period_ms(), 1000);
        assert_eq!(config.color(), RGB8::new(16, 16, 16));
        assert_eq!(config.mode(), BlinkMode::Latched);
    }

    #[test]
    fn test_new_rejects_zero_period() {
        assert_eq!(
            BlinkConfig::new(0, RGB8::default(), BlinkMode::Latched),
            Err(ConfigError::ZeroPeriod)
        );
        assert!(BlinkConfig::new(1, RGB8::default(), BlinkMode::Latched).is_ok());
    }

    #[test]
    fn test_parse_period() {
        assert_eq!(parse_period_ms("250"), Ok(250));
        assert_eq!(parse_period_ms(" 1000\n"), Ok(1000));
        assert_eq!(parse_period_ms("0"), Err(ConfigError::ZeroPeriod));
        assert_eq!(parse_period_ms("-5"), Err(ConfigError::InvalidPeriod));
        assert_eq!(parse_period_ms("1s"), Err(ConfigError::InvalidPeriod));
        assert_eq!(parse_period_ms(""), Err(ConfigError::InvalidPeriod));
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode("latched"), Ok(BlinkMode::Latched));
        assert_eq!(parse_mode("ARMED"), Ok(BlinkMode::ArmedBlink));
        assert_eq!(parse_mode(" free "), Ok(BlinkMode::FreeRunning));
        assert_eq!(parse_mode("blink"), Err(ConfigError::UnknownMode));
    }

    #[test]
    fn test_overrides() {
        let config = BlinkConfig::with_overrides(Some("500"), Some("free")).unwrap();
        assert_eq!(config.period_ms(), 500);
        assert_eq!(config.mode(), BlinkMode::FreeRunning);
        assert_eq!(config.color(), BlinkConfig::default().color());

        assert_eq!(
            BlinkConfig::with_overrides(None, None),
            Ok(BlinkConfig::default())
        );
        assert_eq!(
            BlinkConfig::with_overrides(Some("abc"), None),
            Err(ConfigError::InvalidPeriod)
        );
        assert_eq!(
            BlinkConfig::with_overrides(None, Some("nope")),
            Err(ConfigError::UnknownMode)
        );
    }

    #[test]
    fn test_every_constructor_keeps_period_nonzero() {
        assert!(BlinkConfig::default().period_ms() > 0);
        assert!(BlinkConfig::from_build_env().map_or(true, |c| c.period_ms() > 0));
        assert_eq!(
            BlinkConfig::with_overrides(Some("0"), None),
            Err(ConfigError::ZeroPeriod)
        );
        assert_eq!(
            BlinkConfig::new(0, RGB8::new(1, 2, 3), BlinkMode::FreeRunning),
            Err(ConfigError::ZeroPeriod)
        );

        let config = BlinkConfig::new(1, RGB8::new(1, 2, 3), BlinkMode::FreeRunning).unwrap();
        assert_eq!(config.period_ms(), 1);
        assert_eq!(config.color(), RGB8::new(1, 2, 3));
        assert_eq!(config.mode(), BlinkMode::FreeRunning);
    }
}
