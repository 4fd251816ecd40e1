use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::config::MoveeConfig;
use crate::error::ConfigurationError;

/// Distance in pixels covered by one directional command. Always positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StepSize(NonZeroU32);

impl StepSize {
    pub const DEFAULT: Self = match NonZeroU32::new(MoveeConfig::DEFAULT_STEP_SIZE) {
        Some(step) => Self(step),
        None => panic!("default step size must be positive"),
    };

    pub fn new(px: i64) -> Result<Self, ConfigurationError> {
        u32::try_from(px)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or_else(|| ConfigurationError::InvalidStepSize(px.to_string()))
    }

    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for StepSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for StepSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Parses a base-10 integer, ignoring surrounding whitespace.
///
/// Trailing garbage such as `"12px"` or `"3.5"` is rejected rather than
/// silently truncated.
impl FromStr for StepSize {
    type Err = ConfigurationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        trimmed
            .parse::<i64>()
            .map_err(|_| ConfigurationError::InvalidStepSize(trimmed.to_string()))
            .and_then(Self::new)
    }
}

impl TryFrom<u32> for StepSize {
    type Error = ConfigurationError;

    fn try_from(px: u32) -> Result<Self, Self::Error> {
        Self::new(i64::from(px))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_twenty_pixels() {
        assert_eq!(StepSize::default().get(), 20);
    }

    #[test]
    fn rejects_non_positive_values() {
        assert!(StepSize::new(0).is_err());
        assert!(StepSize::new(-5).is_err());
        assert!(StepSize::new(i64::from(u32::MAX) + 1).is_err());
        assert_eq!(StepSize::new(1).unwrap().get(), 1);
    }

    #[test]
    fn parses_trimmed_integers_only() {
        assert_eq!(" 35 ".parse::<StepSize>().unwrap().get(), 35);
        assert!("".parse::<StepSize>().is_err());
        assert!("abc".parse::<StepSize>().is_err());
        assert!("12px".parse::<StepSize>().is_err());
        assert!("3.5".parse::<StepSize>().is_err());
        assert!("-1".parse::<StepSize>().is_err());
    }

    #[test]
    fn invalid_input_is_reported_verbatim() {
        let err = "nope".parse::<StepSize>().unwrap_err();
        assert_eq!(err, ConfigurationError::InvalidStepSize("nope".into()));
    }
}
