//! Search configuration for the route planner.

/// Default time penalty for changing line, in minutes.
pub const DEFAULT_CHANGE_MINS: f64 = 2.0;

/// Configuration parameters for route search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Minutes added for each change of line.
    /// Must be finite and non-negative.
    pub change_time_mins: f64,
}

impl SearchConfig {
    /// Create a new configuration with the given change penalty.
    pub fn new(change_time_mins: f64) -> Self {
        Self { change_time_mins }
    }

    /// Returns the change penalty in minutes.
    pub fn change_time(&self) -> f64 {
        self.change_time_mins
    }

    /// Whether the change penalty is usable by the search.
    pub fn is_valid(&self) -> bool {
        self.change_time_mins.is_finite() && self.change_time_mins >= 0.0
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            change_time_mins: DEFAULT_CHANGE_MINS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.change_time_mins, 2.0);
        assert_eq!(config.change_time(), 2.0);
        assert!(config.is_valid());
    }

    #[test]
    fn custom_config() {
        let config = SearchConfig::new(4.5);
        assert_eq!(config.change_time(), 4.5);
        assert!(config.is_valid());
    }

    #[test]
    fn zero_penalty_is_valid() {
        assert!(SearchConfig::new(0.0).is_valid());
    }

    #[test]
    fn rejects_negative_and_non_finite() {
        assert!(!SearchConfig::new(-1.0).is_valid());
        assert!(!SearchConfig::new(f64::NAN).is_valid());
        assert!(!SearchConfig::new(f64::INFINITY).is_valid());
    }
}
