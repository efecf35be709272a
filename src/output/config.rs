//! Output configuration types

use termcolor::ColorChoice;

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Passed straight to termcolor. `Auto` defers to termcolor's own
    /// environment checks; `Always` ignores `NO_COLOR` and `TERM`.
    pub color: ColorChoice,
}

impl OutputConfig {
    pub fn color_choice(&self) -> ColorChoice {
        self.color
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorChoice::Auto,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forced_choice_is_kept() {
        let config = OutputConfig {
            color: ColorChoice::Always,
        };
        assert_eq!(config.color_choice(), ColorChoice::Always);
        assert_eq!(OutputConfig::default().color_choice(), ColorChoice::Auto);
    }
}
