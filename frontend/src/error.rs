use thiserror::Error;

/// Display configuration that cannot be rendered as given.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("counter target {0} is not a finite number, showing 0 instead")]
    NonFiniteTarget(f64),
    #[error("animation duration {0}s must be finite and non-negative, skipping to the end")]
    InvalidDuration(f64),
}
