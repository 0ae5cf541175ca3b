use thiserror::Error;

use crate::config::ConfigError;

/// Every recoverable failure the samples can report.
///
/// Proxy denial is deliberately absent: it is an ordinary
/// [`Outcome`](crate::proxy::Outcome), not an error.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("a decorator needs an inner component to wrap")]
    MissingComponent,

    #[error("unknown decorator layer '{0}' (expected A or B)")]
    UnknownLayer(String),

    #[error("unknown product type '{0}'")]
    UnknownProduct(String),

    #[error("no payment strategy has been set")]
    NoStrategy,

    #[error("invalid payment amount {0}: must be finite and not negative")]
    InvalidAmount(f64),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
