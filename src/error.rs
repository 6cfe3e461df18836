//! Error types for parallel reductions

use std::any::Any;
use std::ops::Range;
use thiserror::Error;

/// Error type for a reduction whose operation fails with `X`.
#[derive(Error, Debug)]
pub enum Error<X> {
    #[error("reducing slice {index} ({range:?}) failed")]
    Slice {
        index: usize,
        range: Range<usize>,
        #[source]
        source: X,
    },
    #[error("combining partial results failed")]
    Combine {
        #[source]
        source: X,
    },
    #[error("a worker thread panicked")]
    Panicked(Box<dyn Any + Send + 'static>),
}

impl<X> Error<X> {
    /// Returns the error raised by the operation, if any.
    pub fn into_source(self) -> Option<X> {
        match self {
            Error::Slice { source, .. } | Error::Combine { source } => Some(source),
            Error::Panicked(_) => None,
        }
    }
}

/// Error type for invalid tuning arguments
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("sequential threshold cannot be zero")]
    ZeroThreshold,
    #[error("max parallelism cannot be zero")]
    ZeroParallelism,
}

/// Arithmetic overflow in a checked sum.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("arithmetic overflow")]
pub struct Overflow;

#[cfg(test)]
mod tests {
    use crate::error::*;

    #[test]
    fn test_error_display() {
        let err: Error<Overflow> = Error::Slice {
            index: 2,
            range: 20..30,
            source: Overflow,
        };
        assert_eq!(err.to_string(), "reducing slice 2 (20..30) failed");
        assert_eq!(err.into_source(), Some(Overflow));

        let err: Error<Overflow> = Error::Combine { source: Overflow };
        assert_eq!(err.to_string(), "combining partial results failed");

        let err: Error<Overflow> = Error::Panicked(Box::new("boom"));
        assert_eq!(err.to_string(), "a worker thread panicked");
        assert!(err.into_source().is_none());
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error as _;
        let err: Error<Overflow> = Error::Combine { source: Overflow };
        assert_eq!(err.source().map(|s| s.to_string()), Some("arithmetic overflow".to_string()));
    }
}
