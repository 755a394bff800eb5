use std::error::Error;
use std::fmt;

/// Errors produced by the randomizer.
#[derive(Debug)]
pub enum RandomizerError {
    /// `next_int` was called with a negative maximum.
    InvalidMax(i64),
    /// A state snapshot could not be encoded or decoded.
    Snapshot(serde_json::Error),
}

impl fmt::Display for RandomizerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandomizerError::InvalidMax(max) => {
                write!(f, "next_int requires max >= 0, got {}", max)
            }
            RandomizerError::Snapshot(err) => write!(f, "snapshot error: {}", err),
        }
    }
}

impl Error for RandomizerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RandomizerError::Snapshot(err) => Some(err),
            RandomizerError::InvalidMax(_) => None,
        }
    }
}

impl From<serde_json::Error> for RandomizerError {
    fn from(err: serde_json::Error) -> Self {
        RandomizerError::Snapshot(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_max_names_the_argument() {
        let msg = RandomizerError::InvalidMax(-3).to_string();
        assert!(msg.contains("-3"), "message was: {}", msg);
    }

    #[test]
    fn snapshot_error_exposes_its_source() {
        let inner = serde_json::from_str::<i64>("not json").unwrap_err();
        let err = RandomizerError::from(inner);
        assert!(err.source().is_some());
    }
}
