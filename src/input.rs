//! Reading integer sequences from text streams.
//!
//! Input is whitespace or newline separated signed integers. Any token that
//! is not an integer aborts the read. Hitting the capacity bound either fails
//! the read or, under [`OverflowPolicy::Truncate`], keeps the values already
//! collected and reports how many were left out.

use std::io::{self, BufRead};

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{AnalysisConfig, OverflowPolicy};
use crate::sequence::{CapacityExceeded, Sequence};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("malformed integer '{token}' on line {line}")]
    MalformedToken { line: usize, token: String },
    #[error(transparent)]
    CapacityExceeded(#[from] CapacityExceeded),
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// A sequence read from a stream plus the number of values that did not fit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingested {
    pub sequence: Sequence,
    pub dropped: usize,
}

/// Read every integer from `reader` into a bounded [`Sequence`].
pub fn read_sequence<R: BufRead>(reader: R, config: &AnalysisConfig) -> Result<Ingested, InputError> {
    let mut sequence = Sequence::with_capacity_limit(config.capacity);
    let mut dropped = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        for token in line.split_whitespace() {
            let value: i64 = token.parse().map_err(|_| InputError::MalformedToken {
                line: index + 1,
                token: token.to_string(),
            })?;

            match sequence.push(value) {
                Ok(()) => {}
                Err(err) => match config.overflow {
                    OverflowPolicy::Reject => return Err(err.into()),
                    OverflowPolicy::Truncate => dropped += 1,
                },
            }
        }
    }

    if dropped > 0 {
        warn!(
            capacity = config.capacity,
            dropped, "input exceeded capacity, extra values were not analyzed"
        );
    }
    debug!(count = sequence.len(), "read input sequence");

    Ok(Ingested { sequence, dropped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn config(capacity: usize, overflow: OverflowPolicy) -> AnalysisConfig {
        AnalysisConfig {
            capacity,
            overflow,
            ..AnalysisConfig::default()
        }
    }

    #[test]
    fn test_reads_whitespace_and_newlines() {
        let input = Cursor::new("5 1\n4\t2\n\n  8  \n");
        let ingested = read_sequence(input, &AnalysisConfig::default()).unwrap();
        assert_eq!(ingested.sequence.as_slice(), &[5, 1, 4, 2, 8]);
        assert_eq!(ingested.dropped, 0);
    }

    #[test]
    fn test_reads_negative_values() {
        let input = Cursor::new("-3 +3 0");
        let ingested = read_sequence(input, &AnalysisConfig::default()).unwrap();
        assert_eq!(ingested.sequence.as_slice(), &[-3, 3, 0]);
    }

    #[test]
    fn test_empty_input_is_empty_sequence() {
        let ingested = read_sequence(Cursor::new(""), &AnalysisConfig::default()).unwrap();
        assert!(ingested.sequence.is_empty());
    }

    #[test]
    fn test_rejects_malformed_token() {
        let input = Cursor::new("1 2\n3 x4 5\n");
        let err = read_sequence(input, &AnalysisConfig::default()).unwrap_err();
        match err {
            InputError::MalformedToken { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "x4");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_float_token() {
        let err = read_sequence(Cursor::new("1 2.5"), &AnalysisConfig::default()).unwrap_err();
        assert!(matches!(err, InputError::MalformedToken { .. }));
    }

    #[test]
    fn test_overflow_rejected() {
        let input = Cursor::new("1 2 3 4");
        let err = read_sequence(input, &config(3, OverflowPolicy::Reject)).unwrap_err();
        assert!(matches!(
            err,
            InputError::CapacityExceeded(CapacityExceeded { capacity: 3 })
        ));
    }

    #[test]
    fn test_overflow_truncated_and_counted() {
        let input = Cursor::new("1 2 3\n4 5");
        let ingested = read_sequence(input, &config(3, OverflowPolicy::Truncate)).unwrap();
        assert_eq!(ingested.sequence.as_slice(), &[1, 2, 3]);
        assert_eq!(ingested.dropped, 2);
    }

    #[test]
    fn test_exactly_at_capacity_is_accepted() {
        let input = Cursor::new("1 2 3");
        let ingested = read_sequence(input, &config(3, OverflowPolicy::Reject)).unwrap();
        assert_eq!(ingested.sequence.len(), 3);
    }
}
