//! Transaction record.
//!
//! A `Record` is persisted as one decimal code per line.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LineStoreError;

/// A single transaction, identified by its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    code: i32,
}

impl Record {
    /// Create a record. Any integer is accepted.
    pub fn new(code: i32) -> Self {
        Self { code }
    }

    /// The transaction code.
    pub fn code(&self) -> i32 {
        self.code
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl FromStr for Record {
    type Err = LineStoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<i32>()
            .map(Record::new)
            .map_err(|e| LineStoreError::decode(format!("invalid record code {:?}: {}", trimmed, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_code() {
        assert_eq!(Record::new(42).code(), 42);
    }

    #[test]
    fn test_accepts_zero_and_negative() {
        assert_eq!(Record::new(0).code(), 0);
        assert_eq!(Record::new(-7).code(), -7);
        assert_eq!(Record::new(i32::MIN).code(), i32::MIN);
    }

    #[test]
    fn test_display() {
        assert_eq!(Record::new(-15).to_string(), "-15");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let record: Record = "  301 \t".parse().unwrap();
        assert_eq!(record, Record::new(301));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = "EOF".parse::<Record>().unwrap_err();
        assert!(matches!(err, LineStoreError::Decode(_)));
        assert!(err.to_string().contains("EOF"));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!("".parse::<Record>().is_err());
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Record::new(5)).unwrap();
        assert_eq!(json, r#"{"code":5}"#);
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back.code(), 5);
    }
}
