use crate::error::{TradeError, TradeResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position on the sector map, encoded upstream as a zero-padded
/// four-digit string ("0101" = column 1, row 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HexCoord {
    pub x: u8,
    pub y: u8,
}

impl HexCoord {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Parses a four-digit hex string. Malformed coordinates are rejected
    /// here, at the ingestion boundary; nothing downstream coerces them.
    pub fn parse(raw: &str) -> TradeResult<Self> {
        let s = raw.trim();
        let b = s.as_bytes();
        if b.len() != 4 || !b.iter().all(|c| c.is_ascii_digit()) {
            return Err(TradeError::Validation(format!(
                "Malformed hex coordinate '{}': expected 4 digits",
                raw
            )));
        }
        let x = (b[0] - b'0') * 10 + (b[1] - b'0');
        let y = (b[2] - b'0') * 10 + (b[3] - b'0');
        Ok(Self { x, y })
    }

    /// Map distance in parsecs. On the offset grid, deltas with the same
    /// sign ride the diagonal (max of the components); opposite signs must
    /// be traversed separately (sum).
    pub fn distance(self, other: HexCoord) -> u32 {
        let dx = other.x as i32 - self.x as i32;
        let dy = other.y as i32 - self.y as i32;

        if (dx >= 0 && dy >= 0) || (dx < 0 && dy < 0) {
            dx.abs().max(dy.abs()) as u32
        } else {
            (dx.abs() + dy.abs()) as u32
        }
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.x, self.y)
    }
}
