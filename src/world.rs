use crate::goods::{self, GoodsProfile};
use crate::hex::HexCoord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// Starport quality class, best (A) to none (X).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumString, Display, Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Starport {
    A,
    B,
    C,
    D,
    E,
    #[default]
    X,
}

impl Starport {
    pub fn score(self) -> i8 {
        match self {
            Self::A => 4,
            Self::B => 3,
            Self::C => 2,
            Self::D => 1,
            Self::E => 0,
            Self::X => -1,
        }
    }

    /// Trade throughput multiplier used by the profit model.
    pub fn bonus(self) -> f64 {
        match self {
            Self::A => 1.4,
            Self::B => 1.2,
            Self::C => 1.0,
            Self::D => 0.8,
            Self::E => 0.6,
            Self::X => 0.4,
        }
    }

    /// Lenient parse for upstream data; anything unrecognized degrades to X.
    pub fn from_code(code: &str) -> Self {
        Self::from_str(code.trim()).unwrap_or(Self::X)
    }
}

/// Fixed vocabulary of trade classification codes. Unknown codes from
/// upstream data are dropped during ingestion.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum TradeCode {
    /// Agricultural
    Ag,
    /// Industrial
    In,
    /// Rich
    Ri,
    /// High population
    Hi,
    /// Poor
    Po,
    /// Desert
    De,
    /// Ice-capped
    Ic,
    /// Non-aligned
    Na,
    /// Asteroid belt
    As,
}

/// One enriched world record. Constructed once per run by the loader and
/// immutable for the duration of the analysis.
#[derive(Debug, Clone, Serialize)]
pub struct World {
    pub name: String,
    pub sector: String,
    pub hex: HexCoord,
    pub starport: Starport,
    pub population_exp: u8,
    pub resource_units: f64,
    pub trade_codes: BTreeSet<TradeCode>,
}

impl World {
    pub fn has_code(&self, code: TradeCode) -> bool {
        self.trade_codes.contains(&code)
    }

    pub fn goods(&self) -> GoodsProfile {
        goods::classify(&self.trade_codes)
    }

    /// Total over any input: the upstream table sometimes carries tag cells
    /// as a serialized list (`['Ag', 'Ri']`) and sometimes whitespace
    /// separated (`Ag Ri`). Unknown or garbage tokens are dropped.
    pub fn parse_trade_codes(raw: &str) -> BTreeSet<TradeCode> {
        raw.split(|c: char| c.is_whitespace() || matches!(c, ',' | '[' | ']' | '\'' | '"'))
            .filter(|t| !t.is_empty())
            .filter_map(|t| TradeCode::from_str(t).ok())
            .collect()
    }
}

/// Restricts a world set to the named sectors (case-insensitive). An empty
/// sector list keeps everything.
pub fn in_sectors(worlds: &[World], sectors: &[String]) -> Vec<World> {
    if sectors.is_empty() {
        return worlds.to_vec();
    }
    worlds
        .iter()
        .filter(|w| sectors.iter().any(|s| s.eq_ignore_ascii_case(&w.sector)))
        .cloned()
        .collect()
}
