//! Match input records and file sourcing.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

/// Raw pre-match statistics for one side. Averages and xG figures are
/// per-match; form may be negative.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    pub scored_avg: f64,
    pub conceded_avg: f64,
    pub xg_scored: f64,
    pub xg_conceded: f64,
    pub injuries: u8,
    pub position: u8,
    pub form: i8,
}

/// Everything collected for one evaluation. Deserialisation is
/// all-or-nothing: a missing or non-numeric field rejects the record as a
/// unit and no partial result is ever derived from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchInputs {
    pub home: TeamStats,
    pub away: TeamStats,
    pub live_under_price: f64,
    pub live_over_price: f64,
    #[serde(default)]
    pub balance: Option<f64>,
}

#[derive(Debug, Error)]
pub enum InvalidInput {
    #[error("{0}")]
    Unreadable(#[from] std::io::Error),

    #[error("{0}")]
    Malformed(#[from] serde_json::Error),
}
impl InvalidInput {
    /// The uniform operator-facing message; the structured cause goes to the
    /// log, never to the result output.
    pub const MESSAGE: &'static str = "please enter valid numerical values";
}

pub fn read_match_file(path: &Path) -> Result<MatchInputs, InvalidInput> {
    let file = File::open(path)?;
    let inputs = serde_json::from_reader(BufReader::new(file))?;
    Ok(inputs)
}
