//! End-to-end derivation of fair prices from match inputs.

use thiserror::Error;
use tracing::debug;

use crate::blend;
use crate::data::{MatchInputs, Side};
use crate::linear::Matrix;
use crate::market::Market;
use crate::rating;
use crate::scoregrid;

/// Truncation bound on per-side goals; the omitted tail is negligible for
/// realistic rates.
pub const DEFAULT_GOAL_RANGE: u8 = 10;

/// Largest grid the factorial table supports.
const MAX_GOAL_RANGE: u8 = 35;

#[derive(Clone, Debug)]
pub struct Config {
    pub goal_range: u8,
    pub blend_factor: f64,
    pub zero_inflation: f64,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            goal_range: DEFAULT_GOAL_RANGE,
            blend_factor: blend::DEFAULT_BLEND_FACTOR,
            zero_inflation: 0.0,
        }
    }
}

#[derive(Debug, Error)]
pub enum InvalidConfig {
    #[error("goal range must lie in {min}..={max}, got {goal_range}")]
    GoalRangeOutOfBounds { goal_range: u8, min: u8, max: u8 },

    #[error("blend factor must lie in [0, 1], got {0}")]
    BlendFactorOutOfRange(f64),

    #[error("zero inflation must lie in [0, 1), got {0}")]
    ZeroInflationOutOfRange(f64),
}

#[derive(Debug, Error)]
pub enum DerivationError {
    #[error("negative goal rate {rate:.3} for {side:?}")]
    NegativeGoalRate { side: Side, rate: f64 },
}

/// One evaluation's full output. Each stage's probability pair is
/// independently normalised and indexed by [`scoregrid::OverUnder`].
#[derive(Debug)]
pub struct Evaluation {
    pub home_rate: f64,
    pub away_rate: f64,
    pub model_probs: [f64; 2],
    pub market: Market,
    pub blended_probs: [f64; 2],
    pub fair: Market,
    pub scoregrid: Matrix,
}

pub struct Model {
    config: Config,
}
impl Model {
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the whole pipeline: per-side goal rates, score grid, totals pair,
    /// market fit, blend, fair framing. Holds no state across invocations.
    pub fn derive(&self, inputs: &MatchInputs) -> Result<Evaluation, DerivationError> {
        let home_rate = rating::expected_goal_rate(&inputs.home, &inputs.away);
        let away_rate = rating::expected_goal_rate(&inputs.away, &inputs.home);
        for (side, rate) in [(Side::Home, home_rate), (Side::Away, away_rate)] {
            if rate < 0.0 {
                return Err(DerivationError::NegativeGoalRate { side, rate });
            }
        }
        debug!("goal rates: home={home_rate:.3}, away={away_rate:.3}");

        let goal_range = self.config.goal_range as usize;
        let mut scoregrid = Matrix::allocate(goal_range, goal_range);
        scoregrid::from_zero_inflated_poisson(
            home_rate,
            away_rate,
            self.config.zero_inflation,
            &mut scoregrid,
        );
        let model_probs = scoregrid::total_goals_probs(&scoregrid);

        let market = Market::fit([inputs.live_under_price, inputs.live_over_price]);
        debug!(
            "model probs: {model_probs:?}, market probs: {:?} (overround {:.4})",
            market.probs, market.overround
        );

        let blended_probs = blend::blend(model_probs, market.probs, self.config.blend_factor);
        let fair = Market::frame(blended_probs);

        Ok(Evaluation {
            home_rate,
            away_rate,
            model_probs,
            market,
            blended_probs,
            fair,
            scoregrid,
        })
    }
}

impl TryFrom<Config> for Model {
    type Error = InvalidConfig;

    fn try_from(config: Config) -> Result<Self, Self::Error> {
        if !(scoregrid::UNDER_GOALS..=MAX_GOAL_RANGE).contains(&config.goal_range) {
            return Err(InvalidConfig::GoalRangeOutOfBounds {
                goal_range: config.goal_range,
                min: scoregrid::UNDER_GOALS,
                max: MAX_GOAL_RANGE,
            });
        }
        if !(0.0..=1.0).contains(&config.blend_factor) {
            return Err(InvalidConfig::BlendFactorOutOfRange(config.blend_factor));
        }
        if !(0.0..1.0).contains(&config.zero_inflation) {
            return Err(InvalidConfig::ZeroInflationOutOfRange(config.zero_inflation));
        }
        Ok(Self { config })
    }
}
