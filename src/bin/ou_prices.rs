use std::env;
use std::error::Error;
use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use fairline::data::{self, InvalidInput};
use fairline::kelly::{self, BackPolicy};
use fairline::model::{Config, Model};
use fairline::print;
use fairline::scoregrid::OverUnder;
use fairline::{blend, model};

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// file to source the match data from
    #[clap(short = 'f', long)]
    file: PathBuf,

    /// account balance for staking advice; overrides the input file's balance
    #[clap(short = 'b', long)]
    balance: Option<f64>,

    /// print the correct-score grid
    #[clap(long)]
    grid: bool,

    /// truncation bound on per-side goals
    #[clap(long, default_value_t = model::DEFAULT_GOAL_RANGE)]
    goal_range: u8,

    /// weight of the market view in the blended probabilities
    #[clap(long, default_value_t = blend::DEFAULT_BLEND_FACTOR)]
    blend_factor: f64,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if let Some(balance) = self.balance {
            if balance < 0.0 {
                bail!("balance cannot be negative");
            }
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let inputs = match data::read_match_file(&args.file) {
        Ok(inputs) => inputs,
        Err(err) => {
            debug!("rejected {:?}: {err}", args.file);
            println!("{}", InvalidInput::MESSAGE);
            return Ok(());
        }
    };

    let model = Model::try_from(Config {
        goal_range: args.goal_range,
        blend_factor: args.blend_factor,
        zero_inflation: 0.0,
    })?;
    debug!("config: {:?}", model.config());
    let evaluation = model.derive(&inputs)?;

    info!(
        "prices:\n{}",
        Console::default().render(&print::tabulate_prices(&evaluation))
    );
    if args.grid {
        info!(
            "correct-score grid:\n{}",
            Console::default().render(&print::tabulate_scoregrid(&evaluation.scoregrid))
        );
    }
    println!("{}", print::summary(&evaluation));

    if let Some(balance) = args.balance.or(inputs.balance) {
        if balance < 0.0 {
            return Err("balance cannot be negative".into());
        }
        let under = OverUnder::Under.index();
        let over = OverUnder::Over.index();
        let under_advice = kelly::advise(
            evaluation.fair.prices[under],
            evaluation.market.prices[under],
            balance,
            BackPolicy::Permitted,
        );
        let over_advice = kelly::advise(
            evaluation.fair.prices[over],
            evaluation.market.prices[over],
            balance,
            BackPolicy::Suppressed,
        );
        println!("{}: {under_advice}", OverUnder::Under);
        println!(
            "{}:  {over_advice} [{}]",
            OverUnder::Over,
            over_advice.emphasis()
        );
    }

    Ok(())
}
