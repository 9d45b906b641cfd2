mod config;
mod display;
mod game_loop;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tictactoe_engine::config::Validate;
use tictactoe_engine::{log, logger};

use config::{FirstPlayerMode, get_config_manager};
use game_loop::{GameSettings, run_game};

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against a minimax AI")]
struct Args {
    /// YAML config file, defaults to tictactoe_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    first: Option<FirstPlayerMode>,

    #[arg(long)]
    think_delay_ms: Option<u64>,

    /// Log the minimax score of every candidate on the AI's turn
    #[arg(long)]
    show_scores: bool,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("CLI".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let mut config = get_config_manager(args.config.clone()).get_config()?;

    if let Some(first) = args.first {
        config.first_player = first;
    }
    if let Some(think_delay_ms) = args.think_delay_ms {
        config.think_delay_ms = think_delay_ms;
    }
    config.show_scores |= args.show_scores;
    config.validate()?;

    log!("Starting game with {:?}", config);

    let settings = GameSettings::from(&config);
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    let outcome = run_game(&mut input, &mut output, &settings)?;

    log!("Game over: {:?}", outcome);
    Ok(())
}
