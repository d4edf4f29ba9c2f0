//! This program reads a set of domino tiles from the command line and
//! prints them in the order and orientation of a closed chain, or the
//! reason why they cannot be arranged into one. For example,
//!
//! ```text
//! $ cargo run --example circle -- 1|3 4|3 1|3 3|4
//! [1|3] [3|4] [4|3] [3|1]
//! ```
//!
//! Set `CIRCLE_LOG=trace` to watch the search lay down and take back tiles.

use clap::{value_parser, Arg, ArgAction, Command};
use domino_circles::{ChainGraph, CircleBuilder, SearchLimits, Tile};
use std::process::ExitCode;

fn make_parser() -> Command {
    Command::new("circle")
        .about("Arranges domino tiles into a closed chain")
        .arg(
            Arg::new("tiles")
                .value_name("TILE")
                .help("A tile written as `left|right`, with values between 0 and 6")
                .num_args(0..)
                .action(ArgAction::Append)
                .value_parser(value_parser!(Tile)),
        )
        .arg(
            Arg::new("max-steps")
                .short('m')
                .long("max-steps")
                .value_name("N")
                .help("Give up after laying down N tiles")
                .value_parser(value_parser!(u64)),
        )
}

fn main() -> ExitCode {
    let env = env_logger::Env::new()
        .filter("CIRCLE_LOG")
        .write_style("CIRCLE_LOG_STYLE");
    env_logger::init_from_env(env);

    let matches = make_parser().get_matches();
    let tiles: Vec<Tile> = matches
        .get_many::<Tile>("tiles")
        .map(|tiles| tiles.copied().collect())
        .unwrap_or_default();
    let limits = SearchLimits {
        max_steps: matches.get_one::<u64>("max-steps").copied(),
    };
    log::debug!("read {} tiles, {limits:?}", tiles.len());

    match ChainGraph::new(&tiles).with_limits(limits).form_circle() {
        Ok(circle) => {
            println!("{circle}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
