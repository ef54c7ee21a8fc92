//! A Mastermind terminal client.
//!
//! Draws a secret (remote randomness with local fallback), runs the
//! guess/hint/history loop against the turn engine, and records wins
//! to the SQLite leaderboard.

use anyhow::Result;
use pico_args::Arguments;

use mastermind::Difficulty;

mod app;
mod logging;

const HELP: &str = "\
Play Mastermind in the terminal

USAGE:
  mm_cli [OPTIONS]

OPTIONS:
  --name NAME           Player name recorded on the leaderboard
  --difficulty LEVEL    normal (digits 0-7, 2 hints) or hard (digits 0-9, 1 hint)
  --db PATH             Leaderboard database file  [default: mastermind.db]

FLAGS:
  --leaderboard         Print the top five wins and exit
  -h, --help            Print help information
";

struct Args {
    name: Option<String>,
    difficulty: Option<Difficulty>,
    db_path: Option<String>,
    leaderboard: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let mut pargs = Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        name: pargs.opt_value_from_str("--name").ok().flatten(),
        difficulty: pargs.opt_value_from_str("--difficulty").ok().flatten(),
        db_path: pargs.opt_value_from_str("--db").ok().flatten(),
        leaderboard: pargs.contains("--leaderboard"),
    };

    if args.leaderboard {
        app::show_leaderboard(args.db_path).await
    } else {
        app::run(args.name, args.difficulty, args.db_path).await
    }
}
