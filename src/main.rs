use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use clap::Parser;
use smartcalc::Session;

/// smartcalc evaluates integer expressions line by line, with variables,
/// operator precedence and arbitrary precision.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads input lines from a file instead of standard input.
    #[arg(short, long)]
    file: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut session = Session::new();
    let stdout = io::stdout().lock();

    let result = if let Some(path) = &args.file {
        let file = File::open(path).unwrap_or_else(|_| {
                                        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                  path.display());
                                        std::process::exit(1);
                                    });
        session.run(BufReader::new(file), stdout)
    } else {
        session.run(io::stdin().lock(), stdout)
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
