use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::logging;

use self::play::PlayArg;

mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
    /// Write log records to this file (the terminal belongs to the game)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    /// Most verbose level written to the log file
    #[arg(long, global = true, default_value = "info")]
    log_level: tracing::Level,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play the game in the terminal (default)
    Play(#[clap(flatten)] PlayArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    if let Some(path) = &args.log_file {
        logging::init(path, args.log_level)?;
    }
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_args_are_well_formed() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_play() {
        let args = CommandArgs::try_parse_from(["horizon"]).unwrap();
        assert!(args.mode.is_none());
        assert_eq!(args.log_level, tracing::Level::INFO);
        assert!(args.log_file.is_none());
    }

    #[test]
    fn test_play_flags() {
        let args = CommandArgs::try_parse_from([
            "horizon",
            "play",
            "--seed",
            "0123456789abcdef0123456789abcdef",
            "--no-ghost",
            "--tick-rate",
            "250",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let Some(Mode::Play(arg)) = args.mode else {
            panic!("expected play mode");
        };
        assert!(arg.no_ghost);
        assert!(arg.seed.is_some());
        assert!((arg.tick_rate - 250.0).abs() < f64::EPSILON);
        assert_eq!(args.log_level, tracing::Level::DEBUG);
    }

    #[test]
    fn test_bad_seed_is_rejected() {
        let result = CommandArgs::try_parse_from(["horizon", "play", "--seed", "xyz"]);
        assert!(result.is_err());
    }
}
