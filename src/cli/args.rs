use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "proposal-docs")]
#[command(
    author,
    version,
    about = "Generate the proposal memo, video walkthrough script and benefits one-pager as PDF"
)]
pub struct Args {
    /// Directory the PDFs are written to (must already exist)
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log level filter for the given verbosity count
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_uses_current_directory() {
        let args = Args::try_parse_from(["proposal-docs"]).unwrap();
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert_eq!(args.log_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_output_dir_and_verbosity() {
        let args = Args::try_parse_from(["proposal-docs", "-o", "out", "-vv"]).unwrap();
        assert_eq!(args.output_dir, PathBuf::from("out"));
        assert_eq!(args.log_level(), log::LevelFilter::Debug);
    }
}
