//! Configuration resolution from CLI args

use crate::cli::{Args, ParallelizeBy};
use log::LevelFilter;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags a solver must all carry
    pub tags: Vec<String>,
    /// Root of the `{year}/day{DD}.txt` input tree
    pub input_dir: PathBuf,
    pub thread_count: usize,
    pub parallelize_by: ParallelizeBy,
    pub quiet: bool,
    /// Default log level when RUST_LOG is unset
    pub log_level: LevelFilter,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        let parallelize_by = if args.sequential {
            ParallelizeBy::Sequential
        } else {
            args.parallelize_by
        };

        Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir: expand_tilde(&args.input_dir),
            thread_count: args.threads.filter(|n| *n > 0).unwrap_or_else(num_cpus),
            parallelize_by,
            quiet: args.quiet,
            log_level: match args.verbose {
                0 => LevelFilter::Warn,
                1 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            },
        }
    }
}

/// Expand a leading `~` to the home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(args: &[&str]) -> Config {
        Config::from_args(Args::try_parse_from(args).unwrap())
    }

    #[test]
    fn test_tilde_is_expanded() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_tilde(Path::new("~/inputs")), home.join("inputs"));
        assert_eq!(expand_tilde(Path::new("~")), home);
        assert_eq!(expand_tilde(Path::new("/tmp/~x")), PathBuf::from("/tmp/~x"));
        assert_eq!(expand_tilde(Path::new("rel")), PathBuf::from("rel"));
    }

    #[test]
    fn test_sequential_flag_and_threads() {
        let cfg = config(&["aoc", "--sequential", "--threads", "3"]);
        assert_eq!(cfg.parallelize_by, ParallelizeBy::Sequential);
        assert_eq!(cfg.thread_count, 3);

        let cfg = config(&["aoc", "--threads", "0"]);
        assert!(cfg.thread_count >= 1);
    }

    #[test]
    fn test_verbosity_maps_to_level() {
        assert_eq!(config(&["aoc"]).log_level, LevelFilter::Warn);
        assert_eq!(config(&["aoc", "-v"]).log_level, LevelFilter::Debug);
        assert_eq!(config(&["aoc", "-vvv"]).log_level, LevelFilter::Trace);
    }
}
