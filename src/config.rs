//! Command-line configuration
//!
//! [`Cli`] is the raw `clap` surface; [`Config`] is the validated form the rest
//! of the program consumes.

use crate::algorithms::Algorithm;
use crate::model::{from_values, ArrayGenerator, Element};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const MIN_ARRAY_SIZE: usize = 10;
pub const MAX_ARRAY_SIZE: usize = 100;
pub const DEFAULT_ARRAY_SIZE: usize = 50;

/// Step used by the size and speed hotkeys
pub const ADJUST_STEP: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("array size {0} is outside {min}..={max}", min = MIN_ARRAY_SIZE, max = MAX_ARRAY_SIZE)]
    SizeOutOfRange(usize),

    #[error("speed {0} is outside {min}..={max}", min = Speed::MIN, max = Speed::MAX)]
    SpeedOutOfRange(u8),

    #[error("{0} values given, at most {max} are supported", max = MAX_ARRAY_SIZE)]
    TooManyValues(usize),

    #[error("--values needs at least one value")]
    NoValues,
}

/// Auto-play cadence, 1 (slowest) to 100 (fastest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Speed(u8);

impl Speed {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    pub fn new(speed: u8) -> Result<Self, ConfigError> {
        if (Self::MIN..=Self::MAX).contains(&speed) {
            Ok(Speed(speed))
        } else {
            Err(ConfigError::SpeedOutOfRange(speed))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Delay between two auto-play steps: 991 ms at speed 1, 100 ms at 100
    pub fn delay(self) -> Duration {
        Duration::from_millis(1000 - 9 * u64::from(self.0))
    }

    pub fn faster(self) -> Self {
        Speed(self.0.saturating_add(ADJUST_STEP as u8).min(Self::MAX))
    }

    pub fn slower(self) -> Self {
        Speed(self.0.saturating_sub(ADJUST_STEP as u8).max(Self::MIN))
    }
}

impl Default for Speed {
    fn default() -> Self {
        Speed(50)
    }
}

#[derive(Debug, Parser)]
#[command(name = "sortty")]
#[command(about = "Step through sorting algorithms in the terminal", long_about = None)]
pub struct Cli {
    /// Algorithm to visualize
    #[arg(short, long, value_enum, default_value_t = Algorithm::Bubble)]
    pub algorithm: Algorithm,

    /// Number of random elements
    #[arg(short = 'n', long, default_value_t = DEFAULT_ARRAY_SIZE)]
    pub size: usize,

    /// Auto-play speed (1-100)
    #[arg(short, long, default_value_t = 50)]
    pub speed: u8,

    /// Seed for random arrays
    #[arg(long)]
    pub seed: Option<u64>,

    /// Explicit input values, e.g. --values 3,1,2
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    pub values: Option<Vec<u32>>,

    /// Print every step to stdout instead of starting the TUI
    #[arg(long)]
    pub print: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Tui,
    Print,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub algorithm: Algorithm,
    pub size: usize,
    pub speed: Speed,
    pub seed: Option<u64>,
    pub values: Option<Vec<u32>>,
    pub mode: Mode,
    pub log_level: tracing::Level,
    pub log_file: Option<PathBuf>,
}

impl TryFrom<Cli> for Config {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if !(MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE).contains(&cli.size) {
            return Err(ConfigError::SizeOutOfRange(cli.size));
        }
        let speed = Speed::new(cli.speed)?;

        if let Some(values) = &cli.values {
            if values.is_empty() {
                return Err(ConfigError::NoValues);
            }
            if values.len() > MAX_ARRAY_SIZE {
                return Err(ConfigError::TooManyValues(values.len()));
            }
        }

        let log_level = match cli.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        Ok(Config {
            algorithm: cli.algorithm,
            size: cli.size,
            speed,
            seed: cli.seed,
            values: cli.values,
            mode: if cli.print { Mode::Print } else { Mode::Tui },
            log_level,
            log_file: cli.log_file,
        })
    }
}

impl Config {
    /// Generator for this run; seeded from `--seed` when given
    pub fn generator(&self) -> ArrayGenerator {
        self.seed
            .map(ArrayGenerator::new)
            .unwrap_or_else(ArrayGenerator::from_entropy)
    }

    /// Starting array: the explicit `--values`, otherwise `size` random elements
    pub fn input(&self, generator: &mut ArrayGenerator) -> Vec<Element> {
        match &self.values {
            Some(values) => from_values(values),
            None => generator.generate(self.size),
        }
    }
}

/// Clamp a hotkey-adjusted array size into the supported range
pub fn clamp_size(size: usize) -> usize {
    size.clamp(MIN_ARRAY_SIZE, MAX_ARRAY_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, ConfigError> {
        let cli = Cli::try_parse_from(std::iter::once("sortty").chain(args.iter().copied()))
            .expect("arguments should parse");
        Config::try_from(cli)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.algorithm, Algorithm::Bubble);
        assert_eq!(config.size, DEFAULT_ARRAY_SIZE);
        assert_eq!(config.speed, Speed::default());
        assert_eq!(config.mode, Mode::Tui);
        assert_eq!(config.log_level, tracing::Level::WARN);
    }

    #[test]
    fn test_values_and_algorithm() {
        let config = parse(&["-a", "quick", "--values", "5,3,8", "--print", "-vv"]).unwrap();
        assert_eq!(config.algorithm, Algorithm::Quick);
        assert_eq!(config.values, Some(vec![5, 3, 8]));
        assert_eq!(config.mode, Mode::Print);
        assert_eq!(config.log_level, tracing::Level::DEBUG);
    }

    #[test]
    fn test_size_out_of_range() {
        assert_eq!(
            parse(&["-n", "5"]).unwrap_err(),
            ConfigError::SizeOutOfRange(5)
        );
        assert_eq!(
            parse(&["--size", "101"]).unwrap_err(),
            ConfigError::SizeOutOfRange(101)
        );
    }

    #[test]
    fn test_speed_out_of_range() {
        assert_eq!(
            parse(&["-s", "0"]).unwrap_err(),
            ConfigError::SpeedOutOfRange(0)
        );
    }

    #[test]
    fn test_too_many_values() {
        let values = vec!["1"; MAX_ARRAY_SIZE + 1].join(",");
        assert_eq!(
            parse(&["--values", values.as_str()]).unwrap_err(),
            ConfigError::TooManyValues(MAX_ARRAY_SIZE + 1)
        );
    }

    #[test]
    fn test_speed_delay_and_adjust() {
        assert_eq!(Speed::new(1).unwrap().delay(), Duration::from_millis(991));
        assert_eq!(Speed::new(100).unwrap().delay(), Duration::from_millis(100));
        assert_eq!(Speed::new(95).unwrap().faster().get(), 100);
        assert_eq!(Speed::new(5).unwrap().slower().get(), 1);
    }

    #[test]
    fn test_input_prefers_explicit_values() {
        let config = parse(&["--values", "4,2,9", "--seed", "1"]).unwrap();
        let mut generator = config.generator();
        let values: Vec<u32> = config.input(&mut generator).iter().map(|e| e.value).collect();
        assert_eq!(values, vec![4, 2, 9]);
    }

    #[test]
    fn test_seeded_input_is_reproducible() {
        let config = parse(&["-n", "20", "--seed", "99"]).unwrap();
        let a = config.input(&mut config.generator());
        let b = config.input(&mut config.generator());
        assert_eq!(a.len(), 20);
        assert_eq!(a, b);
    }

    #[test]
    fn test_clamp_size() {
        assert_eq!(clamp_size(0), MIN_ARRAY_SIZE);
        assert_eq!(clamp_size(110), MAX_ARRAY_SIZE);
        assert_eq!(clamp_size(40), 40);
    }

    #[test]
    fn test_error_messages_name_the_bounds() {
        assert_eq!(
            ConfigError::SizeOutOfRange(5).to_string(),
            "array size 5 is outside 10..=100"
        );
        assert_eq!(
            ConfigError::SpeedOutOfRange(0).to_string(),
            "speed 0 is outside 1..=100"
        );
        assert_eq!(
            ConfigError::TooManyValues(101).to_string(),
            "101 values given, at most 100 are supported"
        );
    }
}
