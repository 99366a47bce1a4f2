use std::path::PathBuf;

use crate::cli::Args;
use crate::error::{Result, RosterError};
use crate::input::{FileSource, RandomSource, RecordSource};
use crate::strategy::SortStrategy;

/// Where records come from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSpec {
    File(PathBuf),
    Random { count: usize, seed: Option<u64> },
}

/// Runtime configuration derived from CLI arguments
#[derive(Clone, Debug)]
pub struct Config {
    /// Sources in load order; their records are concatenated
    pub inputs: Vec<InputSpec>,
    pub strategy: SortStrategy,
    pub even_only: bool,
    pub output_file: Option<PathBuf>,
    pub verbose: bool,
}

impl Config {
    /// Build configuration from parsed CLI arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        let mut inputs: Vec<InputSpec> = args
            .files
            .iter()
            .map(|path| InputSpec::File(PathBuf::from(path)))
            .collect();
        if let Some(count) = args.random {
            inputs.push(InputSpec::Random {
                count,
                seed: args.seed,
            });
        }
        if inputs.is_empty() {
            return Err(RosterError::InvalidArgument(
                "at least one --file or --random source is required".to_string(),
            ));
        }

        let strategy = match args.field_key()? {
            Some(field) => SortStrategy::by_field(field, !args.reverse),
            None => SortStrategy::Default,
        };

        Ok(Config {
            inputs,
            strategy,
            even_only: args.even_only,
            output_file: args.output.as_ref().map(PathBuf::from),
            verbose: args.verbose,
        })
    }

    /// Instantiate every configured record source, in load order
    pub fn sources(&self) -> Result<Vec<Box<dyn RecordSource>>> {
        self.inputs.iter().map(InputSpec::source).collect()
    }
}

impl InputSpec {
    pub fn source(&self) -> Result<Box<dyn RecordSource>> {
        let source: Box<dyn RecordSource> = match self {
            InputSpec::File(path) => Box::new(FileSource::new(path.clone())?),
            InputSpec::Random { count, seed: Some(seed) } => {
                Box::new(RandomSource::seeded(*count, *seed)?)
            }
            InputSpec::Random { count, seed: None } => Box::new(RandomSource::new(*count)?),
        };
        Ok(source)
    }
}
