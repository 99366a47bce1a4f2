use clap::{ArgGroup, Parser};

use crate::compare::FieldKey;
use crate::error::Result;

#[derive(Parser, Debug, Clone)]
#[command(name = "roster", about = "Load, sort and save client records")]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .multiple(true)
        .args(["files", "random"])
))]
pub struct Args {
    /// Read records from FILE, one `Name|Phone|ID` per line; repeatable
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub files: Vec<String>,

    /// Generate N random records, appended after any files
    #[arg(short = 'g', long = "random", value_name = "N")]
    pub random: Option<usize>,

    /// Seed for the random generator
    #[arg(long, value_name = "SEED", requires = "random")]
    pub seed: Option<u64>,

    /// Sort by FIELD (name, id, phone) instead of name -> id -> phone
    #[arg(short = 'k', long = "sort-by", value_name = "FIELD")]
    pub sort_by: Option<String>,

    /// Sort the chosen field in descending order
    #[arg(short = 'r', long, requires = "sort_by")]
    pub reverse: bool,

    /// Only reorder records with an even id, leaving the rest in place
    #[arg(short = 'e', long = "even-only")]
    pub even_only: bool,

    /// Also append the result to FILE
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<String>,

    /// Log sort decisions and container growth
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Args {
    /// Parse the --sort-by field name, if given
    pub fn field_key(&self) -> Result<Option<FieldKey>> {
        self.sort_by.as_deref().map(str::parse).transpose()
    }
}
