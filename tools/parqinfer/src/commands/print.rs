use std::{fs, path::PathBuf};

use anyhow::Result;
use clap::Args;
use type2parquet::{schema::format_schema, schema_to_arrow};

use crate::commands::load_schema;

#[derive(Args)]
pub struct PrintArgs {
    /// Path to the definition file
    input: PathBuf,

    /// Name of the type to infer
    #[arg(short, long = "type")]
    type_name: String,

    /// Leave out members inherited from base types
    #[arg(long)]
    no_inherited: bool,

    /// Print the Arrow schema instead of the field tree
    #[arg(long)]
    arrow: bool,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl PrintArgs {
    pub fn run(self) -> Result<()> {
        let schema = load_schema(&self.input, &self.type_name, !self.no_inherited)?;

        let text = if self.arrow {
            format!("{:#?}", schema_to_arrow(&schema))
        } else {
            format_schema(&schema)?
        };

        match self.output {
            Some(path) => fs::write(path, format!("{text}\n"))?,
            None => println!("{text}"),
        }
        Ok(())
    }
}
