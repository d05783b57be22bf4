use std::{path::PathBuf, process};

use anyhow::Result;
use clap::Args;

use crate::commands::load_schema;

#[derive(Args)]
pub struct DiffArgs {
    /// Path to the first definition file
    left: PathBuf,

    /// Path to the second definition file
    right: PathBuf,

    /// Name of the type to infer on both sides
    #[arg(short, long = "type")]
    type_name: String,

    /// Leave out members inherited from base types
    #[arg(long)]
    no_inherited: bool,
}

impl DiffArgs {
    pub fn run(self) -> Result<()> {
        let include_inherited = !self.no_inherited;
        let left = load_schema(&self.left, &self.type_name, include_inherited)?;
        let right = load_schema(&self.right, &self.type_name, include_inherited)?;

        match left.not_equals_message(&right, "left", "right") {
            Some(msg) => {
                println!("{msg}");
                process::exit(1);
            }
            None => {
                println!("schemas match");
                Ok(())
            }
        }
    }
}
