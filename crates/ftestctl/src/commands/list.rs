use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use libftest::tools::list_directory;

#[derive(Parser, Debug)]
pub struct List {
    /// Directory to examine
    #[arg(required = true)]
    dir: PathBuf,
}

pub fn list(args: List) -> Result<()> {
    if !args.dir.is_dir() {
        bail!("{} is not a directory", args.dir.display())
    }

    for file in list_directory(&args.dir)? {
        println!("{}", file.display());
    }
    Ok(())
}
