use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use libftest::Overrides;

use super::load_consts;

#[derive(Parser, Debug)]
pub struct Show {
    /// Directory the test constants are rooted at
    #[arg(short, long)]
    pub base_dir: Option<PathBuf>,

    /// YAML file overriding the defaults
    #[arg(short, long)]
    pub overrides: Option<PathBuf>,
}

pub fn show(args: Show) -> Result<()> {
    print!("{}", render(args)?);
    Ok(())
}

/// Resolved constants with overrides applied, as YAML.
pub fn render(args: Show) -> Result<String> {
    let mut consts = load_consts(args.base_dir)?;
    if let Some(file) = args.overrides {
        consts = consts.with_overrides(&Overrides::from_file(&file)?)?;
    }

    Ok(serde_yaml::to_string(&consts)?)
}
