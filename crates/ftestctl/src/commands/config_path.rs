use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use libftest::Consts;
use log::warn;

use super::load_consts;

#[derive(Parser, Debug)]
pub struct ConfigPath {
    /// Directory the test constants are rooted at
    #[arg(short, long)]
    base_dir: Option<PathBuf>,

    /// Print the scratch config path instead
    #[arg(short, long)]
    temp: bool,
}

pub fn config_path(args: ConfigPath) -> Result<()> {
    let consts = load_consts(args.base_dir)?;
    let path = select_path(&consts, args.temp);

    if !path.exists() {
        warn!("{} does not exist", path.display());
    }
    println!("{}", path.display());
    Ok(())
}

#[inline]
pub fn select_path(consts: &Consts, temp: bool) -> PathBuf {
    if temp {
        consts.temp_container_cfg_path()
    } else {
        consts.container_cfg_path.clone()
    }
}
