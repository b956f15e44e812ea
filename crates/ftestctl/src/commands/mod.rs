use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use libftest::Consts;
use log::debug;

use self::{config_path::ConfigPath, list::List, show::Show, spec::Spec};

pub mod config_path;
pub mod list;
pub mod show;
pub mod spec;

// cgroup specifiers per invocation
pub const MAX_HIERARCHIES: usize = 16;

#[derive(Parser, Debug)]
pub enum FtestCmd {
    /// Print the resolved test constants as YAML
    Show(Show),

    /// Print the default container config path
    ConfigPath(ConfigPath),

    /// Parse cgroup specifiers
    Spec(Spec),

    /// List config files of a directory
    List(List),
}

/// Constants rooted at `base_dir`, or next to this executable.
pub fn load_consts(base_dir: Option<PathBuf>) -> Result<Consts> {
    let consts = match base_dir {
        Some(dir) => Consts::new(dir)?,
        None => Consts::from_current_exe()?,
    };
    debug!("test constants loaded from {}", consts.base_dir.display());
    Ok(consts)
}
