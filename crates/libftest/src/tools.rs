//! Helpers shared by the cgroup command line tools.
use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use crate::ConstsError;

pub const CG_CONTROLLER_MAX: usize = 100;
pub const FILENAME_MAX: usize = 4096;

/// Group specifier given on the command line as `ctrl1,ctrl2:group`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CgroupSpec {
    pub controllers: Vec<String>,
    pub path: String,
}

impl CgroupSpec {
    pub fn parse(arg: &str) -> Result<Self, ConstsError> {
        let invalid = || ConstsError::InvalidCgroupSpec(arg.to_owned());

        // empty fields between ':' are skipped, a third field is ignored
        let mut fields = arg.split(':').filter(|f| !f.is_empty());
        let (Some(controllers), Some(path)) = (fields.next(), fields.next()) else {
            return Err(invalid());
        };
        debug!("list of controllers is {controllers}, cgroup path is {path}");

        let controllers: Vec<String> = controllers
            .split(',')
            .filter(|c| !c.is_empty())
            .take(CG_CONTROLLER_MAX - 1)
            .map(str::to_owned)
            .collect();
        if controllers.is_empty() {
            return Err(invalid());
        }

        Ok(CgroupSpec {
            controllers,
            path: truncate(path, FILENAME_MAX - 1).to_owned(),
        })
    }
}

/// Parse `arg` and append it to `specs`, keeping at most `capacity` entries.
pub fn push_cgroup_spec(
    specs: &mut Vec<CgroupSpec>,
    arg: &str,
    capacity: usize,
) -> Result<(), ConstsError> {
    if specs.len() >= capacity {
        return Err(ConstsError::HierarchyLimit(capacity));
    }
    specs.push(CgroupSpec::parse(arg)?);
    Ok(())
}

/// Regular files and symlinks directly inside `dir`, sorted by name.
pub fn list_directory(dir: &Path) -> Result<Vec<PathBuf>, ConstsError> {
    let read_err = |e: std::io::Error| ConstsError::ReadDir(dir.to_path_buf(), e);

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let file_type = entry.file_type().map_err(read_err)?;
        if file_type.is_file() || file_type.is_symlink() {
            files.push(entry.path());
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
