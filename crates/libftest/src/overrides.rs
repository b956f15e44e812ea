use std::{fs, path::Path};

use log::debug;
use serde::Deserialize;

use crate::{Consts, ConstsError, LogLevel};

/// Optional replacements for the defaults, read from a YAML document.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Overrides {
    #[serde(default)]
    pub log_file: Option<String>,

    #[serde(default)]
    pub log_level: Option<LevelOverride>,

    #[serde(default)]
    pub container: ContainerOverrides,
}

/// Log level given either on the numeric scale or by name.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LevelOverride {
    Num(i32),
    Name(LogLevel),
}

impl LevelOverride {
    pub fn level(self) -> Result<LogLevel, ConstsError> {
        match self {
            Self::Num(level) => LogLevel::from_level(level),
            Self::Name(level) => Ok(level),
        }
    }
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContainerOverrides {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub distro: Option<String>,
    #[serde(default)]
    pub release: Option<String>,
    #[serde(default)]
    pub arch: Option<String>,
    #[serde(default)]
    pub stop_timeout: Option<u64>,
}

impl Overrides {
    pub fn from_yaml(config: &str) -> Result<Self, ConstsError> {
        // an empty document carries no overrides
        if config.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(config)?)
    }

    pub fn from_file(file: &Path) -> Result<Self, ConstsError> {
        debug!("reading overrides from {}", file.display());
        let config =
            fs::read_to_string(file).map_err(|e| ConstsError::ReadFile(file.to_path_buf(), e))?;
        Self::from_yaml(&config)
    }
}

/// Replace `target` with a non-empty `value`.
fn apply_str(
    target: &mut String,
    value: &Option<String>,
    field: &'static str,
) -> Result<(), ConstsError> {
    let Some(value) = value else {
        return Ok(());
    };
    if value.is_empty() {
        return Err(ConstsError::EmptyOverride(field));
    }
    *target = value.clone();
    Ok(())
}

impl Consts {
    /// Copy of `self` with `overrides` applied.
    pub fn with_overrides(&self, overrides: &Overrides) -> Result<Self, ConstsError> {
        let mut consts = self.clone();

        apply_str(&mut consts.log_file, &overrides.log_file, "log_file")?;
        if let Some(level) = overrides.log_level {
            consts.log_level = level.level()?;
        }

        let container = &overrides.container;
        apply_str(&mut consts.container.name, &container.name, "container.name")?;
        apply_str(&mut consts.container.distro, &container.distro, "container.distro")?;
        apply_str(&mut consts.container.release, &container.release, "container.release")?;
        apply_str(&mut consts.container.arch, &container.arch, "container.arch")?;
        if let Some(stop_timeout) = container.stop_timeout {
            if stop_timeout == 0 {
                return Err(ConstsError::ZeroStopTimeout);
            }
            consts.container.stop_timeout = stop_timeout;
        }

        Ok(consts)
    }
}
