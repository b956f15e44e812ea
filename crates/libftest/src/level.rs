use log::LevelFilter;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{ConstsError, LOG_CRITICAL, LOG_DEBUG, LOG_WARNING};

/// Verbosity scale of the harness log. Lower value, higher severity.
#[derive(
    Debug,
    EnumString,
    Display,
    Serialize,
    Deserialize,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Critical = LOG_CRITICAL as isize,
    Warning = LOG_WARNING as isize,
    Debug = LOG_DEBUG as isize,
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::Warning
    }
}

impl LogLevel {
    pub fn from_level(level: i32) -> Result<Self, ConstsError> {
        match level {
            LOG_CRITICAL => Ok(Self::Critical),
            LOG_WARNING => Ok(Self::Warning),
            LOG_DEBUG => Ok(Self::Debug),
            _ => Err(ConstsError::UnknownLogLevel(level.to_string())),
        }
    }

    #[inline]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Self::Critical => LevelFilter::Error,
            Self::Warning => LevelFilter::Warn,
            Self::Debug => LevelFilter::Debug,
        }
    }
}
