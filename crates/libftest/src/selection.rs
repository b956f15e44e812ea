use std::{fmt, str::FromStr};

use crate::{ConstsError, TESTS_RUN_ALL, TESTS_RUN_ALL_SUITES};

/// Which test of a suite to run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TestSelection {
    #[default]
    All,
    Index(u32),
}

impl TestSelection {
    /// `TESTS_RUN_ALL` selects every test, any other value must be a valid
    /// index.
    pub fn from_raw(raw: i32) -> Result<Self, ConstsError> {
        if raw == TESTS_RUN_ALL {
            return Ok(Self::All);
        }
        u32::try_from(raw)
            .map(Self::Index)
            .map_err(|_| ConstsError::InvalidTestIndex(raw))
    }

    pub fn to_raw(self) -> i64 {
        match self {
            Self::All => TESTS_RUN_ALL as i64,
            Self::Index(index) => index as i64,
        }
    }

    pub fn matches(&self, index: u32) -> bool {
        match self {
            Self::All => true,
            Self::Index(selected) => *selected == index,
        }
    }
}

/// Which suite to run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SuiteSelection {
    #[default]
    AllSuites,
    Named(String),
}

impl SuiteSelection {
    pub fn matches(&self, suite: &str) -> bool {
        match self {
            Self::AllSuites => true,
            Self::Named(name) => name == suite,
        }
    }
}

impl FromStr for SuiteSelection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == TESTS_RUN_ALL_SUITES {
            Self::AllSuites
        } else {
            Self::Named(s.to_owned())
        })
    }
}

impl fmt::Display for SuiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllSuites => f.write_str(TESTS_RUN_ALL_SUITES),
            Self::Named(name) => f.write_str(name),
        }
    }
}
