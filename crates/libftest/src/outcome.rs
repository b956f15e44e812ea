use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{TEST_FAILED, TEST_PASSED, TEST_SKIPPED};

/// Result of a single test.
#[derive(Debug, EnumString, Display, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TestOutcome {
    Passed,
    Failed,
    Skipped,
}

impl TestOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Passed => TEST_PASSED,
            Self::Failed => TEST_FAILED,
            Self::Skipped => TEST_SKIPPED,
        }
    }
}
