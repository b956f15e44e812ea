use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_CONTAINER_ARCH, DEFAULT_CONTAINER_DISTRO, DEFAULT_CONTAINER_NAME,
    DEFAULT_CONTAINER_RELEASE, DEFAULT_CONTAINER_STOP_TIMEOUT,
};

/// Identity of the sandbox container the tests run in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerDefaults {
    pub name: String,
    pub distro: String,
    pub release: String,
    pub arch: String,
    // seconds
    pub stop_timeout: u64,
}

impl Default for ContainerDefaults {
    fn default() -> Self {
        ContainerDefaults {
            name: DEFAULT_CONTAINER_NAME.to_owned(),
            distro: DEFAULT_CONTAINER_DISTRO.to_owned(),
            release: DEFAULT_CONTAINER_RELEASE.to_owned(),
            arch: DEFAULT_CONTAINER_ARCH.to_owned(),
            stop_timeout: DEFAULT_CONTAINER_STOP_TIMEOUT,
        }
    }
}

impl ContainerDefaults {
    #[inline]
    pub fn stop_timeout(&self) -> Duration {
        Duration::from_secs(self.stop_timeout)
    }
}
