use std::{
    path::{Path, PathBuf},
    sync::OnceLock,
};

use log::debug;
use serde::Serialize;

pub use self::{
    container::ContainerDefaults,
    error::ConstsError,
    level::LogLevel,
    outcome::TestOutcome,
    overrides::{LevelOverride, Overrides},
    selection::{SuiteSelection, TestSelection},
};

pub mod container;
pub mod error;
pub mod level;
pub mod outcome;
pub mod overrides;
pub mod selection;
pub mod tools;


// logging
pub const DEFAULT_LOG_FILE: &str = "libcgroup-ftests.log";
pub const LOG_CRITICAL: i32 = 1;
pub const LOG_WARNING: i32 = 5;
pub const LOG_DEBUG: i32 = 8;
pub const DEFAULT_LOG_LEVEL: i32 = LOG_WARNING;

// mount
pub const LIBCG_MOUNT_POINT: &str = "libcg";

// container
pub const DEFAULT_CONTAINER_NAME: &str = "test_libcg";
pub const DEFAULT_CONTAINER_DISTRO: &str = "oracle";
pub const DEFAULT_CONTAINER_RELEASE: &str = "7";
pub const DEFAULT_CONTAINER_ARCH: &str = "amd64";
pub const DEFAULT_CONTAINER_STOP_TIMEOUT: u64 = 5; // seconds

// base_dir/default.conf
pub const DEFAULT_CONTAINER_CFG_FILE: &str = "default.conf";
// scratch copy of the container config
pub const TEMP_CONTAINER_CFG_FILE: &str = "tmp.conf";

// test selection and outcomes
pub const TESTS_RUN_ALL: i32 = -1;
pub const TESTS_RUN_ALL_SUITES: &str = "allsuites";
pub const TEST_PASSED: &str = "passed";
pub const TEST_FAILED: &str = "failed";
pub const TEST_SKIPPED: &str = "skipped";

static GLOBAL: OnceLock<Consts> = OnceLock::new();

/// Path of the default container config inside `base_dir`.
///
/// Only joins, the file is not required to exist.
#[inline]
pub fn default_config_path(base_dir: &Path) -> PathBuf {
    base_dir.join(DEFAULT_CONTAINER_CFG_FILE)
}

/// Resolved constant set of the functional tests.
///
/// Built once and handed to whoever needs it. Nothing mutates a `Consts`
/// after construction; [`Consts::with_overrides`] returns a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Consts {
    pub log_file: String,
    pub log_level: LogLevel,
    pub mount_point: String,
    pub container: ContainerDefaults,
    pub base_dir: PathBuf,
    pub container_cfg_path: PathBuf,
    pub temp_container_cfg_file: String,
}

impl Consts {
    /// Build the constant set for a provider installed in `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self, ConstsError> {
        let base_dir: PathBuf = base_dir.into();
        if !base_dir.is_absolute() {
            return Err(ConstsError::RelativeBaseDir(base_dir));
        }

        let container_cfg_path = default_config_path(&base_dir);
        debug!("default container config: {}", container_cfg_path.display());

        Ok(Consts {
            log_file: DEFAULT_LOG_FILE.to_owned(),
            log_level: LogLevel::default(),
            mount_point: LIBCG_MOUNT_POINT.to_owned(),
            container: ContainerDefaults::default(),
            base_dir,
            container_cfg_path,
            temp_container_cfg_file: TEMP_CONTAINER_CFG_FILE.to_owned(),
        })
    }

    /// Build the constant set relative to the directory of the running
    /// executable.
    pub fn from_current_exe() -> Result<Self, ConstsError> {
        Self::new(exe_dir()?)
    }

    /// Scratch config path staged next to the default one.
    #[inline]
    pub fn temp_container_cfg_path(&self) -> PathBuf {
        self.base_dir.join(&self.temp_container_cfg_file)
    }

    /// Path of the log file inside `dir`.
    #[inline]
    pub fn log_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.log_file)
    }

    /// Process wide instance. Later calls return the first value regardless of
    /// their argument.
    pub fn init_global(base_dir: impl Into<PathBuf>) -> Result<&'static Consts, ConstsError> {
        if let Some(consts) = GLOBAL.get() {
            return Ok(consts);
        }
        let consts = Self::new(base_dir)?;
        Ok(GLOBAL.get_or_init(|| consts))
    }

    /// Instance set by [`Consts::init_global`], if any.
    #[inline]
    pub fn global() -> Option<&'static Consts> {
        GLOBAL.get()
    }
}

fn exe_dir() -> Result<PathBuf, ConstsError> {
    let exe = std::env::current_exe().map_err(ConstsError::ResolveExe)?;
    // symlinked installs resolve to the real location
    let exe = exe.canonicalize().map_err(ConstsError::ResolveExe)?;
    match exe.parent() {
        Some(dir) => Ok(dir.to_path_buf()),
        None => Err(ConstsError::NoParent(exe)),
    }
}
