use std::path::PathBuf;

/// Errors from this crate.
#[derive(Debug, thiserror::Error)]
pub enum ConstsError {
    /// Location of the running executable can't be determined.
    #[error("couldn't resolve the location of the running executable")]
    ResolveExe(#[source] std::io::Error),

    /// Executable path without a parent directory.
    #[error("executable {0} has no parent directory")]
    NoParent(PathBuf),

    /// Base directory must be absolute.
    #[error("base directory {0} is not absolute")]
    RelativeBaseDir(PathBuf),

    /// Not one of the known log levels.
    #[error("unknown log level {0}")]
    UnknownLogLevel(String),

    /// Negative test index other than the run-all sentinel.
    #[error("invalid test index {0}")]
    InvalidTestIndex(i32),

    /// Stop timeout must be positive.
    #[error("container stop timeout must be positive")]
    ZeroStopTimeout,

    /// Overridden value must not be empty.
    #[error("override {0} must not be empty")]
    EmptyOverride(&'static str),

    /// Malformed `controllers:path` argument.
    #[error("invalid cgroup spec {0:?}, expected 'controller1,controller2:group'")]
    InvalidCgroupSpec(String),

    /// Too many cgroup specs.
    #[error("max allowed hierarchies {0} reached")]
    HierarchyLimit(usize),

    /// Directory listing failed.
    #[error("cannot read {0}")]
    ReadDir(PathBuf, #[source] std::io::Error),

    /// Overrides file can't be read.
    #[error("cannot read {0}")]
    ReadFile(PathBuf, #[source] std::io::Error),

    /// Overrides document failed to parse.
    #[error("couldn't parse overrides")]
    Overrides(#[from] serde_yaml::Error),
}
