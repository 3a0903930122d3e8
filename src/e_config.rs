use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable overriding the runtime executable.
pub const RUNTIME_ENV: &str = "HTML_VALIDATOR_JAVA";
/// Environment variable overriding the location of `vnu.jar`.
pub const ARTIFACT_ENV: &str = "HTML_VALIDATOR_VNU_JAR";
/// Environment variable replacing the runtime flags (whitespace separated, may be empty).
pub const RUNTIME_FLAGS_ENV: &str = "HTML_VALIDATOR_JAVA_FLAGS";

pub const DEFAULT_RUNTIME: &str = "java";
pub const DEFAULT_ARTIFACT_NAME: &str = "vnu.jar";
/// `-Xss512k` keeps the checker from overflowing its stack on deeply nested documents.
pub const DEFAULT_RUNTIME_FLAGS: [&str; 2] = ["-Xss512k", "-jar"];

/// Where and how to launch the checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    pub runtime: OsString,
    pub runtime_flags: Vec<OsString>,
    pub artifact: PathBuf,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        ValidatorConfig {
            runtime: DEFAULT_RUNTIME.into(),
            runtime_flags: DEFAULT_RUNTIME_FLAGS.iter().map(OsString::from).collect(),
            artifact: default_artifact_path(),
        }
    }
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, with [`RUNTIME_ENV`], [`RUNTIME_FLAGS_ENV`] and [`ARTIFACT_ENV`]
    /// applied when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(runtime) = env::var_os(RUNTIME_ENV).filter(|v| !v.is_empty()) {
            config.runtime = runtime;
        }
        if let Ok(flags) = env::var(RUNTIME_FLAGS_ENV) {
            config = config.with_flags_str(&flags);
        }
        if let Some(artifact) = env::var_os(ARTIFACT_ENV).filter(|v| !v.is_empty()) {
            config.artifact = PathBuf::from(artifact);
        }
        config
    }

    pub fn with_runtime(mut self, runtime: impl Into<OsString>) -> Self {
        self.runtime = runtime.into();
        self
    }

    pub fn with_runtime_flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.runtime_flags = flags.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the runtime flags with the whitespace separated words of `flags`.
    pub fn with_flags_str(self, flags: &str) -> Self {
        self.with_runtime_flags(flags.split_whitespace())
    }

    pub fn with_artifact(mut self, artifact: impl AsRef<Path>) -> Self {
        self.artifact = artifact.as_ref().to_path_buf();
        self
    }
}

/// `vnu.jar` next to the running executable, or `./vnu.jar` when the
/// executable's location is unknown.
pub fn default_artifact_path() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_ARTIFACT_NAME)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ARTIFACT_NAME))
}
