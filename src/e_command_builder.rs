use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::e_config::ValidatorConfig;

/// A builder that constructs the checker invocation:
/// `<runtime> <flags...> <artifact> <files...>`.
#[derive(Debug, Clone)]
pub struct VnuCommandBuilder {
    runtime: OsString,
    args: Vec<OsString>,
}

impl VnuCommandBuilder {
    /// Starts from the runtime, its fixed flags and the artifact path.
    pub fn new(config: &ValidatorConfig) -> Self {
        let mut args = config.runtime_flags.clone();
        args.push(config.artifact.clone().into_os_string());
        VnuCommandBuilder {
            runtime: config.runtime.clone(),
            args,
        }
    }

    /// Appends the files to check, in order.
    pub fn with_files<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.args
            .extend(files.into_iter().map(|f| f.as_ref().as_os_str().to_owned()));
        self
    }

    /// The full argument vector, runtime first.
    pub fn build(self) -> Vec<OsString> {
        let mut argv = Vec::with_capacity(self.args.len() + 1);
        argv.push(self.runtime);
        argv.extend(self.args);
        argv
    }

    /// Human readable command line, for logging.
    pub fn display(&self) -> String {
        std::iter::once(&self.runtime)
            .chain(self.args.iter())
            .map(|arg| arg.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Builds a std::process::Command with both output streams piped and no stdin.
    pub fn build_command(self) -> Command {
        let mut cmd = Command::new(self.runtime);
        cmd.args(self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}
