use clap::Parser;
use std::path::PathBuf;

use crate::e_config::ValidatorConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Validate HTML files offline with the v.Nu checker.", long_about = None)]
pub struct Cli {
    /// Log the command line, raw output and each parsed line.
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Java executable used to run the checker.
    #[arg(long, value_name = "PATH")]
    pub java: Option<PathBuf>,

    /// Flags passed to the runtime before vnu.jar, whitespace separated.
    #[arg(long, value_name = "FLAGS", allow_hyphen_values = true)]
    pub java_flags: Option<String>,

    /// Location of vnu.jar.
    #[arg(long, value_name = "PATH")]
    pub jar: Option<PathBuf>,

    /// Print the findings as a JSON array.
    #[arg(long)]
    pub json: bool,

    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Environment defaults with the command line overrides applied on top.
    pub fn config(&self) -> ValidatorConfig {
        let mut config = ValidatorConfig::from_env();
        if let Some(java) = &self.java {
            config = config.with_runtime(java);
        }
        if let Some(flags) = &self.java_flags {
            config = config.with_flags_str(flags);
        }
        if let Some(jar) = &self.jar {
            config = config.with_artifact(jar);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::parse_from([
            "html-validator",
            "--java",
            "/usr/bin/java",
            "--java-flags",
            "-Xss1m -jar",
            "--jar",
            "/opt/vnu.jar",
            "-v",
            "a.html",
            "b.html",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.files, vec![PathBuf::from("a.html"), PathBuf::from("b.html")]);

        let config = cli.config();
        assert_eq!(config.runtime, OsString::from("/usr/bin/java"));
        assert_eq!(config.artifact, PathBuf::from("/opt/vnu.jar"));
        assert_eq!(
            config.runtime_flags,
            vec![OsString::from("-Xss1m"), OsString::from("-jar")]
        );
    }

    #[test]
    fn test_files_are_required() {
        assert!(Cli::try_parse_from(["html-validator"]).is_err());
    }
}
