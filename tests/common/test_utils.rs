#![allow(dead_code)]
use std::fs;
use std::io::Result as IoResult;
use std::path::{Path, PathBuf};

use html_validator::ValidatorConfig;
use tempfile::{tempdir, TempDir};

/// Stands in for `vnu.jar`: for every file argument `f`, copies `f.vnu`
/// (when present) to stderr with `@FILE@` replaced by `f`, and reports
/// findings through its exit status like the real checker does.
const FAKE_VNU: &str = r#"#!/bin/sh
found=0
for f in "$@"; do
    echo "checked $f"
    if [ -f "$f.vnu" ]; then
        sed "s|@FILE@|$f|g" "$f.vnu" >&2
        found=1
    fi
done
exit $found
"#;

/// A temporary directory holding a fake checker script and the pages it checks.
pub struct FakeVnu {
    /// Removed, with everything inside, when dropped.
    pub temp_dir: TempDir,
    pub script: PathBuf,
}

impl FakeVnu {
    /// A fake that behaves like the checker.
    pub fn new() -> IoResult<Self> {
        Self::with_script(FAKE_VNU)
    }

    /// A fake running an arbitrary `sh` script.
    pub fn with_script(body: &str) -> IoResult<Self> {
        let temp_dir = tempdir()?;
        let script = temp_dir.path().join("fake_vnu.sh");
        fs::write(&script, body)?;
        Ok(FakeVnu { temp_dir, script })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Runs the script with `sh`, in place of `java -Xss512k -jar vnu.jar`.
    pub fn config(&self) -> ValidatorConfig {
        ValidatorConfig::new()
            .with_runtime("sh")
            .with_runtime_flags(Vec::<String>::new())
            .with_artifact(&self.script)
    }

    /// Writes a page and the findings the fake should report for it.
    /// Use `@FILE@` in a finding where the page's path belongs.
    pub fn page(&self, name: &str, findings: &[&str]) -> IoResult<PathBuf> {
        let page = self.path().join(name);
        fs::write(
            &page,
            "<!DOCTYPE html>\n<html lang=\"en\"><head><title>t</title></head><body></body></html>\n",
        )?;
        if !findings.is_empty() {
            let mut report = findings.join("\n");
            report.push('\n');
            fs::write(self.path().join(format!("{}.vnu", name)), report)?;
        }
        Ok(page)
    }
}

/// The `source_path` the parser derives from an absolute page path.
pub fn source_path_of(page: &Path) -> String {
    page.to_string_lossy().trim_start_matches('/').to_string()
}
