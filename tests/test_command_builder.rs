use html_validator::{ValidatorConfig, VnuCommandBuilder};
use std::ffi::OsString;
use std::path::PathBuf;

#[test]
fn integration_test_builder() {
    let config = ValidatorConfig::new()
        .with_runtime("/usr/bin/java")
        .with_artifact("/opt/vnu/vnu.jar");
    let files = vec![PathBuf::from("site/index.html"), PathBuf::from("site/a b.html")];

    let args = VnuCommandBuilder::new(&config).with_files(&files).build();

    assert_eq!(args.first(), Some(&OsString::from("/usr/bin/java")));
    assert!(args.contains(&OsString::from("-Xss512k")));
    // Paths are passed through untouched, spaces included.
    assert_eq!(
        &args[args.len() - 2..],
        &[OsString::from("site/index.html"), OsString::from("site/a b.html")]
    );
}

#[cfg(unix)]
#[test]
fn integration_test_builder_runs_the_collaborator() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("echo_args.sh");
    std::fs::write(&script, "for a in \"$@\"; do echo \"$a\" >&2; done\n").unwrap();

    let config = ValidatorConfig::new()
        .with_runtime("sh")
        .with_runtime_flags(Vec::<String>::new())
        .with_artifact(&script);
    let output = VnuCommandBuilder::new(&config)
        .with_files(["one.html", "two.html"])
        .build_command()
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(String::from_utf8_lossy(&output.stderr), "one.html\ntwo.html\n");
}
