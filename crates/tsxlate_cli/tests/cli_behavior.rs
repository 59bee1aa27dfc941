//! Integration tests for CLI behavior
//!
//! These tests verify the external behavior of the CLI tool,
//! following behavior-driven testing principles.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to create a command for the tsxlate CLI, run inside `dir`
fn tsxlate_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tsxlate"));
    cmd.current_dir(dir.path());
    cmd
}

/// Writes `content` to `name` inside a fresh temp dir.
fn source_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    (dir, path)
}

mod help_command {
    use super::*;

    #[test]
    fn shows_help_with_flag() {
        let dir = tempfile::tempdir().unwrap();
        tsxlate_cmd(&dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"))
            .stdout(predicate::str::contains("--target"));
    }

    #[test]
    fn shows_version_with_flag() {
        let dir = tempfile::tempdir().unwrap();
        tsxlate_cmd(&dir)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn requires_a_file() {
        let dir = tempfile::tempdir().unwrap();
        tsxlate_cmd(&dir).assert().failure();
    }
}

mod translate_command {
    use super::*;

    #[test]
    fn translates_to_python() {
        let (dir, path) = source_file("add.ts", "function add(a, b) { return a + b; }\n");

        tsxlate_cmd(&dir)
            .arg(&path)
            .arg("--python")
            .assert()
            .success()
            .stdout("def add(a, b):\n    return a + b\n");
    }

    #[test]
    fn translates_with_target_flag() {
        let (dir, path) = source_file("call.ts", "console.log('hi');\n");

        tsxlate_cmd(&dir)
            .arg(&path)
            .args(["--target", "default"])
            .assert()
            .success()
            .stdout("console.log(\"hi\")\n");
    }

    #[test]
    fn dumps_tree_by_default() {
        let (dir, path) = source_file("ident.ts", "value;");

        tsxlate_cmd(&dir)
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::starts_with("(SyntaxList value;)"))
            .stdout(predicate::str::contains("(Identifier value)"));
    }

    #[test]
    fn reads_target_from_discovered_config() {
        let (dir, path) = source_file("name.ts", "myHTTPServer;");
        fs::write(
            dir.path().join(".tsxlate.jsonc"),
            "{\n  // example target\n  \"target\": \"python\"\n}\n",
        )
        .unwrap();

        tsxlate_cmd(&dir)
            .arg(&path)
            .assert()
            .success()
            .stdout("my_http_server\n");
    }

    #[test]
    fn flag_overrides_config() {
        let (dir, path) = source_file("name.ts", "myHTTPServer;");
        let config = dir.path().join("custom.json");
        fs::write(&config, r#"{ "target": "python" }"#).unwrap();

        tsxlate_cmd(&dir)
            .arg(&path)
            .arg("--config")
            .arg(&config)
            .args(["-t", "default"])
            .assert()
            .success()
            .stdout("myHTTPServer\n");
    }

    #[test]
    fn emits_ast_as_json() {
        let (dir, path) = source_file("ast.ts", "x;");

        let output = tsxlate_cmd(&dir)
            .arg(&path)
            .arg("--emit-ast")
            .output()
            .unwrap();

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["type"], "SourceFile");
        assert_eq!(json["children"][0]["type"], "SyntaxList");
    }
}

mod exit_codes {
    use super::*;

    #[test]
    fn missing_file_exits_with_2() {
        let dir = tempfile::tempdir().unwrap();

        tsxlate_cmd(&dir)
            .arg(dir.path().join("missing.ts"))
            .assert()
            .code(2)
            .stderr(predicate::str::contains("missing.ts"));
    }

    #[test]
    fn syntax_error_exits_with_2() {
        let (dir, path) = source_file("broken.ts", "function (");

        tsxlate_cmd(&dir).arg(&path).assert().code(2);
    }

    #[test]
    fn invalid_config_exits_with_2() {
        let (dir, path) = source_file("ok.ts", "x;");
        fs::write(dir.path().join(".tsxlate.json"), r#"{ "target": "ruby" }"#).unwrap();

        tsxlate_cmd(&dir).arg(&path).assert().code(2);
    }

    #[test]
    fn strict_fails_on_unknown_syntax() {
        let (dir, path) = source_file("class.ts", "class A {}");

        tsxlate_cmd(&dir)
            .arg(&path)
            .args(["--python", "--strict"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("(class_declaration class A {})"));
    }

    #[test]
    fn strict_passes_without_unknown_syntax() {
        let (dir, path) = source_file("ok.ts", "if (x) { return 1; }");

        tsxlate_cmd(&dir)
            .arg(&path)
            .args(["--python", "--strict"])
            .assert()
            .success()
            .stdout("if x:\n    return 1\n");
    }

    #[test]
    fn unknown_syntax_without_strict_succeeds() {
        let (dir, path) = source_file("class.ts", "class A {}");

        tsxlate_cmd(&dir).arg(&path).arg("-p").assert().success();
    }
}
