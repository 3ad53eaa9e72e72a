//! CLI integration tests for asyncapi-gen binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const BASE_TYPE: &str = "asyncapi_gen::model::AsyncApi";
const CLASS_PATH: &str = "target/debug/libasyncapi_gen.rlib";

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("asyncapi-gen"))
}

mod errors {
    use super::*;

    #[test]
    fn no_targets() {
        cmd()
            .args(["--class-path", CLASS_PATH])
            .assert()
            .code(2)
            .stderr(predicate::str::contains(
                "classNames or packageNames are required",
            ));
    }

    #[test]
    fn unknown_format() {
        let dir = TempDir::new().unwrap();
        cmd()
            .args(["-c", BASE_TYPE, "--class-path", CLASS_PATH, "--format", "xml"])
            .arg("--output-dir")
            .arg(dir.path())
            .assert()
            .code(2)
            .stderr(predicate::str::contains("schemaFileFormat=xml not recognized"));
    }

    #[test]
    fn unknown_class() {
        let dir = TempDir::new().unwrap();
        cmd()
            .args(["-c", "asyncapi_gen::model::Missing", "--class-path", CLASS_PATH])
            .arg("--output-dir")
            .arg(dir.path())
            .assert()
            .code(2)
            .stderr(predicate::str::contains(
                "loading type error: asyncapi_gen::model::Missing",
            ));
    }

    #[test]
    fn class_outside_class_path() {
        let dir = TempDir::new().unwrap();
        cmd()
            .args(["-c", BASE_TYPE, "--class-path", "target/debug/libother.rlib"])
            .arg("--output-dir")
            .arg(dir.path())
            .assert()
            .code(2)
            .stderr(predicate::str::contains("is not on the class path"));
    }

    #[test]
    fn invalid_class_path_entry() {
        cmd()
            .args(["-c", BASE_TYPE, "--class-path", "/"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains(
                "can't create class path for run 'generateAsyncApi'",
            ));
    }

    #[test]
    fn invalid_package_name() {
        let dir = TempDir::new().unwrap();
        cmd()
            .args(["-p", "com.asyncapi.schemas", "--class-path", CLASS_PATH])
            .arg("--output-dir")
            .arg(dir.path())
            .assert()
            .code(2)
            .stderr(predicate::str::contains(
                "loading package error: com.asyncapi.schemas",
            ));
    }

    #[test]
    fn missing_config_file() {
        cmd()
            .args(["--config", "/nonexistent/asyncapi.yaml"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("cannot read config"));
    }
}

mod generation {
    use super::*;

    #[test]
    fn writes_json_and_prints_path() {
        let dir = TempDir::new().unwrap();
        cmd()
            .args(["-c", BASE_TYPE, "--class-path", CLASS_PATH])
            .arg("--output-dir")
            .arg(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("AsyncApi-asyncapi.json"));

        let content = fs::read_to_string(dir.path().join("AsyncApi-asyncapi.json")).unwrap();
        assert_eq!(content, "{\n  \"asyncapi\": \"2.0.0\"\n}");
    }

    #[test]
    fn writes_yaml_without_marker() {
        let dir = TempDir::new().unwrap();
        cmd()
            .args(["-c", BASE_TYPE, "--class-path", CLASS_PATH, "--format", "yaml"])
            .args(["--schema-file-name", "events"])
            .arg("--output-dir")
            .arg(dir.path())
            .assert()
            .success();

        let content = fs::read_to_string(dir.path().join("AsyncApi-events.yaml")).unwrap();
        assert!(!content.starts_with("---"));
        assert!(content.starts_with("asyncapi:"));
    }

    #[test]
    fn include_nulls_flag() {
        let dir = TempDir::new().unwrap();
        cmd()
            .args(["-c", BASE_TYPE, "--class-path", CLASS_PATH])
            .args(["--include-nulls", "true", "--pretty-print", "false"])
            .arg("--output-dir")
            .arg(dir.path())
            .assert()
            .success();

        let content = fs::read_to_string(dir.path().join("AsyncApi-asyncapi.json")).unwrap();
        assert!(content.starts_with(r#"{"asyncapi":"2.0.0","id":null,"info":null"#));
    }

    #[test]
    fn options_from_config_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("schemas");
        let config = dir.path().join("asyncapi.yaml");
        fs::write(
            &config,
            format!(
                "classNames:\n  - {}\nclassPath:\n  - {}\nschemaFilePath: {}\nprettyPrint: false\n",
                BASE_TYPE,
                CLASS_PATH,
                out.display()
            ),
        )
        .unwrap();

        cmd()
            .arg("--config")
            .arg(&config)
            .assert()
            .success();

        let content = fs::read_to_string(out.join("AsyncApi-asyncapi.json")).unwrap();
        assert_eq!(content, r#"{"asyncapi":"2.0.0"}"#);
    }

    #[test]
    fn blank_output_dir_uses_fallback() {
        let dir = TempDir::new().unwrap();
        cmd()
            .current_dir(dir.path())
            .args(["-c", BASE_TYPE, "--class-path", CLASS_PATH, "--output-dir", ""])
            .assert()
            .success()
            .stdout(predicate::str::contains("asyncapi-schemas"));

        let content =
            fs::read_to_string(dir.path().join("asyncapi-schemas/AsyncApi-asyncapi.json")).unwrap();
        assert_eq!(content, "{\n  \"asyncapi\": \"2.0.0\"\n}");
    }

    #[test]
    fn package_without_subtypes_writes_nothing() {
        let dir = TempDir::new().unwrap();
        cmd()
            .args(["-p", "asyncapi_gen::model", "--class-path", CLASS_PATH])
            .arg("--output-dir")
            .arg(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }
}
