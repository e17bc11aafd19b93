use super::{load_config, ConfigError};
use crate::commands::CommandRecord;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_config(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create config dir");
    }
    fs::write(path, contents).expect("write config");
}

#[test]
fn load_config_tolerates_missing_file() {
    let dir = TempDir::new().expect("temp dir");
    let config = load_config(&dir.path().join("config.toml")).expect("load config");
    assert!(config.commands.is_empty());
}

#[test]
fn load_config_reads_commands_in_order() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    write_config(
        &path,
        r#"
[[Commands]]
Name = "Desktop"
Command = "startx"
Args = ["--", "vt1"]

[[Commands]]
Name = "Shell"
Command = "bash"
"#,
    );

    let config = load_config(&path).expect("load config");
    assert_eq!(
        config.commands,
        vec![
            CommandRecord {
                name: "Desktop".to_string(),
                program: "startx".to_string(),
                args: vec!["--".to_string(), "vt1".to_string()],
            },
            CommandRecord {
                name: "Shell".to_string(),
                program: "bash".to_string(),
                args: Vec::new(),
            },
        ]
    );
}

#[test]
fn load_config_accepts_lowercase_keys() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    write_config(
        &path,
        r#"
[[commands]]
name = "Shell"
command = "echo"
args = ["hi"]
"#,
    );

    let config = load_config(&path).expect("load config");
    assert_eq!(config.commands.len(), 1);
    assert_eq!(config.commands[0].program, "echo");
    assert_eq!(config.commands[0].args, vec!["hi".to_string()]);
}

#[test]
fn load_config_allows_label_only_records() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    write_config(
        &path,
        r#"
[[Commands]]
Name = "Nothing here"
"#,
    );

    let config = load_config(&path).expect("load config");
    assert_eq!(config.commands[0].name, "Nothing here");
    assert!(config.commands[0].program.is_empty());
    assert!(config.commands[0].args.is_empty());
}

#[test]
fn load_config_defaults_missing_name_to_empty_label() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    write_config(
        &path,
        r#"
[[Commands]]
Command = "echo"
Args = ["hi"]
"#,
    );

    let config = load_config(&path).expect("load config");
    assert_eq!(
        config.commands,
        vec![CommandRecord {
            name: String::new(),
            program: "echo".to_string(),
            args: vec!["hi".to_string()],
        }]
    );
}

#[test]
fn load_config_matches_keys_in_any_case() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    write_config(
        &path,
        r#"
[[COMMANDS]]
NAME = "Shell"
COMMAND = "bash"
aRgS = ["-l"]
"#,
    );

    let config = load_config(&path).expect("load config");
    assert_eq!(config.commands.len(), 1);
    assert_eq!(config.commands[0].name, "Shell");
    assert_eq!(config.commands[0].program, "bash");
    assert_eq!(config.commands[0].args, vec!["-l".to_string()]);
}

#[test]
fn load_config_prefers_lowercase_key_on_collision() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    write_config(
        &path,
        r#"
[[Commands]]
Name = "Upper"
name = "Lower"
"#,
    );

    let config = load_config(&path).expect("load config");
    assert_eq!(config.commands[0].name, "Lower");
}

#[test]
fn load_config_empty_file_has_no_commands() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    write_config(&path, "");

    let config = load_config(&path).expect("load config");
    assert!(config.commands.is_empty());
}

#[test]
fn load_config_rejects_malformed_toml() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    write_config(&path, "[[Commands]\nName = ");

    let err = load_config(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Decode { .. }));
    assert!(err.to_string().contains("could not decode config file"));
}

#[test]
fn load_config_rejects_wrong_types() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    write_config(
        &path,
        r#"
[[Commands]]
Name = "Shell"
Args = "not-a-list"
"#,
    );

    let err = load_config(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Decode { .. }));
}

#[test]
fn load_config_reports_unreadable_path() {
    let dir = TempDir::new().expect("temp dir");
    // A directory exists but cannot be read as a file.
    let err = load_config(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}
