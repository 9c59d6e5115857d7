use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

fn run_raw(home: &Path, db_path: &Path, args: &[&str]) -> Output {
    cargo_bin_cmd!("nameplate")
        .env("XDG_CONFIG_HOME", home)
        .env_remove("RUST_LOG")
        .args(["--db-path", db_path.to_str().expect("db path")])
        .args(args)
        .output()
        .expect("run command")
}

fn run_cmd(home: &Path, db_path: &Path, args: &[&str]) -> String {
    let output = run_raw(home, db_path, args);
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_cmd_json(home: &Path, db_path: &Path, args: &[&str]) -> Value {
    let mut full = vec!["--json"];
    full.extend_from_slice(args);
    let stdout = run_cmd(home, db_path, &full);
    serde_json::from_str(&stdout).expect("parse json")
}

#[test]
fn cli_add_list_show_flow() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("nameplate.sqlite3");

    let created = run_cmd(temp.path(), &db_path, &["add", "--name", "  joão   DA   silva "]);
    assert_eq!(
        created.trim(),
        "created 1 João da Silva joao.da.silva@company.com.br"
    );

    run_cmd(temp.path(), &db_path, &["add", "--name", "MARIA DOS SANTOS"]);

    let list = run_cmd_json(temp.path(), &db_path, &["list"]);
    let items = list.as_array().expect("array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[1]["name"], "Maria dos Santos");
    assert_eq!(items[1]["email"], "maria.dos.santos@company.com.br");

    let detail = run_cmd_json(temp.path(), &db_path, &["show", "1"]);
    assert_eq!(detail["email"], "joao.da.silva@company.com.br");
    assert!(detail["created_at"].is_number());
}

#[test]
fn cli_duplicate_email_exits_with_invalid_input() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("nameplate.sqlite3");

    run_cmd(temp.path(), &db_path, &["add", "--name", "Ana Lima"]);
    let output = run_raw(temp.path(), &db_path, &["add", "--name", "ANA   LIMA"]);
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("email ana.lima@company.com.br is already taken"));
}

#[test]
fn cli_rejects_blank_and_unmappable_names() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("nameplate.sqlite3");

    let blank = run_raw(temp.path(), &db_path, &["add", "--name", "   "]);
    assert_eq!(blank.status.code(), Some(3));

    let unmappable = run_raw(temp.path(), &db_path, &["add", "--name", "王小明"]);
    assert_eq!(unmappable.status.code(), Some(3));
}

#[test]
fn cli_show_unknown_person_exits_not_found() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("nameplate.sqlite3");

    let output = run_raw(temp.path(), &db_path, &["show", "42"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("person 42 not found"));

    let output = run_raw(temp.path(), &db_path, &["show", "forty-two"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn cli_preview_does_not_touch_database() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("nameplate.sqlite3");

    let preview = run_cmd_json(
        temp.path(),
        &db_path,
        &["preview", "--name", "conceição ARAÚJO dos reis"],
    );
    assert_eq!(preview["name"], "Conceição Araújo dos Reis");
    assert_eq!(preview["email"], "conceicao.araujo.dos.reis@company.com.br");
    assert!(!db_path.exists());
}

#[test]
fn cli_uses_config_file_rules() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("nameplate.sqlite3");
    let config_dir = temp.path().join("nameplate");
    fs::create_dir_all(&config_dir).expect("config dir");
    let config_path = config_dir.join("config.toml");
    fs::write(
        &config_path,
        "email_domain = \"example.org\"\nparticles = [\"van\", \"der\"]\n",
    )
    .expect("write config");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&config_path, fs::Permissions::from_mode(0o600)).expect("chmod");
    }

    let created = run_cmd_json(
        temp.path(),
        &db_path,
        &["add", "--name", "JAN VAN DER BERG DA SILVA"],
    );
    assert_eq!(created["name"], "Jan van der Berg Da Silva");
    assert_eq!(created["email"], "jan.van.der.berg.da.silva@example.org");
}

#[test]
fn cli_missing_explicit_config_is_invalid_input() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("nameplate.sqlite3");
    let missing = temp.path().join("missing.toml");

    let output = run_raw(
        temp.path(),
        &db_path,
        &["--config", missing.to_str().expect("path"), "list"],
    );
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn cli_emits_completions() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("nameplate.sqlite3");

    let script = run_cmd(temp.path(), &db_path, &["completions", "bash"]);
    assert!(script.contains("nameplate"));
    assert!(!db_path.exists());
}
