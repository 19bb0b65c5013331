use assert_cmd::Command;

fn campus() -> Command {
    let mut cmd = Command::cargo_bin("campus").unwrap();
    cmd.env("CAMPUS_CONFIG_DIR", "does-not-exist")
        .env_remove("CAMPUS_ENV");
    cmd
}

#[test]
fn settings_prints_resolved_configuration() {
    let output = campus()
        .arg("settings")
        .env("MONGODB_URL", "mongodb://db.internal:27017")
        .env("CAMPUS_SERVER__PORT", "9123")
        .output()
        .unwrap();

    assert!(output.status.success());
    let settings: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(settings["database"]["url"], "mongodb://db.internal:27017");
    assert_eq!(settings["database"]["name"], "crud_database");
    assert_eq!(settings["server"]["port"], 9123);
    assert_eq!(settings["environment"], "local");
}

#[test]
fn unknown_environment_fails_startup() {
    let output = campus()
        .arg("settings")
        .env("CAMPUS_ENV", "moon")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unsupported environment"));
}
