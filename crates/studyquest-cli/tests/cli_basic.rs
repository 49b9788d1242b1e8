//! Basic CLI E2E tests.
//!
//! Each test points STUDYQUEST_HOME at its own temp directory and invokes
//! the built binary.

use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

/// Run a CLI command and return (exit code, stdout, stderr).
fn run_cli(home: &TempDir, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_studyquest"))
        .env("STUDYQUEST_HOME", home.path())
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn run_json(home: &TempDir, args: &[&str]) -> Value {
    let (code, stdout, stderr) = run_cli(home, args);
    assert_eq!(code, 0, "{args:?} failed: {stderr}");
    serde_json::from_str(&stdout).expect("stdout is JSON")
}

#[test]
fn test_status_on_first_launch_shows_seed_profile() {
    let home = TempDir::new().unwrap();
    let status = run_json(&home, &["status"]);
    assert_eq!(status["profile"]["xp"], 1200);
    assert_eq!(status["level"]["level"], 2);
    assert_eq!(status["total_minutes"], 245);
    assert!(home.path().join("config.toml").exists());
}

#[test]
fn test_task_add_then_toggle_grants_xp_once() {
    let home = TempDir::new().unwrap();
    let task = run_json(&home, &["task", "add", "Flashcards", "--subject", "math", "--minutes", "30"]);
    assert_eq!(task["rewardXP"], 60);
    let id = task["id"].as_str().unwrap().to_string();

    let toggled = run_json(&home, &["task", "toggle", &id[..8]]);
    assert_eq!(toggled["completed"], true);
    let xp_after = toggled["xp"].as_u64().unwrap();

    let untoggled = run_json(&home, &["task", "toggle", &id]);
    assert_eq!(untoggled["completed"], false);
    assert_eq!(untoggled["xp"].as_u64().unwrap(), xp_after);

    let tasks = run_json(&home, &["task", "list"]);
    assert_eq!(tasks.as_array().unwrap().len(), 4);
}

#[test]
fn test_task_add_unknown_subject_fails() {
    let home = TempDir::new().unwrap();
    let (code, _, stderr) = run_cli(&home, &["task", "add", "Essay", "--subject", "Alchemy"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_theme_unlock_then_apply() {
    let home = TempDir::new().unwrap();
    let (code, _, _) = run_cli(&home, &["theme", "apply", "space"]);
    assert_eq!(code, 1, "locked theme must not apply");

    let profile = run_json(&home, &["theme", "unlock", "space"]);
    assert_eq!(profile["coins"], 360 - 150);

    let (code, _, _) = run_cli(&home, &["theme", "unlock", "space"]);
    assert_eq!(code, 1, "already owned");

    let profile = run_json(&home, &["theme", "apply", "space"]);
    assert!(profile["preferredThemeID"].is_string());

    let listings = run_json(&home, &["theme", "list"]);
    let space = listings
        .as_array()
        .unwrap()
        .iter()
        .find(|l| l["name"] == "Space")
        .unwrap();
    assert_eq!(space["unlocked"], true);
    assert_eq!(space["applied"], true);
}

#[test]
fn test_pomodoro_set_validates_bounds() {
    let home = TempDir::new().unwrap();
    let (code, _, _) = run_cli(&home, &["pomodoro", "set", "--focus", "120"]);
    assert_eq!(code, 1);

    let config = run_json(&home, &["pomodoro", "set", "--focus", "40", "--rounds", "6"]);
    assert_eq!(config["focusMinutes"], 40);
    assert_eq!(config["roundsBeforeLongBreak"], 6);
    assert_eq!(config["shortBreakMinutes"], 5);
}

#[test]
fn test_focus_mode_persists() {
    let home = TempDir::new().unwrap();
    let profile = run_json(&home, &["focus-mode", "on"]);
    assert_eq!(profile["focusModeEnabled"], true);
    let status = run_json(&home, &["status"]);
    assert_eq!(status["profile"]["focusModeEnabled"], true);
}

#[test]
fn test_session_list_respects_range_floor() {
    let home = TempDir::new().unwrap();
    let sessions = run_json(&home, &["session", "list", "--range", "3"]);
    assert_eq!(sessions.as_array().unwrap().len(), 7);
}

#[test]
fn test_config_get_set() {
    let home = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(&home, &["config", "get", "timer.tick_interval_ms"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "1000");

    let (code, _, _) = run_cli(&home, &["config", "set", "timer.tick_interval_ms", "250"]);
    assert_eq!(code, 0);
    let (_, stdout, _) = run_cli(&home, &["config", "get", "timer.tick_interval_ms"]);
    assert_eq!(stdout.trim(), "250");

    let (code, _, _) = run_cli(&home, &["config", "get", "timer.bogus"]);
    assert_eq!(code, 1);
}

#[test]
fn test_timer_preview_uses_mode_length() {
    let home = TempDir::new().unwrap();
    let standard = run_json(&home, &["timer", "preview"]);
    assert_eq!(standard["duration_secs"], 3000);
    let pomodoro = run_json(&home, &["timer", "preview", "pomodoro"]);
    assert_eq!(pomodoro["duration_secs"], 1500);
}

#[test]
fn test_session_log_appears_as_newest_history_entry() {
    let home = TempDir::new().unwrap();
    let huge = (u64::MAX / 30).to_string();
    let logged = run_json(
        &home,
        &["session", "log", "--subject", "history", "--technique", "deep work", "--minutes", &huge],
    );
    assert_eq!(logged["duration"].as_u64(), Some(u64::MAX));

    let sessions = run_json(&home, &["session", "list"]);
    let sessions = sessions.as_array().unwrap();
    assert_eq!(sessions.len(), 7);
    assert_eq!(sessions.last().unwrap()["id"], logged["id"]);
}
