mod common;

use common::{TempEnvVar, clean_env, run_cli};
use petal_engine::logger::GameRecord;
use serial_test::serial;
use std::io::Write;

#[test]
#[serial]
fn help_lists_expected_commands() {
    let (code, stdout, _) = run_cli(&["petal", "--help"]);
    assert_eq!(code, 0);
    for cmd in ["play", "sim", "deal", "cfg"] {
        assert!(stdout.contains(cmd), "help should list subcommand `{}`", cmd);
    }
}

#[test]
#[serial]
fn unknown_command_prints_usage() {
    let (code, _, stderr) = run_cli(&["petal", "bloom"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("Usage: petal <command>"));
    assert!(stderr.contains("  sim"));
}

#[test]
#[serial]
fn cfg_shows_default_settings() {
    let _env = clean_env();
    let (code, stdout, stderr) = run_cli(&["petal", "cfg"]);
    assert_eq!(code, 0, "stderr: {}", stderr);

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["ai"]["value"].as_str(), Some("greedy"));
    assert_eq!(json["ai_delay_ms"]["value"].as_u64(), Some(600));
    assert_eq!(json["first_player"]["value"].as_str(), Some("random"));
    for key in ["seed", "ai", "ai_delay_ms", "first_player"] {
        assert_eq!(json[key]["source"].as_str(), Some("default"), "{}", key);
    }
}

#[test]
#[serial]
fn cfg_layers_file_then_env() {
    let _env = clean_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = 5\nai = \"baseline\"\nai_delay_ms = 0").unwrap();
    let _cfg = TempEnvVar::set("PETAL_CONFIG", file.path().to_str().unwrap());
    let _seed = TempEnvVar::set("PETAL_SEED", "77");

    let (code, stdout, _) = run_cli(&["petal", "cfg"]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["seed"]["value"].as_u64(), Some(77));
    assert_eq!(json["seed"]["source"].as_str(), Some("env"));
    assert_eq!(json["ai"]["value"].as_str(), Some("baseline"));
    assert_eq!(json["ai"]["source"].as_str(), Some("file"));
    assert_eq!(json["ai_delay_ms"]["source"].as_str(), Some("file"));
}

#[test]
#[serial]
fn cfg_rejects_unknown_ai() {
    let _env = clean_env();
    let _ai = TempEnvVar::set("PETAL_AI", "oracle");
    let (code, stdout, stderr) = run_cli(&["petal", "cfg"]);
    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("unknown ai"));
}

#[test]
#[serial]
fn deal_is_reproducible_from_the_printed_seed() {
    let _env = clean_env();
    let (code, first, _) = run_cli(&["petal", "deal"]);
    assert_eq!(code, 0);
    let seed = first
        .lines()
        .next()
        .and_then(|l| l.strip_prefix("Seed: "))
        .unwrap()
        .to_string();

    let (_, again, _) = run_cli(&["petal", "deal", "--seed", &seed]);
    assert_eq!(first, again);
}

#[test]
#[serial]
fn sim_writes_one_record_per_game() {
    let _env = clean_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("runs/games.jsonl");
    let path_str = path.to_str().unwrap();

    let (code, stdout, stderr) = run_cli(&[
        "petal", "sim", "--games", "4", "--seed", "9", "--output", path_str,
    ]);
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("Records written: 4"));

    let content = std::fs::read_to_string(&path).unwrap();
    let records: Vec<GameRecord> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 4);
    for (i, rec) in records.iter().enumerate() {
        assert_eq!(rec.seed, Some(9 + i as u64));
        assert!(rec.ts.is_some());
        assert!(!rec.moves.is_empty());
        if let Some(w) = rec.winner {
            assert!(rec.scores[w] >= 20);
        }
    }
}

#[test]
#[serial]
fn sim_rejects_zero_games() {
    let _env = clean_env();
    let (code, _, stderr) = run_cli(&["petal", "sim", "--games", "0"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("games and max-turns must be >= 1"));
}

#[test]
#[serial]
fn play_rejects_bad_first_player() {
    let (code, _, stderr) = run_cli(&["petal", "play", "--first", "2"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("expected random, 0 or 1"));
}
