//! Autoplay runner tests - config loading and JSON event stream

use match3::autoplay::{self, AutoplaySummary};
use match3::config::RunConfig;
use match3::core::BoardConfig;

fn small_config(seed: u32) -> RunConfig {
    RunConfig {
        board: BoardConfig::new(6, 6),
        seed,
        colors: 3,
        moves: 300,
    }
}

fn play(config: &RunConfig) -> (AutoplaySummary, Vec<serde_json::Value>) {
    let mut out = Vec::new();
    let summary = autoplay::run(config, &mut out).unwrap();
    let lines = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    (summary, lines)
}

#[test]
fn test_autoplay_summary_adds_up() {
    let (summary, lines) = play(&small_config(11));
    assert_eq!(summary.attempted, 300);
    assert_eq!(summary.committed + summary.rejected, summary.attempted);

    let refills = lines.iter().filter(|v| v["kind"] == "refill").count();
    assert_eq!(refills as u32, summary.committed);

    let matches = lines.iter().filter(|v| v["kind"] == "match").count();
    assert_eq!(summary.score as usize, matches * 3 * 10);
}

#[test]
fn test_autoplay_event_lines_are_ordered_per_step() {
    let (_, lines) = play(&small_config(3));
    let mut last_step = None;
    let mut saw_refill_for_step = false;
    for line in &lines {
        let step = line["step"].as_u64().unwrap();
        if last_step != Some(step) {
            if last_step.is_some() {
                assert!(saw_refill_for_step, "step {:?} ended without refill", last_step);
            }
            last_step = Some(step);
            saw_refill_for_step = false;
        }
        assert!(!saw_refill_for_step, "event after refill in step {}", step);
        if line["kind"] == "refill" {
            saw_refill_for_step = true;
        } else {
            assert_eq!(line["kind"], "match");
            assert_eq!(line["positions"].as_array().unwrap().len(), 3);
        }
    }
}

#[test]
fn test_autoplay_is_deterministic() {
    let (a, lines_a) = play(&small_config(99));
    let (b, lines_b) = play(&small_config(99));
    assert_eq!(a, b);
    assert_eq!(lines_a, lines_b);
}

#[test]
fn test_autoplay_without_score() {
    let mut config = small_config(5);
    config.board = config.board.without_score();
    let (summary, _) = play(&config);
    assert_eq!(summary.score, 0);
}

#[test]
fn test_single_cell_board_attempts_nothing() {
    let mut config = small_config(1);
    config.board = BoardConfig::new(1, 1);
    let (summary, lines) = play(&config);
    assert_eq!(summary.attempted, 0);
    assert!(lines.is_empty());
}

#[test]
fn test_oversized_board_is_an_error() {
    let mut config = small_config(1);
    config.board = BoardConfig::new(i32::MAX as usize, i32::MAX as usize);
    assert!(config.validate().is_err());

    let mut out = Vec::new();
    let err = autoplay::run(&config, &mut out).unwrap_err();
    assert!(err.to_string().contains("failed to build board"), "{err}");
    assert!(out.is_empty());
}

#[test]
fn test_config_file_roundtrip() {
    let path = std::env::temp_dir().join(format!("match3-config-{}.toml", std::process::id()));
    std::fs::write(&path, "seed = 7\ncolors = 4\n[board]\nheight = 5\n").unwrap();

    let loaded = RunConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.seed, 7);
    assert_eq!(loaded.colors, 4);
    assert_eq!(loaded.board.height, 5);
    assert_eq!(loaded.board.width, 8);
}

#[test]
fn test_missing_config_file_is_an_error_for_load() {
    let err = RunConfig::load(std::path::Path::new("/nonexistent/match3.toml")).unwrap_err();
    assert!(err.to_string().contains("failed to read config"));
}
