use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MAZE: &str = include_str!("../maps/maze.txt");

fn gridstar_cmd() -> Command {
    Command::cargo_bin("gridstar").expect("Failed to find gridstar binary")
}

/// Write `contents` to a map file inside a fresh temporary directory.
fn map_file(contents: &str) -> (TempDir, String) {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let path = dir.path().join("map.txt");
    fs::write(&path, contents).expect("Failed to write map");
    let path = path.to_str().unwrap().to_string();
    (dir, path)
}

#[test]
fn test_solve_draws_path() {
    let (_dir, map) = map_file(MAZE);

    gridstar_cmd()
        .args(["solve", &map, "--heuristic", "octile"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("S*.#"))
        .stdout(predicate::str::contains("cost: 140"))
        .stdout(predicate::str::contains("steps: 12"));
}

#[test]
fn test_solve_default_heuristic_draws_exact_path() {
    let (_dir, map) = map_file(MAZE);

    let expected = "\
S*.#.****.
.#*#*####*
.#.*.#...*
.#####.##*
......#..G
cost: 140
steps: 12
";
    gridstar_cmd()
        .args(["solve", &map])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_solve_lists_points() {
    let (_dir, map) = map_file("S..\n...\n..G");

    gridstar_cmd()
        .args(["solve", &map, "--points"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("(0, 0)\n(1, 1)\n(2, 2)\n"));

    gridstar_cmd()
        .args(["solve", &map, "--points", "--goal-first"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("(2, 2)\n(1, 1)\n(0, 0)\n"));
}

#[test]
fn test_solve_json_report() {
    let (_dir, map) = map_file(MAZE);

    let output = gridstar_cmd()
        .args(["solve", &map, "--json", "--heuristic", "octile"])
        .output()
        .expect("Failed to run gridstar");
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["found"], true);
    assert_eq!(report["cost"], 140);
    assert_eq!(report["steps"], 12);
    assert_eq!(report["start"]["x"], 0);
    assert_eq!(report["goal"]["x"], 9);
    assert_eq!(report["points"].as_array().unwrap().len(), 13);
}

#[test]
fn test_solve_from_stdin() {
    gridstar_cmd()
        .args(["solve", "-"])
        .write_stdin("S.G\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("S*G"))
        .stdout(predicate::str::contains("cost: 20"));
}

#[test]
fn test_unreachable_goal_exits_with_status_two() {
    let (_dir, map) = map_file("S#.\n##.\n..G");

    gridstar_cmd()
        .args(["solve", &map])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("no path"));
}

#[test]
fn test_missing_goal_marker() {
    let (_dir, map) = map_file("S..\n...");

    gridstar_cmd()
        .args(["solve", &map])
        .assert()
        .failure()
        .stderr(predicate::str::contains("goal marker"));
}

#[test]
fn test_invalid_map() {
    let (_dir, map) = map_file("S.x\n..G");

    gridstar_cmd()
        .args(["solve", &map])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid map"));
}

#[test]
fn test_missing_map_file() {
    gridstar_cmd()
        .args(["solve", "/nonexistent/gridstar/map.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read map file"));
}

#[test]
fn test_random_open_map() {
    gridstar_cmd()
        .args([
            "random",
            "--width",
            "6",
            "--height",
            "4",
            "--density",
            "0",
            "--seed",
            "1",
            "--heuristic",
            "octile",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("seed: 1"))
        .stdout(predicate::str::starts_with("S"))
        .stdout(predicate::str::contains("cost: 62"));
}

#[test]
fn test_random_is_reproducible() {
    let run = || {
        gridstar_cmd()
            .args(["random", "--width", "12", "--height", "8", "--seed", "99"])
            .output()
            .expect("Failed to run gridstar")
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_random_rejects_bad_density() {
    gridstar_cmd()
        .args(["random", "--density", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("density"));
}
