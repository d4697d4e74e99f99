//! End-to-end tests for the `footprint` binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn footprint() -> Command {
    cargo_bin_cmd!("footprint")
}

// ============================================
// Basics
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        footprint()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("household"));
    }

    #[test]
    fn shows_version() {
        footprint()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

// ============================================
// score
// ============================================

mod score {
    use super::*;

    #[test]
    fn text_output_lists_buildings() {
        footprint()
            .arg("score")
            .assert()
            .success()
            .stdout(predicate::str::contains("CST Station Complex"))
            .stdout(predicate::str::contains("Linking Road Shops"))
            .stdout(predicate::str::contains("23% higher"));
    }

    #[test]
    fn json_output_parses() {
        let output = footprint().args(["score", "--json"]).output().unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["air_quality"], "moderate");
        assert_eq!(json["atmosphere_score"], 75.0);
        assert_eq!(json["earth_icons"].as_array().unwrap().len(), 4);
        assert_eq!(json["categories"][1]["category"], "housing");
        assert_eq!(json["categories"][1]["normalized"], 75.0);
    }

    #[test]
    fn record_file_is_used() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("record.json");
        let mut record = serde_json::to_value(footprint::FootprintRecord::default()).unwrap();
        record["earthsRequired"] = serde_json::json!(1.5);
        record["comparisonPercent"] = serde_json::json!(-5);
        fs::write(&path, record.to_string()).unwrap();

        footprint()
            .args(["score", "--record"])
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("2 icons"))
            .stdout(predicate::str::contains("5% lower"));
    }

    #[test]
    fn invalid_record_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("record.json");
        let mut record = serde_json::to_value(footprint::FootprintRecord::default()).unwrap();
        record["carbonPercentage"] = serde_json::json!(140);
        fs::write(&path, record.to_string()).unwrap();

        footprint()
            .args(["score", "--record"])
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("carbonPercentage"));
    }

    #[test]
    fn oversized_earths_record_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("record.json");
        let mut record = serde_json::to_value(footprint::FootprintRecord::default()).unwrap();
        record["earthsRequired"] = serde_json::json!(1e19);
        fs::write(&path, record.to_string()).unwrap();

        for command in ["score", "render"] {
            footprint()
                .args([command, "--record"])
                .arg(&path)
                .assert()
                .failure()
                .stderr(predicate::str::contains("earthsRequired"));
        }
    }
}

// ============================================
// render
// ============================================

mod render {
    use super::*;

    #[test]
    fn default_render_shows_summary() {
        footprint()
            .arg("render")
            .assert()
            .success()
            .stdout(predicate::str::contains("tab: summary"))
            .stdout(predicate::str::contains("earthsNumber: 3.2"))
            .stdout(predicate::str::contains("waterSaved: 2,400"))
            .stdout(predicate::str::contains("earth icons: 4"));
    }

    #[test]
    fn tab_emotion_and_modal() {
        let output = footprint()
            .args(["render", "--tab", "feelings", "--emotion", "curious", "--open", "diet", "--json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["tab"], "feelings");
        assert_eq!(json["emotion"], "curious");
        assert_eq!(json["response_title"], "Curiosity Leads to Change");
        assert!(json["modal"].as_str().unwrap().contains("Crawford Market"));
    }

    #[test]
    fn retake_is_reproducible_with_seed() {
        let run = || {
            let output = footprint()
                .args(["render", "--retake", "--seed", "11", "--json"])
                .output()
                .unwrap();
            assert!(output.status.success());
            serde_json::from_slice::<serde_json::Value>(&output.stdout).unwrap()
        };
        let first = run();
        let second = run();

        assert_eq!(first["record"], second["record"]);
        let earths = first["record"]["earthsRequired"].as_f64().unwrap();
        assert!((2.5..4.0).contains(&earths));
        assert_eq!(
            first["notifications"][0],
            "Quiz completed! Here are your updated results."
        );
    }

    #[test]
    fn unknown_tab_fails() {
        footprint()
            .args(["render", "--tab", "leaderboard"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown tab"));
    }

    #[test]
    fn config_narrows_retake_range() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("footprint.toml");
        fs::write(&path, "[retake]\nearths_min = 3.0\nearths_max = 3.1\n").unwrap();

        let output = footprint()
            .args(["render", "--retake", "--json", "--config"])
            .arg(&path)
            .output()
            .unwrap();
        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let earths = json["record"]["earthsRequired"].as_f64().unwrap();
        assert!((3.0..3.1).contains(&earths));
    }

    #[test]
    fn config_in_working_directory_is_used() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("footprint.toml"),
            "[retake]\nearths_min = 3.0\nearths_max = 3.1\n",
        )
        .unwrap();

        let output = footprint()
            .current_dir(dir.path())
            .args(["render", "--retake", "--json"])
            .output()
            .unwrap();
        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let earths = json["record"]["earthsRequired"].as_f64().unwrap();
        assert!((3.0..3.1).contains(&earths));
    }

    #[test]
    fn broken_config_in_working_directory_falls_back() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("footprint.toml"), "[retake\nnot toml").unwrap();

        footprint()
            .current_dir(dir.path())
            .args(["render"])
            .assert()
            .success()
            .stdout(predicate::str::contains("earthsNumber: 3.2"));
    }

    #[test]
    fn inverted_config_range_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("footprint.toml");
        fs::write(&path, "[retake]\ncomparison_min = 10\ncomparison_max = -10\n").unwrap();

        footprint()
            .args(["render", "--config"])
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("comparison"));
    }
}

// ============================================
// sliders
// ============================================

mod sliders {
    use super::*;

    #[test]
    fn housing_label() {
        footprint()
            .args(["housing", "4"])
            .assert()
            .success()
            .stdout("3BHK+\n");
    }

    #[test]
    fn housing_out_of_range() {
        footprint()
            .args(["housing", "5"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("0-4"));
    }

    #[test]
    fn household_ten_plus() {
        footprint()
            .args(["household", "10"])
            .assert()
            .success()
            .stdout(predicate::str::contains("10+ people"))
            .stdout(predicate::str::contains("text=10%2B"));
    }

    #[test]
    fn household_json() {
        let output = footprint().args(["household", "1", "--json"]).output().unwrap();
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["label"], "1 person");
        assert_eq!(json["value"], "1");
    }
}
