use serde_json::Value;

fn run(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = showdown_cli::run(args, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

const FIXTURE: &[&str] = &[
    "showdown", "play", "-s", "balanced", "-s", "balanced", "--id", "p0", "--id", "p1", "--pot",
    "1000", "--seed", "fixture-1",
];

#[test]
fn play_json_matches_known_round() {
    let mut args = FIXTURE.to_vec();
    args.push("--json");
    let (code, out, err) = run(&args);
    assert_eq!(code, 0, "stderr: {}", err);

    let v: Value = serde_json::from_str(&out).expect("valid JSON");
    assert_eq!(v["seed"], "fixture-1");
    assert_eq!(v["winner_index"], 0);
    assert_eq!(v["total_pot"], 1000);
    let p0 = &v["players"][0];
    assert_eq!(p0["player_id"], "p0");
    assert_eq!(p0["hand_eval"]["rank"], "TWO_PAIR");
    assert_eq!(p0["discard_indices"], serde_json::json!([1, 2, 3]));
    assert_eq!(p0["payout"], 1000);
    assert_eq!(v["players"][1]["hand_eval"]["rank"], "HIGH_CARD");
    assert_eq!(v["players"][1]["payout"], 0);
}

#[test]
fn play_text_names_the_winner() {
    let (code, out, _) = run(FIXTURE);
    assert_eq!(code, 0);
    assert!(out.starts_with("Seed: fixture-1 (game practice, pot 1000)"));
    assert!(out.contains("Seat 0 p0 [balanced]"));
    assert!(out.contains("Seat 1 p1 [balanced]"));
    assert!(
        out.contains("Winner: seat 0 (p0) with Two Pair, Ks and 6s, payout 1000"),
        "{}",
        out
    );
}

#[test]
fn play_is_deterministic() {
    let (_, a, _) = run(FIXTURE);
    let (_, b, _) = run(FIXTURE);
    assert_eq!(a, b);
}

#[test]
fn shared_draw_changes_replacements() {
    let mut args = FIXTURE.to_vec();
    args.extend(["--json", "--shared-draw"]);
    let (code, out, _) = run(&args);
    assert_eq!(code, 0);
    let v: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["players"][0]["hand_eval"]["rank"], "PAIR");
    assert_eq!(v["players"][1]["hand_eval"]["rank"], "PAIR");
    assert_eq!(v["winner_index"], 0);
}

#[test]
fn play_without_seed_still_succeeds() {
    let (code, out, _) = run(&["showdown", "play", "-s", "aggressive", "-s", "conservative"]);
    assert_eq!(code, 0);
    assert!(out.contains("Winner: seat "));
}

#[test]
fn play_writes_round_history() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rounds.jsonl");
    let path_str = path.to_string_lossy().to_string();
    let mut args = FIXTURE.to_vec();
    args.extend(["--log", path_str.as_str()]);
    let (code, _, _) = run(&args);
    assert_eq!(code, 0);

    let content = std::fs::read_to_string(&path).unwrap();
    let line = content.lines().next().expect("one record");
    let rec: Value = serde_json::from_str(line).unwrap();
    assert!(rec["round_id"].as_str().unwrap().ends_with("-000001"));
    assert!(rec["ts"].is_string());
    assert_eq!(rec["result"]["seed"], "fixture-1");
    assert_eq!(rec["meta"]["command"], "play");
}

#[test]
fn repeated_logging_appends_rounds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.jsonl");
    let path_str = path.to_string_lossy().to_string();
    for seed in ["one", "two"] {
        let (code, _, err) = run(&[
            "showdown",
            "play",
            "-s",
            "balanced",
            "-s",
            "aggressive",
            "--seed",
            seed,
            "--log",
            path_str.as_str(),
        ]);
        assert_eq!(code, 0, "stderr: {}", err);
    }

    let content = std::fs::read_to_string(&path).unwrap();
    let records: Vec<Value> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["result"]["seed"], "one");
    assert_eq!(records[1]["result"]["seed"], "two");
    assert_ne!(records[0]["round_id"], records[1]["round_id"]);
    assert!(records[1]["round_id"].as_str().unwrap().ends_with("-000002"));
}

#[test]
fn too_many_players_exits_two() {
    let mut args = vec!["showdown", "play", "--seed", "crowd"];
    for _ in 0..10 {
        args.extend(["-s", "balanced"]);
    }
    let (code, out, err) = run(&args);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Too many players"), "{}", err);
}

#[test]
fn zero_pot_is_rejected() {
    let (code, _, err) = run(&["showdown", "play", "-s", "balanced", "--pot", "0"]);
    assert_eq!(code, 2);
    assert!(err.contains("pot must be > 0"));
}
