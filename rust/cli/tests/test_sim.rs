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

#[test]
fn sim_predicts_known_round() {
    let (code, out, err) = run(&[
        "showdown", "sim", "-s", "balanced", "-s", "balanced", "--seed", "fixture-1",
    ]);
    assert_eq!(code, 0, "stderr: {}", err);
    assert!(out.contains("Winner: seat 0 with TWO_PAIR (4x)"), "{}", out);
    assert!(out.contains("Seat 0 [balanced]: bet [0.0, 4.0] metadata [1, 1, 1, 0, 1]"));
    assert!(out.contains("Seat 1 [balanced]: bet [0.0, 0.0]"));
}

#[test]
fn sim_agrees_with_play() {
    for seed in ["q1", "q2", "q3"] {
        let (_, sim, _) = run(&[
            "showdown", "sim", "-s", "aggressive", "-s", "conservative", "-s", "balanced",
            "--seed", seed,
        ]);
        let (_, play, _) = run(&[
            "showdown", "play", "-s", "aggressive", "-s", "conservative", "-s", "balanced",
            "--seed", seed, "--json",
        ]);
        let v: serde_json::Value = serde_json::from_str(&play).unwrap();
        let w = v["winner_index"].as_u64().unwrap();
        assert!(sim.contains(&format!("Winner: seat {} ", w)), "{}", sim);
    }
}

#[test]
fn sim_tallies_rounds() {
    let (code, out, _) = run(&[
        "showdown", "sim", "-s", "balanced", "-s", "aggressive", "--seed", "tally", "--rounds",
        "40",
    ]);
    assert_eq!(code, 0);
    assert!(out.starts_with("Rounds: 40 (seed tally)"));
    let total: u32 = out
        .lines()
        .filter(|l| l.starts_with("Seat "))
        .map(|l| {
            let after = l.split("]: ").nth(1).unwrap();
            after.split(' ').next().unwrap().parse::<u32>().unwrap()
        })
        .sum();
    assert_eq!(total, 40);
}

#[test]
fn sim_rejects_zero_rounds() {
    let (code, _, err) = run(&["showdown", "sim", "-s", "balanced", "--rounds", "0"]);
    assert_eq!(code, 2);
    assert!(err.contains("rounds must be >= 1"));
}
