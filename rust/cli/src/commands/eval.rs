//! Single-hand evaluation.

use crate::error::CliError;
use crate::formatters::{format_cards, format_multiplier};
use showdown_engine::cards::parse_cards;
use showdown_engine::hand::evaluate;
use std::io::Write;

/// Evaluate the cards given on the command line.
///
/// Cards may be passed as separate arguments or as one quoted string.
pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let joined = cards.join(" ");
    let hand = parse_cards(&joined).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    let eval = evaluate(&hand)?;

    writeln!(out, "Hand: {}", format_cards(&hand))?;
    writeln!(out, "Rank: {}", eval.rank.as_str())?;
    writeln!(out, "Name: {}", eval.name)?;
    writeln!(out, "Kickers: {:?}", eval.kickers)?;
    writeln!(out, "Value: {}", eval.value)?;
    writeln!(
        out,
        "Multiplier: {}",
        format_multiplier(eval.rank.multiplier())
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn separate_and_joined_arguments_agree() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        handle_eval_command(&args("As Ad Ah Ks Kd"), &mut a).unwrap();
        handle_eval_command(&["As Ad Ah Ks Kd".to_string()], &mut b).unwrap();
        assert_eq!(a, b);
        let s = String::from_utf8(a).unwrap();
        assert!(s.contains("Rank: FULL_HOUSE"));
        assert!(s.contains("Kickers: [13, 12]"));
        assert!(s.contains("Multiplier: 15x"));
    }

    #[test]
    fn bad_card_is_invalid_input() {
        let mut out = Vec::new();
        let e = handle_eval_command(&args("As Ad Zz Ks Kd"), &mut out).unwrap_err();
        assert!(matches!(e, CliError::InvalidInput(_)));
    }

    #[test]
    fn wrong_count_is_engine_error() {
        let mut out = Vec::new();
        let e = handle_eval_command(&args("As Ad"), &mut out).unwrap_err();
        assert!(matches!(e, CliError::Engine(_)));
        assert!(out.is_empty());
    }
}
