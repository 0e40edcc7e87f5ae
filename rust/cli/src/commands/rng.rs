//! Seeded stream inspection.
//!
//! `rng` prints the FNV-1a hash of a seed string and the first floats its
//! stream produces, which is enough to check another implementation of the
//! same generator against this one.

use crate::error::CliError;
use showdown_engine::rng::{fnv1a64, make_rng};
use std::io::Write;

pub fn handle_rng_command(seed: &str, count: usize, out: &mut dyn Write) -> Result<(), CliError> {
    if count == 0 {
        return Err(CliError::InvalidInput("count must be >= 1".to_string()));
    }
    writeln!(out, "seed: {:?}", seed)?;
    writeln!(out, "fnv1a64: {:#018x}", fnv1a64(seed))?;
    let mut rng = make_rng(seed);
    for i in 0..count {
        writeln!(out, "{}: {}", i, rng())?;
    }
    Ok(())
}
