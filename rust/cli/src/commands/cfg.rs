//! Configuration command handler.
//!
//! Prints the resolved configuration with the source of every value
//! (default, environment, or configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "default_pot": {
//!     "value": 1000,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "default_pot": {
            "value": config.default_pot,
            "source": sources.default_pot,
        },
        "draw_mode": {
            "value": config.draw_mode,
            "source": sources.draw_mode,
        },
        "game_id": {
            "value": config.game_id,
            "source": sources.game_id,
        },
        "opponents_seed": {
            "value": config.opponents_seed,
            "source": sources.opponents_seed,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
