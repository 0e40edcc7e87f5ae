//! Command handler modules for the showdown CLI.
//!
//! Each command lives in its own file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Output streams (`&mut dyn Write`) passed as parameters
//! - All errors propagated via the `CliError` enum

pub mod cfg;
pub mod eval;
pub mod play;
pub mod practice;
pub mod rng;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use eval::handle_eval_command;
pub use play::{PlayArgs, handle_play_command};
pub use practice::{PracticeArgs, handle_practice_command};
pub use rng::handle_rng_command;
pub use sim::{SimArgs, handle_sim_command};
