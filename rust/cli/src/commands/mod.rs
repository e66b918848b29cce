//! Command handlers for the `petal` binary.
//!
//! One module per subcommand, each exposing `handle_<name>_command`. Output
//! streams are passed in so the handlers run the same under tests.

mod cfg;
mod deal;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::{PlayOptions, handle_play_command};
pub use sim::handle_sim_command;
