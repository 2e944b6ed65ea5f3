//! CLI subcommand implementations.

pub mod duration;
pub mod show;
pub mod total;
pub mod util;
pub mod validate;
