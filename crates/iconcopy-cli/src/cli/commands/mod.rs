//! CLI command handlers, one file per subcommand.

mod checksum;
mod config;
mod run;

pub use checksum::run_checksum;
pub use config::run_config;
pub use run::run_copy;
