//! Find which BGP neighbors in a directory of Junos configs import a
//! "participant" policy, and whether that policy's prefix-list matches
//! exactly or "orlonger".

mod aggregate;
pub mod config;
mod display;
mod error;
pub mod models;
pub mod parse;
mod source;
#[cfg(feature = "cli")]
mod table;

pub use aggregate::{AggregateTable, Extractor, Overwrite};
pub use config::ExtractorConfig;
pub use display::{write_table, OutputFormat, ParticipantRow};
pub use error::ExtractError;
pub use source::{config_files, read_config};
