mod commands;
pub mod history;

pub use commands::Command;
pub use history::{History, Snapshot};
