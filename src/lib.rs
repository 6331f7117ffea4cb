pub mod command;
pub mod error;
pub mod executor;
pub mod manifest;

/// First line printed on every text-mode run.
pub const BANNER: &str = "Converting to epub";
