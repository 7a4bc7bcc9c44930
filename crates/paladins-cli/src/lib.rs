/*
[INPUT]:  Public API exports for paladins-cli crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod export;

// Re-export main types for convenience
pub use config::CliConfig;
pub use export::{export_champions, render_champion_enum};
