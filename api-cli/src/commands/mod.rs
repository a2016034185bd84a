// api-cli/src/commands/mod.rs
pub mod resource;
pub mod setup;

pub use resource::{handle_resource, ResourceCommands};
pub use setup::run_setup;
