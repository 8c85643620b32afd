pub mod blueprint;
pub mod config;
pub mod document;
pub mod errors;
pub mod naming;
pub mod net;
pub mod output;
pub mod render;

pub use blueprint::{Blueprint, Outcome, SkipReason, TestCaseContext};
pub use config::BlueprintConfig;
pub use errors::BlueprintError;
