pub mod config;
pub mod error;

pub use config::BeaconConfig;
pub use error::{BeaconError, Result};
