//! # Config Commands
//!
//! Retrieving the front desk configuration.

use tracing::debug;

use crate::state::HotelConfig;

/// Gets the current configuration (read-only).
pub fn get_config(config: &HotelConfig) -> HotelConfig {
    debug!("get_config command");
    config.clone()
}
