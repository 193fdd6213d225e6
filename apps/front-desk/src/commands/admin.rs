//! # Admin Commands
//!
//! The admin desk summary.

use serenity_store::Dashboard;
use tracing::debug;

use crate::error::ApiResult;
use crate::state::HotelState;

/// Bookings, revenue and occupancy right now.
pub fn get_dashboard(state: &HotelState) -> ApiResult<Dashboard> {
    debug!("get_dashboard command");
    state.with_hotel(|h| h.dashboard())
}
