//! Clock selection from configuration

use std::sync::Arc;

use hrms_common::{Clock, FixedClock, SystemClock};
use hrms_domain::ClockConfig;

/// The pinned clock when `fixed_date` is set, the system calendar otherwise
pub fn clock_from_config(config: &ClockConfig) -> Arc<dyn Clock> {
    match config.fixed_date {
        Some(date) => {
            tracing::info!(%date, "durations pinned to a fixed date");
            Arc::new(FixedClock::new(date))
        }
        None => Arc::new(SystemClock),
    }
}
