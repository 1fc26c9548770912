//! Routed pages, one per report kind.

mod mean_time;
mod presence;
mod start_end;

pub use mean_time::MeanTime;
pub use presence::PresenceWeekday;
pub use start_end::StartEnd;
