//! Selection-driven report pipeline. Nothing in here touches the DOM.

pub mod dataset;
pub mod directory;
pub mod format;
pub mod platform;
pub mod report;
pub mod selection;
pub mod time_of_day;
