//! Wire vocabulary and transport for the presence dashboard.
//!
//! The dashboard only ever issues two kinds of request: the directory of
//! tracked individuals and a per-individual report. Both are plain JSON `GET`s
//! against the presence analyzer backend.

mod client;
mod config;
mod error;
mod kind;

pub use client::{DirectoryEntry, HttpClient, PresenceApi};
pub use config::Endpoints;
pub use error::ApiError;
pub use kind::ReportKind;
