use crate::ReportKind;

const DEFAULT_BASE: &str = "/api/v1";

/// Endpoint layout of the backend.
///
/// The base path defaults to `/api/v1` and can be pinned at build time with
/// `PRESENCE_API_BASE` (e.g. `PRESENCE_API_BASE=https://intranet.example/api/v1`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn users(&self) -> String {
        format!("{}/users", self.base)
    }

    pub fn report(&self, kind: ReportKind, user_id: u32) -> String {
        format!("{}/{}/{user_id}", self.base, kind.endpoint())
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(option_env!("PRESENCE_API_BASE").unwrap_or(DEFAULT_BASE))
    }
}
