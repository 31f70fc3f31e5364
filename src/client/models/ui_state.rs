use std::time::Duration;

use crate::common::endpoints::Endpoint;

/// How long the "Copied!" label stays up.
pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);

/// Transient "copied" flag of the viewers. Each copy bumps the generation so
/// an expiry timer from an earlier copy cannot clear a later one.
#[derive(Debug, Clone, Default)]
pub struct CopyIndicator {
    active: Option<(Endpoint, u64)>,
    generation: u64,
}

impl CopyIndicator {
    pub fn trigger(&mut self, endpoint: Endpoint) -> u64 {
        self.generation += 1;
        self.active = Some((endpoint, self.generation));
        self.generation
    }

    pub fn expire(&mut self, endpoint: Endpoint, generation: u64) {
        if self.active == Some((endpoint, generation)) {
            self.active = None;
        }
    }

    pub fn is_copied(&self, endpoint: Endpoint) -> bool {
        matches!(self.active, Some((e, _)) if e == endpoint)
    }
}

/// Editable fields of the settings dialog.
#[derive(Debug, Clone, Default)]
pub struct ConfigForm {
    pub open: bool,
    pub base_url: String,
    pub api_base_path: String,
    pub error: Option<String>,
}
