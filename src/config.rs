//! Client configuration shared by the bulk and single prediction commands.

use std::time::Duration;

use crate::types::MAX_BATCH_SIZE;

pub const DEFAULT_API_URL: &str = "https://pylord-api-bfsi.hf.space";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
/// Uploads larger than 10 MiB are refused before they are read.
pub const DEFAULT_MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the scoring service, without the `/api/...` path.
    pub base_url: String,
    pub timeout: Duration,
    pub max_batch_size: usize,
    pub max_file_bytes: u64
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_file_bytes(mut self, max_file_bytes: u64) -> Self {
        self.max_file_bytes = max_file_bytes;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_batch_size: MAX_BATCH_SIZE,
            max_file_bytes: DEFAULT_MAX_FILE_BYTES
        }
    }
}
