use std::path::PathBuf;
use std::time::Instant;

use serde_json::Value;

use crate::client::models::connection::Route;
use crate::client::models::fetch_state::FetchTicket;
use crate::common::endpoints::Endpoint;
use crate::common::errors::FetchError;

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
    // Settings dialog
    OpenConfigDialog,
    CloseConfigDialog,
    ConfigBaseUrlChanged(String),
    ConfigApiBasePathChanged(String),
    SaveConfig,
    ResetConfig,
    // Actuator tabs
    SelectTab(Endpoint),
    RefreshActiveTab,
    // OpenAPI page
    RefreshSpec,
    DownloadSpec,
    SpecDownloaded(Result<PathBuf, String>),
    // Any endpoint fetch coming back
    FetchCompleted { ticket: FetchTicket, outcome: Result<Value, FetchError> },
    // Viewer and links
    CopyDocument(Endpoint),
    CopyIndicatorExpired { endpoint: Endpoint, generation: u64 },
    CopyUrl(Endpoint),
    // Notice bar
    ClearLog { generation: u64 },
    // Animation clock
    Tick(Instant),
}
