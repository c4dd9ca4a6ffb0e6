//! Application metadata DTO

use serde::{Deserialize, Serialize};

/// Descriptive application metadata served by the info endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppInfo {
    pub application_name: String,
    pub version: String,
    pub environment: String,
    pub timestamp: String,
    pub description: String,
}
