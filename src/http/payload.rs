//! Response bodies for the public routes.

use serde::Serialize;

use crate::config::BuildInfo;
use crate::health::MemoryUsage;

pub const WELCOME_MESSAGE: &str = "Welcome to the GrOMEtiS CI/CD application!";
pub const APPLICATION_NAME: &str = "GrOMEtiS App";
pub const APPLICATION_VERSION: &str = "1.0.0";

/// One entry of the sample listing served by `/api/data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DataItem {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
}

/// The fixed listing, in response order.
pub static DATA_ITEMS: [DataItem; 3] = [
    DataItem {
        id: 1,
        name: "Item 1",
        description: "Sample data",
    },
    DataItem {
        id: 2,
        name: "Item 2",
        description: "More sample data",
    },
    DataItem {
        id: 3,
        name: "Item 3",
        description: "Data from the Jenkins CI/CD pipeline",
    },
];

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub status: &'static str,
    pub timestamp: String,
    pub build: BuildInfo,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime: f64,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub application: &'static str,
    pub version: &'static str,
    pub build: BuildInfo,
    pub uptime: f64,
    pub memory: MemoryUsage,
    pub platform: &'static str,
    pub arch: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DataResponse {
    pub data: &'static [DataItem],
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct NotFoundResponse {
    pub error: &'static str,
    pub path: String,
}
