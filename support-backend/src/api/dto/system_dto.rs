// src/api/dto/system_dto.rs
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    pub fn connected(timestamp: String) -> Self {
        Self {
            status: "ok".to_string(),
            database: "connected".to_string(),
            timestamp: Some(timestamp),
            error: None,
        }
    }

    pub fn disconnected(error: String) -> Self {
        Self {
            status: "error".to_string(),
            database: "disconnected".to_string(),
            timestamp: None,
            error: Some(error),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct EndpointMap {
    pub health: String,
    pub tickets: String,
    pub recordings: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ServiceInfoResponse {
    pub name: String,
    pub version: String,
    pub endpoints: EndpointMap,
}
