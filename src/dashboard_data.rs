// src/dashboard_data.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub charts: Vec<Chart>,
    pub publishers: Vec<Publisher>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub title: String,
    pub src: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publisher {
    pub name: String,
    pub games: Vec<String>,
}

const BUNDLED: &str = include_str!("../public/dashboard.json");

impl DashboardData {
    pub fn bundled() -> Result<Self, String> {
        serde_json::from_str(BUNDLED).map_err(|e| format!("Invalid dashboard data: {}", e))
    }
}

impl Publisher {
    /// Element ids for the game list and its show-more button.
    pub fn list_ids(index: usize) -> (String, String) {
        (format!("publisher-{}", index), format!("publisher-{}-btn", index))
    }
}
