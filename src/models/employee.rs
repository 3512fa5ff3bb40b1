use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
}

/// One performance review entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRecord {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub performance: Option<f64>,
    #[serde(default)]
    pub tasks_completed: Option<f64>,
    #[serde(default)]
    pub achievements: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRecord {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Amounts are kept as raw JSON: the backend sends numbers, numeric
/// strings, or (for allowances and deductions) an object of named parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRecord {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub month: Value,
    #[serde(default)]
    pub basic_salary: Value,
    #[serde(default)]
    pub allowances: Value,
    #[serde(default)]
    pub deductions: Value,
    #[serde(default)]
    pub net_salary: Value,
}
