// Payload shapes returned by the corporate API
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        let status = self.status.to_lowercase();
        status == "healthy" || status == "success"
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorporateData {
    pub executive_summary: String,
    pub fund_overview: String,
    pub investment_strategy: String,
    pub risk_assessment: String,
    #[serde(default)]
    pub aum: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorporateStructure {
    pub departments: Vec<Department>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Department {
    pub name: String,
    pub teams: Vec<Team>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Team {
    pub name: String,
    pub size: serde_json::Number,
    pub role: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RealAsset {
    pub symbol: String,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub revenue: Option<f64>,
    pub last_updated: String,
}

/// The real-assets endpoint carries its list and totals side by side
#[derive(Debug, Clone, Deserialize)]
pub struct RealAssetsResponse {
    pub data: Vec<RealAsset>,
    pub total_assets: serde_json::Number,
    pub last_updated: String,
}

/// Envelope used by the `/api/v1/*` endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}
