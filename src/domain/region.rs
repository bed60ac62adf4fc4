// Region domain model - the named output areas of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Health,
    CorporateData,
    CorporateStructure,
    RealAssets,
}

impl Region {
    /// Page order of the four cards
    pub const ALL: [Region; 4] = [
        Region::Health,
        Region::CorporateData,
        Region::CorporateStructure,
        Region::RealAssets,
    ];

    /// Element identifier used in markup and URLs
    pub fn id(&self) -> &'static str {
        match self {
            Region::Health => "health-status",
            Region::CorporateData => "corporate-data",
            Region::CorporateStructure => "corporate-structure",
            Region::RealAssets => "real-assets",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Region::Health => "System Health",
            Region::CorporateData => "Corporate Data",
            Region::CorporateStructure => "Corporate Structure",
            Region::RealAssets => "Real Assets",
        }
    }

    /// Endpoint path relative to the API base URL
    pub fn endpoint(&self) -> &'static str {
        match self {
            Region::Health => "/health",
            Region::CorporateData => "/api/v1/corporate-data",
            Region::CorporateStructure => "/api/v1/corporate-structure",
            Region::RealAssets => "/api/v1/real-assets",
        }
    }

    pub fn from_id(id: &str) -> Option<Region> {
        Region::ALL.into_iter().find(|r| r.id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionPhase {
    Loading,
    Rendered,
    ErrorShown,
}

/// What a region currently displays
#[derive(Debug, Clone)]
pub struct RegionView {
    pub phase: RegionPhase,
    pub html: String,
}

impl RegionView {
    pub fn new(phase: RegionPhase, html: String) -> Self {
        Self { phase, html }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_round_trips_every_region() {
        for region in Region::ALL {
            assert_eq!(Region::from_id(region.id()), Some(region));
        }
        assert_eq!(Region::from_id("portfolio"), None);
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(Region::Health.endpoint(), "/health");
        assert_eq!(Region::RealAssets.endpoint(), "/api/v1/real-assets");
    }
}
