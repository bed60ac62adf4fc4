// Section renderer - Loading, then Rendered or ErrorShown, for each region
use crate::application::errors::RenderError;
use crate::application::render_target::RenderTarget;
use crate::application::retry::RetryingFetcher;
use crate::domain::corporate::{
    CorporateData, CorporateStructure, DataEnvelope, HealthStatus, RealAssetsResponse,
};
use crate::domain::region::{Region, RegionPhase, RegionView};
use crate::presentation::templates::Templates;
use chrono::Local;
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct SectionRenderer {
    fetcher: RetryingFetcher,
    target: Arc<dyn RenderTarget>,
    templates: Templates,
    base_url: String,
}

impl SectionRenderer {
    pub fn new(
        fetcher: RetryingFetcher,
        target: Arc<dyn RenderTarget>,
        templates: Templates,
        base_url: String,
    ) -> Self {
        Self {
            fetcher,
            target,
            templates,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, region: Region) -> String {
        format!("{}{}", self.base_url, region.endpoint())
    }

    /// Refresh one region. Failures end up on screen, never in the return value.
    pub async fn update(&self, region: Region) {
        self.target.replace(
            region,
            RegionView::new(RegionPhase::Loading, self.templates.loading()),
        );

        match self.render(region).await {
            Ok(html) => {
                tracing::debug!(region = region.id(), "region rendered");
                self.target
                    .replace(region, RegionView::new(RegionPhase::Rendered, html));
            }
            Err(e) => {
                tracing::error!(region = region.id(), error = %e, "failed to update region");
                let html = self.templates.error(region, &e.to_string());
                self.target
                    .replace(region, RegionView::new(RegionPhase::ErrorShown, html));
            }
        }
    }

    pub async fn update_health_status(&self) {
        self.update(Region::Health).await
    }

    pub async fn update_corporate_data(&self) {
        self.update(Region::CorporateData).await
    }

    pub async fn update_corporate_structure(&self) {
        self.update(Region::CorporateStructure).await
    }

    pub async fn update_real_assets(&self) {
        self.update(Region::RealAssets).await
    }

    async fn render(&self, region: Region) -> Result<String, RenderError> {
        let payload = self.fetcher.fetch_with_retry(&self.url_for(region)).await?;
        let now = Local::now();

        let html = match region {
            Region::Health => {
                let health: HealthStatus = serde_json::from_value(payload)?;
                self.templates.health(&health, &now)
            }
            Region::CorporateData => {
                let data: CorporateData = unwrap_data(payload)?;
                self.templates.corporate_data(&data, &now)
            }
            Region::CorporateStructure => {
                let structure: CorporateStructure = unwrap_data(payload)?;
                self.templates.corporate_structure(&structure, &now)
            }
            Region::RealAssets => {
                let response: RealAssetsResponse = serde_json::from_value(payload)?;
                self.templates.real_assets(&response)
            }
        };

        Ok(html)
    }
}

fn unwrap_data<T: serde::de::DeserializeOwned>(payload: Value) -> Result<T, RenderError> {
    let envelope: DataEnvelope<T> = serde_json::from_value(payload)?;
    Ok(envelope.data)
}
