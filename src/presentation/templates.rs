// Region fragment templates
use crate::domain::corporate::{CorporateData, CorporateStructure, HealthStatus, RealAssetsResponse};
use crate::domain::region::Region;
use crate::infrastructure::formatting::{
    escape_html, format_currency, format_local_time, format_number, format_timestamp,
};
use chrono::{DateTime, Local};
use std::borrow::Cow;

/// Backend text is interpolated verbatim unless `escape_text` is set
#[derive(Debug, Clone, Copy, Default)]
pub struct Templates {
    escape_text: bool,
}

impl Templates {
    pub fn new(escape_text: bool) -> Self {
        Self { escape_text }
    }

    fn text<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if self.escape_text {
            escape_html(value)
        } else {
            Cow::Borrowed(value)
        }
    }

    pub fn loading(&self) -> String {
        r#"<div class="loading">
    <div class="spinner-border text-primary" role="status">
        <span class="visually-hidden">Loading...</span>
    </div>
</div>"#
            .to_string()
    }

    pub fn error(&self, region: Region, message: &str) -> String {
        format!(
            r#"<div class="error-message">
    <i class="fas fa-exclamation-circle"></i>
    Error: {message}
    <form method="post" action="{action}">
        <button class="btn btn-sm btn-outline-primary mt-2" type="submit">
            <i class="fas fa-sync"></i> Retry
        </button>
    </form>
</div>"#,
            message = self.text(message),
            action = refresh_action(region),
        )
    }

    pub fn health(&self, health: &HealthStatus, now: &DateTime<Local>) -> String {
        let indicator = if health.is_healthy() {
            "healthy"
        } else {
            "unhealthy"
        };

        format!(
            r#"<div>
    <span class="status-indicator status-{indicator}"></span>
    {status}
    <div class="timestamp">Last updated: {now}</div>
    <div>Version: {version}</div>
</div>"#,
            status = self.text(&health.status),
            now = format_local_time(now),
            version = self.text(&health.version),
        )
    }

    pub fn corporate_data(&self, data: &CorporateData, now: &DateTime<Local>) -> String {
        let items = [
            ("Executive Summary", self.text(&data.executive_summary)),
            ("Fund Overview", self.text(&data.fund_overview)),
            ("Investment Strategy", self.text(&data.investment_strategy)),
            ("Risk Assessment", self.text(&data.risk_assessment)),
            ("AUM", Cow::Owned(format_currency(data.aum))),
        ];

        let list: String = items
            .iter()
            .map(|(label, value)| {
                format!(
                    r#"
    <div class="list-group-item">
        <h6 class="mb-1">{label}</h6>
        <p class="mb-1">{value}</p>
    </div>"#
                )
            })
            .collect();

        format!(
            r#"<div class="list-group">{list}
</div>
<div class="timestamp">Last updated: {now}</div>"#,
            now = format_local_time(now),
        )
    }

    pub fn corporate_structure(
        &self,
        structure: &CorporateStructure,
        now: &DateTime<Local>,
    ) -> String {
        let departments: String = structure
            .departments
            .iter()
            .map(|dept| {
                let teams: String = dept
                    .teams
                    .iter()
                    .map(|team| {
                        format!(
                            r#"
            <li>
                <strong>{name}</strong>
                <span class="team-info">({size} {role})</span>
            </li>"#,
                            name = self.text(&team.name),
                            size = format_number(&team.size),
                            role = self.text(&team.role),
                        )
                    })
                    .collect();

                format!(
                    r#"
    <div class="department">
        <h6>{name}</h6>
        <ul class="team-list">{teams}
        </ul>
    </div>"#,
                    name = self.text(&dept.name),
                )
            })
            .collect();

        format!(
            r#"<div class="department-tree">{departments}
</div>
<div class="timestamp">Last updated: {now}</div>"#,
            now = format_local_time(now),
        )
    }

    pub fn real_assets(&self, response: &RealAssetsResponse) -> String {
        let assets: String = response
            .data
            .iter()
            .map(|asset| {
                format!(
                    r#"
        <div class="list-group-item">
            <h6 class="mb-1">{symbol}</h6>
            <p class="mb-1">Market Cap: {market_cap}</p>
            <p class="mb-1">Revenue: {revenue}</p>
            <small>Last Updated: {updated}</small>
        </div>"#,
                    symbol = self.text(&asset.symbol),
                    market_cap = format_currency(asset.market_cap),
                    revenue = format_currency(asset.revenue),
                    updated = self.text(&format_timestamp(&asset.last_updated)),
                )
            })
            .collect();

        format!(
            r#"<div>
    <div class="list-group mt-3">{assets}
    </div>
    <div class="timestamp">Last updated: {updated}</div>
    <div>Total Assets: {total}</div>
</div>"#,
            updated = self.text(&format_timestamp(&response.last_updated)),
            total = format_number(&response.total_assets),
        )
    }
}

pub fn refresh_action(region: Region) -> String {
    format!("/regions/{}/refresh", region.id())
}
