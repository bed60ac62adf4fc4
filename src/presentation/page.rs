// Page shell: one card per region, each with a header refresh control
use crate::application::render_target::RenderTarget;
use crate::domain::region::Region;
use crate::presentation::templates::{refresh_action, Templates};
use std::time::Duration;

pub fn render_page(
    regions: &dyn RenderTarget,
    templates: &Templates,
    reload_every: Duration,
) -> String {
    let cards: String = Region::ALL
        .iter()
        .map(|&region| {
            let body = regions
                .current(region)
                .map(|view| view.html)
                .unwrap_or_else(|| templates.loading());

            format!(
                r#"
        <div class="col-md-6 mb-4">
            <div class="card">
                <div class="card-header d-flex justify-content-between align-items-center">
                    <h5 class="mb-0">{title}</h5>
                    <form method="post" action="{action}">
                        <button class="btn btn-sm btn-outline-secondary refresh-button" type="submit">
                            <i class="fas fa-sync"></i>
                        </button>
                    </form>
                </div>
                <div class="card-body" id="{id}">
{body}
                </div>
            </div>
        </div>"#,
                title = region.title(),
                action = refresh_action(region),
                id = region.id(),
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta http-equiv="refresh" content="{reload}">
    <title>Corporate Dashboard</title>
</head>
<body>
    <div class="container mt-4">
        <div class="d-flex justify-content-between align-items-center mb-4">
            <h1>Corporate Dashboard</h1>
            <form method="post" action="/refresh">
                <button class="btn btn-outline-primary" type="submit">Refresh all</button>
            </form>
        </div>
        <div class="row">{cards}
        </div>
    </div>
</body>
</html>"#,
        reload = reload_every.as_secs().max(1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::region::{RegionPhase, RegionView};
    use crate::infrastructure::region_store::RegionStore;

    #[test]
    fn test_page_embeds_every_region() {
        let store = RegionStore::new();
        store.replace(
            Region::CorporateStructure,
            RegionView::new(RegionPhase::Rendered, "<h6>Eng</h6>".to_string()),
        );

        let html = render_page(&store, &Templates::default(), Duration::from_secs(30));

        for region in Region::ALL {
            assert!(html.contains(&format!(r#"id="{}""#, region.id())));
            assert!(html.contains(&refresh_action(region)));
        }
        assert!(html.contains("<h6>Eng</h6>"));
        assert!(html.contains("Loading..."));
        assert!(html.contains(r#"content="30""#));
    }
}
