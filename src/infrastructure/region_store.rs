// In-memory render target backing the page regions
use crate::application::render_target::RenderTarget;
use crate::domain::region::{Region, RegionView};
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Debug, Default)]
pub struct RegionStore {
    views: RwLock<HashMap<Region, RegionView>>,
}

impl RegionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
use crate::domain::region::RegionPhase;

#[cfg(test)]
impl RegionStore {
    /// Regions that were never written count as loading
    pub fn phase(&self, region: Region) -> RegionPhase {
        self.current(region)
            .map(|view| view.phase)
            .unwrap_or(RegionPhase::Loading)
    }

    pub fn html(&self, region: Region) -> String {
        self.current(region).map(|view| view.html).unwrap_or_default()
    }
}

impl RenderTarget for RegionStore {
    fn replace(&self, region: Region, view: RegionView) {
        match self.views.write() {
            Ok(mut views) => {
                views.insert(region, view);
            }
            Err(poisoned) => {
                poisoned.into_inner().insert(region, view);
            }
        }
    }

    fn current(&self, region: Region) -> Option<RegionView> {
        match self.views.read() {
            Ok(views) => views.get(&region).cloned(),
            Err(poisoned) => poisoned.into_inner().get(&region).cloned(),
        }
    }
}
