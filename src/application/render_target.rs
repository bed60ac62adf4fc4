// Where rendered region content is written
use crate::domain::region::{Region, RegionView};

pub trait RenderTarget: Send + Sync {
    /// Replace everything the region shows
    fn replace(&self, region: Region, view: RegionView);

    fn current(&self, region: Region) -> Option<RegionView>;
}
