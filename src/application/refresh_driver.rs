// Refresh driver - Settle-all cycles on start and on a fixed interval
use crate::application::section_renderer::SectionRenderer;
use crate::domain::region::Region;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

#[derive(Clone)]
pub struct RefreshDriver {
    renderer: Arc<SectionRenderer>,
    interval: Duration,
}

impl RefreshDriver {
    pub fn new(renderer: Arc<SectionRenderer>, interval: Duration) -> Self {
        Self { renderer, interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Update every region concurrently and wait until all have settled
    pub async fn update_all_data(&self) {
        let start = Instant::now();
        futures::future::join_all(Region::ALL.map(|region| self.renderer.update(region))).await;
        tracing::info!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            "refresh cycle settled"
        );
    }

    /// Launch one region's update without waiting for it
    pub fn refresh_region(&self, region: Region) -> JoinHandle<()> {
        let renderer = self.renderer.clone();
        tokio::spawn(async move { renderer.update(region).await })
    }

    /// Launch a full cycle without waiting for it
    pub fn refresh_all(&self) -> JoinHandle<()> {
        let driver = self.clone();
        tokio::spawn(async move { driver.update_all_data().await })
    }

    /// Run an initial cycle, then a new independent cycle on every tick.
    /// Cycles are never awaited by the timer, so slow ones overlap later ones.
    pub fn start(&self) -> JoinHandle<()> {
        let driver = self.clone();

        tokio::spawn(async move {
            tracing::info!(
                interval_ms = driver.interval.as_millis() as u64,
                "refresh driver started"
            );
            driver.refresh_all();

            let mut ticker = tokio::time::interval(driver.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // the first tick fires immediately and is covered by the initial cycle
            ticker.tick().await;

            loop {
                ticker.tick().await;
                tracing::debug!("refresh timer fired");
                driver.refresh_all();
            }
        })
    }
}
