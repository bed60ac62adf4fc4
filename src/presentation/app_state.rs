// Application state for HTTP handlers
use crate::application::refresh_driver::RefreshDriver;
use crate::application::render_target::RenderTarget;
use crate::presentation::templates::Templates;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub driver: RefreshDriver,
    pub regions: Arc<dyn RenderTarget>,
    pub templates: Templates,
}
