// Application layer - Fetching, rendering and refresh use cases
pub mod errors;
pub mod refresh_driver;
pub mod render_target;
pub mod retry;
pub mod section_renderer;
pub mod transport;

#[cfg(test)]
pub mod test_support;
