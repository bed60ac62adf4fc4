// Domain layer - Regions and the payloads rendered into them
pub mod corporate;
pub mod region;
