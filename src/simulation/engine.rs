//! High-level runtime engine settings
//!
//! Selects the tick batch size, which bodies the spacecraft commands refer to,
//! and the camera used when rendering a `Scenario`

use crate::visualization::projection::Camera;

#[derive(Debug, Clone)]
pub struct Engine {
    pub ticks_per_frame: usize, // physics ticks run between two rendered frames
    pub spacecraft: Option<usize>, // body steered by transfer commands
    pub centre: Option<usize>, // body that transfers orbit around
    pub camera: Camera,
}
