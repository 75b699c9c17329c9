//! World-to-screen projection shared by every renderer
//!
//! Screen coordinates have their origin in the top-left corner with y pointing
//! down, matching the convention used for "clockwise" orbits.

use crate::simulation::states::Body;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub zoom: f64,
    pub reference: Option<usize>, // body drawn at the centre of the screen
    pub width: f64,
    pub height: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            reference: None,
            width: 600.0,
            height: 400.0,
        }
    }
}

/// One circle to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub index: usize, // roster index of the body
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: u32,
}

/// Project `body` onto the screen, centred on `reference` when given
pub fn project(index: usize, body: &Body, reference: Option<&Body>, camera: &Camera) -> DrawItem {
    let (rx, ry) = reference.map_or((0.0, 0.0), |r| (r.x.x, r.x.y));
    DrawItem {
        index,
        x: camera.width / 2.0 + (body.x.x - rx) * camera.zoom,
        y: camera.height / 2.0 + (body.x.y - ry) * camera.zoom,
        radius: body.radius * camera.zoom.sqrt(),
        color: body.color,
    }
}

/// Project every body of a roster
pub fn project_all(bodies: &[Body], camera: &Camera) -> Vec<DrawItem> {
    let reference = camera.reference.and_then(|i| bodies.get(i));
    bodies
        .iter()
        .enumerate()
        .map(|(i, b)| project(i, b, reference, camera))
        .collect()
}
