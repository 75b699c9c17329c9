//! Circular-orbit initialization and orbit diagnostics
//!
//! "Clockwise" follows screen coordinates (y pointing down): a body at
//! `(r, 0)` from its centre moving towards `+y` is orbiting clockwise, which is
//! the sign of the z-component of `(x - centre) × v`.

use std::f64::consts::PI;

use thiserror::Error;

use super::states::{Body, NVec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitDirection {
    Clockwise,
    CounterClockwise,
}

impl OrbitDirection {
    pub fn from_clockwise(clockwise: bool) -> Self {
        if clockwise {
            Self::Clockwise
        } else {
            Self::CounterClockwise
        }
    }

    /// +1 for clockwise, -1 otherwise
    pub fn sign(self) -> f64 {
        match self {
            Self::Clockwise => 1.0,
            Self::CounterClockwise => -1.0,
        }
    }

    /// Unit tangent for this direction at radius vector `r` (non-zero)
    pub fn tangent(self, r: &NVec2) -> NVec2 {
        self.sign() * NVec2::new(-r.y, r.x) / r.norm()
    }
}

/// Errors raised when an orbit cannot be set up without dividing by zero
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OrbitError {
    #[error("body `{0}` is fixed and cannot be put into orbit")]
    ImmobileBody(String),
    #[error("body `{body}` sits on top of its centre `{centre}`")]
    DegenerateRadius { body: String, centre: String },
    #[error("centre `{0}` has no positive mass to orbit")]
    MasslessCentre(String),
}

/// Speed of a circular orbit of radius `r` around mass `m`
#[allow(non_snake_case)]
pub fn circular_speed(G: f64, m: f64, r: f64) -> f64 {
    (G * m / r).sqrt()
}

/// Period of a circular orbit of radius `r` around mass `m`
#[allow(non_snake_case)]
pub fn orbital_period(G: f64, m: f64, r: f64) -> f64 {
    2.0 * PI * (r.powi(3) / (G * m)).sqrt()
}

/// Put `body` on an exact circular orbit around `central`.
///
/// The previous velocity is discarded. When `central` is itself mobile its
/// velocity is added, so the orbit is circular in the centre's frame.
#[allow(non_snake_case)]
pub fn set_circular_orbit(
    body: &mut Body,
    central: &Body,
    G: f64,
    direction: OrbitDirection,
) -> Result<(), OrbitError> {
    if !body.is_mobile() {
        return Err(OrbitError::ImmobileBody(body.name.clone()));
    }
    if !(central.m > 0.0) {
        return Err(OrbitError::MasslessCentre(central.name.clone()));
    }

    let r = body.x - central.x;
    let radius = r.norm();
    if !(radius > 0.0) {
        return Err(OrbitError::DegenerateRadius {
            body: body.name.clone(),
            centre: central.name.clone(),
        });
    }

    let mut v = circular_speed(G, central.m, radius) * direction.tangent(&r);
    if let Some(vc) = central.velocity() {
        v += vc;
    }

    if let Some(motion) = body.motion.as_mut() {
        motion.v = v;
    }
    Ok(())
}

/// Winding sense of `body` about `centre`, `None` for a fixed body
pub fn orbit_direction(body: &Body, centre: &Body) -> Option<OrbitDirection> {
    let v = body.velocity()?;
    Some(OrbitDirection::from_clockwise(angular_momentum_of(body.x - centre.x, v) > 0.0))
}

/// Specific angular momentum (z-component) of `body` about `centre`,
/// measured in the centre's frame
pub fn angular_momentum(body: &Body, centre: &Body) -> Option<f64> {
    let v = body.velocity()? - centre.velocity().unwrap_or_else(NVec2::zeros);
    Some(angular_momentum_of(body.x - centre.x, v))
}

/// Specific orbital energy of `body` about `centre` alone
#[allow(non_snake_case)]
pub fn specific_energy(body: &Body, centre: &Body, G: f64) -> Option<f64> {
    let v = body.velocity()? - centre.velocity().unwrap_or_else(NVec2::zeros);
    let r = (body.x - centre.x).norm();
    Some(0.5 * v.norm_squared() - G * centre.m / r)
}

fn angular_momentum_of(r: NVec2, v: NVec2) -> f64 {
    r.x * v.y - r.y * v.x
}
