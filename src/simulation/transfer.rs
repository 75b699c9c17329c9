//! Hohmann transfers between coplanar circular orbits sharing a centre.
//!
//! Planning applies the first impulse straight away and leaves the second in
//! the spacecraft's burn queue, timed for half a transfer-ellipse period later.
//! The craft arrives on the target's orbit, not necessarily at the target.

use std::f64::consts::PI;

use log::info;
use thiserror::Error;

use super::burns::ScheduledBurn;
use super::orbit::{orbit_direction, set_circular_orbit, OrbitError};
use super::params::Parameters;
use super::states::System;

/// Result for a Hohmann transfer between circular, coplanar orbits of radii r1 and r2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HohmannPlan {
    pub r1: f64,
    pub r2: f64,
    pub dv1: f64, // signed: negative for an inward (retrograde) departure burn
    pub dv2: f64, // signed: negative for an inward (retrograde) arrival burn
    pub transfer_time: f64, // half the transfer ellipse period
}

impl HohmannPlan {
    /// Ticks between the two burns at a fixed step `dt`
    pub fn countdown(&self, dt: f64) -> f64 {
        self.transfer_time / dt
    }

    pub fn dv_total(&self) -> f64 {
        self.dv1.abs() + self.dv2.abs()
    }
}

/// Compute the classical Hohmann transfer between two circular coplanar orbits.
///
/// Inputs:
/// - `r1`: initial circular orbit radius
/// - `r2`: target circular orbit radius
/// - `mu`: gravitational parameter `G * M` of the central body
pub fn hohmann(r1: f64, r2: f64, mu: f64) -> HohmannPlan {
    let sum = r1 + r2;
    let dv1 = (mu / r1).sqrt() * ((2.0 * r2 / sum).sqrt() - 1.0);
    let dv2 = (mu / r2).sqrt() * (1.0 - (2.0 * r1 / sum).sqrt());
    let transfer_time = PI * (sum.powi(3) / (8.0 * mu)).sqrt();

    HohmannPlan {
        r1,
        r2,
        dv1,
        dv2,
        transfer_time,
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransferError {
    #[error("scenario has no spacecraft to steer")]
    NoSpacecraft,
    #[error("scenario has no centre body to transfer around")]
    NoCentre,
    #[error("no body with index {0}")]
    UnknownBody(usize),
    #[error("body `{0}` carries no burn queue and cannot manoeuvre")]
    NotASpacecraft(String),
    #[error("transfer needs distinct craft, centre and target (got {craft}, {centre}, {target})")]
    SameBody {
        craft: usize,
        centre: usize,
        target: usize,
    },
    #[error(transparent)]
    Orbit(#[from] OrbitError),
}

/// Send spacecraft `craft` from its orbit around `centre` onto the orbit of `target`.
///
/// The craft is first re-circularized in its current winding sense, so it must
/// already be roughly on a circular orbit around `centre`; a craft that is
/// mid-transfer or on an eccentric orbit gets no special handling. Any pending
/// burns are discarded.
pub fn launch_to_orbit(
    sys: &mut System,
    craft: usize,
    centre: usize,
    target: usize,
    params: &Parameters,
) -> Result<HohmannPlan, TransferError> {
    for i in [craft, centre, target] {
        if i >= sys.bodies.len() {
            return Err(TransferError::UnknownBody(i));
        }
    }
    if craft == centre || craft == target || centre == target {
        return Err(TransferError::SameBody { craft, centre, target });
    }
    if !sys.bodies[craft].is_spacecraft() {
        return Err(TransferError::NotASpacecraft(sys.bodies[craft].name.clone()));
    }

    let target_x = sys.bodies[target].x;
    let target_name = sys.bodies[target].name.clone();
    let Some((ship, hub)) = sys.pair_mut(craft, centre) else {
        return Err(TransferError::UnknownBody(craft));
    };

    // Tidy up whatever drift the integrator left before planning
    let direction = orbit_direction(ship, hub)
        .ok_or_else(|| TransferError::NotASpacecraft(ship.name.clone()))?;
    set_circular_orbit(ship, hub, params.G, direction)?;

    let r_vec = ship.x - hub.x;
    let r1 = r_vec.norm();
    let r2 = (target_x - hub.x).norm();
    if !(r2 > 0.0) {
        return Err(OrbitError::DegenerateRadius {
            body: target_name,
            centre: hub.name.clone(),
        }
        .into());
    }

    let plan = hohmann(r1, r2, params.G * hub.m);
    let tangent = direction.tangent(&r_vec);

    let Some(motion) = ship.motion.as_mut() else {
        return Err(TransferError::NotASpacecraft(ship.name.clone()));
    };
    motion.v += plan.dv1 * tangent;

    // The second burn happens on the far side, where prograde is -tangent
    let arrival = ScheduledBurn::new(-plan.dv2 * tangent, plan.countdown(params.dt));
    if let Some(burns) = motion.burns.as_mut() {
        burns.replace(arrival);
    }

    info!(
        "{} transferring around {}: r1={:.3} r2={:.3} dv1={:.5} dv2={:.5} in {:.1} ticks",
        ship.name,
        hub.name,
        plan.r1,
        plan.r2,
        plan.dv1,
        plan.dv2,
        arrival.countdown
    );

    Ok(plan)
}
