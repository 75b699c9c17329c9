//! Fixed-step time integrator for the orbit system
//!
//! Semi-implicit (symplectic) Euler driven by an `AccelSet` and `Parameters`.
//! Bodies are advanced one after another in roster order, each seeing the
//! positions already advanced earlier in the same tick.

use super::states::{Body, NVec2, System};
use super::forces::AccelSet;
use super::params::Parameters;

/// Advance a single body by one tick under acceleration `a`.
///
/// v_n+1 = v_n + dt * a_n, then x_n+1 = x_n + dt * v_n+1.
/// Spacecraft then process their burn queue. Fixed bodies are left untouched.
pub fn update(body: &mut Body, a: NVec2, dt: f64) {
    let Some(motion) = body.motion.as_mut() else {
        return;
    };

    // Kick, then drift with the new velocity
    motion.v += dt * a;
    body.x += dt * motion.v;

    if let Some(burns) = motion.burns.as_mut() {
        burns.tick(&mut motion.v);
    }
}

/// Advance the whole system by one tick of `params.dt`
/// Updates positions, velocities, burn queues and `sys.t` in-place
pub fn euler_step(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let dt = params.dt;

    for i in 0..sys.bodies.len() {
        if !sys.bodies[i].is_mobile() {
            continue;
        }
        let a = forces.accumulate(&*sys, i);
        update(&mut sys.bodies[i], a, dt);
    }

    sys.t += dt;
    sys.ticks += 1;
}
