//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed integration step size `dt`,
//! - gravitational constant `G`,
//! - the squared-distance guard `eps2` below which an attractor is ignored

#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub dt: f64, // step size, fixed for the whole run
    pub G: f64, // gravitational constant
    pub eps2: f64, // attractors closer than sqrt(eps2) are skipped
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: 0.01,
            G: 0.01,
            eps2: 1e-4,
        }
    }
}
