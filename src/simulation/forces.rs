//! Force / acceleration contributors for the orbit engine
//!
//! Defines the acceleration trait and the direct Newtonian gravity term.
//! Gravity only acts on a body from the attractors wired to it in
//! [`System::attractors`], so a moon can feel its star and planet while the
//! planets only feel the star.

use crate::simulation::states::{Body, NVec2, System};

/// Inverse-square acceleration at `x` due to `attractors`.
///
/// Attractors closer than `sqrt(eps2)` are skipped, which also excludes the
/// body itself when it appears in the list. This under-counts force at near
/// contact; collisions are not modelled.
#[allow(non_snake_case)]
pub fn gravity_acceleration<'a, I>(x: &NVec2, attractors: I, G: f64, eps2: f64) -> NVec2
where
    I: IntoIterator<Item = &'a Body>,
{
    let mut a = NVec2::zeros();
    for other in attractors {
        // displacement from x towards the attractor
        let r = other.x - x;
        let d2 = r.dot(&r);
        if d2 < eps2 {
            continue;
        }
        // G m / |r|^2 along r / |r|
        a += (G * other.m / (d2 * d2.sqrt())) * r;
    }
    a
}

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector for the body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Total acceleration on body `i` of `sys` from every term
    pub fn accumulate(&self, sys: &System, i: usize) -> NVec2 {
        self.terms
            .iter()
            .map(|term| term.acceleration(sys, i))
            .fold(NVec2::zeros(), |acc, a| acc + a)
    }
}

/// Trait for acceleration sources operating on a single body of a [`System`]
pub trait Acceleration {
    fn acceleration(&self, sys: &System, i: usize) -> NVec2;
}

/// Newtonian gravity over the attractors wired to each body
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub eps2: f64, // near-coincidence guard
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, sys: &System, i: usize) -> NVec2 {
        let Some(body) = sys.bodies.get(i) else {
            return NVec2::zeros();
        };
        let wiring = sys.attractors.get(i).map(Vec::as_slice).unwrap_or(&[]);
        let attractors = wiring.iter().filter_map(|&j| sys.bodies.get(j));
        gravity_acceleration(&body.x, attractors, self.G, self.eps2)
    }
}
