//! Core state types for the orbit simulation.
//!
//! Defines the point-mass `Body` and the roster `System`:
//! - a `Body` with no `motion` is fixed (it anchors the frame, e.g. the sun)
//! - a `Body` with `motion` is integrated every tick
//! - a `Motion` carrying a `BurnQueue` is a spacecraft
//!
//! The system holds the list of bodies, the attractor wiring and the current
//! simulation time `t`.

use nalgebra::Vector2;

use super::burns::BurnQueue;

pub type NVec2 = Vector2<f64>;

/// Mass given to spacecraft so they never perturb anything else
pub const SPACECRAFT_MASS: f64 = 1e-5;

/// Velocity state of a mobile body
#[derive(Debug, Clone, Default)]
pub struct Motion {
    pub v: NVec2, // velocity
    pub burns: Option<BurnQueue>, // pending burns, present for spacecraft only
}

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub x: NVec2, // position
    pub m: f64, // mass
    pub radius: f64, // drawn radius, no physical meaning
    pub color: u32, // 0xRRGGBB
    pub motion: Option<Motion>, // None for fixed bodies
}

impl Body {
    /// A body that never moves
    pub fn fixed(name: impl Into<String>, x: NVec2, m: f64, radius: f64, color: u32) -> Self {
        Self {
            name: name.into(),
            x,
            m,
            radius,
            color,
            motion: None,
        }
    }

    /// A mobile body at rest; give it an orbit with `set_circular_orbit`
    pub fn orbiter(name: impl Into<String>, x: NVec2, m: f64, radius: f64, color: u32) -> Self {
        Self {
            motion: Some(Motion::default()),
            ..Self::fixed(name, x, m, radius, color)
        }
    }

    /// A spacecraft sitting on top of `source`, moving with it if `source` moves
    pub fn spacecraft(name: impl Into<String>, source: &Body, radius: f64, color: u32) -> Self {
        Self {
            name: name.into(),
            x: source.x,
            m: SPACECRAFT_MASS,
            radius,
            color,
            motion: Some(Motion {
                v: source.velocity().unwrap_or_else(NVec2::zeros),
                burns: Some(BurnQueue::new()),
            }),
        }
    }

    pub fn velocity(&self) -> Option<NVec2> {
        self.motion.as_ref().map(|m| m.v)
    }

    pub fn is_mobile(&self) -> bool {
        self.motion.is_some()
    }

    pub fn is_spacecraft(&self) -> bool {
        self.burns().is_some()
    }

    pub fn burns(&self) -> Option<&BurnQueue> {
        self.motion.as_ref().and_then(|m| m.burns.as_ref())
    }

    pub fn burns_mut(&mut self) -> Option<&mut BurnQueue> {
        self.motion.as_mut().and_then(|m| m.burns.as_mut())
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // flat roster
    pub attractors: Vec<Vec<usize>>, // attractors[i]: indices whose gravity acts on body i
    pub t: f64, // time
    pub ticks: u64, // completed ticks
}

impl System {
    /// Roster with explicit attractor wiring, one list per body
    pub fn with_attractors(bodies: Vec<Body>, attractors: Vec<Vec<usize>>) -> Self {
        Self {
            bodies,
            attractors,
            t: 0.0,
            ticks: 0,
        }
    }

    /// Mutable access to body `i` alongside shared access to body `j`
    pub fn pair_mut(&mut self, i: usize, j: usize) -> Option<(&mut Body, &Body)> {
        if i == j || i >= self.bodies.len() || j >= self.bodies.len() {
            return None;
        }
        if i < j {
            let (left, right) = self.bodies.split_at_mut(j);
            Some((&mut left[i], &right[0]))
        } else {
            let (left, right) = self.bodies.split_at_mut(i);
            Some((&mut right[0], &left[j]))
        }
    }
}
