//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0, orbits already set up)
//! - active force set (`AccelSet`)
//! - the pending command queue and key bindings
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! stepping and visualization systems, or driven directly in headless runs

use std::collections::HashMap;

use bevy::prelude::Resource;
use log::{info, warn};
use thiserror::Error;

use crate::configuration::config::{BodyConfig, BodyKind, ScenarioConfig};
use crate::simulation::burns::BurnQueue;
use crate::simulation::commands::{Command, CommandQueue};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::euler_step;
use crate::simulation::orbit::{self, set_circular_orbit, OrbitDirection, OrbitError};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, Motion, NVec2, System, SPACECRAFT_MASS};
use crate::simulation::transfer::{launch_to_orbit, HohmannPlan, TransferError};
use crate::visualization::projection::{project_all, Camera, DrawItem};

/// Errors that can occur while turning a [`ScenarioConfig`] into a [`Scenario`]
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
    #[error("body name `{0}` is used more than once")]
    DuplicateName(String),
    #[error("unknown body `{0}`")]
    UnknownBody(String),
    #[error("body `{name}` needs a 2D position, got {len} components")]
    BadVector { name: String, len: usize },
    #[error("body `{0}` needs a mass")]
    MissingMass(String),
    #[error("body `{name}` has invalid colour `{color}`")]
    BadColor { name: String, color: String },
    #[error("only spacecraft can launch from another body (`{0}` is not one)")]
    LaunchFromNonSpacecraft(String),
    #[error("`{0}` is not a spacecraft")]
    NotASpacecraft(String),
    #[error("control key {0} is not a digit between 1 and 9")]
    BadKey(u8),
    #[error("failed to set up orbit: {0}")]
    Orbit(#[from] OrbitError),
    #[error("failed to plan initial transfer: {0}")]
    Transfer(#[from] TransferError),
}

/// A digit key bound to a transfer target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    pub key: u8,
    pub target: usize,
}

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the engine settings, parameters, current system state, the
/// set of active force laws, and the commands waiting for the next batch
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
    pub commands: CommandQueue,
    pub controls: Vec<Control>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ScenarioError> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = &cfg.parameters;
        if !(p_cfg.dt > 0.0) {
            return Err(ScenarioError::InvalidParameter("dt must be positive"));
        }
        if !(p_cfg.G > 0.0) {
            return Err(ScenarioError::InvalidParameter("G must be positive"));
        }
        if !(p_cfg.eps2 >= 0.0) {
            return Err(ScenarioError::InvalidParameter("eps2 must not be negative"));
        }
        let parameters = Parameters {
            dt: p_cfg.dt,
            G: p_cfg.G,
            eps2: p_cfg.eps2,
        };

        // Names -> roster indices
        let mut names: HashMap<&str, usize> = HashMap::new();
        for (i, bc) in cfg.bodies.iter().enumerate() {
            if names.insert(bc.name.as_str(), i).is_some() {
                return Err(ScenarioError::DuplicateName(bc.name.clone()));
            }
        }
        let lookup = |name: &str| {
            names
                .get(name)
                .copied()
                .ok_or_else(|| ScenarioError::UnknownBody(name.to_string()))
        };

        // Bodies: map `BodyConfig` -> runtime `Body`, positions of launched craft come later
        let bodies = cfg
            .bodies
            .iter()
            .map(build_body)
            .collect::<Result<Vec<_>, _>>()?;

        // Gravity wiring, every other body unless listed
        let n = bodies.len();
        let attractors = cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(i, bc)| match &bc.attractors {
                Some(list) => list.iter().map(|name| lookup(name)).collect::<Result<Vec<usize>, _>>(),
                None => Ok((0..n).filter(|&j| j != i).collect()),
            })
            .collect::<Result<Vec<Vec<usize>>, _>>()?;

        let mut system = System::with_attractors(bodies, attractors);

        // Orbits in roster order, so a moon sees its planet's final velocity
        for (i, bc) in cfg.bodies.iter().enumerate() {
            if bc.launch_from.is_none() {
                init_orbit(&mut system, i, bc, &lookup, parameters.G)?;
            }
        }

        // Spacecraft take over their source body's position and velocity
        for (i, bc) in cfg.bodies.iter().enumerate() {
            let Some(source) = &bc.launch_from else {
                continue;
            };
            let j = lookup(source)?;
            let Some((craft, src)) = system.pair_mut(i, j) else {
                return Err(ScenarioError::UnknownBody(source.clone()));
            };
            craft.x = src.x;
            let v = src.velocity().unwrap_or_else(NVec2::zeros);
            if let Some(motion) = craft.motion.as_mut() {
                motion.v = v;
            }
            init_orbit(&mut system, i, bc, &lookup, parameters.G)?;
        }

        // Engine (runtime) from EngineConfig
        let e_cfg = &cfg.engine;
        let spacecraft = match &e_cfg.spacecraft {
            Some(name) => {
                let i = lookup(name)?;
                if !system.bodies[i].is_spacecraft() {
                    return Err(ScenarioError::NotASpacecraft(name.clone()));
                }
                Some(i)
            }
            None => system.bodies.iter().position(Body::is_spacecraft),
        };
        let centre = match &e_cfg.centre {
            Some(name) => Some(lookup(name)?),
            None => system.bodies.iter().position(|b| !b.is_mobile()),
        };
        let reference = e_cfg.reference_frame.as_deref().map(lookup).transpose()?;
        let engine = Engine {
            ticks_per_frame: e_cfg.ticks_per_frame,
            spacecraft,
            centre,
            camera: Camera {
                zoom: e_cfg.zoom,
                reference,
                width: e_cfg.window[0],
                height: e_cfg.window[1],
            },
        };

        let controls = cfg
            .controls
            .iter()
            .map(|c| {
                if !(1..=9).contains(&c.key) {
                    return Err(ScenarioError::BadKey(c.key));
                }
                Ok(Control { key: c.key, target: lookup(&c.target)? })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let initial_transfer = cfg.initial_transfer.as_deref().map(lookup).transpose()?;

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity {
            G: parameters.G,
            eps2: parameters.eps2,
        });

        let mut scenario = Self {
            engine,
            parameters,
            system,
            forces,
            commands: CommandQueue::new(),
            controls,
        };

        info!(
            "scenario built: {} bodies, dt={}, G={}, {} ticks per frame",
            scenario.system.bodies.len(),
            scenario.parameters.dt,
            scenario.parameters.G,
            scenario.engine.ticks_per_frame
        );

        if let Some(target) = initial_transfer {
            scenario.execute(Command::TransferToOrbitOf(target))?;
        }

        Ok(scenario)
    }

    /// Advance every mobile body by one tick
    pub fn advance_tick(&mut self) {
        euler_step(&mut self.system, &self.forces, &self.parameters);
    }

    /// Apply queued commands, then run one batch of `ticks_per_frame` ticks
    pub fn advance(&mut self) {
        self.apply_commands();
        for _ in 0..self.engine.ticks_per_frame {
            self.advance_tick();
        }
    }

    pub fn push_command(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Queue the transfer bound to digit `key`; false when the key is unbound
    pub fn press_key(&mut self, key: u8) -> bool {
        match self.controls.iter().find(|c| c.key == key) {
            Some(control) => {
                let target = control.target;
                self.push_command(Command::TransferToOrbitOf(target));
                true
            }
            None => false,
        }
    }

    /// Drain the command queue, applying each command in order.
    /// Failed commands are logged and skipped.
    pub fn apply_commands(&mut self) -> Vec<Result<HohmannPlan, TransferError>> {
        let pending: Vec<Command> = self.commands.drain().collect();
        pending
            .into_iter()
            .map(|command| {
                let outcome = self.execute(command);
                if let Err(e) = &outcome {
                    warn!("ignoring {command:?}: {e}");
                }
                outcome
            })
            .collect()
    }

    /// Apply a single command right away
    pub fn execute(&mut self, command: Command) -> Result<HohmannPlan, TransferError> {
        match command {
            Command::TransferToOrbitOf(target) => {
                let craft = self.engine.spacecraft.ok_or(TransferError::NoSpacecraft)?;
                let centre = self.engine.centre.ok_or(TransferError::NoCentre)?;
                launch_to_orbit(&mut self.system, craft, centre, target, &self.parameters)
            }
        }
    }

    /// Screen-space circles for the current state
    pub fn render(&self) -> Vec<DrawItem> {
        project_all(&self.system.bodies, &self.engine.camera)
    }

    pub fn spacecraft(&self) -> Option<&Body> {
        self.engine.spacecraft.and_then(|i| self.system.bodies.get(i))
    }

    pub fn specific_energy(&self, body: usize, centre: usize) -> Option<f64> {
        let b = self.system.bodies.get(body)?;
        let c = self.system.bodies.get(centre)?;
        orbit::specific_energy(b, c, self.parameters.G)
    }

    pub fn angular_momentum(&self, body: usize, centre: usize) -> Option<f64> {
        let b = self.system.bodies.get(body)?;
        let c = self.system.bodies.get(centre)?;
        orbit::angular_momentum(b, c)
    }
}

fn build_body(bc: &BodyConfig) -> Result<Body, ScenarioError> {
    let color = u32::from_str_radix(bc.color.trim_start_matches('#'), 16).map_err(|_| {
        ScenarioError::BadColor {
            name: bc.name.clone(),
            color: bc.color.clone(),
        }
    })?;

    if bc.launch_from.is_some() && bc.kind != BodyKind::Spacecraft {
        return Err(ScenarioError::LaunchFromNonSpacecraft(bc.name.clone()));
    }

    let x = match (&bc.x, &bc.launch_from) {
        (Some(x), _) if x.len() == 2 => NVec2::new(x[0], x[1]),
        (Some(x), _) => {
            return Err(ScenarioError::BadVector {
                name: bc.name.clone(),
                len: x.len(),
            })
        }
        (None, Some(_)) => NVec2::zeros(),
        (None, None) => {
            return Err(ScenarioError::BadVector {
                name: bc.name.clone(),
                len: 0,
            })
        }
    };

    let body = match bc.kind {
        BodyKind::Fixed => {
            let m = bc.m.ok_or_else(|| ScenarioError::MissingMass(bc.name.clone()))?;
            Body::fixed(bc.name.clone(), x, m, bc.radius, color)
        }
        BodyKind::Orbiter => {
            let m = bc.m.ok_or_else(|| ScenarioError::MissingMass(bc.name.clone()))?;
            Body::orbiter(bc.name.clone(), x, m, bc.radius, color)
        }
        BodyKind::Spacecraft => Body {
            name: bc.name.clone(),
            x,
            m: bc.m.unwrap_or(SPACECRAFT_MASS),
            radius: bc.radius,
            color,
            motion: Some(Motion {
                v: NVec2::zeros(),
                burns: Some(BurnQueue::new()),
            }),
        },
    };
    Ok(body)
}

#[allow(non_snake_case)]
fn init_orbit<F>(system: &mut System, i: usize, bc: &BodyConfig, lookup: &F, G: f64) -> Result<(), ScenarioError>
where
    F: Fn(&str) -> Result<usize, ScenarioError>,
{
    let Some(orbit_cfg) = &bc.orbit else {
        return Ok(());
    };
    let c = lookup(&orbit_cfg.around)?;
    let Some((body, central)) = system.pair_mut(i, c) else {
        return Err(OrbitError::DegenerateRadius {
            body: bc.name.clone(),
            centre: orbit_cfg.around.clone(),
        }
        .into());
    };
    set_circular_orbit(body, central, G, OrbitDirection::from_clockwise(orbit_cfg.clockwise))?;
    Ok(())
}
