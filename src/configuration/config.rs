//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – tick batching, camera, and which bodies commands steer
//! - [`ParametersConfig`] – step size and physical constants
//! - [`BodyConfig`]       – initial state and gravity wiring for each body
//! - [`ControlConfig`]    – digit key to transfer target bindings
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! A trimmed example matching these types:
//!
//! ```yaml
//! engine:
//!   ticks_per_frame: 100
//!   zoom: 0.5
//!   reference_frame: sun    # body drawn at the screen centre
//!   window: [600.0, 400.0]
//!   spacecraft: craft
//!   centre: sun             # transfers orbit around this body
//!
//! parameters:
//!   dt: 0.01
//!   G: 0.01
//!   eps2: 1.0e-4            # attractors closer than sqrt(eps2) are ignored
//!
//! bodies:
//!   - name: sun
//!     kind: fixed
//!     x: [300.0, 200.0]
//!     m: 30000.0
//!     radius: 5.0
//!     color: "ffff00"
//!   - name: ceres
//!     kind: orbiter
//!     x: [200.0, 200.0]
//!     m: 1.0
//!     radius: 2.0
//!     color: "fe4b03"
//!     orbit: { around: sun, clockwise: true }
//!     attractors: [sun]
//!   - name: craft
//!     kind: spacecraft
//!     launch_from: ceres    # start on top of ceres, with its velocity
//!     radius: 2.0
//!     color: "00ff00"
//!     attractors: [sun]
//!
//! controls:
//!   - { key: 1, target: ceres }
//! ```
//!
//! The engine then maps this configuration into its runtime [`Scenario`],
//! resolving names into roster indices.
//!
//! [`Scenario`]: crate::simulation::scenario::Scenario

use serde::Deserialize;

/// What kind of body an entry describes
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    #[serde(rename = "fixed")] // Never moves; anchors the frame
    Fixed,

    #[serde(rename = "orbiter")] // Integrated every tick
    Orbiter,

    #[serde(rename = "spacecraft")] // Integrated, negligible mass, accepts burns
    Spacecraft,
}

/// Tick batching, camera, and command wiring
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    #[serde(default = "default_ticks_per_frame")]
    pub ticks_per_frame: usize, // physics ticks per rendered frame
    #[serde(default = "default_zoom")]
    pub zoom: f64, // world-to-screen scale
    #[serde(default)]
    pub reference_frame: Option<String>, // body kept at the screen centre
    #[serde(default = "default_window")]
    pub window: [f64; 2], // viewport width and height in pixels
    #[serde(default)]
    pub spacecraft: Option<String>, // defaults to the first spacecraft
    #[serde(default)]
    pub centre: Option<String>, // defaults to the first fixed body
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ticks_per_frame: default_ticks_per_frame(),
            zoom: default_zoom(),
            reference_frame: None,
            window: default_window(),
            spacecraft: None,
            centre: None,
        }
    }
}

fn default_ticks_per_frame() -> usize {
    100
}

fn default_zoom() -> f64 {
    1.0
}

fn default_window() -> [f64; 2] {
    [600.0, 400.0]
}

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,   // time step size, fixed for the whole run
    pub G: f64,    // gravitational constant
    #[serde(default = "default_eps2")]
    pub eps2: f64, // squared distance under which an attractor is skipped
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            dt: 0.01,
            G: 0.01,
            eps2: default_eps2(),
        }
    }
}

fn default_eps2() -> f64 {
    1e-4
}

/// Circular orbit to set up at load time
#[derive(Deserialize, Debug, Clone)]
pub struct OrbitConfig {
    pub around: String, // name of the central body
    #[serde(default = "default_clockwise")]
    pub clockwise: bool,
}

fn default_clockwise() -> bool {
    true
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub kind: BodyKind,
    #[serde(default)]
    pub x: Option<Vec<f64>>,      // Initial position; required unless `launch_from` is set
    #[serde(default)]
    pub m: Option<f64>,           // Mass; spacecraft default to a negligible mass
    pub radius: f64,              // Drawn radius
    pub color: String,            // "rrggbb" hex
    #[serde(default)]
    pub orbit: Option<OrbitConfig>,
    #[serde(default)]
    pub attractors: Option<Vec<String>>, // Bodies whose gravity applies; defaults to all others
    #[serde(default)]
    pub launch_from: Option<String>, // Spacecraft only: start on this body with its velocity
}

/// A digit key bound to a transfer target
#[derive(Deserialize, Debug, Clone)]
pub struct ControlConfig {
    pub key: u8,        // 1..=9
    pub target: String, // body whose orbit to transfer to
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub controls: Vec<ControlConfig>,
    #[serde(default)]
    pub initial_transfer: Option<String>, // target of a transfer issued at start-up
}

impl ScenarioConfig {
    /// The stock system: one sun, four planets, a moon around the first planet,
    /// and a spacecraft leaving the second planet for the third.
    pub fn builtin() -> Self {
        let planet = |name: &str, x: [f64; 2], m: f64, radius: f64, color: &str| BodyConfig {
            name: name.to_string(),
            kind: BodyKind::Orbiter,
            x: Some(x.to_vec()),
            m: Some(m),
            radius,
            color: color.to_string(),
            orbit: Some(OrbitConfig { around: "sun".to_string(), clockwise: true }),
            attractors: Some(vec!["sun".to_string()]),
            launch_from: None,
        };

        let bodies = vec![
            BodyConfig {
                name: "sun".to_string(),
                kind: BodyKind::Fixed,
                x: Some(vec![300.0, 200.0]),
                m: Some(30000.0),
                radius: 5.0,
                color: "ffff00".to_string(),
                orbit: None,
                attractors: None,
                launch_from: None,
            },
            planet("vesta", [100.0, 200.0], 10.0, 3.0, "fa8072"),
            planet("ceres", [200.0, 200.0], 1.0, 2.0, "fe4b03"),
            planet("pallas", [115.0, 300.0], 3.0, 2.0, "4a0000"),
            planet("hygiea", [140.0, 250.0], 4.0, 2.0, "008080"),
            BodyConfig {
                name: "moon".to_string(),
                kind: BodyKind::Orbiter,
                x: Some(vec![101.0, 200.0]),
                m: Some(0.1),
                radius: 1.0,
                color: "ff0000".to_string(),
                orbit: Some(OrbitConfig { around: "vesta".to_string(), clockwise: true }),
                attractors: Some(vec!["sun".to_string(), "vesta".to_string()]),
                launch_from: None,
            },
            BodyConfig {
                name: "craft".to_string(),
                kind: BodyKind::Spacecraft,
                x: None,
                m: None,
                radius: 2.0,
                color: "00ff00".to_string(),
                orbit: None,
                attractors: Some(vec!["sun".to_string()]),
                launch_from: Some("ceres".to_string()),
            },
        ];

        let controls = [(1, "ceres"), (2, "pallas"), (3, "hygiea")]
            .into_iter()
            .map(|(key, target)| ControlConfig { key, target: target.to_string() })
            .collect();

        Self {
            engine: EngineConfig {
                ticks_per_frame: 100,
                zoom: 0.5,
                reference_frame: Some("sun".to_string()),
                window: [600.0, 400.0],
                spacecraft: Some("craft".to_string()),
                centre: Some("sun".to_string()),
            },
            parameters: ParametersConfig::default(),
            bodies,
            controls,
            initial_transfer: Some("pallas".to_string()),
        }
    }
}
