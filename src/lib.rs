pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{Body, Motion, System, NVec2, SPACECRAFT_MASS};
pub use simulation::params::Parameters;
pub use simulation::burns::{BurnQueue, ScheduledBurn};
pub use simulation::forces::{gravity_acceleration, Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::{euler_step, update};
pub use simulation::orbit::{set_circular_orbit, orbit_direction, circular_speed, orbital_period, OrbitDirection, OrbitError};
pub use simulation::transfer::{hohmann, launch_to_orbit, HohmannPlan, TransferError};
pub use simulation::commands::{Command, CommandQueue};
pub use simulation::scenario::{Scenario, ScenarioError, Control};

pub use configuration::config::{ScenarioConfig, EngineConfig, ParametersConfig, BodyConfig, BodyKind, OrbitConfig, ControlConfig};

pub use visualization::projection::{project, project_all, Camera, DrawItem};
pub use visualization::vis2d::{run_2d, run_headless};
