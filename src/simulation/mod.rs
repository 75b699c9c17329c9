pub mod states;
pub mod params;
pub mod engine;
pub mod burns;
pub mod forces;
pub mod integrator;
pub mod orbit;
pub mod transfer;
pub mod commands;
pub mod scenario;
