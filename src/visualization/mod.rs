pub mod projection;
pub mod vis2d;
