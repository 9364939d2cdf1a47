// Per-tick simulation systems. Each is a plain function of state + config.

pub mod firing;
pub mod movement;
pub mod orientation;
