// Gameplay tuning, separate from runtime configuration.

pub mod ship;

pub use ship::ShipTuning;
