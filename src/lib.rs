pub mod config;
pub mod controller;
pub mod emitter;
pub mod input;
pub mod state;
pub mod systems;
pub mod tuning;

pub use controller::ShipController;
pub use emitter::{EmitterHandle, LaserBattery, ParticleEmitter, Side};
pub use input::{InputSampler, ScriptedSampler};
pub use state::{InputSample, ShipSnapshot, ShipState};
pub use tuning::ShipTuning;
