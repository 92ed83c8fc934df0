pub mod card;
pub mod config;
pub mod constants;
pub mod error;
pub mod host;
pub mod press;
pub mod registry;
pub mod sampler;
pub mod smoothing;
pub mod state;
pub mod transform;

pub use card::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use host::*;
pub use press::*;
pub use registry::*;
pub use sampler::*;
pub use smoothing::*;
pub use state::*;
pub use transform::*;

pub use glam::Vec2;
