//! # Orrery - interactive 3D solar system
//!
//! A sun, eight orbiting planets, and a starfield, rendered with wgpu in a
//! winit window. Per-planet orbital speeds and a pause toggle live in an
//! egui control panel; hovering a planet shows its name in a tooltip.
//!
//! Orbits are cosmetic circles on the XZ plane, one angle per planet stepped
//! by a fixed per-frame speed - there is no gravitation and no physics.
//!
//! ## Quick start
//!
//! ```ignore
//! fn main() -> Result<(), orrery::AppError> {
//!     env_logger::init();
//!     orrery::run()
//! }
//! ```
//!
//! ## Structure
//!
//! - [`planet`] - the fixed descriptor table (the only configuration)
//! - [`orbit`] - per-planet angles and the shared speed configuration
//! - [`scene`] - scene assembly: sun, planets, starfield, light
//! - [`mesh`] - shared unit-sphere geometry
//! - [`camera`] / [`input`] - damped orbit controls and pointer state
//! - [`picking`] - ray/sphere hover picking
//! - [`ui`] - control panel and tooltip
//! - `gpu` - wgpu surface, pipelines, and egui overlay painting

pub mod camera;
pub mod error;
mod gpu;
pub mod input;
pub mod mesh;
pub mod orbit;
pub mod picking;
pub mod planet;
pub mod scene;
pub mod shaders;
pub mod time;
pub mod ui;

mod app;

pub use app::run;
pub use error::{AppError, GpuError};
pub use glam::{Vec2, Vec3};
pub use orbit::{OrbitState, SpeedConfig};
pub use planet::{PlanetDescriptor, PLANETS};
pub use scene::Scene;
