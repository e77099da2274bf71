//! Cubefield demo.
//!
//! A field of textured, rotating cubes viewed through a fly camera, with a
//! toggleable side menu whose button reverses the rotation direction.
//!
//! Everything except `app` is plain state and math, testable without a GPU.

pub mod app;
pub mod button;
pub mod camera;
pub mod config;
pub mod cubes;
pub mod layout;
pub mod mode;
pub mod motion;
pub mod state;
pub mod toggle;

pub use app::CubefieldApp;
pub use config::DemoConfig;
