//! Sailing scene library
//!
//! A boat steered with the arrow keys sails across open water and collects
//! floating trash.  Everything except the scene dressing runs headless, so the
//! simulation can be driven from tests with `MinimalPlugins`.

pub mod assets;
pub mod boat;
pub mod collision;
pub mod config;
pub mod constants;
pub mod error;
pub mod scene;
pub mod simulation;
pub mod trash;
