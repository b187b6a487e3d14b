// sonar_core/src/lib.rs

//! Pure dead-reckoning and rendering pipeline for replaying recorded
//! ultrasonic sensor logs.
//!
//! Nothing in this crate knows about windows, timers or engines. The host
//! (see `sonar_sim`) owns the display and drives [`Replay::render`] once per
//! frame, in order.

pub mod config;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod legend;
pub mod models;
pub mod movement;
pub mod prelude;
pub mod projection;
pub mod render;
pub mod replay;
pub mod trajectory;
pub mod types;

pub use replay::Replay;
