pub mod app;
pub mod chart;
pub mod config;
pub mod data;
pub mod finance;
pub mod gate;
pub mod media;
pub mod model;
pub mod quiz;
pub mod ui;
#[cfg(target_arch = "wasm32")]
mod web;

pub use app::CourseApp;
