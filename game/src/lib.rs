pub mod app;
pub mod config;
pub mod geometry;
pub mod lanes;
pub mod logic;
pub mod render;
pub mod session;
