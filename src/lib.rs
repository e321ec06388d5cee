pub mod common;
pub mod config;
pub mod planner;
pub mod scenario;
pub mod stat;
pub mod world;
