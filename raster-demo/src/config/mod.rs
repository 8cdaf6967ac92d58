//! Configuration management: defaults, validation, loading from environment.

pub mod defaults;
pub mod demo_config;
pub mod validation;

pub use demo_config::DemoConfig;
