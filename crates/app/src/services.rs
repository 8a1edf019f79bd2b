//! Application services — use-case implementations.
//!
//! Each service accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod address_lookup;
pub mod duplication_service;
pub mod port_copy;
pub mod ui_config_copy;
