//! # roomdup-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `BuildingRepository`, `RoomRepository`, `DeviceRepository`,
//!     `PortRepository` — the configuration store operations
//!   - `AddressResolver` — forward and reverse DNS lookups
//!   - `UiConfigRepository` — UI configuration files keyed by room label
//! - Define the **use-cases**:
//!   - `DuplicationService` — copy a room, its devices and their ports
//!   - address lookup, port copy and UI copy steps used by the service
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `roomdup-domain` only (plus `tracing` for log events).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;
