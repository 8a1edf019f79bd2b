//! # roomdup-domain
//!
//! Pure domain model for the room duplication tool.
//!
//! ## Responsibilities
//! - Foundational types: store-assigned typed identifiers, error conventions
//! - Define **Buildings**, **Rooms**, **Devices** and **Ports** as the
//!   configuration store represents them
//! - Define **Room labels** (`Building-Room` composite keys)
//! - Define the **device id mapping** and the port remapping rule applied
//!   while duplicating a room
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod building;
pub mod device;
pub mod label;
pub mod mapping;
pub mod port;
pub mod room;
