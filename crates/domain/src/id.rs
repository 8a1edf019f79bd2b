//! Typed identifier newtypes backed by store-assigned integers.
//!
//! The configuration store hands out identifiers on insert, so a freshly
//! built record carries the zero value until it has been persisted. Zero is
//! also what a [`DeviceIdMapping`](crate::mapping::DeviceIdMapping) yields for
//! an unknown key.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(i64);

        impl $name {
            /// The zero value, carried by records the store has not assigned yet.
            pub const UNASSIGNED: Self = Self(0);

            /// Wrap an identifier handed out by the store.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Access the raw integer.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }

            /// Whether the store has assigned this identifier.
            #[must_use]
            pub const fn is_assigned(self) -> bool {
                self.0 != 0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Building`](crate::building::Building).
    BuildingId
);

define_id!(
    /// Unique identifier for a [`Room`](crate::room::Room).
    RoomId
);

define_id!(
    /// Unique identifier for a [`Device`](crate::device::Device).
    DeviceId
);

define_id!(
    /// Unique identifier for a [`Port`](crate::port::Port).
    PortId
);
