//! Attribute synchronization between the federated profile and local users.
//!
//! [`AttributeSyncPolicy`] turns a source value into a conversion outcome and
//! the outcome into one [`AttributeMutation`]. The two flows differ only in
//! what a failure means:
//!
//! | Outcome            | First login | Update |
//! |--------------------|-------------|--------|
//! | converted value    | set         | set    |
//! | absent value       | no change   | remove |
//! | config fault       | no change   | remove |
//! | parse failure      | no change   | remove |
//! | multi-valued input | no change   | no change |
//!
//! A pending identity has no earlier value to protect, but a stored user must
//! not keep a value its upstream source no longer backs.

mod mutation;
mod policy;
mod target;

pub use mutation::{AttributeMutation, SyncContext};
pub use policy::AttributeSyncPolicy;
pub use target::{AttributeTarget, InMemoryAttributes};
