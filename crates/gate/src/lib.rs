//! `perkhub-gate` — role-gated navigation decisions.
//!
//! The gate is a pure decision function: given a requested path, the current
//! session (or its absence), and whether the session fetch is still in
//! flight, it produces exactly one [`Outcome`]. It performs no IO, raises no
//! errors at decision time, and holds no state beyond the immutable route
//! table built at composition time.

pub mod gate;
pub mod outcome;
pub mod pattern;
pub mod requirement;

pub use gate::AccessGate;
pub use outcome::{Outcome, RedirectTarget};
pub use pattern::{PathPattern, normalize_path};
pub use requirement::{RouteAccess, RouteRequirement, RouteTable, RouteTableError};
