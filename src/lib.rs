//! # Calendar Rust Backend
//!
//! Meeting scheduling engine with conflict detection and alternative-slot
//! suggestions.
//!
//! The crate books meetings for a set of participants while guaranteeing
//! that nobody is double-booked. When a requested slot collides with an
//! existing commitment, a bounded forward search proposes the next free
//! slots instead. All scheduling math happens on a single absolute UTC
//! timeline; wall-clock times and IANA timezones are normalized away at
//! the boundary.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Domain types — UTC intervals, meetings, participants
//! - [`scheduler`]: The core algorithms — conflict detection and the
//!   next-available-slot search
//! - [`services`]: Orchestration — timezone normalization and the
//!   schedule-meeting pipeline
//! - [`db`]: Store abstraction via the repository pattern, with an
//!   in-memory backend
//! - [`clock`]: Injected time source, substitutable in tests
//! - [`http`]: Axum-based REST API (feature `http-server`)
//!
//! ## Concurrency
//!
//! One request runs its pipeline sequentially; suspension points are store
//! I/O only. The core holds no shared mutable state and performs no
//! locking — double-booking races between concurrent requests are settled
//! by the store's write-time conflict check.

pub mod clock;
pub mod db;
pub mod models;
pub mod scheduler;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
