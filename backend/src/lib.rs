//! # HST Rust Backend
//!
//! Room allocation engine for single-day event scheduling.
//!
//! Given a building room inventory, a ledger of existing reservations, and
//! the event constraints (date, start time, duration, attendee count), the
//! engine produces a time-ordered plan: an opening block, alternating work
//! and meal blocks, and a mandatory three-hour closing block, each populated
//! with rooms that satisfy the phase's eligibility rules and never overlap
//! an existing reservation.
//!
//! ## Architecture
//!
//! - [`models`]: domain records and minute-granularity clock types
//! - [`repository`]: in-memory inventory and ledger stores with documented
//!   first-fit iteration order
//! - [`algorithms`]: collision detection between windows and reservations
//! - [`scheduler`]: the multi-phase greedy allocator
//! - [`parsing`]: CSV row parsing and interactive input validation
//! - [`io`]: file loaders and the report writer
//! - [`config`]: `planner.toml` support

pub mod algorithms;
pub mod config;
pub mod io;
pub mod models;
pub mod parsing;
pub mod repository;
pub mod scheduler;
