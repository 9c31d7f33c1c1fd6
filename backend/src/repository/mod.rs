//! In-memory repositories for the room inventory and reservation ledger.
//!
//! Both stores are loaded once per process from the flat input files and are
//! treated as read-only for the duration of a scheduling run. The algorithm's
//! correctness depends on the inventory's documented insertion-order
//! iteration, so the guarantee lives here rather than in the scheduler.

pub mod error;
pub mod inventory;
pub mod ledger;

pub use error::{RepositoryError, RepositoryResult};
pub use inventory::RoomInventory;
pub use ledger::ReservationLedger;
