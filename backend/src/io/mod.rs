//! File loading and report writing.

pub mod loaders;
pub mod writer;

pub use loaders::{InventoryLoader, LedgerLoader};
pub use writer::ScheduleWriter;
