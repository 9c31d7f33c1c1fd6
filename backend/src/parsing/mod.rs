//! Parsers for the planner's input formats.
//!
//! - [`inventory_parser`]: CSV room inventory files
//! - [`ledger_parser`]: CSV reservation ledger files
//! - [`constraints`]: user-entered date/time/duration/attendee strings

pub mod constraints;
pub mod inventory_parser;
pub mod ledger_parser;
