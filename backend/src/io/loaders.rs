//! Unified interfaces for loading the planner's input files.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::parsing::{inventory_parser, ledger_parser};
use crate::repository::{ReservationLedger, RoomInventory};

/// Loads the room inventory from its CSV file.
pub struct InventoryLoader;

impl InventoryLoader {
    pub fn load_from_file(path: &Path) -> Result<RoomInventory> {
        let inventory = inventory_parser::parse_inventory_csv(path)
            .with_context(|| format!("failed to load room inventory from {}", path.display()))?;
        log::info!(
            "loaded {} room(s) across {} building(s) from {}",
            inventory.len(),
            inventory.buildings().count(),
            path.display()
        );
        Ok(inventory)
    }

    pub fn load_from_reader<R: Read>(reader: R) -> Result<RoomInventory> {
        inventory_parser::parse_inventory_reader(reader)
            .context("failed to load room inventory from reader")
    }
}

/// Loads the reservation ledger from its CSV file.
pub struct LedgerLoader;

impl LedgerLoader {
    pub fn load_from_file(path: &Path) -> Result<ReservationLedger> {
        let ledger = ledger_parser::parse_ledger_csv(path).with_context(|| {
            format!("failed to load reservation ledger from {}", path.display())
        })?;
        log::info!(
            "loaded {} reservation(s) from {}",
            ledger.len(),
            path.display()
        );
        Ok(ledger)
    }

    pub fn load_from_reader<R: Read>(reader: R) -> Result<ReservationLedger> {
        ledger_parser::parse_ledger_reader(reader)
            .context("failed to load reservation ledger from reader")
    }
}
