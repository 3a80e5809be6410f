//! Fleet construction with per-kind quotas.
//!
//! Quotas are tracked by an explicit [`FleetBuilder`] owned by whoever
//! assembles a fleet, so separate games never share counts.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use super::common::GameError;
use super::config::FLEET;
use super::ship::{Ship, ShipKind};

/// Quota context for assembling one fleet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FleetBuilder {
    built: [usize; FLEET.len()],
}

impl FleetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct one ship of `kind`, failing once the kind's quota is used up.
    pub fn build(&mut self, kind: ShipKind) -> Result<Ship, GameError> {
        let count = &mut self.built[kind.index()];
        if *count >= kind.quota() {
            log::debug!("refusing to build {}: quota {} reached", kind, kind.quota());
            return Err(GameError::FleetQuotaExceeded {
                kind,
                quota: kind.quota(),
            });
        }
        *count += 1;
        Ok(Ship::new(kind))
    }

    /// Ships of `kind` built so far.
    pub fn built(&self, kind: ShipKind) -> usize {
        self.built[kind.index()]
    }

    /// Ships of `kind` that may still be built.
    pub fn remaining(&self, kind: ShipKind) -> usize {
        kind.quota() - self.built(kind)
    }

    /// Forget all counts so a new fleet can be assembled.
    pub fn reset(&mut self) {
        self.built = [0; FLEET.len()];
    }

    /// Build the complete standard fleet, largest ships first.
    ///
    /// Fails without capping counts if this builder has already produced
    /// ships; call [`reset`](Self::reset) first.
    pub fn standard_fleet(&mut self) -> Result<Vec<Ship>, GameError> {
        let mut ships = Vec::with_capacity(super::config::NUM_SHIPS);
        for kind in FLEET {
            for _ in 0..kind.quota() {
                ships.push(self.build(kind)?);
            }
        }
        Ok(ships)
    }
}

/// Check a caller-assembled fleet before it is handed to a player.
///
/// The fleet must be non-empty, unplaced, and hold no more ships of a kind
/// than one [`FleetBuilder`] would allow.
pub fn check_fleet(ships: &[Ship]) -> Result<(), GameError> {
    if ships.is_empty() {
        return Err(GameError::EmptyFleet);
    }
    if ships.iter().any(Ship::is_placed) {
        return Err(GameError::FleetAlreadyPlaced);
    }
    let mut quota = FleetBuilder::new();
    for ship in ships {
        quota.build(ship.kind())?;
    }
    Ok(())
}
