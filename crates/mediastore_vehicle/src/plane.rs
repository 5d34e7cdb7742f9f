//! Cargo plane.

use crate::Vehicle;
use crate::vehicle::check_amount;
use derive_getters::Getters;
use mediastore_error::{VehicleError, VehicleErrorKind, VehicleResult};

/// A vehicle with a cargo hold.
#[derive(Debug, Clone, Default, PartialEq, Getters)]
pub struct Plane {
    /// Engine and fuel state
    vehicle: Vehicle,
    /// Cargo currently on board
    cargo: f64,
    /// Cargo capacity
    max_cargo: f64,
}

impl Plane {
    /// Create an empty plane with the engine off.
    pub fn new(weight: f64, fuel: f64, fuel_consumption: f64, max_cargo: f64) -> Self {
        Self {
            vehicle: Vehicle::new(weight, fuel, fuel_consumption),
            cargo: 0.0,
            max_cargo,
        }
    }

    /// Start the engine. See [`Vehicle::start`].
    pub fn start(&mut self) -> VehicleResult<()> {
        self.vehicle.start()
    }

    /// Fly `distance` units. See [`Vehicle::travel`].
    pub fn travel(&mut self, distance: f64) -> VehicleResult<()> {
        self.vehicle.travel(distance)
    }

    /// Put `amount` of cargo on board.
    ///
    /// # Errors
    ///
    /// Returns [`VehicleErrorKind::InvalidAmount`] if `amount` is negative or
    /// not finite, and [`VehicleErrorKind::CargoOverload`] if the hold would
    /// exceed `max_cargo`. Nothing is loaded on either error.
    #[tracing::instrument(skip(self), fields(cargo = self.cargo, max_cargo = self.max_cargo))]
    pub fn load_cargo(&mut self, amount: f64) -> VehicleResult<()> {
        check_amount(amount)?;
        if self.cargo + amount > self.max_cargo {
            return Err(VehicleError::new(VehicleErrorKind::CargoOverload {
                requested: amount,
                current: self.cargo,
                max: self.max_cargo,
            }));
        }
        self.cargo += amount;
        tracing::debug!(cargo = self.cargo, "Cargo loaded");
        Ok(())
    }

    /// Unload everything, returning how much was on board.
    pub fn remove_all_cargo(&mut self) -> f64 {
        let previous = self.cargo;
        self.cargo = 0.0;
        tracing::debug!(unloaded = previous, "Cargo hold emptied");
        previous
    }
}
