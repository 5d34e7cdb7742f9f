//! Base vehicle with fuel and an engine state.

use derive_getters::Getters;
use mediastore_error::{VehicleError, VehicleErrorKind, VehicleResult};

/// A vehicle that burns fuel in proportion to distance travelled.
#[derive(Debug, Clone, Default, PartialEq, Getters)]
pub struct Vehicle {
    /// Weight of the vehicle
    weight: f64,
    /// Fuel currently in the tank
    fuel: f64,
    /// Fuel burned per unit of distance
    fuel_consumption: f64,
    /// Whether the engine is running
    started: bool,
}

impl Vehicle {
    /// Create a vehicle with the engine off.
    pub fn new(weight: f64, fuel: f64, fuel_consumption: f64) -> Self {
        Self {
            weight,
            fuel,
            fuel_consumption,
            started: false,
        }
    }

    /// Start the engine.
    ///
    /// Starting a running engine does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`VehicleErrorKind::LowFuel`] if the tank is empty; the engine
    /// stays off.
    #[tracing::instrument(skip(self), fields(fuel = self.fuel, started = self.started))]
    pub fn start(&mut self) -> VehicleResult<()> {
        if self.started {
            return Ok(());
        }
        if self.fuel <= 0.0 {
            tracing::debug!("Refusing to start with an empty tank");
            return Err(VehicleError::new(VehicleErrorKind::LowFuel { fuel: self.fuel }));
        }
        self.started = true;
        tracing::debug!("Engine started");
        Ok(())
    }

    /// Fuel needed to cover `distance`.
    pub fn fuel_needed(&self, distance: f64) -> f64 {
        distance * self.fuel_consumption
    }

    /// Move `distance` units, burning `distance × fuel_consumption` fuel.
    ///
    /// # Errors
    ///
    /// Returns [`VehicleErrorKind::InvalidAmount`] if `distance` is negative
    /// or not finite, and [`VehicleErrorKind::NotEnoughFuel`] if the tank holds
    /// less than the move needs. Fuel is left unchanged on either error.
    #[tracing::instrument(skip(self), fields(fuel = self.fuel))]
    pub fn travel(&mut self, distance: f64) -> VehicleResult<()> {
        check_amount(distance)?;
        let required = self.fuel_needed(distance);
        if self.fuel < required {
            tracing::debug!(required, "Not enough fuel for move");
            return Err(VehicleError::new(VehicleErrorKind::NotEnoughFuel {
                required,
                available: self.fuel,
            }));
        }
        self.fuel -= required;
        tracing::debug!(remaining = self.fuel, "Moved");
        Ok(())
    }
}

/// Accept only finite, non-negative distances and cargo amounts.
pub(crate) fn check_amount(amount: f64) -> VehicleResult<()> {
    if !amount.is_finite() || amount < 0.0 {
        tracing::debug!(amount, "Rejecting invalid amount");
        return Err(VehicleError::new(VehicleErrorKind::InvalidAmount { amount }));
    }
    Ok(())
}
