//! Vehicle simulation error types.

/// Specific vehicle error conditions.
///
/// Amounts are kept as numbers so callers can decide how to report them.
#[derive(Debug, Clone, PartialEq, PartialOrd, derive_more::Display)]
pub enum VehicleErrorKind {
    /// Vehicle cannot start without fuel
    #[display("Low Fuel: cannot start vehicle with {} fuel", fuel)]
    LowFuel {
        /// Fuel in the tank when the start was attempted
        fuel: f64,
    },

    /// A move needs more fuel than is available
    #[display("Not Enough Fuel: need {} fuel, but only have {}", required, available)]
    NotEnoughFuel {
        /// Fuel the move would consume
        required: f64,
        /// Fuel currently in the tank
        available: f64,
    },

    /// A distance or cargo amount was negative or not a finite number
    #[display("Invalid Amount: {} is not a finite, non-negative quantity", amount)]
    InvalidAmount {
        /// Rejected value
        amount: f64,
    },

    /// Loading would exceed the cargo capacity
    #[display(
        "Cargo Overload: cannot load {} cargo (current: {}, max: {})",
        requested,
        current,
        max
    )]
    CargoOverload {
        /// Amount the caller tried to load
        requested: f64,
        /// Cargo already on board
        current: f64,
        /// Cargo capacity
        max: f64,
    },
}

/// Vehicle error with location tracking.
///
/// # Examples
///
/// ```
/// use mediastore_error::{VehicleError, VehicleErrorKind};
///
/// let err = VehicleError::new(VehicleErrorKind::NotEnoughFuel {
///     required: 4.0,
///     available: 2.0,
/// });
/// assert!(err.to_string().contains("Not Enough Fuel: need 4 fuel, but only have 2"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Vehicle Error: {} at line {} in {}", kind, line, file)]
pub struct VehicleError {
    kind: VehicleErrorKind,
    line: u32,
    file: &'static str,
}

impl VehicleError {
    /// Create a new vehicle error with caller location tracking.
    #[track_caller]
    pub fn new(kind: VehicleErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VehicleErrorKind {
        &self.kind
    }
}

impl From<VehicleErrorKind> for VehicleError {
    #[track_caller]
    fn from(kind: VehicleErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result type for vehicle operations.
pub type VehicleResult<T> = std::result::Result<T, VehicleError>;
