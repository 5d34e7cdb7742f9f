//! A small fuel and cargo simulation.
//!
//! A [`Vehicle`] starts only with fuel in the tank and moves only as far as
//! its fuel allows. A [`Plane`] adds a cargo hold with a fixed capacity.
//! Every threshold violation is reported as a [`VehicleError`] whose kind
//! carries the amounts involved; state is never changed by a failed call.
//!
//! ```
//! use mediastore_vehicle::{Plane, Vehicle, VehicleErrorKind};
//!
//! let mut car = Vehicle::new(1_000.0, 10.0, 2.0);
//! car.travel(4.0).unwrap();
//! assert_eq!(*car.fuel(), 2.0);
//!
//! let err = car.travel(2.0).unwrap_err();
//! assert_eq!(
//!     err.kind(),
//!     &VehicleErrorKind::NotEnoughFuel { required: 4.0, available: 2.0 }
//! );
//!
//! let mut plane = Plane::new(20_000.0, 500.0, 5.0, 100.0);
//! plane.load_cargo(60.0).unwrap();
//! assert!(plane.load_cargo(50.0).is_err());
//! assert_eq!(plane.remove_all_cargo(), 60.0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod plane;
mod vehicle;

pub use mediastore_error::{VehicleError, VehicleErrorKind, VehicleResult};
pub use plane::Plane;
pub use vehicle::Vehicle;
