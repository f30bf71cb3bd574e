//! Apartment and resident registry.
//!
//! Apartments are keyed by number in `house_data.json`; residents belong to
//! exactly one apartment and are removed with it.

mod building;
mod model;

pub use building::Building;
pub use model::{Apartment, BuildingData, Resident};
