//! Service layer: the astronomical core and the pipeline that ties it
//! together for a single request.

pub mod lunar;
pub mod reading;
pub mod sectors;

pub use lunar::{moon_longitude, moon_longitude_normalized};
pub use reading::{compute_reading, Reading, ReadingRequest};
pub use sectors::{mansion_index, zodiac_index, Placement, SectorNames};
