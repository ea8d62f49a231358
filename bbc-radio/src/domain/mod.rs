//! Domain records for stations, schedule dates and programmes.
//!
//! These are plain values. Only [`ScheduleDate`] validates its input;
//! stations and programmes accept any strings.

mod date;
mod programme;
mod station;

pub use date::{InvalidDateError, ScheduleDate};
pub use programme::{Programme, ProgrammeBuilder, ProgrammeField, UnknownField};
pub use station::Station;
