//! Station schedules.
//!
//! A schedule page embeds its programme listing as schema.org JSON-LD. The
//! `@graph` array of the first such block holds one entry per broadcast.

mod extract;
mod model;
mod types;

pub use extract::extract_programmes;
pub use model::{Schedule, schedule_url};
pub use types::{GraphEntry, Publication, Series};
