mod geo;
mod notify;
mod timings;

pub use geo::*;
pub use notify::*;
pub use timings::*;
