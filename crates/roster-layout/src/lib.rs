pub mod constants;
mod edit;
#[cfg(feature = "serde")]
mod io;
pub mod layout;
mod options;
mod paginate;
mod stats;
mod types;

#[cfg(feature = "serde")]
pub use io::{load_roster, save_roster};
pub use layout::{Geometry, classify, classify_document, geometry_for};
pub use options::*;
pub use paginate::{PrintPlan, paginate, paginate_with, plan};
pub use stats::{PaginationStatistics, calculate_statistics};
pub use types::*;
