pub mod constants;
pub mod coordinates;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use coordinates::{dms_to_decimal, parse_coordinate, shape_expression, validate_coordinates};
pub use filename::generate_default_sql_filename;
pub use progress::ProgressReporter;
