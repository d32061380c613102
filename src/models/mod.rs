pub mod concentration;
pub mod row;
pub mod schema;
pub mod source;
pub mod value;

pub use concentration::{Concentration, Ion};
pub use row::{CanonicalRow, RawRow};
pub use schema::{schema_for, FieldDescriptor, FieldType, RecordKind, Schema, RESULT_SCHEMA, STATION_SCHEMA};
pub use source::SourceMapping;
pub use value::Value;
