pub mod sql_writer;

pub use sql_writer::{SqlFileInfo, SqlScriptWriter};
