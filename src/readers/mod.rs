pub mod concurrent_reader;
pub mod delimited_reader;

pub use concurrent_reader::{ConcurrentReader, SourceData};
pub use delimited_reader::DelimitedReader;
