//! Record Adapters
//!
//! Implementations of the HealthRecordReader port.

mod in_memory_reader;

pub use in_memory_reader::InMemoryHealthRecordReader;
