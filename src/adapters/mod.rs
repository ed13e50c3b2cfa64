// Adapters layer: concrete implementations of the source/target ports for
// external stores. The core never names these types.

pub mod csv_store;

pub use csv_store::{CsvSource, CsvTarget};
