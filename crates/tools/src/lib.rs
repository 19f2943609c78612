//! Stateless helpers: emptiness classification, bounded random integers and
//! query-string serialization.

pub mod empty;
pub mod query;
pub mod random;

pub use empty::empty;
pub use query::{apply_query, serialize, serialize_value};
pub use random::{RandomRange, random, random_between, random_up_to, random_with};
