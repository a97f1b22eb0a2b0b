//! Domain models for the OTC advisor engine.

mod edges;
mod medicine;
mod query;
mod recommendation;
mod taxonomy;

pub use edges::*;
pub use medicine::*;
pub use query::*;
pub use recommendation::*;
pub use taxonomy::*;
