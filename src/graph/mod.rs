pub mod generators;
pub mod keyed;
pub mod traits;
pub mod vertex;

pub use keyed::{Direction, KeyedGraph};
pub use traits::{Graph, MutableGraph};
pub use vertex::{Vertex, VertexId};
