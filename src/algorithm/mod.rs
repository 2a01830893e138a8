/// Shared autotiler capability, stroke events and pattern application
pub mod autotiler;
/// Sixteen-variant corner/edge scheme
pub mod corner;
/// Direction bits and pattern table entries
pub mod mask;
/// Editing session owning the grid and the selected scheme
pub mod session;
/// Vertex-anchored scheme
pub mod vertex;

pub use autotiler::{Action, Autotiler, StrokeEvent};
pub use corner::CornerAutotiler;
pub use session::{EditorSession, Scheme};
pub use vertex::VertexAutotiler;
