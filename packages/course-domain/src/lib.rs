pub mod distance;
pub mod normalize;
pub mod slug;
pub mod vocabulary;

pub use normalize::{FacetKind, normalize, resolve_alias};
