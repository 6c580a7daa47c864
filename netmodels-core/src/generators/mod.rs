//! Synthetic network generators.
//!
//! Both generators register each node id of `0..N` in ascending order before
//! inserting its edges, so the resulting [`Graph`](crate::Graph) iterates
//! nodes in ascending order.

mod params;
mod preferential_attachment;
mod rng;
mod small_world;

pub use params::{PreferentialAttachmentParams, SmallWorldParams};
pub use preferential_attachment::generate_preferential_attachment;
pub use small_world::generate_small_world;
