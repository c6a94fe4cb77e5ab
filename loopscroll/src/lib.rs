//! A headless recycling ("loop") scroll view.
//!
//! For the motion layer (animated jumps, flings, gesture handling), see the
//! `loopscroll-adapter` crate.
//!
//! A list of uniform-size items, possibly far longer than anything you'd want to instantiate,
//! is rendered through a small constant pool of physical nodes. As the view moves, a node that
//! leaves one edge of the viewport is moved to the opposite edge and relabeled with the logical
//! index it now represents. The logical window wraps around the end of the list.
//!
//! It is UI-agnostic. A GUI layer is expected to provide:
//! - a factory for its node handles
//! - a renderer that fills a node for a logical index
//! - main/cross deltas from drags, wheels or animations
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod engine;
mod error;
mod layout;
mod node;
mod options;
mod render;
mod ring;
mod state;
mod types;


pub use engine::LoopScroll;
pub use error::LoopError;
pub use layout::{Layout, MAX_POOL_SIZE};
pub use node::Node;
pub use options::{DEFAULT_NODE_NAME_PREFIX, LoopOptions};
pub use render::{NodeFactory, RenderNode};
pub use state::LoopState;
pub use types::{MoveDirection, Size, Spacing, Vec2};
