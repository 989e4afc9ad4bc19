//! Interactive page state.
//!
//! Three independent state machines, each an owned value with explicit
//! transitions. Nothing here knows about HTTP handlers or templates:
//!
//! ```text
//! probe    - backend liveness check   Idle -> Loading -> Succeeded | Failed
//! hover    - snippet focus            None <-> Some(key)
//! lightbox - enlarged screenshot      None <-> Some(image)
//! ```

pub mod hover;
pub mod lightbox;
pub mod probe;

pub use hover::{HoverPairViewer, SnippetRecord};
pub use lightbox::{Gallery, ImageLightbox};
pub use probe::ConnectivityProbe;
