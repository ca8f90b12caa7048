//! Static display data shared between the core and the renderer.

pub mod colors;
