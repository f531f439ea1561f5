//! Built-in reference engines for the detector and embedder seams.
//!
//! These are deliberately lightweight pure-Rust backends so the
//! pipeline runs without native model dependencies. Production setups
//! can wire heavier backends through the same traits.

pub mod skin;
pub mod thumbnail;

pub use skin::SkinBlobDetector;
pub use thumbnail::GrayThumbnailEmbedder;
