//! Storymaker client application layer.
//!
//! Typed endpoint bindings on top of the transport port, and the book
//! creation wizard that drives them.

pub mod application;
