//! Core types: math re-exports and geometry helpers shared by loaders.

pub use glam::{Vec2, Vec3, vec2, vec3};

pub mod geometry;
