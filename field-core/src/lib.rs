//! Core 2-D particle field animation library.
//!
//! Main components:
//! - [`particle`] — individual animated particles.
//! - [`field`] — the particle batch and per-frame position updates.
//! - [`connect`] — proximity connections between particle pairs.
//! - [`render`] — drawing pass over an abstract [`surface::Surface`].
//! - [`animator`] — per-instance lifecycle (start / frame / stop).
//! - [`config`] — tunables for density, motion, and connection drawing.
//! - [`color`] — RGBA colors and the fixed palettes.
//! - [`types`] — shared type aliases and IDs.

pub mod animator;
pub mod color;
pub mod config;
pub mod connect;
pub mod field;
pub mod particle;
pub mod render;
pub mod surface;
pub mod types;
