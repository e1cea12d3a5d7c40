//! Afterglow - gradients from photos
//!
//! Extracts a band-ordered palette from an image, turns it into a fixed set
//! of CSS linear gradients, memoizes them, and lets stop positions be
//! dragged by hand. This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
