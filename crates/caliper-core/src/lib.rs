//! Caliper Core Types and Definitions
//!
//! This crate provides the foundational types for Caliper glyph metric
//! diagrams. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Points, bounds, transforms and paths ([`geometry`] module)
//! - **Font**: The glyph metrics seam ([`font::GlyphSource`])
//! - **Draw**: Measurement indicators and the canvas abstraction ([`draw`] module)

pub mod color;
pub mod draw;
pub mod error;
pub mod font;
pub mod geometry;
