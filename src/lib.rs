//! # textgeom
//!
//! Geometry for 2D drawing back-ends: rich-text fragment layout and
//! SVG elliptical-arc to cubic Bézier approximation.
//!
//! Both halves are pure computations. They never rasterize anything; a
//! back-end supplies font metrics through [`font::FontUtil`] and receives
//! positioned text through [`graphics::Graphics`] or path segments through
//! [`bezier_arc::PathSink`].
//!
//! ## Text
//!
//! 1. **Rich text** holds styled runs ([`rich_text::RichText`])
//! 2. **Layout** cuts the runs into fragments, wraps them into lines, and
//!    aligns and anchors the block ([`fragment::layout`])
//! 3. **Rendering** draws the fragments, optionally rotated as a block or
//!    line by line ([`graphics::Graphics::render_text_rotated`])
//!
//! ## Arcs
//!
//! [`bezier_arc::approximate_arc`] turns an SVG arc (endpoints, radii,
//! x-axis rotation, large-arc and sweep flags) into cubic Bézier segments of
//! at most 45° each. [`path::Path2f::arc_to`] records them into a path.

// Foundation types & math
pub mod basics;
pub mod error;
pub mod rect;
pub mod trans_affine;
pub mod vector;

// Arcs & paths
pub mod arc;
pub mod bezier_arc;
pub mod path;

// Text
pub mod color;
pub mod font;
#[cfg(feature = "font")]
pub mod font_engine;
pub mod fragment;
pub mod graphics;
pub mod rich_text;
pub mod rotation;
