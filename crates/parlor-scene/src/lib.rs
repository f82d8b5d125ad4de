//! Scene services for the **parlor** dialogue widgets.
//!
//! A small retained scene graph that renders into a terminal: owned node
//! trees with paint order, text labels that report their measured extent,
//! polygon and segment drawing, clip regions, hit regions and tap gestures.
//!
//! Scene space is y-up and measured in terminal cells.  Widgets build and
//! mutate [`Node`] trees; a [`Painter`] turns them into `ratatui` buffer
//! cells, and a [`TouchTracker`] turns mouse events into [`Touch`] gestures.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`geometry`] | Points, sizes, bounds and anchor presets |
//! | [`color`] | Packed ARGB colors |
//! | [`font`] | Font resolution and text measurement |
//! | [`label`] | Text labels with read-back of their extent |
//! | [`shape`] | Polygon and segment drawing |
//! | [`node`] | Owned node trees and hit testing |
//! | [`touch`] | Tap gestures from mouse events |
//! | [`paint`] | Rendering node trees into a buffer |

pub mod color;
pub mod error;
pub mod font;
pub mod geometry;
pub mod label;
pub mod node;
pub mod paint;
pub mod shape;
pub mod touch;

pub use color::Color;
pub use error::SceneError;
pub use font::{Font, FontLibrary, TextLayout, BUILTIN_MONO};
pub use geometry::{anchor, Bounds, Size, Vec2};
pub use label::{Label, TextAlign};
pub use node::{HitRegion, Node, NodeKind};
pub use paint::{Painter, Placement};
pub use shape::{DrawList, Shape};
pub use touch::{TapPhase, Touch, TouchTracker};
