//! Scalable badge-icon generation for map renderers.
//!
//! Synthesizes a rounded-square "shield" raster (the background of a road
//! reference label) together with its nine-patch stretch metadata, so a
//! symbol-layer renderer's icon-text-fit feature can resize the badge to
//! wrap variable-length text while keeping the rounded corners undistorted.
//!
//! The builder is a pure function: one [`BadgeSpec`] in, one RGBA buffer
//! plus [`NinePatch`] descriptor out, computed once at style-initialization
//! time and cached in an [`IconRegistry`].
//!
//! # Example
//!
//! ```
//! use shield_icon::{default_shield, IconRegistry};
//!
//! let mut registry = IconRegistry::new();
//! let icon = default_shield().build()?;
//!
//! assert_eq!(icon.nine_patch.content, [3, 3, 29, 29]);
//! registry.add("shield", icon)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod badge;
pub mod color;
pub mod error;
pub mod export;
pub mod path;
pub mod raster;
pub mod registry;

pub use badge::{AxisMetrics, BadgeSpec, IconDescriptor, NinePatch, default_shield};
pub use color::Rgba;
pub use error::GeometryError;
pub use export::ExportError;
pub use path::{Path, PathBuilder, PathCommand};
pub use raster::Canvas;
pub use registry::{IconRegistry, RegistryError};
