//! Error types for badge generation.

use thiserror::Error;

/// Errors raised when a badge spec describes impossible geometry.
///
/// These are configuration errors surfaced at style-initialization time;
/// nothing here is retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The margins leave no positive-width straight interior on an axis.
    #[error(
        "margins leave no straight interior: arc span [{arc_front}, {arc_back}] on a {size}px axis"
    )]
    NoInterior {
        /// Requested image dimension.
        size: u32,
        /// Where the straight interior would start.
        arc_front: u32,
        /// Where the straight interior would end.
        arc_back: u32,
    },

    /// The corner control offset is not strictly inside the corner span.
    #[error("corner control margin {control} must lie strictly between 0 and {arc}")]
    ControlOutsideCorner {
        /// Supplied control-point margin, relative to the edge line.
        control: u32,
        /// Corner arc margin bounding the control offset.
        arc: u32,
    },
}
