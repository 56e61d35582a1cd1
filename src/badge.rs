//! Scalable badge ("shield") icon generation.
//!
//! A badge is a rounded-square raster used as the background of a map
//! label, e.g. a road reference number. Because the label text varies in
//! length, the badge is registered together with nine-patch metadata: a
//! content box plus horizontal and vertical stretch intervals. The
//! renderer's icon-text-fit feature elongates only the straight interior
//! band and copies the rounded corners unscaled, so corners stay crisp
//! under arbitrary aspect-ratio resizing.
//!
//! Path geometry and nine-patch metadata are both derived from one
//! [`AxisMetrics`] value, so they cannot drift apart.
//!
//! # Example
//!
//! ```
//! use shield_icon::default_shield;
//!
//! let icon = default_shield().build()?;
//! assert_eq!(icon.nine_patch.content, [3, 3, 29, 29]);
//! assert_eq!(icon.nine_patch.stretch_x, vec![[3, 29]]);
//! # Ok::<(), shield_icon::GeometryError>(())
//! ```

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::GeometryError;
use crate::path::{Path, PathBuilder};
use crate::raster::Canvas;

/// Stroke width of the badge outline, in pixels.
const OUTLINE_WIDTH: f32 = 1.0;

/// Input parameters for one badge style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeSpec {
    /// Pixel dimension of the square output image.
    pub size: u32,
    /// Inset from the image border to the straight-edge line.
    pub edge_margin: u32,
    /// Distance from the edge line to where each corner curve begins.
    pub corner_arc_margin: u32,
    /// Bezier control-point offset from the edge line, strictly between
    /// zero and `corner_arc_margin`. Controls corner roundness.
    pub corner_control_margin: u32,
    /// Interior fill color.
    pub fill: Rgba,
    /// Outline stroke color.
    pub stroke: Rgba,
}

impl BadgeSpec {
    /// Validates the spec and derives its per-axis key coordinates.
    pub fn metrics(&self) -> Result<AxisMetrics, GeometryError> {
        AxisMetrics::from_spec(self)
    }

    /// Builds the badge raster and its nine-patch descriptor.
    ///
    /// Pure and deterministic: the same spec yields a bit-identical pixel
    /// buffer and identical metadata.
    pub fn build(&self) -> Result<IconDescriptor, GeometryError> {
        let metrics = self.metrics()?;
        let outline = metrics.outline();

        let mut canvas = Canvas::new(self.size as usize, self.size as usize);
        canvas.fill_path(&outline, self.fill);
        canvas.stroke_path(&outline, self.stroke, OUTLINE_WIDTH);

        Ok(IconDescriptor {
            size: self.size,
            pixels: canvas.into_pixels(),
            nine_patch: metrics.nine_patch(),
        })
    }
}

/// The reference style's road-shield badge: a 32px rounded square with a
/// near-white fill and a light gray outline.
pub fn default_shield() -> BadgeSpec {
    BadgeSpec {
        size: 32,
        edge_margin: 1,
        corner_arc_margin: 2,
        corner_control_margin: 1,
        fill: Rgba::from_hsl(0.0, 0.0, 0.98),
        stroke: Rgba::from_hsl(0.0, 0.0, 0.75),
    }
}

/// The four key coordinate values along each axis of the badge.
///
/// Near ("front") and far ("back") variants of: the straight-edge line,
/// the arc start, and the Bezier control offset. The outline path and the
/// nine-patch metadata are both read off this one struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisMetrics {
    /// Straight-edge line position near the origin.
    pub front: u32,
    /// Straight-edge line position on the far side.
    pub back: u32,
    /// Where the straight edge ends and the corner curve begins.
    pub arc_front: u32,
    /// Far-side counterpart of `arc_front`.
    pub arc_back: u32,
    /// Corner control-point coordinate near the origin.
    pub ctrl_front: u32,
    /// Far-side counterpart of `ctrl_front`.
    pub ctrl_back: u32,
}

impl AxisMetrics {
    fn from_spec(spec: &BadgeSpec) -> Result<Self, GeometryError> {
        if spec.corner_control_margin == 0 || spec.corner_control_margin >= spec.corner_arc_margin
        {
            return Err(GeometryError::ControlOutsideCorner {
                control: spec.corner_control_margin,
                arc: spec.corner_arc_margin,
            });
        }

        let inset = spec.edge_margin.saturating_add(spec.corner_arc_margin);
        if u64::from(spec.size) <= 2 * u64::from(inset) {
            return Err(GeometryError::NoInterior {
                size: spec.size,
                arc_front: inset,
                arc_back: spec.size.saturating_sub(inset),
            });
        }

        Ok(Self {
            front: spec.edge_margin,
            back: spec.size - spec.edge_margin,
            arc_front: inset,
            arc_back: spec.size - inset,
            ctrl_front: spec.edge_margin + spec.corner_control_margin,
            ctrl_back: spec.size - spec.edge_margin - spec.corner_control_margin,
        })
    }

    /// Builds the closed clockwise badge outline.
    ///
    /// Four straight edges alternating with four corner curves. Each corner
    /// is a cubic with both control points on the same diagonal control
    /// coordinate, a deliberately degenerate cubic rather than a
    /// circular-arc approximation.
    pub fn outline(&self) -> Path {
        let front = self.front as f32;
        let back = self.back as f32;
        let arc_front = self.arc_front as f32;
        let arc_back = self.arc_back as f32;
        let ctrl_front = self.ctrl_front as f32;
        let ctrl_back = self.ctrl_back as f32;

        let tr = Vec2::new(ctrl_back, ctrl_front);
        let br = Vec2::new(ctrl_back, ctrl_back);
        let bl = Vec2::new(ctrl_front, ctrl_back);
        let tl = Vec2::new(ctrl_front, ctrl_front);

        PathBuilder::new()
            .move_to(Vec2::new(arc_front, front))
            // top edge
            .line_to(Vec2::new(arc_back, front))
            // top-right corner
            .cubic_to(tr, tr, Vec2::new(back, arc_front))
            // right edge
            .line_to(Vec2::new(back, arc_back))
            // bottom-right corner
            .cubic_to(br, br, Vec2::new(arc_back, back))
            // bottom edge
            .line_to(Vec2::new(arc_front, back))
            // bottom-left corner
            .cubic_to(bl, bl, Vec2::new(front, arc_back))
            // left edge
            .line_to(Vec2::new(front, arc_front))
            // top-left corner
            .cubic_to(tl, tl, Vec2::new(arc_front, front))
            .close()
            .build()
    }

    /// Derives the nine-patch metadata.
    ///
    /// The content box and the single stretch interval on each axis all
    /// share the `[arc_front, arc_back]` bounds. Consumers rely on that
    /// coincidence: the content box drives text-fit padding and the stretch
    /// intervals drive image scaling, and divergence between the two shows
    /// up as misaligned corners on resize.
    pub fn nine_patch(&self) -> NinePatch {
        NinePatch {
            content: [self.arc_front, self.arc_front, self.arc_back, self.arc_back],
            stretch_x: vec![[self.arc_front, self.arc_back]],
            stretch_y: vec![[self.arc_front, self.arc_back]],
        }
    }
}

/// Nine-patch stretch metadata, in the image's own pixel coordinates.
///
/// Serializes with the field names a symbol-layer renderer's image
/// registry expects: `content`, `stretchX`, `stretchY`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NinePatch {
    /// `(x0, y0, x1, y1)` rectangle safe for overlay content.
    pub content: [u32; 4],
    /// Ordered, non-overlapping horizontal stretch intervals.
    pub stretch_x: Vec<[u32; 2]>,
    /// Ordered, non-overlapping vertical stretch intervals.
    pub stretch_y: Vec<[u32; 2]>,
}

/// A rendered badge: RGBA pixels plus nine-patch metadata.
///
/// Immutable once built; registered once with the renderer's image cache
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDescriptor {
    /// Square image dimension in pixels.
    pub size: u32,
    /// RGBA8 pixel buffer, `size * size * 4` bytes, row-major.
    pub pixels: Vec<u8>,
    /// Stretchable-region metadata.
    pub nine_patch: NinePatch,
}

impl IconDescriptor {
    /// Returns the RGBA bytes of one pixel.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.size + x) * 4) as usize;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathCommand;

    fn spec(size: u32) -> BadgeSpec {
        BadgeSpec {
            size,
            ..default_shield()
        }
    }

    #[test]
    fn test_reference_shield_descriptor() {
        let icon = default_shield().build().unwrap();
        assert_eq!(icon.size, 32);
        assert_eq!(icon.nine_patch.content, [3, 3, 29, 29]);
        assert_eq!(icon.nine_patch.stretch_x, vec![[3, 29]]);
        assert_eq!(icon.nine_patch.stretch_y, vec![[3, 29]]);
    }

    #[test]
    fn test_buffer_size() {
        for size in [7, 16, 32, 63] {
            let icon = spec(size).build().unwrap();
            assert_eq!(icon.pixels.len(), (size * size * 4) as usize);
        }
    }

    #[test]
    fn test_content_box_matches_stretch_intervals() {
        let specs = [
            spec(32),
            BadgeSpec {
                size: 48,
                edge_margin: 2,
                corner_arc_margin: 5,
                corner_control_margin: 3,
                ..default_shield()
            },
            BadgeSpec {
                size: 9,
                edge_margin: 1,
                corner_arc_margin: 3,
                corner_control_margin: 2,
                ..default_shield()
            },
        ];

        for s in specs {
            let np = s.metrics().unwrap().nine_patch();
            let [x0, y0, x1, y1] = np.content;
            assert_eq!(np.stretch_x, vec![[x0, x1]]);
            assert_eq!(np.stretch_y, vec![[y0, y1]]);
            let inset = s.edge_margin + s.corner_arc_margin;
            assert_eq!(np.content, [inset, inset, s.size - inset, s.size - inset]);
        }
    }

    #[test]
    fn test_outline_is_closed() {
        let path = default_shield().metrics().unwrap().outline();
        assert!(path.is_closed());
        assert_eq!(path.start_point(), path.end_point());
        // move, 4 lines, 4 cubics, close
        assert_eq!(path.len(), 10);
        assert!(matches!(path.commands()[0], PathCommand::MoveTo(_)));
    }

    #[test]
    fn test_minimum_size_boundary() {
        // Margins 1/2 need size > 6; 7 is the smallest admissible value.
        let icon = spec(7).build().unwrap();
        assert_eq!(icon.nine_patch.stretch_x, vec![[3, 4]]);

        let err = spec(6).build().unwrap_err();
        assert_eq!(
            err,
            GeometryError::NoInterior {
                size: 6,
                arc_front: 3,
                arc_back: 3,
            }
        );
    }

    #[test]
    fn test_control_margin_validation() {
        let mut s = default_shield();
        s.corner_control_margin = 0;
        assert!(matches!(
            s.build(),
            Err(GeometryError::ControlOutsideCorner { .. })
        ));

        s.corner_control_margin = s.corner_arc_margin;
        assert!(matches!(
            s.build(),
            Err(GeometryError::ControlOutsideCorner { .. })
        ));
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = default_shield().build().unwrap();
        let b = default_shield().build().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fill_and_edge_pixels() {
        let icon = default_shield().build().unwrap();
        // Deep interior is the pure fill color.
        assert_eq!(icon.pixel(16, 16), default_shield().fill.to_bytes());
        // Outside the outline stays transparent.
        assert_eq!(icon.pixel(0, 0)[3], 0);
        assert_eq!(icon.pixel(31, 31)[3], 0);
        // The straight edge midpoint is fully opaque.
        assert_eq!(icon.pixel(16, 1)[3], 255);
    }

    #[test]
    fn test_rotation_symmetry() {
        // Same opaque paint for fill and stroke so only geometry matters.
        let color = Rgba::new(0.2, 0.4, 0.6, 1.0);
        let icon = BadgeSpec {
            fill: color,
            stroke: color,
            ..default_shield()
        }
        .build()
        .unwrap();

        let size = icon.size as usize;
        let mut rotated = vec![0u8; icon.pixels.len()];
        for y in 0..size {
            for x in 0..size {
                let src = ((size - 1 - x) * size + y) * 4;
                let dst = (y * size + x) * 4;
                rotated[dst..dst + 4].copy_from_slice(&icon.pixels[src..src + 4]);
            }
        }

        // Anti-aliasing noise at corner pixels is allowed, divergence in
        // shape is not.
        for (a, b) in icon.pixels.iter().zip(rotated.iter()) {
            assert!((i32::from(*a) - i32::from(*b)).abs() <= 48);
        }
    }

    #[test]
    fn test_nine_patch_serializes_consumer_field_names() {
        let np = default_shield().metrics().unwrap().nine_patch();
        let json = serde_json::to_value(&np).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "content": [3, 3, 29, 29],
                "stretchX": [[3, 29]],
                "stretchY": [[3, 29]],
            })
        );
    }
}
