//! Call-scoped RGBA drawing surface.
//!
//! `Canvas` rasterizes paths with fractional coverage: fills use the
//! non-zero winding rule evaluated on a supersampling grid, strokes stamp
//! coverage by perpendicular distance to the flattened outline. Both are
//! isotropic, so a path that is symmetric under 90-degree rotation
//! rasterizes symmetrically too.

use glam::Vec2;

use crate::color::Rgba;
use crate::path::{Path, PathCommand};

/// Line segments per flattened cubic curve.
const CURVE_SEGMENTS: usize = 16;

/// Supersamples per pixel axis for fills.
const FILL_SAMPLES: usize = 4;

/// An RGBA drawing surface scoped to one rasterization job.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Creates a transparent canvas with the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height * 4],
        }
    }

    /// Returns the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the RGBA bytes of one pixel.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.width + x) * 4;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// Fills the path interior with a color using the non-zero winding rule.
    pub fn fill_path(&mut self, path: &Path, color: Rgba) {
        let polylines = flatten_path(path);
        let mut edges = Vec::new();
        for line in &polylines {
            for window in line.windows(2) {
                edges.push((window[0], window[1]));
            }
            // Implicit closing edge; fills always treat subpaths as closed.
            if let (Some(&first), Some(&last)) = (line.first(), line.last()) {
                if first.distance_squared(last) > 1e-12 {
                    edges.push((last, first));
                }
            }
        }
        let mask = self.fill_coverage(&edges);
        self.composite(&mask, color);
    }

    /// Strokes the path outline with a color and stroke width.
    pub fn stroke_path(&mut self, path: &Path, color: Rgba, width: f32) {
        let polylines = flatten_path(path);
        let mut segments = Vec::new();
        for line in &polylines {
            for window in line.windows(2) {
                segments.push((window[0], window[1]));
            }
        }
        let mask = self.stroke_coverage(&segments, width);
        self.composite(&mask, color);
    }

    /// Consumes the canvas, returning the RGBA pixel buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Per-pixel fill coverage from a supersampled winding test.
    fn fill_coverage(&self, edges: &[(Vec2, Vec2)]) -> Vec<f32> {
        let mut mask = vec![0.0f32; self.width * self.height];
        let step = 1.0 / FILL_SAMPLES as f32;

        for y in 0..self.height {
            for x in 0..self.width {
                let mut hits = 0u32;
                for sy in 0..FILL_SAMPLES {
                    for sx in 0..FILL_SAMPLES {
                        let p = Vec2::new(
                            x as f32 + (sx as f32 + 0.5) * step,
                            y as f32 + (sy as f32 + 0.5) * step,
                        );
                        if winding_number(edges, p) != 0 {
                            hits += 1;
                        }
                    }
                }
                mask[y * self.width + x] =
                    hits as f32 / (FILL_SAMPLES * FILL_SAMPLES) as f32;
            }
        }

        mask
    }

    /// Per-pixel stroke coverage from distance to the nearest segment.
    fn stroke_coverage(&self, segments: &[(Vec2, Vec2)], width: f32) -> Vec<f32> {
        let mut mask = vec![0.0f32; self.width * self.height];
        let half = width / 2.0;

        for y in 0..self.height {
            for x in 0..self.width {
                let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let mut dist = f32::INFINITY;
                for &(a, b) in segments {
                    dist = dist.min(segment_distance(center, a, b));
                }
                // One-pixel ramp centered on the stroke boundary.
                mask[y * self.width + x] = (half + 0.5 - dist).clamp(0.0, 1.0);
            }
        }

        mask
    }

    /// Source-over composite of a colored coverage mask onto the canvas.
    fn composite(&mut self, mask: &[f32], color: Rgba) {
        for (i, &coverage) in mask.iter().enumerate() {
            if coverage <= 0.0 {
                continue;
            }

            let idx = i * 4;
            let alpha = color.a * coverage;

            let dst_r = self.pixels[idx] as f32 / 255.0;
            let dst_g = self.pixels[idx + 1] as f32 / 255.0;
            let dst_b = self.pixels[idx + 2] as f32 / 255.0;
            let dst_a = self.pixels[idx + 3] as f32 / 255.0;

            let out_a = alpha + dst_a * (1.0 - alpha);
            if out_a <= 0.0 {
                continue;
            }
            let out_r = (color.r * alpha + dst_r * dst_a * (1.0 - alpha)) / out_a;
            let out_g = (color.g * alpha + dst_g * dst_a * (1.0 - alpha)) / out_a;
            let out_b = (color.b * alpha + dst_b * dst_a * (1.0 - alpha)) / out_a;

            let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
            self.pixels[idx] = q(out_r);
            self.pixels[idx + 1] = q(out_g);
            self.pixels[idx + 2] = q(out_b);
            self.pixels[idx + 3] = q(out_a);
        }
    }
}

/// Evaluates a cubic Bezier curve at parameter `t`.
#[inline]
fn cubic_point(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let t2 = t * t;
    p0 * (mt2 * mt) + p1 * (3.0 * mt2 * t) + p2 * (3.0 * mt * t2) + p3 * (t2 * t)
}

/// Flattens a path into one polyline per subpath.
fn flatten_path(path: &Path) -> Vec<Vec<Vec2>> {
    let mut polylines: Vec<Vec<Vec2>> = Vec::new();
    let mut line: Vec<Vec2> = Vec::new();
    let mut current = Vec2::ZERO;

    for cmd in path.commands() {
        match *cmd {
            PathCommand::MoveTo(p) => {
                if line.len() > 1 {
                    polylines.push(std::mem::take(&mut line));
                } else {
                    line.clear();
                }
                line.push(p);
                current = p;
            }
            PathCommand::LineTo(p) => {
                if line.is_empty() {
                    line.push(current);
                }
                line.push(p);
                current = p;
            }
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => {
                if line.is_empty() {
                    line.push(current);
                }
                for i in 1..=CURVE_SEGMENTS {
                    let t = i as f32 / CURVE_SEGMENTS as f32;
                    line.push(cubic_point(current, control1, control2, to, t));
                }
                current = to;
            }
            PathCommand::Close => {
                if let (Some(&first), Some(&last)) = (line.first(), line.last()) {
                    if first.distance_squared(last) > 1e-12 {
                        line.push(first);
                    }
                    current = first;
                }
                if line.len() > 1 {
                    polylines.push(std::mem::take(&mut line));
                } else {
                    line.clear();
                }
            }
        }
    }

    if line.len() > 1 {
        polylines.push(line);
    }

    polylines
}

/// Non-zero winding number of a point against an edge list, by ray casting
/// toward positive x.
fn winding_number(edges: &[(Vec2, Vec2)], p: Vec2) -> i32 {
    let mut winding = 0;
    for &(a, b) in edges {
        if (a.y > p.y) != (b.y > p.y) {
            let t = (p.y - a.y) / (b.y - a.y);
            let x = a.x + t * (b.x - a.x);
            if x > p.x {
                winding += if b.y > a.y { 1 } else { -1 };
            }
        }
    }
    winding
}

/// Distance from a point to a line segment.
fn segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= 1e-12 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
