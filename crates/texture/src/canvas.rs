//! Minimal 2D raster canvas over an RGBA8 image.
//!
//! Fills sample pixel centres (no anti-aliasing); strokes use distance to the
//! segment for soft edges. All drawing composites source-over.

use glam::{Affine2, Vec2};
use image::{Rgba, RgbaImage};

const CURVE_SEGMENTS: usize = 24;
const ELLIPSE_SEGMENTS: usize = 64;

/// Straight-alpha colour with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Opaque colour from `0xRRGGBB`.
    pub const fn hex(rgb: u32) -> Self {
        Self::hex_alpha((rgb << 8) | 0xff)
    }

    /// Colour from `0xRRGGBBAA`.
    pub const fn hex_alpha(rgba: u32) -> Self {
        Self {
            r: ((rgba >> 24) & 0xff) as f32 / 255.0,
            g: ((rgba >> 16) & 0xff) as f32 / 255.0,
            b: ((rgba >> 8) & 0xff) as f32 / 255.0,
            a: (rgba & 0xff) as f32 / 255.0,
        }
    }

    /// 8-bit channels with a fractional alpha, like CSS `rgba()`.
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a,
        }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn to_rgba8(self) -> Rgba<u8> {
        Rgba([
            to_u8(self.r),
            to_u8(self.g),
            to_u8(self.b),
            to_u8(self.a),
        ])
    }

    fn premultiplied(self) -> [f32; 4] {
        [self.r * self.a, self.g * self.a, self.b * self.a, self.a]
    }

    fn from_premultiplied(p: [f32; 4]) -> Self {
        if p[3] <= 0.0 {
            return Self::TRANSPARENT;
        }
        Self {
            r: p[0] / p[3],
            g: p[1] / p[3],
            b: p[2] / p[3],
            a: p[3],
        }
    }
}

fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
enum GradientShape {
    Linear { start: Vec2, end: Vec2 },
    Radial { center: Vec2, inner: f32, outer: f32 },
}

/// Linear or concentric radial gradient in canvas pixel space.
///
/// Offsets outside the first/last stop take the end colours. Stops are
/// interpolated in premultiplied space so fades to transparent keep hue.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    shape: GradientShape,
    stops: Vec<ColorStop>,
}

impl Gradient {
    pub fn linear(start: Vec2, end: Vec2) -> Self {
        Self {
            shape: GradientShape::Linear { start, end },
            stops: Vec::new(),
        }
    }

    pub fn radial(center: Vec2, inner: f32, outer: f32) -> Self {
        Self {
            shape: GradientShape::Radial {
                center,
                inner,
                outer,
            },
            stops: Vec::new(),
        }
    }

    /// Add a stop. Stops must be added in increasing offset order.
    pub fn stop(mut self, offset: f32, color: Color) -> Self {
        self.stops.push(ColorStop {
            offset: offset.clamp(0.0, 1.0),
            color,
        });
        self
    }

    fn offset_at(&self, p: Vec2) -> f32 {
        match self.shape {
            GradientShape::Linear { start, end } => {
                let axis = end - start;
                let len_sq = axis.length_squared();
                if len_sq <= f32::EPSILON {
                    return 0.0;
                }
                (p - start).dot(axis) / len_sq
            }
            GradientShape::Radial {
                center,
                inner,
                outer,
            } => {
                let d = p.distance(center);
                let span = outer - inner;
                if span.abs() <= f32::EPSILON {
                    return if d >= outer { 1.0 } else { 0.0 };
                }
                (d - inner) / span
            }
        }
    }

    pub fn color_at(&self, p: Vec2) -> Color {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Color::TRANSPARENT;
        };
        let t = self.offset_at(p).clamp(0.0, 1.0);
        if t <= first.offset {
            return first.color;
        }
        if t >= last.offset {
            return last.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t > b.offset {
                continue;
            }
            let span = b.offset - a.offset;
            if span <= f32::EPSILON {
                return b.color;
            }
            let f = (t - a.offset) / span;
            let pa = a.color.premultiplied();
            let pb = b.color.premultiplied();
            let mixed = std::array::from_fn(|i| pa[i] + (pb[i] - pa[i]) * f);
            return Color::from_premultiplied(mixed);
        }
        last.color
    }
}

/// What a fill or stroke paints with.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Gradient(Gradient),
}

impl Paint {
    pub fn color_at(&self, p: Vec2) -> Color {
        match self {
            Paint::Solid(c) => *c,
            Paint::Gradient(g) => g.color_at(p),
        }
    }
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

impl From<Gradient> for Paint {
    fn from(g: Gradient) -> Self {
        Paint::Gradient(g)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct SubPath {
    points: Vec<Vec2>,
    closed: bool,
}

/// A set of flattened polylines. Curves are subdivided as they are added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    subpaths: Vec<SubPath>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Straight segment from `a` to `b`.
    pub fn line(a: Vec2, b: Vec2) -> Self {
        let mut path = Self::new();
        path.move_to(a).line_to(b);
        path
    }

    /// Closed polygon through `points`.
    pub fn polygon(points: &[Vec2]) -> Self {
        let mut path = Self::new();
        if let Some((first, rest)) = points.split_first() {
            path.move_to(*first);
            for p in rest {
                path.line_to(*p);
            }
            path.close();
        }
        path
    }

    pub fn rect(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::polygon(&[
            Vec2::new(x, y),
            Vec2::new(x + w, y),
            Vec2::new(x + w, y + h),
            Vec2::new(x, y + h),
        ])
    }

    pub fn ellipse(center: Vec2, rx: f32, ry: f32) -> Self {
        let points: Vec<Vec2> = (0..ELLIPSE_SEGMENTS)
            .map(|i| {
                let angle = i as f32 / ELLIPSE_SEGMENTS as f32 * std::f32::consts::TAU;
                center + Vec2::new(angle.cos() * rx, angle.sin() * ry)
            })
            .collect();
        Self::polygon(&points)
    }

    pub fn circle(center: Vec2, radius: f32) -> Self {
        Self::ellipse(center, radius, radius)
    }

    pub fn is_empty(&self) -> bool {
        self.subpaths.iter().all(|s| s.points.is_empty())
    }

    fn current_point(&self) -> Option<Vec2> {
        self.subpaths.last().and_then(|s| s.points.last().copied())
    }

    pub fn move_to(&mut self, p: Vec2) -> &mut Self {
        self.subpaths.push(SubPath {
            points: vec![p],
            closed: false,
        });
        self
    }

    /// Line to `p`. Without a current point this starts a new subpath.
    pub fn line_to(&mut self, p: Vec2) -> &mut Self {
        if let Some(sub) = self.subpaths.last_mut().filter(|s| !s.closed) {
            sub.points.push(p);
            return self;
        }
        self.move_to(p)
    }

    pub fn quad_to(&mut self, ctrl: Vec2, to: Vec2) -> &mut Self {
        let Some(from) = self.current_point() else {
            return self.move_to(to);
        };
        for i in 1..=CURVE_SEGMENTS {
            let t = i as f32 / CURVE_SEGMENTS as f32;
            let u = 1.0 - t;
            self.line_to(from * (u * u) + ctrl * (2.0 * u * t) + to * (t * t));
        }
        self
    }

    pub fn cubic_to(&mut self, c1: Vec2, c2: Vec2, to: Vec2) -> &mut Self {
        let Some(from) = self.current_point() else {
            return self.move_to(to);
        };
        for i in 1..=CURVE_SEGMENTS {
            let t = i as f32 / CURVE_SEGMENTS as f32;
            let u = 1.0 - t;
            let p = from * (u * u * u)
                + c1 * (3.0 * u * u * t)
                + c2 * (3.0 * u * t * t)
                + to * (t * t * t);
            self.line_to(p);
        }
        self
    }

    pub fn close(&mut self) -> &mut Self {
        if let Some(sub) = self.subpaths.last_mut() {
            sub.closed = true;
        }
        self
    }

    fn transformed(&self, m: &Affine2) -> Vec<SubPath> {
        self.subpaths
            .iter()
            .map(|s| SubPath {
                points: s.points.iter().map(|p| m.transform_point2(*p)).collect(),
                closed: s.closed,
            })
            .collect()
    }
}

/// Per-pixel coverage over a clipped device-space rectangle.
struct Mask {
    x0: u32,
    y0: u32,
    width: u32,
    height: u32,
    coverage: Vec<f32>,
}

impl Mask {
    fn covering(min: Vec2, max: Vec2, canvas_w: u32, canvas_h: u32) -> Option<Self> {
        if !(min.is_finite() && max.is_finite()) {
            return None;
        }
        let x0 = min.x.floor().max(0.0) as u32;
        let y0 = min.y.floor().max(0.0) as u32;
        let x1 = (max.x.ceil().max(0.0) as u32).min(canvas_w);
        let y1 = (max.y.ceil().max(0.0) as u32).min(canvas_h);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        let (width, height) = (x1 - x0, y1 - y0);
        Some(Self {
            x0,
            y0,
            width,
            height,
            coverage: vec![0.0; (width * height) as usize],
        })
    }

    fn raise(&mut self, col: u32, row: u32, value: f32) {
        let i = (row * self.width + col) as usize;
        if value > self.coverage[i] {
            self.coverage[i] = value;
        }
    }
}

fn bounds(subpaths: &[SubPath]) -> (Vec2, Vec2) {
    subpaths
        .iter()
        .flat_map(|s| s.points.iter())
        .fold((Vec2::INFINITY, Vec2::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(*p), hi.max(*p))
        })
}

fn segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Software drawing surface backed by an [`RgbaImage`].
///
/// Starts fully transparent. Path coordinates go through the current
/// transform at draw time; gradients are evaluated in device space.
pub struct Canvas {
    image: RgbaImage,
    transform: Affine2,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            transform: Affine2::IDENTITY,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Width and height as floats, for layout arithmetic.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width() as f32, self.height() as f32)
    }

    pub fn transform(&self) -> Affine2 {
        self.transform
    }

    pub fn set_transform(&mut self, transform: Affine2) {
        self.transform = transform;
    }

    pub fn reset_transform(&mut self) {
        self.transform = Affine2::IDENTITY;
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Paint the whole surface, ignoring the transform.
    pub fn fill(&mut self, paint: impl Into<Paint>) {
        let paint = paint.into();
        let (w, h) = (self.width(), self.height());
        self.fill_device_rect(0, 0, w, h, &paint);
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, paint: impl Into<Paint>) {
        let paint = paint.into();
        if self.transform != Affine2::IDENTITY {
            self.fill_path(&Path::rect(x, y, w, h), paint);
            return;
        }
        let (x, w) = if w < 0.0 { (x + w, -w) } else { (x, w) };
        let (y, h) = if h < 0.0 { (y + h, -h) } else { (y, h) };
        // Pixels whose centre lies in [x, x + w) x [y, y + h).
        let col = |v: f32| (v - 0.5).ceil().clamp(0.0, self.width() as f32) as u32;
        let row = |v: f32| (v - 0.5).ceil().clamp(0.0, self.height() as f32) as u32;
        let (x0, x1) = (col(x), col(x + w));
        let (y0, y1) = (row(y), row(y + h));
        if x0 < x1 && y0 < y1 {
            self.fill_device_rect(x0, y0, x1, y1, &paint);
        }
    }

    pub fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, width: f32, paint: impl Into<Paint>) {
        self.stroke_path(&Path::rect(x, y, w, h), width, paint);
    }

    /// Fill with the non-zero winding rule. Open subpaths close implicitly.
    pub fn fill_path(&mut self, path: &Path, paint: impl Into<Paint>) {
        let paint = paint.into();
        let subpaths = path.transformed(&self.transform);
        let (lo, hi) = bounds(&subpaths);
        let Some(mut mask) = Mask::covering(lo, hi, self.width(), self.height()) else {
            return;
        };

        let mut crossings: Vec<(f32, i32)> = Vec::new();
        for row in 0..mask.height {
            let yc = (mask.y0 + row) as f32 + 0.5;
            crossings.clear();
            for sub in subpaths.iter().filter(|s| s.points.len() >= 2) {
                let n = sub.points.len();
                for i in 0..n {
                    let a = sub.points[i];
                    let b = sub.points[(i + 1) % n];
                    let winding = if a.y <= yc && b.y > yc {
                        1
                    } else if b.y <= yc && a.y > yc {
                        -1
                    } else {
                        continue;
                    };
                    let x = a.x + (yc - a.y) / (b.y - a.y) * (b.x - a.x);
                    crossings.push((x, winding));
                }
            }
            crossings.sort_by(|l, r| l.0.total_cmp(&r.0));

            let mut winding = 0;
            let mut span_start = 0.0;
            for &(x, w) in &crossings {
                let was_inside = winding != 0;
                winding += w;
                if !was_inside && winding != 0 {
                    span_start = x;
                } else if was_inside && winding == 0 {
                    let first = (span_start - 0.5).ceil().max(mask.x0 as f32) as u32;
                    let end = ((x - 0.5).ceil().max(0.0) as u32).min(mask.x0 + mask.width);
                    for px in first..end {
                        mask.raise(px - mask.x0, row, 1.0);
                    }
                }
            }
        }
        self.composite(&mask, &paint);
    }

    /// Stroke every segment with the given line width.
    pub fn stroke_path(&mut self, path: &Path, width: f32, paint: impl Into<Paint>) {
        let paint = paint.into();
        let subpaths = path.transformed(&self.transform);
        let scale = self.transform.matrix2.determinant().abs().sqrt();
        let width = width * scale;
        if width <= 0.0 {
            return;
        }
        let half = width / 2.0;
        let pad = Vec2::splat(half + 1.0);
        let (lo, hi) = bounds(&subpaths);
        let Some(mut mask) = Mask::covering(lo - pad, hi + pad, self.width(), self.height()) else {
            return;
        };

        for sub in &subpaths {
            let n = sub.points.len();
            if n < 2 {
                continue;
            }
            let segments = if sub.closed { n } else { n - 1 };
            for i in 0..segments {
                let a = sub.points[i];
                let b = sub.points[(i + 1) % n];
                let seg_lo = a.min(b) - pad;
                let seg_hi = a.max(b) + pad;
                let c0 = (seg_lo.x.floor().max(mask.x0 as f32) as u32).max(mask.x0);
                let c1 = (seg_hi.x.ceil().max(0.0) as u32).min(mask.x0 + mask.width);
                let r0 = (seg_lo.y.floor().max(mask.y0 as f32) as u32).max(mask.y0);
                let r1 = (seg_hi.y.ceil().max(0.0) as u32).min(mask.y0 + mask.height);
                for py in r0..r1 {
                    for px in c0..c1 {
                        let centre = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
                        let d = segment_distance(centre, a, b);
                        let cov = (half + 0.5 - d).clamp(0.0, 1.0).min(width);
                        if cov > 0.0 {
                            mask.raise(px - mask.x0, py - mask.y0, cov);
                        }
                    }
                }
            }
        }
        self.composite(&mask, &paint);
    }

    fn fill_device_rect(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, paint: &Paint) {
        for py in y0..y1 {
            for px in x0..x1 {
                let src = paint.color_at(Vec2::new(px as f32 + 0.5, py as f32 + 0.5));
                self.blend(px, py, src, 1.0);
            }
        }
    }

    fn composite(&mut self, mask: &Mask, paint: &Paint) {
        for row in 0..mask.height {
            for col in 0..mask.width {
                let cov = mask.coverage[(row * mask.width + col) as usize];
                if cov <= 0.0 {
                    continue;
                }
                let (px, py) = (mask.x0 + col, mask.y0 + row);
                let src = paint.color_at(Vec2::new(px as f32 + 0.5, py as f32 + 0.5));
                self.blend(px, py, src, cov);
            }
        }
    }

    fn blend(&mut self, x: u32, y: u32, src: Color, coverage: f32) {
        let sa = (src.a * coverage).clamp(0.0, 1.0);
        if sa <= 0.0 {
            return;
        }
        let dst = self.image.get_pixel_mut(x, y);
        let da = dst[3] as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        let mix = |s: f32, d: u8| (s * sa + d as f32 / 255.0 * da * (1.0 - sa)) / out_a;
        let blended = Rgba([
            to_u8(mix(src.r, dst[0])),
            to_u8(mix(src.g, dst[1])),
            to_u8(mix(src.b, dst[2])),
            to_u8(out_a),
        ]);
        *dst = blended;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::hex(0xff0000);
    const BLUE: Color = Color::hex(0x0000ff);

    #[test]
    fn hex_parsing() {
        assert_eq!(Color::hex(0x2d1f4e).to_rgba8(), Rgba([0x2d, 0x1f, 0x4e, 0xff]));
        assert_eq!(Color::hex_alpha(0x7c3aed55).to_rgba8(), Rgba([0x7c, 0x3a, 0xed, 0x55]));
        assert_eq!(Color::rgba(10, 20, 30, 0.5).to_rgba8(), Rgba([10, 20, 30, 128]));
    }

    #[test]
    fn new_canvas_is_transparent() {
        let canvas = Canvas::new(4, 4);
        assert_eq!(canvas.pixel(3, 3), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn fill_rect_samples_pixel_centres() {
        let mut canvas = Canvas::new(10, 10);
        canvas.fill(Color::hex(0x000000));
        canvas.fill_rect(2.0, 2.0, 3.0, 3.0, RED);
        assert_eq!(canvas.pixel(2, 2), Rgba([255, 0, 0, 255]));
        assert_eq!(canvas.pixel(4, 4), Rgba([255, 0, 0, 255]));
        assert_eq!(canvas.pixel(5, 5), Rgba([0, 0, 0, 255]));
        assert_eq!(canvas.pixel(1, 2), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn fill_rect_clips_negative_origin() {
        let mut canvas = Canvas::new(8, 8);
        canvas.fill_rect(-30.0, 0.0, 32.0, 1.0, RED);
        assert_eq!(canvas.pixel(0, 0), Rgba([255, 0, 0, 255]));
        assert_eq!(canvas.pixel(1, 0), Rgba([255, 0, 0, 255]));
        assert_eq!(canvas.pixel(2, 0)[3], 0);
    }

    #[test]
    fn half_alpha_blends_over_opaque() {
        let mut canvas = Canvas::new(1, 1);
        canvas.fill(BLUE);
        canvas.fill(RED.with_alpha(0.5));
        let p = canvas.pixel(0, 0);
        assert_eq!(p[3], 255);
        assert!((p[0] as i32 - 128).abs() <= 1);
        assert!((p[2] as i32 - 127).abs() <= 1);
    }

    #[test]
    fn radial_gradient_fades_out() {
        let g = Gradient::radial(Vec2::new(50.0, 50.0), 0.0, 10.0)
            .stop(0.0, RED)
            .stop(1.0, Color::TRANSPARENT);
        assert_eq!(g.color_at(Vec2::new(50.0, 50.0)), RED);
        assert_eq!(g.color_at(Vec2::new(90.0, 50.0)).a, 0.0);
        let mid = g.color_at(Vec2::new(55.0, 50.0));
        assert!((mid.a - 0.5).abs() < 1e-5);
        // Premultiplied interpolation keeps the hue.
        assert!((mid.r - 1.0).abs() < 1e-5);
    }

    #[test]
    fn radial_gradient_with_inner_radius() {
        let g = Gradient::radial(Vec2::ZERO, 10.0, 20.0)
            .stop(0.0, Color::TRANSPARENT)
            .stop(1.0, BLUE);
        assert_eq!(g.color_at(Vec2::new(5.0, 0.0)).a, 0.0);
        assert_eq!(g.color_at(Vec2::new(25.0, 0.0)), BLUE);
    }

    #[test]
    fn three_stop_gradient() {
        let g = Gradient::linear(Vec2::ZERO, Vec2::new(0.0, 100.0))
            .stop(0.0, RED)
            .stop(0.5, BLUE)
            .stop(1.0, RED);
        assert_eq!(g.color_at(Vec2::new(0.0, 50.0)), BLUE);
        assert_eq!(g.color_at(Vec2::new(0.0, 150.0)), RED);
        let quarter = g.color_at(Vec2::new(0.0, 25.0));
        assert!((quarter.r - 0.5).abs() < 1e-5);
    }

    #[test]
    fn empty_gradient_paints_nothing() {
        let mut canvas = Canvas::new(2, 2);
        canvas.fill(Gradient::linear(Vec2::ZERO, Vec2::ONE));
        assert_eq!(canvas.pixel(0, 0)[3], 0);
    }

    #[test]
    fn triangle_fill() {
        let mut canvas = Canvas::new(20, 20);
        let tri = Path::polygon(&[
            Vec2::new(0.0, 0.0),
            Vec2::new(20.0, 0.0),
            Vec2::new(0.0, 20.0),
        ]);
        canvas.fill_path(&tri, RED);
        assert_eq!(canvas.pixel(2, 2), Rgba([255, 0, 0, 255]));
        assert_eq!(canvas.pixel(18, 18)[3], 0);
    }

    #[test]
    fn circle_fill() {
        let mut canvas = Canvas::new(20, 20);
        canvas.fill_path(&Path::circle(Vec2::new(10.0, 10.0), 5.0), BLUE);
        assert_eq!(canvas.pixel(10, 10), Rgba([0, 0, 255, 255]));
        assert_eq!(canvas.pixel(1, 1)[3], 0);
        assert_eq!(canvas.pixel(10, 17)[3], 0);
    }

    #[test]
    fn stroke_covers_line_only() {
        let mut canvas = Canvas::new(20, 20);
        canvas.stroke_path(&Path::line(Vec2::new(0.0, 10.5), Vec2::new(20.0, 10.5)), 1.0, RED);
        assert_eq!(canvas.pixel(5, 10), Rgba([255, 0, 0, 255]));
        assert_eq!(canvas.pixel(5, 5)[3], 0);
        assert_eq!(canvas.pixel(5, 13)[3], 0);
    }

    #[test]
    fn grid_line_on_pixel_edge_splits_coverage() {
        let mut canvas = Canvas::new(8, 8);
        canvas.stroke_path(&Path::line(Vec2::new(4.0, 0.0), Vec2::new(4.0, 8.0)), 1.0, RED);
        assert_eq!(canvas.pixel(3, 4)[3], 128);
        assert_eq!(canvas.pixel(4, 4)[3], 128);
        assert_eq!(canvas.pixel(6, 4)[3], 0);
    }

    #[test]
    fn curves_end_at_target() {
        let mut path = Path::new();
        path.move_to(Vec2::ZERO)
            .quad_to(Vec2::new(5.0, 10.0), Vec2::new(10.0, 0.0))
            .cubic_to(Vec2::new(12.0, 5.0), Vec2::new(15.0, -5.0), Vec2::new(20.0, 3.0));
        assert_eq!(path.current_point(), Some(Vec2::new(20.0, 3.0)));
        assert!(!path.is_empty());
    }

    #[test]
    fn rotated_rect_fill() {
        let mut canvas = Canvas::new(20, 20);
        canvas.set_transform(
            Affine2::from_translation(Vec2::new(10.0, 10.0))
                * Affine2::from_angle(std::f32::consts::FRAC_PI_4),
        );
        canvas.fill_rect(-1.0, -20.0, 2.0, 40.0, RED);
        canvas.reset_transform();
        // The stripe now runs along the anti-diagonal.
        assert_eq!(canvas.pixel(10, 10)[3], 255);
        assert_eq!(canvas.pixel(15, 5)[3], 255);
        assert_eq!(canvas.pixel(5, 5)[3], 0);
    }
}
