//! One drawing routine per [`TextureStyle`](crate::TextureStyle).
//!
//! Every routine is a pure function of the canvas size: positions come from
//! fixed fractions, loop indices and their sines, never from a random source.

use crate::canvas::{Canvas, Color, Gradient, Path};
use glam::{Affine2, Vec2};
use std::f32::consts::{FRAC_PI_4, TAU};

fn v(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

/// Radial glow fading from `color` at `center` to nothing at `radius`.
fn glow(center: Vec2, radius: f32, color: Color) -> Gradient {
    Gradient::radial(center, 0.0, radius)
        .stop(0.0, color)
        .stop(1.0, Color::TRANSPARENT)
}

fn glow_stack(canvas: &mut Canvas, glows: &[(Vec2, Color)], radius: f32) {
    for (center, color) in glows {
        canvas.fill(glow(*center, radius, *color));
    }
}

pub(crate) fn abstract_purple(canvas: &mut Canvas) {
    let Vec2 { x: w, y: h } = canvas.size();
    canvas.fill(Color::hex(0x0f0520));
    glow_stack(
        canvas,
        &[
            (v(w * 0.3, h * 0.35), Color::hex_alpha(0x6b21a8bb)),
            (v(w * 0.72, h * 0.6), Color::hex_alpha(0x7c3aedbb)),
            (v(w * 0.5, h * 0.15), Color::hex_alpha(0x4c1d95bb)),
        ],
        w * 0.55,
    );

    let ink = Color::rgba(196, 176, 240, 0.25);
    for i in 0..10 {
        let t = i as f32 / 10.0;
        let mut path = Path::new();
        path.move_to(v(t * w, h * 0.5 + (i as f32).sin() * h * 0.3))
            .cubic_to(
                v((t + 0.05) * w, h * 0.2),
                v((t + 0.08) * w, h * 0.8),
                v((t + 0.1) * w, h * 0.5),
            );
        canvas.stroke_path(&path, 1.5, ink);
    }
}

pub(crate) fn abstract_blue(canvas: &mut Canvas) {
    let Vec2 { x: w, y: h } = canvas.size();
    canvas.fill(Color::hex(0x020b1a));
    glow_stack(
        canvas,
        &[
            (v(w * 0.5, h * 0.5), Color::hex_alpha(0x2563ebaa)),
            (v(w * 0.2, h * 0.3), Color::hex_alpha(0x0ea5e9aa)),
            (v(w * 0.8, h * 0.7), Color::hex_alpha(0x1d4ed8aa)),
        ],
        w * 0.5,
    );

    let ink = Color::rgba(147, 197, 253, 0.2);
    for j in 0..12 {
        let y0 = j as f32 / 12.0 * h;
        let mut path = Path::new();
        path.move_to(v(0.0, y0));
        for x in (0..=w as u32).step_by(4) {
            let x = x as f32;
            path.line_to(v(x, y0 + (x * 0.02 + j as f32).sin() * 20.0));
        }
        canvas.stroke_path(&path, 1.0, ink);
    }
}

pub(crate) fn abstract_indigo(canvas: &mut Canvas) {
    let Vec2 { x: w, y: h } = canvas.size();
    canvas.fill(Color::hex(0x1e1b4b));
    let shards = [
        (
            [v(0.0, h * 0.9), v(w * 0.6, 0.0), v(w, h * 0.4)],
            Color::rgba(99, 102, 241, 0.3),
        ),
        (
            [v(w * 0.2, 0.0), v(w, h * 0.3), v(w * 0.5, h)],
            Color::rgba(67, 56, 202, 0.25),
        ),
        (
            [v(0.0, h * 0.5), v(w * 0.8, h), v(w * 0.4, 0.0)],
            Color::rgba(79, 70, 229, 0.2),
        ),
    ];
    for (tri, color) in shards {
        canvas.fill_path(&Path::polygon(&tri), color);
    }
    canvas.fill(glow(
        v(w * 0.5, h * 0.5),
        w * 0.4,
        Color::rgba(129, 140, 248, 0.15),
    ));
}

pub(crate) fn brutalist_blue(canvas: &mut Canvas) {
    let Vec2 { x: w, y: h } = canvas.size();
    canvas.fill(Color::hex(0x0a1628));

    let grid = Color::rgba(37, 99, 235, 0.3);
    for x in (0..w as u32).step_by(32) {
        let x = x as f32;
        canvas.stroke_path(&Path::line(v(x, 0.0), v(x, h)), 1.0, grid);
    }
    for y in (0..h as u32).step_by(32) {
        let y = y as f32;
        canvas.stroke_path(&Path::line(v(0.0, y), v(w, y)), 1.0, grid);
    }

    let blocks = [
        (64.0, 80.0, 192.0, 256.0),
        (288.0, 48.0, 160.0, 192.0),
        (96.0, 384.0, 128.0, 192.0),
        (320.0, 300.0, 128.0, 256.0),
        (0.0, 200.0, 80.0, 160.0),
    ];
    for (x, y, bw, bh) in blocks {
        canvas.fill_rect(x, y, bw, bh, Color::rgba(30, 58, 95, 0.6));
        canvas.stroke_rect(x, y, bw, bh, 1.5, Color::rgba(37, 99, 235, 0.5));
    }

    canvas.fill(glow(
        v(w * 0.5, h * 0.4),
        w * 0.45,
        Color::rgba(37, 99, 235, 0.2),
    ));
}

pub(crate) fn geometric_dark(canvas: &mut Canvas) {
    let Vec2 { x: w, y: h } = canvas.size();
    canvas.fill(Color::hex(0x0a0a12));
    let haze = Color::rgba(91, 63, 160, 0.15);
    for (center, radius) in [
        (v(w * 0.3, h * 0.3), 160.0),
        (v(w * 0.65, h * 0.55), 200.0),
        (v(w * 0.45, h * 0.75), 140.0),
    ] {
        canvas.fill(glow(center, radius, haze));
    }

    let ink = Color::rgba(100, 80, 160, 0.2);
    let triangles = [
        [v(w * 0.2, h * 0.1), v(w * 0.8, h * 0.1), v(w * 0.5, h * 0.6)],
        [v(w * 0.1, h * 0.9), v(w * 0.9, h * 0.9), v(w * 0.5, h * 0.3)],
    ];
    for tri in triangles {
        canvas.stroke_path(&Path::polygon(&tri), 1.0, ink);
    }
}

pub(crate) fn mythology_red(canvas: &mut Canvas) {
    let Vec2 { x: w, y: h } = canvas.size();
    canvas.fill(Color::hex(0x1c0010));
    glow_stack(
        canvas,
        &[
            (v(w * 0.4, h * 0.35), Color::hex_alpha(0xdc262699)),
            (v(w * 0.6, h * 0.65), Color::hex_alpha(0x991b1b99)),
            (v(w * 0.25, h * 0.7), Color::hex_alpha(0x7f1d1d99)),
        ],
        w * 0.45,
    );

    let ink = Color::rgba(220, 38, 38, 0.3);
    for i in 0..5 {
        let y0 = h * (0.2 + i as f32 * 0.15);
        let mut path = Path::new();
        path.move_to(v(0.0, y0))
            .quad_to(v(w * 0.5, y0 - h * 0.1), v(w, y0 + h * 0.05));
        canvas.stroke_path(&path, 3.0, ink);
    }
}

pub(crate) fn mythology_dark(canvas: &mut Canvas) {
    let Vec2 { x: w, y: h } = canvas.size();
    canvas.fill(Color::hex(0x180c00));
    canvas.fill(glow(
        v(w * 0.5, h * 0.4),
        w * 0.5,
        Color::rgba(146, 64, 14, 0.4),
    ));

    let center = v(w * 0.5, h * 0.48);
    canvas.fill_path(
        &Path::ellipse(center, w * 0.18, h * 0.35),
        Color::rgba(30, 10, 0, 0.7),
    );

    let ink = Color::rgba(180, 100, 20, 0.2);
    for i in 0..8 {
        let angle = i as f32 / 8.0 * TAU;
        let (sin, cos) = angle.sin_cos();
        let from = center + v(cos * 40.0, sin * 50.0);
        let to = center + v(cos * w * 0.4, sin * h * 0.4);
        canvas.stroke_path(&Path::line(from, to), 1.0, ink);
    }
}

pub(crate) fn ai_portrait(canvas: &mut Canvas) {
    let Vec2 { x: w, y: h } = canvas.size();
    canvas.fill(Color::hex(0x120822));
    canvas.fill(
        Gradient::radial(v(w * 0.5, h * 0.42), 0.0, w * 0.38)
            .stop(0.0, Color::rgba(124, 58, 237, 0.5))
            .stop(0.5, Color::rgba(219, 39, 119, 0.2))
            .stop(1.0, Color::TRANSPARENT),
    );

    // Blocky latent-space noise on an 8px lattice.
    let noise = [
        Color::rgba(124, 58, 237, 0.08),
        Color::rgba(219, 39, 119, 0.06),
        Color::rgba(99, 102, 241, 0.07),
    ];
    for i in 0..240 {
        let fi = i as f32;
        let px = (((fi * 7.3).sin() * 0.5 + 0.5) * (w / 8.0)).floor() * 8.0;
        let py = (((fi * 5.1).cos() * 0.5 + 0.5) * (h / 8.0)).floor() * 8.0;
        canvas.fill_rect(px, py, 7.0, 7.0, noise[i % noise.len()]);
    }

    let scanline = Color::rgba(196, 136, 255, 0.08);
    for y in (0..h as u32).step_by(4) {
        let y = y as f32;
        canvas.stroke_path(&Path::line(v(0.0, y), v(w, y)), 1.0, scanline);
    }
}

pub(crate) fn glitch_art(canvas: &mut Canvas) {
    let Vec2 { x: w, y: h } = canvas.size();
    canvas.fill(Color::hex(0x08080f));
    let slices: [u32; 8] = [
        0x7c3aed, 0x2563eb, 0xdc2626, 0x059969, 0xd97706, 0xbe185d, 0x0891b2, 0x4338ca,
    ];
    let dim = |i: usize| Color::hex_alpha((slices[i % slices.len()] << 8) | 0x55);
    let bright = |i: usize| Color::hex_alpha((slices[i % slices.len()] << 8) | 0xcc);

    // Offset bands with heights and shifts from integer hashes of the band index.
    let mut y = 0u32;
    let mut si = 0usize;
    while (y as f32) < h {
        let slice_h = 8 + (si as u32 * 17 % 48);
        let offset = (si as i32 * 23 % 60) - 30;
        let band = (slice_h as f32).min(h - y as f32);
        canvas.fill_rect(offset as f32, y as f32, w, band, dim(si));
        y += slice_h + 2;
        si += 1;
    }

    for i in 0..6 {
        let by = i as f32 * h / 6.0 + (i * 31 % 30) as f32;
        canvas.fill_rect(0.0, by, w, 2.0, bright(i));
    }

    let grid = Color::rgba(255, 255, 255, 0.06);
    for x in (0..w as u32).step_by(16) {
        let x = x as f32;
        canvas.stroke_path(&Path::line(v(x, 0.0), v(x, h)), 0.5, grid);
    }
    for gy in (0..h as u32).step_by(16) {
        let gy = gy as f32;
        canvas.stroke_path(&Path::line(v(0.0, gy), v(w, gy)), 0.5, grid);
    }
}

struct Node {
    at: Vec2,
    radius: f32,
}

pub(crate) fn data_viz(canvas: &mut Canvas) {
    let Vec2 { x: w, y: h } = canvas.size();
    canvas.fill(Color::hex(0x030712));

    let nodes: Vec<Node> = (0..22)
        .map(|i| {
            let fi = i as f32;
            Node {
                at: v(
                    w * (0.1 + 0.8 * ((fi * 2.4).sin() * 0.5 + 0.5)),
                    h * (0.1 + 0.8 * ((fi * 1.7).cos() * 0.5 + 0.5)),
                ),
                radius: 3.0 + (i % 5) as f32,
            }
        })
        .collect();

    // Each node links to the next three.
    let edge = Color::rgba(99, 102, 241, 0.2);
    for (i, n) in nodes.iter().enumerate() {
        for m in nodes.iter().skip(i + 1).take(3) {
            canvas.stroke_path(&Path::line(n.at, m.at), 0.8, edge);
        }
    }

    for n in &nodes {
        let halo = n.radius * 4.0;
        canvas.fill_rect(
            n.at.x - halo,
            n.at.y - halo,
            halo * 2.0,
            halo * 2.0,
            glow(n.at, halo, Color::rgba(129, 140, 248, 0.6)),
        );
        canvas.fill_path(&Path::circle(n.at, n.radius), Color::hex(0x818cf8));
    }
}

pub(crate) fn textile_green(canvas: &mut Canvas) {
    let Vec2 { x: w, y: h } = canvas.size();
    canvas.fill(Color::hex(0x052e16));
    let threads = [
        Color::hex_alpha(0x16a34a99),
        Color::hex_alpha(0x15803d99),
        Color::hex_alpha(0x16653499),
        Color::hex_alpha(0x4ade8066),
        Color::hex_alpha(0x86efac44),
    ];
    let sw = 16;
    let centre = Affine2::from_translation(v(w / 2.0, h / 2.0));

    // Warp then weft: the same stripe set at +45 and -45 degrees.
    for (angle, shift) in [(FRAC_PI_4, 0), (-FRAC_PI_4, 2)] {
        canvas.set_transform(centre * Affine2::from_angle(angle));
        for i in (-(h as i32)..(w + h) as i32).step_by(sw * 2) {
            let band = (i.div_euclid(sw as i32 * 2)).unsigned_abs() as usize;
            canvas.fill_rect(
                i as f32 - w,
                -h,
                sw as f32,
                h * 3.0,
                threads[(band + shift) % threads.len()],
            );
        }
    }
    canvas.reset_transform();

    canvas.fill(glow(
        v(w * 0.5, h * 0.5),
        w * 0.4,
        Color::rgba(74, 222, 128, 0.1),
    ));
}

pub(crate) fn night_city(canvas: &mut Canvas) {
    let Vec2 { x: w, y: h } = canvas.size();
    canvas.fill(
        Gradient::linear(Vec2::ZERO, v(0.0, h))
            .stop(0.0, Color::hex(0x020614))
            .stop(1.0, Color::hex(0x0a1628)),
    );
    canvas.fill(glow(
        v(w * 0.75, h * 0.12),
        70.0,
        Color::rgba(200, 210, 255, 0.35),
    ));

    let skyline = [
        (0.0, h * 0.48, 75.0, h * 0.52),
        (65.0, h * 0.35, 65.0, h * 0.65),
        (120.0, h * 0.5, 85.0, h * 0.5),
        (195.0, h * 0.28, 75.0, h * 0.72),
        (258.0, h * 0.42, 55.0, h * 0.58),
        (302.0, h * 0.22, 105.0, h * 0.78),
        (394.0, h * 0.38, 62.0, h * 0.62),
        (444.0, h * 0.46, 70.0, h * 0.54),
    ];
    for (bx, by, bw, bh) in skyline {
        canvas.fill_rect(bx, by, bw, bh, Color::hex(0x050918));
        let mut wy = by + 10.0;
        while wy < h - 10.0 {
            let mut wx = bx + 6.0;
            while wx < bx + bw - 6.0 {
                if let Some(light) = window_light(wx, wy) {
                    canvas.fill_rect(wx, wy, 7.0, 8.0, light);
                }
                wx += 13.0;
            }
            wy += 15.0;
        }
    }
}

/// Lit-window colour from a coordinate hash, or `None` for a dark window.
fn window_light(wx: f32, wy: f32) -> Option<Color> {
    let seed = (wx * 31.0 + wy * 17.0) % 100.0;
    if seed <= 40.0 {
        return None;
    }
    let channel = |base: f32, spread: f32| (base + seed % spread).round().min(255.0) / 255.0;
    Some(Color {
        r: channel(200.0, 35.0),
        g: channel(150.0, 55.0),
        b: channel(60.0, 45.0),
        a: 0.5 + (seed % 40.0) / 100.0,
    })
}

pub(crate) fn golden_light(canvas: &mut Canvas) {
    let Vec2 { x: w, y: h } = canvas.size();
    let center = v(w * 0.5, h * 0.5);
    canvas.fill(Color::hex(0x1a0800));
    canvas.fill(
        Gradient::radial(center, 0.0, w * 0.52)
            .stop(0.0, Color::rgba(253, 224, 71, 0.9))
            .stop(0.12, Color::rgba(251, 191, 36, 0.6))
            .stop(0.35, Color::rgba(217, 119, 6, 0.3))
            .stop(1.0, Color::TRANSPARENT),
    );

    for i in 0..24 {
        let angle = i as f32 / 24.0 * TAU;
        let (sin, cos) = angle.sin_cos();
        let major = i % 3 == 0;
        let ray = Color::rgba(253, 224, 71, if major { 0.2 } else { 0.1 });
        let from = center + v(cos * 28.0, sin * 28.0);
        let to = center + v(cos * w * 0.75, sin * h * 0.75);
        canvas.stroke_path(&Path::line(from, to), if major { 2.0 } else { 1.0 }, ray);
    }

    canvas.fill(
        Gradient::radial(center, w * 0.3, w * 0.7)
            .stop(0.0, Color::TRANSPARENT)
            .stop(1.0, Color::rgba(146, 64, 14, 0.3)),
    );
}

pub(crate) fn fallback(canvas: &mut Canvas) {
    canvas.fill(crate::FALLBACK_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TEXTURE_HEIGHT, TEXTURE_WIDTH};

    fn painted(f: fn(&mut Canvas)) -> Canvas {
        let mut canvas = Canvas::new(TEXTURE_WIDTH, TEXTURE_HEIGHT);
        f(&mut canvas);
        canvas
    }

    fn fully_opaque(canvas: &Canvas) -> bool {
        canvas.image().pixels().all(|p| p[3] == 255)
    }

    #[test]
    fn fallback_is_flat() {
        let canvas = painted(fallback);
        let expected = crate::FALLBACK_COLOR.to_rgba8();
        assert!(canvas.image().pixels().all(|p| *p == expected));
    }

    #[test]
    fn lit_window_hash() {
        // 6*31 + 317.2*17 = 5578.4, so seed 78.4 lights the window.
        let lit = window_light(6.0, 317.2).unwrap();
        assert!(lit.r > 0.8 && lit.a > 0.85);
        // 10*31 + 10*17 = 480, seed 80.
        assert!(window_light(10.0, 10.0).is_some());
        // 1*31 + 0 = 31 stays dark.
        assert!(window_light(1.0, 0.0).is_none());
    }

    #[test]
    fn night_city_has_lit_windows_over_dark_buildings() {
        let canvas = painted(night_city);
        assert!(fully_opaque(&canvas));
        // First building starts at y = 307.2; its first lit window covers (8, 320).
        let window = canvas.pixel(8, 320);
        assert!(window[0] > 150, "window pixel {window:?}");
        // Gap between windows keeps the building colour.
        let wall = canvas.pixel(2, 500);
        assert!(wall[0] < 20, "wall pixel {wall:?}");
    }

    #[test]
    fn golden_light_is_brightest_in_the_centre() {
        let canvas = painted(golden_light);
        assert!(fully_opaque(&canvas));
        let centre = canvas.pixel(256, 320);
        let corner = canvas.pixel(0, 0);
        assert!(centre[0] > 200);
        assert!(centre[0] > corner[0]);
    }

    #[test]
    fn glitch_art_shifts_first_band() {
        let canvas = painted(glitch_art);
        // Band 0 is offset 30px left, so its right end leaves a gap.
        let tinted = canvas.pixel(10, 2);
        let gap = canvas.pixel(500, 2);
        assert_ne!(tinted, gap);
        assert!(fully_opaque(&canvas));
    }

    #[test]
    fn data_viz_draws_node_cores() {
        let canvas = painted(data_viz);
        // Node 0 sits at (0.5w, 0.9h) with radius 3.
        let core = canvas.pixel(256, 576);
        assert_eq!(core, Color::hex(0x818cf8).to_rgba8());
    }

    #[test]
    fn every_routine_paints_every_pixel() {
        let routines: [fn(&mut Canvas); 11] = [
            abstract_purple,
            abstract_blue,
            abstract_indigo,
            brutalist_blue,
            geometric_dark,
            mythology_red,
            mythology_dark,
            ai_portrait,
            textile_green,
            glitch_art,
            data_viz,
        ];
        for routine in routines {
            assert!(fully_opaque(&painted(routine)));
        }
    }
}
