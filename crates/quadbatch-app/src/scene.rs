//! Demo scene drawn through the immediate-mode API.
//!
//! Shapes check the buffer limit after `begin`, once any alignment padding
//! for the previous draw call has been written.

use quadbatch_common::{Color, TextureId};
use quadbatch_core::{
    BatchContext, BlendMode, DrawMode, GraphicsBackend, MatrixMode, PixelCodec, PixelFormat,
    StandardCodec,
};

const CHECKER_SIZE: u32 = 8;
const CIRCLE_SEGMENTS: usize = 36;

/// Build an 8x8 two-tone checkerboard and upload it.
pub fn load_checker<B: GraphicsBackend>(ctx: &mut BatchContext<B>) -> TextureId {
    let light = Color::from_hex("#e0e0e0").unwrap_or(Color::WHITE);
    let dark = Color::from_hex("#303030").unwrap_or(Color::BLACK);

    let pixels: Vec<Color> = (0..CHECKER_SIZE * CHECKER_SIZE)
        .map(|i| {
            let (x, y) = (i % CHECKER_SIZE, i / CHECKER_SIZE);
            if (x + y) % 2 == 0 {
                light
            } else {
                dark
            }
        })
        .collect();

    let bytes = StandardCodec.encode(&pixels, PixelFormat::R8G8B8A8);
    ctx.load_texture(&bytes, CHECKER_SIZE, CHECKER_SIZE, PixelFormat::R8G8B8A8)
}

/// Screen-space projection with the origin at the top-left corner.
pub fn setup_ortho<B: GraphicsBackend>(ctx: &mut BatchContext<B>, width: u32, height: u32) {
    ctx.matrix_mode(MatrixMode::Projection);
    ctx.load_identity();
    ctx.ortho(0.0, width as f64, height as f64, 0.0, -1.0, 1.0);
    ctx.matrix_mode(MatrixMode::Modelview);
    ctx.load_identity();
}

pub fn draw_rect<B: GraphicsBackend>(
    ctx: &mut BatchContext<B>,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    color: Color,
) {
    ctx.begin(DrawMode::Quads);
    ctx.check_render_batch_limit(4);
    ctx.color4ub(color.r, color.g, color.b, color.a);
    ctx.vertex2f(x, y);
    ctx.vertex2f(x, y + h);
    ctx.vertex2f(x + w, y + h);
    ctx.vertex2f(x + w, y);
    ctx.end();
}

pub fn draw_textured_rect<B: GraphicsBackend>(
    ctx: &mut BatchContext<B>,
    texture: TextureId,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
) {
    ctx.enable_texture(texture);
    ctx.begin(DrawMode::Quads);
    ctx.check_render_batch_limit(4);
    ctx.color4ub(255, 255, 255, 255);
    ctx.tex_coord2f(0.0, 0.0);
    ctx.vertex2f(x, y);
    ctx.tex_coord2f(0.0, 1.0);
    ctx.vertex2f(x, y + h);
    ctx.tex_coord2f(1.0, 1.0);
    ctx.vertex2f(x + w, y + h);
    ctx.tex_coord2f(1.0, 0.0);
    ctx.vertex2f(x + w, y);
    ctx.end();
    ctx.disable_texture();
}

pub fn draw_triangle<B: GraphicsBackend>(
    ctx: &mut BatchContext<B>,
    points: [[f32; 2]; 3],
    color: Color,
) {
    ctx.begin(DrawMode::Triangles);
    ctx.check_render_batch_limit(3);
    ctx.color4ub(color.r, color.g, color.b, color.a);
    for [x, y] in points {
        ctx.vertex2f(x, y);
    }
    ctx.end();
}

pub fn draw_line<B: GraphicsBackend>(
    ctx: &mut BatchContext<B>,
    from: [f32; 2],
    to: [f32; 2],
    color: Color,
) {
    ctx.begin(DrawMode::Lines);
    ctx.check_render_batch_limit(2);
    ctx.color4ub(color.r, color.g, color.b, color.a);
    ctx.vertex2f(from[0], from[1]);
    ctx.vertex2f(to[0], to[1]);
    ctx.end();
}

/// Filled circle as a triangle fan unrolled into a triangle list.
pub fn draw_circle<B: GraphicsBackend>(
    ctx: &mut BatchContext<B>,
    center: [f32; 2],
    radius: f32,
    color: Color,
) {
    let step = std::f32::consts::TAU / CIRCLE_SEGMENTS as f32;

    ctx.begin(DrawMode::Triangles);
    ctx.check_render_batch_limit(3 * CIRCLE_SEGMENTS);
    ctx.color4ub(color.r, color.g, color.b, color.a);
    for i in 0..CIRCLE_SEGMENTS {
        let a0 = i as f32 * step;
        let a1 = a0 + step;
        ctx.vertex2f(center[0], center[1]);
        ctx.vertex2f(center[0] + a1.cos() * radius, center[1] + a1.sin() * radius);
        ctx.vertex2f(center[0] + a0.cos() * radius, center[1] + a0.sin() * radius);
    }
    ctx.end();
}

/// Draw one demo frame and flush it. `frame` drives the animation.
pub fn draw_frame<B: GraphicsBackend>(
    ctx: &mut BatchContext<B>,
    checker: TextureId,
    frame: u32,
) {
    let viewport = ctx.viewport();
    let (w, h) = (viewport.width as f32, viewport.height as f32);
    setup_ortho(ctx, viewport.width, viewport.height);

    draw_rect(ctx, 0.0, 0.0, w, h * 0.1, Color::from_rgba(40, 44, 52, 255));
    draw_rect(ctx, 0.0, h * 0.9, w, h * 0.1, Color::from_rgba(40, 44, 52, 255));

    draw_textured_rect(ctx, checker, w * 0.05, h * 0.2, w * 0.25, h * 0.25);

    draw_triangle(
        ctx,
        [[w * 0.45, h * 0.45], [w * 0.55, h * 0.2], [w * 0.65, h * 0.45]],
        Color::from_rgba(230, 41, 55, 255),
    );

    for i in 0..8 {
        let y = h * 0.55 + i as f32 * 6.0;
        draw_line(ctx, [w * 0.05, y], [w * 0.3, y], Color::from_rgba(0, 121, 241, 255));
    }

    draw_circle(ctx, [w * 0.8, h * 0.3], h * 0.12, Color::from_rgba(0, 228, 48, 255));

    // Spinning square around its own center.
    ctx.push_matrix();
    ctx.translate(w * 0.5, h * 0.7, 0.0);
    ctx.rotate(frame as f32 * 15.0, 0.0, 0.0, 1.0);
    draw_rect(ctx, -20.0, -20.0, 40.0, 40.0, Color::from_rgba(253, 249, 0, 255));
    ctx.pop_matrix();

    ctx.set_blend_mode(BlendMode::Additive);
    for i in 0..3 {
        let x = w * 0.7 + i as f32 * 20.0;
        draw_rect(ctx, x, h * 0.6, 40.0, 40.0, Color::from_rgba(120, 60, 200, 160));
    }
    ctx.set_blend_mode(BlendMode::Alpha);

    ctx.draw_render_batch();
}
