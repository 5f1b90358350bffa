use glam::{IVec2, Vec2};
use image::{Rgba, RgbaImage};

use crate::view::{RayHandles, ViewState};

pub const BACKGROUND_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const GRID_LINE_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const TRAVERSED_COLOR: Rgba<u8> = Rgba([48, 48, 48, 255]);
pub const RAY_OUTLINE_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const RAY_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const START_HANDLE_COLOR: Rgba<u8> = Rgba([200, 0, 0, 255]);
pub const END_HANDLE_COLOR: Rgba<u8> = Rgba([0, 0, 200, 255]);

const RAY_OUTLINE_WIDTH: f32 = 3.0;
const RAY_WIDTH: f32 = 1.0;

/// Render the grid, the traversed `cells` and the ray handles at viewport size.
///
/// Layers are drawn back to front: background, grid lines, traversed cells,
/// the ray segment and finally the start (red) and end (blue) handles.
pub fn render_scene(view: &ViewState, handles: &RayHandles, cells: &[IVec2]) -> RgbaImage {
    let size = view.viewport();
    let mut img = RgbaImage::from_pixel(size.x.max(1), size.y.max(1), BACKGROUND_COLOR);

    draw_grid_lines(&mut img, view);
    for &cell in cells {
        fill_cell(&mut img, view, cell, TRAVERSED_COLOR);
    }

    draw_segment(&mut img, handles.start, handles.end, RAY_OUTLINE_WIDTH, RAY_OUTLINE_COLOR);
    draw_segment(&mut img, handles.start, handles.end, RAY_WIDTH, RAY_COLOR);
    fill_circle(&mut img, handles.start, handles.radius, START_HANDLE_COLOR);
    fill_circle(&mut img, handles.end, handles.radius, END_HANDLE_COLOR);

    img
}

/// Copy an image into an RGBA frame buffer of the same dimensions.
///
/// Returns false, leaving `frame` untouched, if the sizes differ.
pub fn blit_to_frame(img: &RgbaImage, frame: &mut [u8]) -> bool {
    let raw = img.as_raw();
    if raw.len() != frame.len() {
        return false;
    }
    frame.copy_from_slice(raw);
    true
}

fn draw_grid_lines(img: &mut RgbaImage, view: &ViewState) {
    let size = view.cell_size() as i32;
    let dims = view.grid_dims().as_ivec2();
    let offset = view.offset();

    let extent = dims * size;
    for i in 0..=dims.x {
        let x = i * size + offset.x;
        for y in 0..extent.y {
            put_clipped(img, x, y, GRID_LINE_COLOR);
        }
    }
    for i in 0..=dims.y {
        let y = i * size + offset.y;
        for x in 0..extent.x {
            put_clipped(img, x, y, GRID_LINE_COLOR);
        }
    }
}

fn fill_cell(img: &mut RgbaImage, view: &ViewState, cell: IVec2, color: Rgba<u8>) {
    let size = view.cell_size() as i32;
    let corner = view.cell_to_pixel(cell);
    fill_rect(img, corner, corner + IVec2::splat(size), color);
}

/// Fill `[min, max)` clipped to the image.
fn fill_rect(img: &mut RgbaImage, min: IVec2, max: IVec2, color: Rgba<u8>) {
    let x0 = min.x.max(0);
    let y0 = min.y.max(0);
    let x1 = max.x.min(img.width() as i32);
    let y1 = max.y.min(img.height() as i32);
    for y in y0..y1 {
        for x in x0..x1 {
            img.put_pixel(x as u32, y as u32, color);
        }
    }
}

/// Stamp `width`-sized squares along the segment every half pixel.
fn draw_segment(img: &mut RgbaImage, a: Vec2, b: Vec2, width: f32, color: Rgba<u8>) {
    let samples = (a.distance(b) * 2.0).ceil().max(1.0) as u32;
    let half = (width / 2.0).max(0.5);
    for i in 0..=samples {
        let p = a.lerp(b, i as f32 / samples as f32);
        let min = (p - Vec2::splat(half)).round().as_ivec2();
        let max = (p + Vec2::splat(half)).round().as_ivec2();
        fill_rect(img, min, max, color);
    }
}

fn fill_circle(img: &mut RgbaImage, center: Vec2, radius: f32, color: Rgba<u8>) {
    let min = (center - Vec2::splat(radius)).floor().as_ivec2();
    let max = (center + Vec2::splat(radius)).ceil().as_ivec2();
    let radius_sq = radius * radius;
    for y in min.y..=max.y {
        for x in min.x..=max.x {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            if p.distance_squared(center) <= radius_sq {
                put_clipped(img, x, y, color);
            }
        }
    }
}

#[inline]
fn put_clipped(img: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}
