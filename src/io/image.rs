//! PNG rendering of hats
//!
//! Lattice points become Cartesian points with `x + y/2` across and
//! `y·√3/2` up. Each hat is filled by scanline and then outlined.

use crate::hat::Hat;
use crate::io::configuration::{
    HAT_COLOURS, IMAGE_MARGIN, MAX_IMAGE_DIMENSION, OUTLINE_COLOUR, REVERSED_HAT_COLOUR,
};
use crate::io::error::{Result, TilingError, invalid_parameter};
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

#[derive(Debug, Clone, Copy)]
struct Extent {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

// Cartesian extent of every hat vertex
fn calculate_extent(hats: &[Hat]) -> Option<Extent> {
    let mut points = hats
        .iter()
        .flat_map(Hat::vertices)
        .map(crate::lattice::Point::to_cartesian);
    let (x0, y0) = points.next()?;
    let seed = Extent {
        min_x: x0,
        max_x: x0,
        min_y: y0,
        max_y: y0,
    };
    Some(points.fold(seed, |e, (x, y)| Extent {
        min_x: e.min_x.min(x),
        max_x: e.max_x.max(x),
        min_y: e.min_y.min(y),
        max_y: e.max_y.max(y),
    }))
}

fn hat_colour(hat: &Hat) -> Rgba<u8> {
    if hat.reversed {
        Rgba(REVERSED_HAT_COLOUR)
    } else {
        Rgba(
            HAT_COLOURS
                .get(hat.parent_kind.index())
                .copied()
                .unwrap_or(REVERSED_HAT_COLOUR),
        )
    }
}

fn set_pixel(img: &mut RgbaImage, x: i64, y: i64, colour: Rgba<u8>) {
    let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
        return;
    };
    if let Some(pixel) = img.get_pixel_mut_checked(x, y) {
        *pixel = colour;
    }
}

// Even-odd scanline fill sampling each pixel at its centre
fn fill_polygon(img: &mut RgbaImage, polygon: &[(f64, f64)], colour: Rgba<u8>) {
    let Some(top) = polygon.iter().map(|p| p.1).reduce(f64::min) else {
        return;
    };
    let bottom = polygon.iter().map(|p| p.1).fold(top, f64::max);

    let mut crossings = Vec::with_capacity(polygon.len());
    for row in (top.floor() as i64)..=(bottom.ceil() as i64) {
        let yc = row as f64 + 0.5;
        crossings.clear();

        let edges = polygon.iter().zip(polygon.iter().cycle().skip(1));
        for (&(ax, ay), &(bx, by)) in edges {
            if (ay <= yc) != (by <= yc) {
                crossings.push(ax + (yc - ay) * (bx - ax) / (by - ay));
            }
        }
        crossings.sort_by(f64::total_cmp);

        for span in crossings.chunks_exact(2) {
            if let [x0, x1] = span {
                let first = (x0 - 0.5).ceil() as i64;
                let last = (x1 - 0.5).ceil() as i64;
                for col in first..last {
                    set_pixel(img, col, row, colour);
                }
            }
        }
    }
}

fn draw_outline(img: &mut RgbaImage, polygon: &[(f64, f64)], colour: Rgba<u8>) {
    let edges = polygon.iter().zip(polygon.iter().cycle().skip(1));
    for (&(ax, ay), &(bx, by)) in edges {
        let steps = (bx - ax).abs().max((by - ay).abs()).ceil().max(1.0) as i64;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let x = (bx - ax).mul_add(t, ax);
            let y = (by - ay).mul_add(t, ay);
            set_pixel(img, x.floor() as i64, y.floor() as i64, colour);
        }
    }
}

/// Render hats into an image with `scale` pixels per lattice unit
///
/// # Errors
///
/// Returns an error if there are no hats, or if the image would exceed
/// [`MAX_IMAGE_DIMENSION`] on either side.
pub fn render_hats(hats: &[Hat], scale: u32) -> Result<RgbaImage> {
    let extent = calculate_extent(hats)
        .ok_or_else(|| invalid_parameter("hats", &0, &"at least one hat is required"))?;

    let scale = f64::from(scale);
    let margin = f64::from(IMAGE_MARGIN);
    let width = (extent.max_x - extent.min_x).mul_add(scale, 2.0 * margin).ceil() as u64 + 1;
    let height = (extent.max_y - extent.min_y).mul_add(scale, 2.0 * margin).ceil() as u64 + 1;
    if width > u64::from(MAX_IMAGE_DIMENSION) || height > u64::from(MAX_IMAGE_DIMENSION) {
        return Err(invalid_parameter(
            "scale",
            &scale,
            &format!("image would be {width}x{height}, above {MAX_IMAGE_DIMENSION} pixels"),
        ));
    }

    let mut img: RgbaImage = ImageBuffer::new(width as u32, height as u32);
    let outline = Rgba(OUTLINE_COLOUR);

    for hat in hats {
        let polygon: Vec<(f64, f64)> = hat
            .vertices()
            .iter()
            .map(|v| {
                let (x, y) = v.to_cartesian();
                (
                    (x - extent.min_x).mul_add(scale, margin),
                    (extent.max_y - y).mul_add(scale, margin),
                )
            })
            .collect();
        fill_polygon(&mut img, &polygon, hat_colour(hat));
        draw_outline(&mut img, &polygon, outline);
    }

    Ok(img)
}

/// Render hats and save them as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - Rendering fails (see [`render_hats`])
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_hats_as_png(hats: &[Hat], scale: u32, output_path: &Path) -> Result<()> {
    let img = render_hats(hats, scale)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| TilingError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path)
        .map_err(|e| TilingError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
