//! SVG rendering of a layout: trimmed-rhombus outlines, gateways and stations.

use anyhow::Result;
use hexgen::geom::{trimmed_rhombus, Sector};
use hexgen::tiling::Layout;
use plotters::prelude::*;
use std::path::Path;

/// Longest image side in pixels.
const MAX_SIDE: u32 = 1024;

/// Pixel size preserving the area's aspect ratio.
fn image_size(xaxis: f64, yaxis: f64) -> (u32, u32) {
    if xaxis <= 0.0 || yaxis <= 0.0 {
        return (MAX_SIDE, MAX_SIDE);
    }
    let side = f64::from(MAX_SIDE);
    if xaxis >= yaxis {
        (MAX_SIDE, ((side * yaxis / xaxis).round() as u32).max(64))
    } else {
        (((side * xaxis / yaxis).round() as u32).max(64), MAX_SIDE)
    }
}

pub fn render_svg(path: &Path, layout: &Layout, radius: f64) -> Result<()> {
    let root = SVGBackend::new(path, image_size(layout.xaxis, layout.yaxis)).into_drawing_area();
    root.fill(&WHITE)?;

    // Gateways on the far lattice edges sit exactly on the border; pad so
    // their hexagons are not clipped away entirely.
    let pad = radius.max(0.0);
    let mut chart = ChartBuilder::on(&root)
        .margin(8)
        .build_cartesian_2d(-pad..layout.xaxis + pad, -pad..layout.yaxis + pad)?;

    chart.draw_series(std::iter::once(PathElement::new(
        vec![
            (0.0, 0.0),
            (layout.xaxis, 0.0),
            (layout.xaxis, layout.yaxis),
            (0.0, layout.yaxis),
            (0.0, 0.0),
        ],
        BLACK.stroke_width(1),
    )))?;

    if radius >= 2.0 {
        chart.draw_series(layout.gateways.iter().flat_map(|&g| {
            Sector::ALL.into_iter().map(move |s| {
                let outline = trimmed_rhombus(g, radius, s);
                PathElement::new(outline.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>(), BLUE)
            })
        }))?;
    }

    chart.draw_series(
        layout
            .stations
            .iter()
            .map(|p| Circle::new((p.x, p.y), 1, BLACK.filled())),
    )?;
    chart.draw_series(
        layout
            .gateways
            .iter()
            .map(|p| Circle::new((p.x, p.y), 4, RED.filled())),
    )?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexgen::tiling::{generate, TilingParams};
    use tempfile::tempdir;

    #[test]
    fn image_size_keeps_aspect() {
        assert_eq!(image_size(1000.0, 1000.0), (1024, 1024));
        assert_eq!(image_size(2000.0, 1000.0), (1024, 512));
        assert_eq!(image_size(1000.0, 2000.0), (512, 1024));
        assert_eq!(image_size(10_000.0, 10.0), (1024, 64));
    }

    #[test]
    fn writes_svg_with_gateways() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("layout.svg");
        let layout = generate(&TilingParams::default(), 1).unwrap();
        render_svg(&path, &layout, 100.0).unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.starts_with("<svg") || svg.starts_with("<?xml"));
        assert!(svg.contains("<circle"));
        assert!(svg.contains("<polyline") || svg.contains("<path"));
    }
}
