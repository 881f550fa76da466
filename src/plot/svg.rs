//! SVG figures rendered with Plotters.
//!
//! Two figures are supported:
//! - memory vs atom count for every swept curve (log y axis)
//! - orbital wavefunctions or radial distributions vs r
//!
//! The SVG backend writes text as `<text>` elements, so no system fonts are
//! needed.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::domain::{CurveKind, OrbitalProfile, RadialQuantity, SweepRow};
use crate::error::AppError;

/// Figure size in pixels.
const FIGURE_SIZE: (u32, u32) = (1200, 800);

const LINE_WIDTH: u32 = 2;

fn palette(index: usize) -> RGBColor {
    const COLORS: [RGBColor; 6] = [
        RGBColor(31, 119, 180),  // blue
        RGBColor(44, 160, 44),   // green
        RGBColor(23, 190, 207),  // cyan
        RGBColor(214, 39, 40),   // red
        RGBColor(188, 23, 180),  // magenta
        RGBColor(255, 127, 14),  // orange
    ];
    COLORS[index % COLORS.len()]
}

/// Write the memory comparison figure.
pub fn write_sweep_svg(path: &Path, rows: &[SweepRow], curves: &[CurveKind]) -> Result<(), AppError> {
    let series: Vec<(&str, Vec<(f64, f64)>)> = curves
        .iter()
        .map(|&kind| {
            let points = rows
                .iter()
                .filter_map(|row| row.sample(kind).map(|s| (row.natoms, s.memory_mb)))
                .filter(|&(x, y)| x.is_finite() && y.is_finite() && y > 0.0)
                .collect();
            (kind.display_name(), points)
        })
        .collect();

    draw_sweep(path, &series).map_err(|e| render_error(path, e))?;
    info!(path = %path.display(), curves = curves.len(), "wrote sweep figure");
    Ok(())
}

/// Write the orbital comparison figure, restricted to `r <= r_view`.
pub fn write_orbital_svg(
    path: &Path,
    r: &[f64],
    profiles: &[OrbitalProfile],
    quantity: RadialQuantity,
    r_view: f64,
) -> Result<(), AppError> {
    let series: Vec<(&str, Vec<(f64, f64)>)> = profiles
        .iter()
        .map(|p| {
            let points = r
                .iter()
                .zip(p.values(quantity))
                .filter(|&(&ri, v)| ri <= r_view && v.is_finite())
                .map(|(&ri, &v)| (ri, v))
                .collect();
            (p.basis.display_name(), points)
        })
        .collect();

    draw_orbitals(path, &series, quantity, r_view).map_err(|e| render_error(path, e))?;
    info!(path = %path.display(), basis = profiles.len(), "wrote orbital figure");
    Ok(())
}

fn render_error(path: &Path, e: Box<dyn Error>) -> AppError {
    AppError::numeric(format!("Failed to render SVG '{}': {e}", path.display()))
}

fn bounds<'a>(series: impl Iterator<Item = &'a (f64, f64)>) -> Option<((f64, f64), (f64, f64))> {
    let mut x = (f64::INFINITY, f64::NEG_INFINITY);
    let mut y = (f64::INFINITY, f64::NEG_INFINITY);
    for &(px, py) in series {
        x = (x.0.min(px), x.1.max(px));
        y = (y.0.min(py), y.1.max(py));
    }
    (x.0 < x.1 && y.0 < y.1).then_some((x, y))
}

fn draw_sweep(path: &Path, series: &[(&str, Vec<(f64, f64)>)]) -> Result<(), Box<dyn Error>> {
    let ((x0, x1), (y0, y1)) = bounds(series.iter().flat_map(|(_, p)| p.iter()))
        .ok_or("no positive values to plot")?;

    let root = SVGBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Allocation memory comparison (log scale)", ("sans-serif", 32).into_font())
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(x0..x1, (y0 * 0.8..y1 * 1.25).log_scale())?;

    chart
        .configure_mesh()
        .x_desc("number of atoms")
        .y_desc("maxCP in MB (log scale)")
        .draw()?;

    for (i, (label, points)) in series.iter().enumerate() {
        let color = palette(i);
        chart
            .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(LINE_WIDTH)))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH)));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.9))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn draw_orbitals(
    path: &Path,
    series: &[(&str, Vec<(f64, f64)>)],
    quantity: RadialQuantity,
    r_view: f64,
) -> Result<(), Box<dyn Error>> {
    let (_, (y0, y1)) = bounds(series.iter().flat_map(|(_, p)| p.iter()))
        .ok_or("no values to plot")?;
    let pad = (y1 - y0) * 0.05;

    let (caption, y_desc) = match quantity {
        RadialQuantity::Wavefunction => ("STO vs GTOs (1s orbital)", "psi(r)"),
        RadialQuantity::Distribution => ("Radial distribution functions", "4 pi r^2 |psi(r)|^2"),
    };

    let root = SVGBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 32).into_font())
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(0.0..r_view, (y0 - pad).min(0.0)..y1 + pad)?;

    chart.configure_mesh().x_desc("r (bohr)").y_desc(y_desc).draw()?;

    for (i, (label, points)) in series.iter().enumerate() {
        let color = palette(i);
        chart
            .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(LINE_WIDTH)))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH)));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.9))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::{run_orbitals, run_sweep};
    use crate::domain::{OrbitalConfig, SweepConfig};

    #[test]
    fn sweep_figure_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memory.svg");
        let config = SweepConfig {
            points: 60,
            ..SweepConfig::default()
        };
        let out = run_sweep(&config).unwrap();
        write_sweep_svg(&path, &out.rows, &config.curves).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Function defined by parts"));
    }

    #[test]
    fn orbital_figure_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("radial.svg");
        let config = OrbitalConfig::default();
        let out = run_orbitals(&config).unwrap();
        write_orbital_svg(&path, &out.r, &out.profiles, RadialQuantity::Distribution, 6.0).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("6-31G"));
    }

    #[test]
    fn empty_sweep_is_a_numeric_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.svg");
        let err = write_sweep_svg(&path, &[], &[CurveKind::Smooth]).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }
}
