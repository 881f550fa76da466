//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Each series is drawn as a polyline with its own glyph. Series drawn earlier
//! win where lines overlap. A legend follows the grid.

use crate::domain::{CurveKind, OrbitalProfile, RadialQuantity, SweepRow};

/// Vertical axis scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YScale {
    Linear,
    /// `log10(y)`; non-positive values are dropped.
    Log,
}

/// One labelled polyline.
#[derive(Debug, Clone)]
pub struct Series {
    pub label: String,
    pub glyph: char,
    pub points: Vec<(f64, f64)>,
}

/// Plot the memory curves of a sweep (log scale, as in the thesis figure).
pub fn render_sweep_plot(rows: &[SweepRow], curves: &[CurveKind], width: usize, height: usize) -> String {
    let series: Vec<Series> = curves
        .iter()
        .map(|&kind| Series {
            label: kind.display_name().to_string(),
            glyph: kind.glyph(),
            points: rows
                .iter()
                .filter_map(|row| row.sample(kind).map(|s| (row.natoms, s.memory_mb)))
                .collect(),
        })
        .collect();
    render_ascii_plot(&series, width, height, YScale::Log)
}

/// Plot orbital profiles up to `r_view` bohr.
pub fn render_orbital_plot(
    r: &[f64],
    profiles: &[OrbitalProfile],
    quantity: RadialQuantity,
    r_view: f64,
    width: usize,
    height: usize,
) -> String {
    let series: Vec<Series> = profiles
        .iter()
        .map(|p| Series {
            label: p.basis.display_name().to_string(),
            glyph: p.basis.glyph(),
            points: r
                .iter()
                .zip(p.values(quantity))
                .filter(|&(&ri, _)| ri <= r_view)
                .map(|(&ri, &v)| (ri, v))
                .collect(),
        })
        .collect();
    render_ascii_plot(&series, width, height, YScale::Linear)
}

/// Render labelled series on a `width × height` character grid.
pub fn render_ascii_plot(series: &[Series], width: usize, height: usize, scale: YScale) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let transformed: Vec<Vec<(f64, f64)>> = series
        .iter()
        .map(|s| s.points.iter().filter_map(|&p| transform(p, scale)).collect())
        .collect();

    let (x_min, x_max) = range(transformed.iter().flatten().map(|p| p.0)).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = range(transformed.iter().flatten().map(|p| p.1)).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];
    for (s, points) in series.iter().zip(&transformed) {
        draw_curve(&mut grid, points, s.glyph, (x_min, x_max), (y_min, y_max));
    }

    let mut out = String::new();
    match scale {
        YScale::Linear => out.push_str(&format!(
            "Plot: x=[{x_min:.3}, {x_max:.3}] | y=[{y_min:.2}, {y_max:.2}]\n"
        )),
        YScale::Log => out.push_str(&format!(
            "Plot: x=[{x_min:.3}, {x_max:.3}] | y=[{:.3e}, {:.3e}] (log)\n",
            10f64.powf(y_min),
            10f64.powf(y_max)
        )),
    }

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }
    for s in series {
        out.push_str(&format!("  {} {}\n", s.glyph, s.label));
    }

    out
}

fn transform((x, y): (f64, f64), scale: YScale) -> Option<(f64, f64)> {
    if !(x.is_finite() && y.is_finite()) {
        return None;
    }
    match scale {
        YScale::Linear => Some((x, y)),
        YScale::Log if y > 0.0 => Some((x, y.log10())),
        YScale::Log => None,
    }
}

fn range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() && max > min {
        Some((min, max))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(
    grid: &mut [Vec<char>],
    points: &[(f64, f64)],
    glyph: char,
    (x_min, x_max): (f64, f64),
    (y_min, y_max): (f64, f64),
) {
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in points {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        match prev {
            Some((c0, r0)) => draw_line(grid, c0, r0, col, row, glyph),
            None if grid[row][col] == ' ' => grid[row][col] = glyph,
            None => {}
        }
        prev = Some((col, row));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CurveSample;

    fn series(label: &str, glyph: char, points: &[(f64, f64)]) -> Series {
        Series {
            label: label.to_string(),
            glyph,
            points: points.to_vec(),
        }
    }

    #[test]
    fn plot_golden_snapshot_linear() {
        let txt = render_ascii_plot(
            &[
                series("rising", '*', &[(0.0, 0.0), (9.0, 9.0)]),
                series("flat", 'o', &[(0.0, 9.0), (9.0, 9.0)]),
            ],
            10,
            5,
            YScale::Linear,
        );
        let expected = concat!(
            "Plot: x=[0.000, 9.000] | y=[-0.45, 9.45]\n",
            "oooooooo**\n",
            "      **  \n",
            "    **    \n",
            "  **      \n",
            "**        \n",
            "  * rising\n",
            "  o flat\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn log_scale_drops_non_positive_values() {
        let txt = render_ascii_plot(
            &[series("decades", '*', &[(1.0, 1.0), (2.0, 10.0), (3.0, 100.0), (4.0, -5.0)])],
            10,
            5,
            YScale::Log,
        );
        let expected = concat!(
            "Plot: x=[1.000, 3.000] | y=[7.943e-1, 1.259e2] (log)\n",
            "        **\n",
            "      **  \n",
            "    **    \n",
            "  **      \n",
            "**        \n",
            "  * decades\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn sweep_plot_lists_every_curve() {
        let rows: Vec<SweepRow> = (1..=20)
            .map(|i| {
                let n = i as f64;
                SweepRow {
                    natoms: n,
                    samples: vec![
                        CurveSample {
                            kind: CurveKind::Linear,
                            units: 256.0 * n,
                            memory_mb: CurveKind::Linear.memory_mb(256.0 * n),
                        },
                        CurveSample {
                            kind: CurveKind::Theoretical,
                            units: n * n - 23.0,
                            memory_mb: CurveKind::Theoretical.memory_mb(n * n - 23.0),
                        },
                    ],
                }
            })
            .collect();
        let txt = render_sweep_plot(&rows, &[CurveKind::Linear, CurveKind::Theoretical], 40, 10);
        assert!(txt.starts_with("Plot: x=[1.000, 20.000]"));
        assert!(txt.contains("  L Original implementation\n"));
        assert!(txt.contains("  T Limit of maxCP\n"));
        assert!(txt.contains('L') && txt.lines().skip(1).take(10).any(|l| l.contains('T')));
    }

    #[test]
    fn empty_input_still_renders_frame() {
        let txt = render_ascii_plot(&[], 12, 6, YScale::Linear);
        assert_eq!(txt.lines().count(), 7);
    }
}
