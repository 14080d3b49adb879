//! ASCII/Unicode plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! The x axis is inverse wavelength (um^-1), matching the usual presentation
//! of extinction laws. Plot elements:
//! - central law: `-` line
//! - 1-sigma band edges: `.` lines

use crate::domain::LawSample;

/// Render the law and its band.
pub fn render_ascii_plot(samples: &[LawSample], width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let central: Vec<(f64, f64)> = samples.iter().map(|s| (s.inverse_wavelength(), s.a_lambda)).collect();
    let upper: Vec<(f64, f64)> = samples.iter().map(|s| (s.inverse_wavelength(), s.upper())).collect();
    let lower: Vec<(f64, f64)> = samples.iter().map(|s| (s.inverse_wavelength(), s.lower())).collect();

    let (x_min, x_max) = x_range(&central).unwrap_or((0.45, 1.25));
    let (y_min, y_max) = y_range(&upper, &lower).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Central law first, so band edges never overwrite it.
    draw_curve(&mut grid, &central, x_min, x_max, y_min, y_max, '-');
    draw_curve(&mut grid, &upper, x_min, x_max, y_min, y_max, '.');
    draw_curve(&mut grid, &lower, x_min, x_max, y_min, y_max, '.');

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: 1/lambda=[{x_min:.3}, {x_max:.3}] um^-1 | A=[{y_min:.2}, {y_max:.2}] mag\n"
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn x_range(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    for &(x, _) in points {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
    }
    if min_x.is_finite() && max_x.is_finite() && max_x > min_x {
        Some((min_x, max_x))
    } else {
        None
    }
}

fn y_range(upper: &[(f64, f64)], lower: &[(f64, f64)]) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for &(_, y) in upper.iter().chain(lower.iter()) {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
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
    curve: &[(f64, f64)],
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    ch: char,
) {
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in curve {
        let xx = map_x(x, x_min, x_max, width);
        let yy = map_y(y, y_min, y_max, height);
        match prev {
            Some((x0, y0)) => draw_line(grid, x0, y0, xx, yy, ch),
            None if grid[yy][xx] == ' ' => grid[yy][xx] = ch,
            None => {}
        }
        prev = Some((xx, yy));
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

    #[test]
    fn plot_golden_snapshot_small() {
        let samples = [
            LawSample {
                wavelength_um: 1.0,
                a_lambda: 1.0,
                error: 0.0,
            },
            LawSample {
                wavelength_um: 0.5,
                a_lambda: 2.0,
                error: 0.0,
            },
        ];

        let txt = render_ascii_plot(&samples, 10, 5);
        let expected = concat!(
            "Plot: 1/lambda=[1.000, 2.000] um^-1 | A=[0.95, 2.05] mag\n",
            "        --\n",
            "      --  \n",
            "    --    \n",
            "  --      \n",
            "--        \n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn band_edges_are_drawn_around_law() {
        let samples: Vec<LawSample> = [0.9, 1.2, 1.6, 2.1]
            .iter()
            .map(|&w| LawSample {
                wavelength_um: w,
                a_lambda: 3.0 / w,
                error: 0.3,
            })
            .collect();

        let txt = render_ascii_plot(&samples, 40, 20);
        assert!(txt.contains('-'));
        assert!(txt.contains('.'));
        assert_eq!(txt.lines().count(), 21);
    }

    #[test]
    fn empty_input_renders_blank_grid() {
        let txt = render_ascii_plot(&[], 10, 5);
        assert_eq!(txt.lines().count(), 6);
        assert!(txt.lines().skip(1).all(|row| row.trim().is_empty()));
    }
}
