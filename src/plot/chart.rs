//! Plotters-powered chart of the extinction law.
//!
//! The chart shows `A_lambda / A_Ks` (or `A_lambda` for `A_Ks != 1`) against
//! inverse wavelength with a shaded 1-sigma band, plus the photometric band
//! names at their approximate positions. It renders to SVG so no native font
//! stack is required.

use std::path::Path;

use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::domain::LawSample;
use crate::error::{AppError, EXIT_INPUT, EXIT_RENDER};

/// Default output file for `extlaw plot`.
pub const DEFAULT_CHART_FILE: &str = "extlaw_H17.svg";

/// Chart size in pixels.
const CHART_SIZE: (u32, u32) = (800, 800);

/// Photometric bands annotated along the x axis (inverse microns).
const BAND_LABELS: [(f64, &str); 5] = [
    (0.46, "Ks"),
    (0.61, "F160W"),
    (0.75, "F125W"),
    (1.01, "Y"),
    (1.12, "F814W"),
];

/// Render the chart as an SVG document.
pub fn render_svg(samples: &[LawSample]) -> Result<String, AppError> {
    let bounds = chart_bounds(samples)?;
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        draw_chart(&root, samples, bounds)
            .map_err(|e| AppError::new(EXIT_RENDER, format!("Failed to render chart: {e}")))?;
        root.present()
            .map_err(|e| AppError::new(EXIT_RENDER, format!("Failed to render chart: {e}")))?;
    }
    Ok(svg)
}

/// Render the chart and write it to `path`.
pub fn write_svg(path: &Path, samples: &[LawSample]) -> Result<(), AppError> {
    let svg = render_svg(samples)?;
    std::fs::write(path, svg).map_err(|e| {
        AppError::new(EXIT_INPUT, format!("Failed to write chart '{}': {e}", path.display()))
    })?;
    info!("wrote chart to {}", path.display());
    Ok(())
}

#[derive(Debug, Clone, Copy)]
struct Bounds {
    x: (f64, f64),
    y: (f64, f64),
}

fn chart_bounds(samples: &[LawSample]) -> Result<Bounds, AppError> {
    let mut x = (f64::INFINITY, f64::NEG_INFINITY);
    let mut y = (f64::INFINITY, f64::NEG_INFINITY);
    for s in samples {
        let inv = s.inverse_wavelength();
        x = (x.0.min(inv), x.1.max(inv));
        y = (y.0.min(s.lower()), y.1.max(s.upper()));
    }

    let finite = x.0.is_finite() && x.1.is_finite() && y.0.is_finite() && y.1.is_finite();
    if !finite || x.1 <= x.0 || y.1 <= y.0 {
        return Err(AppError::new(
            EXIT_INPUT,
            "Nothing to plot: need at least two distinct finite samples.",
        ));
    }

    let x_pad = (x.1 - x.0) * 0.05;
    let y_pad = (y.1 - y.0) * 0.05;
    Ok(Bounds {
        x: (x.0 - x_pad, x.1 + x_pad),
        y: (y.0 - y_pad, y.1 + y_pad),
    })
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    samples: &[LawSample],
    bounds: Bounds,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let (x0, x1) = bounds.x;
    let (y0, y1) = bounds.y;

    let mut chart = ChartBuilder::on(root)
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, 60)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("1 / lambda (um^-1)")
        .y_desc("A_lambda / A_Ks")
        .axis_desc_style(("sans-serif", 24))
        .label_style(("sans-serif", 14))
        .draw()?;

    let band_color = RED.mix(0.3);

    // The band polygon runs along the upper edge and back along the lower one.
    let mut band: Vec<(f64, f64)> = samples
        .iter()
        .map(|s| (s.inverse_wavelength(), s.upper()))
        .collect();
    band.extend(samples.iter().rev().map(|s| (s.inverse_wavelength(), s.lower())));

    chart
        .draw_series(std::iter::once(Polygon::new(band, band_color.filled())))?
        .label("1-sigma")
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], band_color.filled()));

    chart
        .draw_series(LineSeries::new(
            samples.iter().map(|s| (s.inverse_wavelength(), s.a_lambda)),
            RED.stroke_width(2),
        ))?
        .label("Wd1+RC")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    let label_y = y0 + (y1 - y0) * 0.03;
    chart.draw_series(
        BAND_LABELS
            .iter()
            .filter(|(x, _)| (x0..=x1).contains(x))
            .map(|&(x, name)| Text::new(name, (x, label_y), ("sans-serif", 14).into_font())),
    )?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<LawSample> {
        [0.8, 1.2, 1.6, 2.2]
            .iter()
            .map(|&w| LawSample {
                wavelength_um: w,
                a_lambda: 2.0 / w,
                error: 0.1,
            })
            .collect()
    }

    #[test]
    fn renders_svg_document() {
        let svg = render_svg(&samples()).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Wd1+RC"));
        assert!(svg.contains("F160W"));
    }

    #[test]
    fn rejects_degenerate_input() {
        assert!(render_svg(&[]).is_err());
        assert!(render_svg(&samples()[..1]).is_err());
    }
}
