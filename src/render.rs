use anyhow::{Context, Result};
use log::info;
use pattern_common::{DisplayConfig, GridStyle, LineStyle, PatternError, SampleSeries};
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::Path;

const LEGEND_LABEL: &str = "Interference Pattern";

/// Draws the sample series as a continuous curve with the area to the zero
/// baseline shaded, plus axis labels, legend and optional grid, and writes
/// the chart to `path` as a PNG image.
///
/// The drawing surface is scoped to this call: it is acquired, drawn on and
/// presented before returning, so no plotting state survives between calls.
pub fn render(series: &SampleSeries, display: &DisplayConfig, path: &Path) -> Result<()> {
    if series.is_empty() {
        return Err(PatternError::InvalidInput(
            "cannot render an empty sample series".to_string(),
        )
        .into());
    }
    display.validate()?;

    let samples = series.samples();
    // Positions are strictly increasing, so the bounds are the endpoints.
    let x_min = samples[0].0;
    let x_max = samples[samples.len() - 1].0;
    let y_max = series.max_intensity();
    let y_top = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };

    let root = BitMapBackend::new(path, (display.width_px, display.height_px)).into_drawing_area();
    root.fill(&WHITE).context("Failed to clear drawing surface")?;

    let mut chart = ChartBuilder::on(&root)
        .caption(display.title.as_str(), ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..y_top)
        .context("Failed to build chart coordinate system")?;

    let grid_color = BLACK.mix(0.25 * display.grid_alpha);

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(display.x_label.as_str())
        .y_desc(display.y_label.as_str());
    if display.show_grid && display.grid_style == GridStyle::Solid {
        mesh.light_line_style(grid_color);
    } else {
        // Dashed grids are drawn manually below; the built-in mesh only
        // supports solid lines.
        mesh.disable_mesh();
    }
    mesh.draw().context("Failed to draw chart mesh")?;

    if display.show_grid && display.grid_style == GridStyle::Dashed {
        let grid_style = grid_color.stroke_width(1);
        let x_step = (x_max - x_min) / 10.0;
        for i in 1..10 {
            let x = x_min + x_step * f64::from(i);
            chart
                .draw_series(DashedLineSeries::new(
                    [(x, 0.0), (x, y_top)],
                    6,
                    4,
                    grid_style,
                ))
                .context("Failed to draw grid line")?;
        }
        let y_step = y_top / 5.0;
        for i in 1..5 {
            let y = y_step * f64::from(i);
            chart
                .draw_series(DashedLineSeries::new(
                    [(x_min, y), (x_max, y)],
                    6,
                    4,
                    grid_style,
                ))
                .context("Failed to draw grid line")?;
        }
    }

    chart
        .draw_series(AreaSeries::new(
            samples.iter().copied(),
            0.0,
            BLUE.mix(display.fill_alpha),
        ))
        .context("Failed to draw filled area")?;

    let curve_style = BLUE.stroke_width(2);
    match display.line_style {
        LineStyle::Solid => {
            chart
                .draw_series(LineSeries::new(samples.iter().copied(), curve_style))
                .context("Failed to draw pattern curve")?
                .label(LEGEND_LABEL)
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], curve_style)
                });
        }
        LineStyle::Dashed => {
            chart
                .draw_series(DashedLineSeries::new(
                    samples.iter().copied(),
                    8,
                    5,
                    curve_style,
                ))
                .context("Failed to draw pattern curve")?
                .label(LEGEND_LABEL)
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], curve_style)
                });
        }
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()
        .context("Failed to draw legend")?;

    root.present().context("Failed to present the rendered chart")?;

    info!("Rendered {} samples to {}", samples.len(), path.display());
    Ok(())
}
