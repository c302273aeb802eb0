use plotters::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("drawing error: {0}")]
    Drawing(String),
    #[error("no fluents to plot")]
    Empty,
}

pub type Result<T> = std::result::Result<T, PlotError>;

/// Renders active and inactive fluent counts over time as an SVG line
/// chart, one point per time step of the union timeline.
pub fn render_counts(out: impl AsRef<Path>, counts: &BTreeMap<i32, (usize, usize)>) -> Result<()> {
    let (t_min, t_max) = match (counts.keys().next(), counts.keys().last()) {
        (Some(lo), Some(hi)) => (*lo, *hi),
        _ => return Err(PlotError::Empty),
    };
    let y_max = counts
        .values()
        .map(|(active, inactive)| *active.max(inactive))
        .max()
        .unwrap_or(0);

    let root = SVGBackend::new(out.as_ref(), (640, 480)).into_drawing_area();
    root.fill(&WHITE).map_err(to_drawing_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("active and inactive fluents over time", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(t_min..t_max + 1, 0..y_max + 1)
        .map_err(to_drawing_error)?;

    chart
        .configure_mesh()
        .x_desc("time step")
        .y_desc("count")
        .draw()
        .map_err(to_drawing_error)?;

    chart
        .draw_series(LineSeries::new(
            counts.iter().map(|(t, (active, _))| (*t, *active)),
            &RED,
        ))
        .map_err(to_drawing_error)?
        .label("active fluents")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .draw_series(LineSeries::new(
            counts.iter().map(|(t, (_, inactive))| (*t, *inactive)),
            &BLUE,
        ))
        .map_err(to_drawing_error)?
        .label("inactive fluents")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .draw()
        .map_err(to_drawing_error)?;

    root.present().map_err(to_drawing_error)?;
    log::debug!("wrote chart to {:?}", out.as_ref());

    Ok(())
}

fn to_drawing_error<E: std::error::Error>(err: E) -> PlotError {
    PlotError::Drawing(err.to_string())
}
