//! The four comparison panels and the text page, drawn with [`plotters`]

use std::fmt::Display;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::report::density::{box_stats, density_histograms, ecdf_points, kde_curve};
use crate::report::error::ReportErr;
use crate::sample::types::Sample;

pub(crate) type Area<'a> = DrawingArea<SVGBackend<'a>, Shift>;

const COLOR_A: RGBColor = BLUE;
const COLOR_B: RGBColor = RED;
const PLOT_BINS: usize = 40;
const ECDF_POINTS: usize = 400;
const KDE_POINTS: usize = 300;
const LINE_HEIGHT: i32 = 20;

fn chart_err<E: Display>(e: E) -> ReportErr {
    ReportErr::ChartConfig(e.to_string())
}

fn draw_err<E: Display>(e: E) -> ReportErr {
    ReportErr::Drawing(e.to_string())
}

/// Shared value range of both samples with a small margin
fn value_range(a: &Sample, b: &Sample) -> (f64, f64) {
    let lo = a.min().min(b.min());
    let hi = a.max().max(b.max());
    let pad = if hi > lo { (hi - lo) * 0.05 } else { 1.0 };
    (lo - pad, hi + pad)
}

pub(crate) fn draw_text_page(area: &Area, lines: &[String]) -> Result<(), ReportErr> {
    let style: TextStyle = ("monospace", 15).into_font().into();
    for (i, line) in lines.iter().enumerate() {
        area.draw_text(line, &style, (40, 40 + i as i32 * LINE_HEIGHT))
            .map_err(draw_err)?;
    }
    Ok(())
}

pub(crate) fn draw_histograms(
    area: &Area,
    a: &Sample,
    b: &Sample,
    caption: &str,
) -> Result<(), ReportErr> {
    let (density_a, density_b) = density_histograms(a, b, PLOT_BINS);
    let (lo, hi) = value_range(a, b);
    let y_max = density_a
        .iter()
        .chain(&density_b)
        .map(|bar| bar.2)
        .fold(0.0, f64::max)
        * 1.1;

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(60)
        .build_cartesian_2d(lo..hi, 0.0..y_max.max(f64::EPSILON))
        .map_err(chart_err)?;
    chart
        .configure_mesh()
        .x_desc("value")
        .y_desc("density")
        .draw()
        .map_err(draw_err)?;

    for (bars, label, color) in [
        (&density_a, a.label(), COLOR_A),
        (&density_b, b.label(), COLOR_B),
    ] {
        chart
            .draw_series(bars.iter().map(|&(left, right, height)| {
                Rectangle::new([(left, 0.0), (right, height)], color.mix(0.35).filled())
            }))
            .map_err(draw_err)?
            .label(label)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled()));
    }
    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(draw_err)?;
    Ok(())
}

pub(crate) fn draw_boxplots(
    area: &Area,
    a: &Sample,
    b: &Sample,
    caption: &str,
) -> Result<(), ReportErr> {
    let (lo, hi) = value_range(a, b);
    let labels = [a.label().to_string(), b.label().to_string()];

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..3.0, lo..hi)
        .map_err(chart_err)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(4)
        .x_label_formatter(&|x: &f64| {
            if (x - 1.0).abs() < 1e-6 {
                labels[0].clone()
            } else if (x - 2.0).abs() < 1e-6 {
                labels[1].clone()
            } else {
                String::new()
            }
        })
        .y_desc("value")
        .draw()
        .map_err(draw_err)?;

    for (x, sample, color) in [(1.0, a, COLOR_A), (2.0, b, COLOR_B)] {
        let s = box_stats(sample);
        chart
            .draw_series([
                Rectangle::new([(x - 0.25, s.q1), (x + 0.25, s.q3)], color.mix(0.3).filled()),
                Rectangle::new([(x - 0.25, s.q1), (x + 0.25, s.q3)], color.stroke_width(2)),
            ])
            .map_err(draw_err)?;
        chart
            .draw_series([
                PathElement::new(
                    vec![(x - 0.25, s.median), (x + 0.25, s.median)],
                    BLACK.stroke_width(2),
                ),
                PathElement::new(vec![(x, s.q3), (x, s.whisker_high)], color.stroke_width(1)),
                PathElement::new(vec![(x, s.q1), (x, s.whisker_low)], color.stroke_width(1)),
                PathElement::new(
                    vec![(x - 0.1, s.whisker_high), (x + 0.1, s.whisker_high)],
                    color.stroke_width(1),
                ),
                PathElement::new(
                    vec![(x - 0.1, s.whisker_low), (x + 0.1, s.whisker_low)],
                    color.stroke_width(1),
                ),
            ])
            .map_err(draw_err)?;
    }
    Ok(())
}

pub(crate) fn draw_ecdfs(
    area: &Area,
    a: &Sample,
    b: &Sample,
    caption: &str,
) -> Result<(), ReportErr> {
    let (lo, hi) = value_range(a, b);
    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(60)
        .build_cartesian_2d(lo..hi, 0.0..1.0)
        .map_err(chart_err)?;
    chart
        .configure_mesh()
        .x_desc("value")
        .y_desc("cumulative probability")
        .draw()
        .map_err(draw_err)?;

    for (sample, color) in [(a, COLOR_A), (b, COLOR_B)] {
        let points = ecdf_points(&sample.sorted(), ECDF_POINTS);
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))
            .map_err(draw_err)?
            .label(sample.label())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 12, y)], color.stroke_width(2)));
    }
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(draw_err)?;
    Ok(())
}

pub(crate) fn draw_kdes(
    area: &Area,
    a: &Sample,
    b: &Sample,
    caption: &str,
) -> Result<(), ReportErr> {
    let (lo, hi) = value_range(a, b);
    let curve_a = kde_curve(a, lo, hi, KDE_POINTS);
    let curve_b = kde_curve(b, lo, hi, KDE_POINTS);
    let y_max = curve_a
        .iter()
        .chain(&curve_b)
        .map(|p| p.1)
        .fold(0.0, f64::max)
        * 1.1;

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(60)
        .build_cartesian_2d(lo..hi, 0.0..y_max.max(f64::EPSILON))
        .map_err(chart_err)?;
    chart
        .configure_mesh()
        .x_desc("value")
        .y_desc("density")
        .draw()
        .map_err(draw_err)?;

    for (curve, label, color) in [(curve_a, a.label(), COLOR_A), (curve_b, b.label(), COLOR_B)] {
        chart
            .draw_series(LineSeries::new(curve, color.stroke_width(2)))
            .map_err(draw_err)?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 12, y)], color.stroke_width(2)));
    }
    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(draw_err)?;
    Ok(())
}
