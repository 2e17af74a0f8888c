use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::analysis::types::AnalysisReport;
use crate::error::DistCompareErr;
use crate::report::error::ReportErr;
use crate::report::plots::{draw_boxplots, draw_ecdfs, draw_histograms, draw_kdes, draw_text_page};
use crate::report::summary::{comparison_annotation, summary_lines};
use crate::sample::types::Sample;

pub const PAGE_WIDTH: u32 = 1400;
pub const PAGE_HEIGHT: u32 = 1000;

/// Renders the report as one SVG of two stacked pages: the text summary,
/// then a 2 x 2 figure of histogram, boxplot, empirical CDF and KDE.
pub fn render_svg(a: &Sample, b: &Sample, report: &AnalysisReport) -> Result<String, DistCompareErr> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (PAGE_WIDTH, 2 * PAGE_HEIGHT))
            .into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| ReportErr::DrawingArea(e.to_string()))?;
        let (text_page, figure_page) = root.split_vertically(PAGE_HEIGHT);

        //----------------------------------------
        // Page 1: summary
        draw_text_page(&text_page, &summary_lines(report))?;

        //----------------------------------------
        // Page 2: figure
        let figure_page = figure_page
            .titled(
                &format!("{} vs {}", a.label(), b.label()),
                ("sans-serif", 26),
            )
            .map_err(|e| ReportErr::DrawingArea(e.to_string()))?;
        let panels = figure_page.split_evenly((2, 2));
        let annotation = comparison_annotation(report);
        draw_histograms(&panels[0], a, b, &format!("Histogram, {annotation}"))?;
        draw_boxplots(&panels[1], a, b, "Boxplot")?;
        draw_ecdfs(
            &panels[2],
            a,
            b,
            &format!("Empirical CDF, KS p = {:.3e}", report.ks.p_value),
        )?;
        draw_kdes(&panels[3], a, b, "Kernel density estimate")?;

        let page_break = PAGE_HEIGHT as i32;
        root.draw(&PathElement::new(
            vec![(0, page_break), (PAGE_WIDTH as i32, page_break)],
            BLACK.stroke_width(1),
        ))
        .map_err(|e| ReportErr::Drawing(e.to_string()))?;
        root.present()
            .map_err(|e| ReportErr::Drawing(e.to_string()))?;
    }
    Ok(svg)
}

/// Renders the report in memory and writes it to `path`. The file is only
/// created once rendering has fully succeeded.
pub fn write_report(
    path: &Path,
    a: &Sample,
    b: &Sample,
    report: &AnalysisReport,
) -> Result<(), DistCompareErr> {
    let svg = render_svg(a, b, report)?;
    std::fs::write(path, svg)
        .map_err(|e| ReportErr::Write(format!("{}: {e}", path.display())))?;
    info!(path = %path.display(), "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::run::analyze;
    use crate::analysis::types::AnalysisSettings;
    use crate::scenario::Scenario;
    use rand::{SeedableRng, rngs};

    fn report_for(scenario: Scenario) -> (Sample, Sample, AnalysisReport) {
        let mut rng = rngs::StdRng::seed_from_u64(42);
        let (a, b) = scenario.generate(3_000, &mut rng).unwrap();
        let report = analyze(&a, &b, &AnalysisSettings::default(), &mut rng).unwrap();
        (a, b, report)
    }

    #[test]
    fn writes_svg_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.svg");
        let (a, b, report) = report_for(Scenario::NormalVsGamma);
        write_report(&path, &a, &b, &report).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Distribution comparison report"));
        assert!(svg.contains("Kernel density estimate"));
        assert_eq!(svg, render_svg(&a, &b, &report).unwrap());
    }

    #[test]
    fn rendered_svg_is_complete() {
        let (a, b, report) = report_for(Scenario::SameNormal);
        let svg = render_svg(&a, &b, &report).unwrap();
        assert!(svg.trim_start().starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn failed_write_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("report.svg");
        let (a, b, report) = report_for(Scenario::SameNormal);
        match write_report(&path, &a, &b, &report) {
            Err(DistCompareErr::Report(ReportErr::Write(msg))) => {
                assert!(msg.contains("report.svg"));
            }
            _ => panic!(),
        }
        assert!(!path.exists());
        assert!(!dir.path().join("no_such_dir").exists());
    }
}
