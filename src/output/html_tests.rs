use super::*;
use crate::chart::{ChartOverrides, DataPoint, SvgOptions};
use crate::multiples::{MultiplesOptions, SmallMultipleEntry, SmallMultiples};

fn sample() -> SmallMultiples {
    let entries = vec![
        SmallMultipleEntry::new("North", vec![DataPoint::new("q1", 3.0)]),
        SmallMultipleEntry::new("South", vec![DataPoint::new("q2", 1200.0)]),
    ];
    SmallMultiples::prepare(entries, &MultiplesOptions::default()).unwrap()
}

fn report<'a>(
    multiples: &'a SmallMultiples,
    chart: &'a ChartOverrides,
    svg: &'a SvgOptions,
) -> Report<'a> {
    Report {
        multiples,
        chart,
        svg,
        title: None,
        grand_total: None,
    }
}

#[test]
fn html_heading_with_grand_total() {
    let multiples = sample();
    let (chart, svg) = (ChartOverrides::default(), SvgOptions::default());
    let report = Report {
        title: Some("Sales & returns"),
        grand_total: Some(1203.0),
        ..report(&multiples, &chart, &svg)
    };

    let output = HtmlFormatter.format(&report).unwrap();
    assert!(output.starts_with(
        "<h2 style=\"font-family: Arial\">Sales &amp; returns (1.2k)</h2>\n<style>"
    ));
    assert_eq!(output.matches("<svg ").count(), 2);
}

#[test]
fn html_without_title_has_no_heading() {
    let multiples = sample();
    let (chart, svg) = (ChartOverrides::default(), SvgOptions::default());

    let output = HtmlFormatter.format(&report(&multiples, &chart, &svg)).unwrap();
    assert!(!output.contains("<h2"));
    assert!(output.starts_with("<style>"));
}

#[test]
fn html_total_without_title() {
    let multiples = sample();
    let (chart, svg) = (ChartOverrides::default(), SvgOptions::default());
    let report = Report {
        grand_total: Some(42.0),
        ..report(&multiples, &chart, &svg)
    };

    let output = HtmlFormatter.format(&report).unwrap();
    assert!(output.starts_with("<h2 style=\"font-family: Arial\">(42)</h2>"));
}

#[test]
fn svg_format_skips_heading() {
    let multiples = sample();
    let (chart, svg) = (ChartOverrides::default(), SvgOptions::default());
    let report = Report {
        title: Some("Ignored"),
        ..report(&multiples, &chart, &svg)
    };

    let output = SvgFormatter.format(&report).unwrap();
    assert!(output.starts_with("<style>"));
    assert!(!output.contains("Ignored"));
}
