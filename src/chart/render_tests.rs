use super::*;
use crate::chart::data::DataPoint;
use crate::chart::params::{Border, ChartParameters};

fn titled() -> ChartParameters {
    ChartParameters {
        title: Some("Totals".to_string()),
        ..Default::default()
    }
}

fn two_points() -> Vec<DataPoint> {
    vec![DataPoint::new("a", 4.0), DataPoint::absent("b")]
}

#[test]
fn svg_has_natural_viewbox() {
    let params = titled();
    let data = two_points();
    let chart = BarChart::new(&params, &data);

    let svg = chart.render_svg(&SvgOptions::default()).unwrap();
    assert!(svg.starts_with(
        r#"<svg viewBox="0 0 80.5 133" preserveAspectRatio="xMinYMin" width="80.5" height="133""#
    ));
    assert!(svg.ends_with("</svg>\n"));
}

#[test]
fn absent_value_keeps_label_but_no_rect() {
    let params = titled();
    let data = two_points();
    let chart = BarChart::new(&params, &data);

    let svg = chart.render_svg(&SvgOptions::default()).unwrap();
    assert!(svg.contains(
        r##"<rect x="33.5" y="22" width="10" height="100" fill="#0099ff" stroke="black" stroke-width="0.75" />"##
    ));
    assert!(svg.contains(r#"<text class="xaxlabel" x="56" y="128">b</text>"#));
    // border plus the single bar
    assert_eq!(svg.matches("<rect").count(), 2);
}

#[test]
fn border_is_inset_by_half_stroke() {
    let params = titled();
    let data = two_points();
    let chart = BarChart::new(&params, &data);

    let svg = chart.render_svg(&SvgOptions::default()).unwrap();
    assert!(svg.contains(
        r#"<rect x="0.375" y="0.375" width="79.75" height="132.25" fill="none" stroke="black" stroke-width="0.75" />"#
    ));
}

#[test]
fn no_border_when_disabled() {
    let params = ChartParameters {
        border: Border::None,
        ..titled()
    };
    let data = two_points();
    let chart = BarChart::new(&params, &data);

    let svg = chart.render_svg(&SvgOptions::default()).unwrap();
    assert!(!svg.contains(r#"fill="none""#));
}

#[test]
fn title_uses_data_color() {
    let params = titled();
    let data = two_points();
    let chart = BarChart::new(&params, &data);

    let svg = chart.render_svg(&SvgOptions::default()).unwrap();
    assert!(svg.contains(r##"<text class="ctitle" x="47.25" y="12" fill="#0099ff">Totals</text>"##));
}

#[test]
fn multi_line_label_steps_down() {
    let params = ChartParameters::default();
    let data = vec![DataPoint::new("North\nEast", 2.0)];
    let chart = BarChart::new(&params, &data);

    let svg = chart.render_svg(&SvgOptions::default()).unwrap();
    let north = svg.find(">North</text>").unwrap();
    let east = svg.find(">East</text>").unwrap();
    assert!(north < east);
}

#[test]
fn elements_in_drawing_order() {
    let params = ChartParameters {
        y_axis_title: Some("Units".to_string()),
        ..titled()
    };
    let data = two_points();
    let chart = BarChart::new(&params, &data);

    let svg = chart.render_svg(&SvgOptions::default()).unwrap();
    let position = |needle: &str| svg.find(needle).unwrap();
    assert!(position(r#"fill="none""#) < position(r#"class="ctitle""#));
    assert!(position(r#"class="ctitle""#) < position(">Units</text>"));
    assert!(position(">Units</text>") < position(r#"class="axis""#));
    assert!(position(r#"class="axis""#) < position(r##"fill="#0099ff" stroke"##));
    assert!(position(r#"class="xaxlabel""#) < position(r#"class="tick""#));
}

#[test]
fn ticks_render_label_and_line() {
    let params = ChartParameters::default();
    let data = vec![DataPoint::new("a", 3.0)];
    let chart = BarChart::new(&params, &data);

    let svg = chart.render_svg(&SvgOptions::default()).unwrap();
    assert_eq!(svg.matches(r#"class="tick""#).count(), 3);
    assert!(svg.contains(">3</text>"));
}

#[test]
fn scale_multiplies_display_size() {
    let params = titled();
    let data = two_points();
    let chart = BarChart::new(&params, &data);
    let options = SvgOptions {
        scale: Some(2.0),
        ..Default::default()
    };

    let svg = chart.render_svg(&options).unwrap();
    assert!(svg.contains(r#"viewBox="0 0 80.5 133""#));
    assert!(svg.contains(r#"width="161" height="266""#));
}

#[test]
fn explicit_size_wins_over_scale() {
    let options = SvgOptions {
        width: Some(300.0),
        scale: Some(2.0),
        preserve_aspect_ratio: None,
        ..Default::default()
    };
    assert_eq!(options.display_size(100.0, 50.0), (300.0, 100.0));
}

#[test]
fn style_sizes_fonts_from_params() {
    let params = ChartParameters::default();
    let data = two_points();
    let chart = BarChart::new(&params, &data);

    let style = chart.render_style().unwrap();
    assert!(style.starts_with("<style>"));
    assert!(style.contains(".ctitle"));
    assert!(style.contains("font-size: 10"));
}

#[test]
fn render_fails_without_sizing_inputs() {
    let params = ChartParameters {
        preferred_bar_width: None,
        ..Default::default()
    };
    let data = two_points();
    let chart = BarChart::new(&params, &data);

    assert!(chart.render_svg(&SvgOptions::default()).is_err());
}
