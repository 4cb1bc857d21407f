//! Tests for SVG module exports.

use super::*;

#[test]
fn exports_are_available() {
    let _: ChartColor = ChartColor::value("#000");
    let _: TextAnchor = TextAnchor::Middle;
    let _: SvgBuilder = SvgBuilder::new(1.0, 1.0);
    let _: Text = Text::new("ctitle", 0.0, 0.0, "t");
}

#[test]
fn text_element_inside_svg() {
    let mut builder = SvgBuilder::new(50.0, 20.0);
    builder.push_element(&Text::new("ctitle", 25.0, 12.0, "Sales"));
    let svg = builder.build();

    assert!(svg.contains(r#"<text class="ctitle" x="25" y="12">Sales</text>"#));
}
