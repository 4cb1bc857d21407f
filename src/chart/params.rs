//! Chart parameters and typed partial overrides.
//!
//! All dimensions are abstract units. With the default chart height of 100,
//! every other dimension reads as a percentage of the plotting area's height.

use serde::{Deserialize, Serialize};

use crate::output::svg::ChartColor;

/// Default margin around the chart.
pub const DEFAULT_MARGIN: f64 = 12.0;

/// Border drawn around the whole chart.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Border {
    /// No border
    None,
    /// Border as wide as the chart's stroke width
    #[default]
    Stroke,
    /// Border with an explicit stroke width
    Width(f64),
}

impl Border {
    /// Resolved border stroke width, `None` when no border is drawn.
    #[must_use]
    pub const fn stroke_width(self, chart_stroke_width: f64) -> Option<f64> {
        match self {
            Self::None => None,
            Self::Stroke => Some(chart_stroke_width),
            Self::Width(w) => Some(w),
        }
    }
}

/// Complete parameter set of one bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartParameters {
    // Vertical increments, top to bottom
    pub top_margin: f64,
    /// Height of one chart title line
    pub title_height: f64,
    /// Height of the plotting area; data is scaled to exactly this height
    pub chart_height: f64,
    pub x_tick_height: f64,
    /// Gap between the X axis (or tick ends) and the first label line
    pub x_label_margin: f64,
    /// Gap between X axis labels and the X axis title
    pub x_title_margin: f64,
    pub bottom_margin: f64,

    // Horizontal increments, left to right
    pub left_margin: f64,
    pub y_label_width: f64,
    /// Gap between Y axis labels and the start of tick lines
    pub y_label_margin: f64,
    pub y_tick_width: f64,
    /// Plotting area width; derived from bar count when absent
    pub chart_width: Option<f64>,
    pub right_margin: f64,

    // Titles and preset line counts
    pub title: Option<String>,
    pub title_lines: Option<usize>,
    pub x_axis_title: Option<String>,
    pub x_axis_title_lines: Option<usize>,
    pub y_axis_title: Option<String>,
    pub y_axis_title_lines: Option<usize>,
    pub x_label_lines: Option<usize>,

    // Fonts
    pub title_font_family: String,
    pub axis_label_font_family: String,

    // Strokes and label sizes
    pub stroke_width: f64,
    /// Height of one line of Y axis labels and axis titles
    pub axis_label_height: f64,
    pub axis_tick_thickness: f64,

    // Colors
    /// "Chart ink": axes, ticks, labels
    pub chart_color: ChartColor,
    /// "Data ink": bars and the chart title
    pub data_color: ChartColor,

    // Bar sizing
    /// Maximum plotting width as a multiple of chart height
    pub max_aspect: f64,
    pub preferred_bar_width: Option<f64>,
    /// Gap between bars as a fraction of bar width
    pub bar_spacing: f64,
    pub border: Border,
}

impl Default for ChartParameters {
    fn default() -> Self {
        Self {
            top_margin: DEFAULT_MARGIN,
            title_height: 10.0,
            chart_height: 100.0,
            x_tick_height: 0.0,
            x_label_margin: 1.0,
            x_title_margin: 5.0,
            bottom_margin: 0.0,

            left_margin: DEFAULT_MARGIN,
            y_label_width: 10.0,
            y_label_margin: 2.0,
            y_tick_width: 2.0,
            chart_width: None,
            right_margin: DEFAULT_MARGIN,

            title: None,
            title_lines: None,
            x_axis_title: None,
            x_axis_title_lines: None,
            y_axis_title: None,
            y_axis_title_lines: None,
            x_label_lines: None,

            title_font_family: "Arial".to_string(),
            axis_label_font_family: "Arial".to_string(),

            stroke_width: 0.75,
            axis_label_height: 5.0,
            axis_tick_thickness: 0.2,

            chart_color: ChartColor::value("black"),
            data_color: ChartColor::value("#0099ff"),

            max_aspect: 4.0,
            preferred_bar_width: Some(10.0),
            bar_spacing: 0.75,
            border: Border::Stroke,
        }
    }
}

impl ChartParameters {
    /// Parameters with `overrides` applied on top of the defaults.
    #[must_use]
    pub fn with_overrides(overrides: &ChartOverrides) -> Self {
        let mut params = Self::default();
        overrides.apply(&mut params);
        params
    }
}

/// Declares `ChartOverrides` with one optional field per overridable
/// parameter, plus the field-by-field `apply` and `layered` operations.
///
/// `value` fields replace a plain parameter; `optional` fields set an
/// `Option` parameter to `Some`.
macro_rules! chart_overrides {
    (
        value { $($v:ident: $vt:ty),* $(,)? }
        optional { $($o:ident: $ot:ty),* $(,)? }
    ) => {
        /// Partial chart parameters. `None` leaves the parameter untouched.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct ChartOverrides {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $v: Option<$vt>,
            )*
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $o: Option<$ot>,
            )*
        }

        impl ChartOverrides {
            /// Write every set field into `params`.
            pub fn apply(&self, params: &mut ChartParameters) {
                $(
                    if let Some(v) = &self.$v {
                        params.$v = v.clone();
                    }
                )*
                $(
                    if let Some(v) = &self.$o {
                        params.$o = Some(v.clone());
                    }
                )*
            }

            /// Combine two layers; fields set in `top` win.
            #[must_use]
            pub fn layered(&self, top: &Self) -> Self {
                Self {
                    $($v: top.$v.clone().or_else(|| self.$v.clone()),)*
                    $($o: top.$o.clone().or_else(|| self.$o.clone()),)*
                }
            }
        }
    };
}

chart_overrides! {
    value {
        top_margin: f64,
        title_height: f64,
        chart_height: f64,
        x_tick_height: f64,
        x_label_margin: f64,
        x_title_margin: f64,
        bottom_margin: f64,
        left_margin: f64,
        y_label_width: f64,
        y_label_margin: f64,
        y_tick_width: f64,
        right_margin: f64,
        title_font_family: String,
        axis_label_font_family: String,
        stroke_width: f64,
        axis_label_height: f64,
        axis_tick_thickness: f64,
        chart_color: ChartColor,
        data_color: ChartColor,
        max_aspect: f64,
        bar_spacing: f64,
        border: Border,
    }
    optional {
        chart_width: f64,
        preferred_bar_width: f64,
        title: String,
        x_axis_title: String,
        y_axis_title: String,
    }
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;
