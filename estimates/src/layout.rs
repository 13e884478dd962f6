//! Grouping of speedups into chart series.
//!
//! A chart varies one [`Dimension`] along the x axis and draws one series per
//! combination of the other two: one of them picks the line colour, the other
//! the line style. [`ChartLayout::standard`] lists the three charts produced by
//! the `show` and `save` modes.

use crate::key::{Dimension, Point};
use crate::ratio::RatioTable;

/// Assignment of the three dimensions to chart roles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartLayout {
    /// Dimension along the (log-scaled) x axis
    pub x: Dimension,
    /// Dimension that selects the line colour
    pub color: Dimension,
    /// Dimension that selects the line style
    pub style: Dimension,
    pub x_label: String,
    pub legend_title: String,
    /// File name used when the chart is saved
    pub file_name: String,
}

impl ChartLayout {
    pub fn new(
        x: Dimension,
        color: Dimension,
        style: Dimension,
        x_label: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            x,
            color,
            style,
            x_label: x_label.into(),
            legend_title: format!("{color}, {style}"),
            file_name: file_name.into(),
        }
    }

    /// Speedup over the number of joined strings
    pub fn by_string_count() -> Self {
        Self::new(
            Dimension::StringCount,
            Dimension::SeparatorLength,
            Dimension::StringLength,
            "Number of Joined Strings",
            "speedup_n_strings.png",
        )
    }

    /// Speedup over the length of each joined string
    pub fn by_string_length() -> Self {
        Self::new(
            Dimension::StringLength,
            Dimension::SeparatorLength,
            Dimension::StringCount,
            "Length of Strings that are joined",
            "speedup_len_string.png",
        )
    }

    /// Speedup over the separator length
    pub fn by_separator_length() -> Self {
        Self::new(
            Dimension::SeparatorLength,
            Dimension::StringLength,
            Dimension::StringCount,
            "Separator Length",
            "speedup_len_separator.png",
        )
    }

    pub fn standard() -> [Self; 3] {
        [
            Self::by_string_count(),
            Self::by_string_length(),
            Self::by_separator_length(),
        ]
    }
}

/// One line of a chart
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Position of the colour value on its axis
    pub color_index: usize,
    /// Position of the style value on its axis
    pub style_index: usize,
    pub label: String,
    /// `(x, speedup)` in ascending x order
    pub points: Vec<(f64, f64)>,
}

/// Everything needed to draw one speedup chart
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub layout: ChartLayout,
    pub series: Vec<Series>,
}

impl Chart {
    /// Group the table's ratios according to `layout`
    pub fn build(table: &RatioTable, layout: &ChartLayout) -> Self {
        let axes = table.axes();
        let mut series = Vec::new();

        for (color_index, &color_value) in axes.values(layout.color).iter().enumerate() {
            for (style_index, &style_value) in axes.values(layout.style).iter().enumerate() {
                let base = Point::default()
                    .with(layout.color, color_value)
                    .with(layout.style, style_value);

                let points = axes
                    .values(layout.x)
                    .iter()
                    .filter_map(|&x| {
                        table
                            .ratio(base.with(layout.x, x))
                            .map(|ratio| (x as f64, ratio))
                    })
                    .collect();

                series.push(Series {
                    color_index,
                    style_index,
                    label: format!("{color_value:>4}, {style_value:>5}"),
                    points,
                });
            }
        }

        Self {
            layout: layout.clone(),
            series,
        }
    }

    /// Build the three standard charts
    pub fn standard(table: &RatioTable) -> Vec<Self> {
        ChartLayout::standard()
            .iter()
            .map(|layout| Self::build(table, layout))
            .collect()
    }
}
