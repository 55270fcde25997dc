//! Chart sinks
//!
//! A [`ChartSink`] turns a titled [`ChartSeries`] into some artifact: an
//! image, a terminal drawing, a file. Image renderers live outside this
//! crate; [`TextBarChart`] draws horizontal bars with plain characters.

use crate::pipeline::artifacts::ChartSeries;

/// Consumer of labelled numeric data.
pub trait ChartSink {
    type Output;
    type Error;

    fn render(&mut self, title: &str, series: &ChartSeries) -> Result<Self::Output, Self::Error>;
}

/// Horizontal bar chart drawn with `#` characters.
#[derive(Debug, Clone)]
pub struct TextBarChart {
    /// Bar length of the largest value
    pub width: usize,
    pub bar: char,
}

impl Default for TextBarChart {
    fn default() -> Self {
        Self { width: 40, bar: '#' }
    }
}

impl TextBarChart {
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

impl ChartSink for TextBarChart {
    type Output = String;
    type Error = std::convert::Infallible;

    fn render(&mut self, title: &str, series: &ChartSeries) -> Result<String, Self::Error> {
        let mut out = format!("{title}\n");
        if series.is_empty() {
            out.push_str("(no data)\n");
            return Ok(out);
        }

        let label_width = series
            .labels
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);
        let max = series.max_value();

        for (label, value) in series.iter() {
            let len = if max > 0.0 {
                ((value / max) * self.width as f64).round() as usize
            } else {
                0
            };
            let bar: String = std::iter::repeat(self.bar).take(len).collect();
            out.push_str(&format!("{label:>label_width$} | {bar} {value}\n"));
        }
        Ok(out)
    }
}
