//! Calendar-date bar chart rendering

use crate::aggregator::ClimatologySeries;
use crate::calendar::{CalendarSlot, YEAR_SLOTS};
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;
use warnclimo_common::{ClimoError, Result};

/// Chart geometry and styling
#[derive(Debug, Clone)]
pub struct ChartStyle {
    /// Chart width in pixels
    pub width: u32,
    /// Chart height in pixels
    pub height: u32,
    /// Fixed y-axis maximum; counts above it are clamped to the axis
    pub y_max: u32,
    /// One x-axis label roughly every this many slots
    pub label_interval: usize,
    /// Bar fill color
    pub bar_color: RGBColor,
    /// Chart background color
    pub background: RGBColor,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            y_max: 300,
            label_interval: 30,
            bar_color: BLACK,
            background: WHITE,
        }
    }
}

/// Bar chart of one climatology series over the fixed 366-slot calendar
#[derive(Debug)]
pub struct ClimatologyChart<'a> {
    series: &'a ClimatologySeries,
    office: &'a str,
    period: String,
    style: ChartStyle,
}

impl<'a> ClimatologyChart<'a> {
    /// Create a chart for one series with the default style
    ///
    /// The period labels are subtitle text only (e.g. "1987" and "2016").
    pub fn new(
        series: &'a ClimatologySeries,
        office: &'a str,
        period_start: &str,
        period_end: &str,
    ) -> Self {
        Self {
            series,
            office,
            period: format!("{period_start}-{period_end}"),
            style: ChartStyle::default(),
        }
    }

    /// Replace the default style
    pub fn with_style(self, style: ChartStyle) -> Self {
        Self { style, ..self }
    }

    /// Output file name: `<office>_<series>_climo.png`
    pub fn file_name(&self) -> String {
        format!("{}_{}_climo.png", self.office, self.series.name)
    }

    /// Full output path inside the given directory
    pub fn output_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }

    /// Render the chart to a PNG file, overwriting any existing file
    pub fn render_to_file(&self, path: &Path) -> Result<()> {
        if self.series.counts.len() != YEAR_SLOTS {
            return Err(ClimoError::graph(format!(
                "series '{}' covers {} slots, expected {}",
                self.series.name,
                self.series.counts.len(),
                YEAR_SLOTS
            )));
        }

        let root = BitMapBackend::new(path, (self.style.width, self.style.height))
            .into_drawing_area();
        root.fill(&self.style.background)?;

        let caption = format!(
            "WFO {} {} Climatology ({})",
            self.office, self.series.name, self.period
        );
        let slots: Vec<CalendarSlot> = self.series.counts.keys().copied().collect();

        let mut chart = ChartBuilder::on(&root)
            .caption(caption, ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(60)
            .y_label_area_size(50)
            .build_cartesian_2d(0usize..YEAR_SLOTS, 0u32..self.style.y_max)?;

        chart
            .configure_mesh()
            .x_desc("Calendar Date")
            .y_desc(format!("Warnings issued ({})", self.series.name))
            .x_labels(YEAR_SLOTS / self.style.label_interval + 1)
            .x_label_formatter(&|index| {
                slots.get(*index).map(CalendarSlot::label).unwrap_or_default()
            })
            .x_label_style(
                ("sans-serif", 11)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .draw()?;

        let y_max = self.style.y_max;
        let bar_color = self.style.bar_color;
        chart.draw_series(self.series.counts.values().enumerate().map(
            |(index, &count)| {
                Rectangle::new([(index, 0), (index + 1, count.min(y_max))], bar_color.filled())
            },
        ))?;

        root.present()?;
        info!(chart = %path.display(), series = %self.series.name, "rendered climatology chart");
        Ok(())
    }
}
