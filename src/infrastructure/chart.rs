//! Chart rendering for the weekly series and mood distribution

use crate::domain::{Distribution, MoodLevel, WeekPoint};

/// Renders derived series into a displayable chart
pub trait ChartRenderer {
    /// Line chart of the seven-day series
    fn line(&self, series: &[WeekPoint]) -> String;

    /// Distribution of ratings across all entries
    fn distribution(&self, dist: &Distribution) -> String;
}

/// Plain-text bar charts for terminals
#[derive(Debug, Clone)]
pub struct TextChart {
    bar: char,
    /// Width of the longest distribution bar
    width: usize,
}

impl Default for TextChart {
    fn default() -> Self {
        TextChart { bar: '█', width: 20 }
    }
}

impl TextChart {
    pub fn new(bar: char, width: usize) -> Self {
        TextChart { bar, width }
    }

    fn bar(&self, len: usize) -> String {
        std::iter::repeat(self.bar).take(len).collect()
    }
}

impl ChartRenderer for TextChart {
    fn line(&self, series: &[WeekPoint]) -> String {
        let mut output = String::new();
        for point in series {
            match point.value.and_then(MoodLevel::from_value) {
                Some(level) => output.push_str(&format!(
                    "{} {} {} {}\n",
                    point.label,
                    level.emoji(),
                    self.bar(usize::from(level.value()) * 2),
                    level.value()
                )),
                None => output.push_str(&format!("{}    ·\n", point.label)),
            }
        }
        output
    }

    fn distribution(&self, dist: &Distribution) -> String {
        let max = dist.iter().map(|(_, count)| count).max().unwrap_or(0);
        let mut output = String::new();

        // Greatest first, matching the chart legend
        for (level, count) in dist.iter().collect::<Vec<_>>().into_iter().rev() {
            let len = if max == 0 {
                0
            } else {
                (count * self.width).div_ceil(max)
            };
            output.push_str(&format!(
                "{:<10} {} {:<width$} {}\n",
                level.label(),
                level.emoji(),
                self.bar(len),
                count,
                width = self.width
            ));
        }
        output
    }
}
