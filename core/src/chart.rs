use std::fmt::Write;

use crate::{Analysis, Result};

/// Number of glyphs for `value` on a `width` wide bar scaled linearly from `min` to `max`
///
/// A flat or inverted scale draws nothing rather than dividing by zero, and values outside the
/// scale are clamped to it.
pub fn bar_length(value: f64, min: f64, max: f64, width: usize) -> usize {
    if !(max > min) || !value.is_finite() {
        return 0;
    }
    let normalized = ((value - min) / (max - min)).clamp(0.0, 1.0);
    (normalized * width as f64).round() as usize
}

/// Horizontal text bar chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarChart {
    pub width: usize,
    pub glyph: char,
}

impl BarChart {
    pub const SOLID: char = '█';
    pub const SHADED: char = '▓';

    pub fn new(width: usize, glyph: char) -> Self {
        Self { width, glyph }
    }

    pub fn bar(&self, value: f64, min: f64, max: f64) -> String {
        std::iter::repeat(self.glyph)
            .take(bar_length(value, min, max, self.width))
            .collect()
    }

    /// Writes one `label |bar| value` line per entry, bars padded to the chart width
    pub fn write_bars<'a>(
        &self,
        o: &mut impl Write,
        entries: impl IntoIterator<Item = (&'a str, f64, String)>,
        min: f64,
        max: f64,
    ) -> std::fmt::Result {
        for (label, value, annotation) in entries {
            let bar = self.bar(value, min, max);
            writeln!(o, "{label} |{bar:<width$}| {annotation}", width = self.width)?;
        }
        Ok(())
    }
}

/// Exact probability per dice count, scaled between the lowest and highest value
pub fn probability_chart(o: &mut impl Write, analysis: &Analysis, width: usize) -> Result<()> {
    let chart = BarChart::new(width, BarChart::SOLID);
    let percentages = analysis.exact_percentages();

    if percentages.is_empty() {
        writeln!(o, "Probability vs Number of Dice (no data)")?;
        return Ok(());
    }

    let min = percentages.iter().copied().fold(f64::INFINITY, f64::min);
    let max = percentages.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    writeln!(
        o,
        "Probability vs Number of Dice (Scale: {min:.1}% to {max:.1}%)"
    )?;
    writeln!(o, "{}", "-".repeat(60))?;

    let labels: Vec<String> = analysis
        .rows
        .iter()
        .map(|row| format!("{:2} dice", row.dice))
        .collect();
    let entries = labels
        .iter()
        .zip(&percentages)
        .map(|(label, &pct)| (label.as_str(), pct, format!("{pct:5.2}%")));
    chart.write_bars(o, entries, min, max)?;

    Ok(())
}

/// Change between consecutive dice counts, scaled from zero to the largest change
pub fn change_chart(o: &mut impl Write, analysis: &Analysis, width: usize) -> Result<()> {
    let chart = BarChart::new(width, BarChart::SHADED);
    let changes = analysis.changes();

    if changes.is_empty() {
        writeln!(o, "Change in Probability (no data)")?;
        return Ok(());
    }

    let max = changes
        .iter()
        .map(|change| change.delta)
        .fold(f64::NEG_INFINITY, f64::max);

    writeln!(o, "Change in Probability (Scale: 0% to {max:.2}%)")?;
    writeln!(o, "{}", "-".repeat(60))?;

    let labels: Vec<String> = changes
        .iter()
        .map(|change| format!("{:2} dice", change.dice))
        .collect();
    let entries = labels.iter().zip(&changes).map(|(label, change)| {
        (
            label.as_str(),
            change.delta,
            format!("{:+6.3}%", change.delta),
        )
    });
    chart.write_bars(o, entries, 0.0, max)?;

    Ok(())
}
