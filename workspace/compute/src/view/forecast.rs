use common::ForecastDay;

use crate::aqi::{categorize, round_aqi, AqiCategory};
use crate::dates::{chart_label, row_label};
use crate::palette::darken;

/// How much darker a bar's border is than its fill, in percent.
pub const BORDER_DARKEN_PERCENT: u8 = 20;
pub const BAR_BORDER_WIDTH: f64 = 1.0;
pub const Y_AXIS_TITLE: &str = "AQI Value";
pub const SERIES_NAME: &str = "AQI Forecast";

/// One day in the forecast list.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRow {
    pub date_label: String,
    pub rounded_aqi: i64,
    /// Recomputed from the rounded value, independently of the service.
    pub category: AqiCategory,
}

impl ForecastRow {
    pub fn from_day(day: &ForecastDay) -> Self {
        let rounded_aqi = round_aqi(day.aqi);
        Self {
            date_label: row_label(&day.date),
            rounded_aqi,
            category: categorize(rounded_aqi as f64),
        }
    }

    pub fn badge_color(&self) -> &'static str {
        self.category.bootstrap_color()
    }

    pub fn background(&self) -> String {
        self.category.background_tint()
    }
}

/// Bar chart input: one bar per day, in the order received.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastChart {
    pub labels: Vec<String>,
    /// Unrounded AQI values.
    pub values: Vec<f64>,
    /// Category colour of each unrounded value, so a bar may differ from
    /// its row badge near a breakpoint.
    pub fill_colors: Vec<String>,
    pub border_colors: Vec<String>,
    pub border_width: f64,
    pub series_name: &'static str,
    pub y_axis_title: &'static str,
    pub begin_at_zero: bool,
}

impl ForecastChart {
    pub fn from_days(days: &[ForecastDay]) -> Self {
        let fill_colors: Vec<String> = days
            .iter()
            .map(|day| categorize(day.aqi).hex_color().to_string())
            .collect();
        let border_colors = fill_colors
            .iter()
            .map(|fill| darken(fill, BORDER_DARKEN_PERCENT).unwrap_or_else(|_| fill.clone()))
            .collect();

        Self {
            labels: days.iter().map(|day| chart_label(&day.date)).collect(),
            values: days.iter().map(|day| day.aqi).collect(),
            fill_colors,
            border_colors,
            border_width: BAR_BORDER_WIDTH,
            series_name: SERIES_NAME,
            y_axis_title: Y_AXIS_TITLE,
            begin_at_zero: true,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Bar positions on the x axis. Labels are attached as tick text, so
    /// two days sharing a label still get their own bars.
    pub fn positions(&self) -> Vec<f64> {
        (0..self.len()).map(|index| index as f64).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Contents of the forecast region after a successful prediction.
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastView {
    /// No days returned: a warning and no chart.
    Empty,
    Days {
        rows: Vec<ForecastRow>,
        chart: ForecastChart,
    },
}

impl ForecastView {
    pub fn from_days(days: &[ForecastDay]) -> Self {
        if days.is_empty() {
            return ForecastView::Empty;
        }

        let rows: Vec<ForecastRow> = days.iter().map(ForecastRow::from_day).collect();
        let chart = ForecastChart::from_days(days);
        ForecastView::Days { rows, chart }
    }

    pub fn chart(&self) -> Option<&ForecastChart> {
        match self {
            ForecastView::Empty => None,
            ForecastView::Days { chart, .. } => Some(chart),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str, aqi: f64) -> ForecastDay {
        ForecastDay {
            date: date.to_string(),
            aqi,
        }
    }

    #[test]
    fn test_empty_forecast_has_no_chart() {
        let view = ForecastView::from_days(&[]);
        assert_eq!(view, ForecastView::Empty);
        assert!(view.chart().is_none());
    }

    #[test]
    fn test_good_and_unhealthy_days() {
        let view = ForecastView::from_days(&[day("2024-01-01", 45.0), day("2024-01-02", 155.0)]);

        let ForecastView::Days { rows, chart } = view else {
            panic!("expected forecast days");
        };

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, AqiCategory::Good);
        assert_eq!(rows[0].badge_color(), "success");
        assert_eq!(rows[0].date_label, "Mon, Jan 1");
        assert_eq!(rows[0].rounded_aqi, 45);
        assert_eq!(rows[0].background(), "rgba(0, 228, 0, 0.2)");

        assert_eq!(rows[1].category, AqiCategory::Unhealthy);
        assert_eq!(rows[1].badge_color(), "danger");
        assert_eq!(rows[1].date_label, "Tue, Jan 2");
        assert_eq!(rows[1].background(), "rgba(255, 0, 0, 0.2)");

        assert_eq!(chart.len(), 2);
        assert_eq!(chart.labels, vec!["Jan 1", "Jan 2"]);
        assert_eq!(chart.values, vec![45.0, 155.0]);
        assert_eq!(chart.fill_colors, vec!["#00e400", "#ff0000"]);
        assert_eq!(chart.border_colors, vec!["#00b600", "#cc0000"]);
        assert_eq!(chart.border_width, 1.0);
        assert_eq!(chart.y_axis_title, "AQI Value");
        assert!(chart.begin_at_zero);
    }

    #[test]
    fn test_row_category_uses_rounded_value() {
        let row = ForecastRow::from_day(&day("2024-03-01", 50.4));
        assert_eq!(row.rounded_aqi, 50);
        assert_eq!(row.category, AqiCategory::Good);

        let row = ForecastRow::from_day(&day("2024-03-01", 50.5));
        assert_eq!(row.rounded_aqi, 51);
        assert_eq!(row.category, AqiCategory::Moderate);
    }

    #[test]
    fn test_chart_keeps_unrounded_values() {
        let days = [day("2024-03-01", 50.4), day("2024-03-02", 301.2)];
        let chart = ForecastView::from_days(&days).chart().cloned().unwrap();

        assert_eq!(chart.values, vec![50.4, 301.2]);
        assert_eq!(chart.fill_colors[1], "#7e0023");
        assert_eq!(chart.border_colors[1], "#64001c");
    }

    #[test]
    fn test_bar_color_follows_unrounded_value() {
        let days = [day("2024-03-01", 50.4), day("2024-03-02", 100.2)];
        let ForecastView::Days { rows, chart } = ForecastView::from_days(&days) else {
            panic!("expected forecast days");
        };

        // Rows round to 50 and 100 first.
        assert_eq!(rows[0].category, AqiCategory::Good);
        assert_eq!(rows[1].category, AqiCategory::Moderate);
        assert_eq!(chart.fill_colors, vec!["#ffff00", "#ff7e00"]);
    }

    #[test]
    fn test_duplicate_labels_keep_separate_positions() {
        let days = [day("2024-01-05", 10.0), day("2025-01-05", 220.0), day("2024-01-06", 120.0)];
        let chart = ForecastView::from_days(&days).chart().cloned().unwrap();

        assert_eq!(chart.labels, vec!["Jan 5", "Jan 5", "Jan 6"]);
        assert_eq!(chart.positions(), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_order_is_preserved() {
        let days = [day("2024-01-05", 10.0), day("2024-01-03", 220.0), day("2024-01-04", 120.0)];
        let ForecastView::Days { rows, chart } = ForecastView::from_days(&days) else {
            panic!("expected forecast days");
        };

        let categories: Vec<AqiCategory> = rows.iter().map(|r| r.category).collect();
        assert_eq!(
            categories,
            vec![
                AqiCategory::Good,
                AqiCategory::VeryUnhealthy,
                AqiCategory::UnhealthyForSensitiveGroups
            ]
        );
        assert_eq!(chart.labels, vec!["Jan 5", "Jan 3", "Jan 4"]);
    }
}
