//! Pixel mapping for the 30-year output-retention chart.
//!
//! The SVG viewBox is `0 0 620 270`. The plot rectangle spans x 60..560
//! and y 20..240, so one year is 500/30 px and one percentage point is
//! 11 px. Both warranty curves are fixed data; everything here is
//! stateless arithmetic feeding path strings to the warranty section.

pub const PLOT_LEFT: f64 = 60.0;
pub const PLOT_RIGHT: f64 = 560.0;
pub const PLOT_TOP: f64 = 20.0;
pub const PLOT_BASELINE: f64 = 240.0;

pub const YEAR_MAX: f64 = 30.0;
pub const PCT_MIN: f64 = 80.0;
pub const PCT_MAX: f64 = 100.0;

/// (year, retained output %) for the HJT 720W warranty curve.
/// Year 1 steps to 99%, then ~0.30%/yr down to 90.3% at year 30.
pub const HJT_SERIES: [(f64, f64); 8] = [
    (0.0, 100.0),
    (1.0, 99.0),
    (5.0, 97.8),
    (10.0, 96.3),
    (15.0, 94.8),
    (20.0, 93.3),
    (25.0, 91.8),
    (30.0, 90.3),
];

/// Competitor N-type curve: 98% after year 1, ~0.45%/yr, ~85% at year 30.
pub const NTYPE_SERIES: [(f64, f64); 8] = [
    (0.0, 100.0),
    (1.0, 98.0),
    (5.0, 96.2),
    (10.0, 93.95),
    (15.0, 91.7),
    (20.0, 89.45),
    (25.0, 87.2),
    (30.0, 84.95),
];

pub const Y_AXIS_LABELS: [f64; 5] = [100.0, 95.0, 90.0, 85.0, 80.0];
pub const X_AXIS_LABELS: [f64; 7] = [0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0];

pub fn chart_x(year: f64) -> f64 {
    PLOT_LEFT + year * (PLOT_RIGHT - PLOT_LEFT) / YEAR_MAX
}

pub fn chart_y(pct: f64) -> f64 {
    PLOT_BASELINE - (pct - PCT_MIN) * (PLOT_BASELINE - PLOT_TOP) / (PCT_MAX - PCT_MIN)
}

/// SVG path joining the points with straight segments.
pub fn line_path(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, &(year, pct))| {
            let cmd = if i == 0 { 'M' } else { 'L' };
            format!("{} {:.1},{:.1}", cmd, chart_x(year), chart_y(pct))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Line path closed down to the baseline so the area under the curve
/// can take a fill.
pub fn area_path(points: &[(f64, f64)]) -> String {
    let mut path = line_path(points);
    if let (Some(&(first, _)), Some(&(last, _))) = (points.first(), points.last()) {
        path.push_str(&format!(
            " L {:.1},{:.1} L {:.1},{:.1} Z",
            chart_x(last),
            PLOT_BASELINE,
            chart_x(first),
            PLOT_BASELINE
        ));
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_bounds_map_to_plot_edges() {
        assert_eq!(chart_x(0.0), PLOT_LEFT);
        assert_eq!(chart_x(30.0), PLOT_RIGHT);
    }

    #[test]
    fn percentage_bounds_map_to_plot_edges() {
        assert_eq!(chart_y(100.0), PLOT_TOP);
        assert_eq!(chart_y(80.0), PLOT_BASELINE);
    }

    #[test]
    fn one_percentage_point_is_eleven_pixels() {
        assert!((chart_y(90.0) - chart_y(91.0) - 11.0).abs() < 1e-9);
    }

    #[test]
    fn both_series_stay_inside_the_plot_rect() {
        for &(year, pct) in HJT_SERIES.iter().chain(NTYPE_SERIES.iter()) {
            let (x, y) = (chart_x(year), chart_y(pct));
            assert!((PLOT_LEFT..=PLOT_RIGHT).contains(&x), "x out of range for year {year}");
            assert!((PLOT_TOP..=PLOT_BASELINE).contains(&y), "y out of range for {pct}%");
        }
    }

    #[test]
    fn hjt_outretains_ntype_at_every_shared_year() {
        for (&(_, hjt), &(_, ntype)) in HJT_SERIES.iter().zip(NTYPE_SERIES.iter()).skip(1) {
            assert!(hjt > ntype);
        }
    }

    #[test]
    fn line_path_grammar() {
        let path = line_path(&HJT_SERIES);
        assert!(path.starts_with("M 60.0,20.0"));
        assert_eq!(path.matches('L').count(), HJT_SERIES.len() - 1);
        assert!(!path.contains('Z'));
    }

    #[test]
    fn area_path_closes_on_the_baseline() {
        let path = area_path(&NTYPE_SERIES);
        assert!(path.ends_with('Z'));
        assert!(path.contains(&format!("L {:.1},{:.1}", chart_x(30.0), PLOT_BASELINE)));
        assert!(path.contains(&format!("L {:.1},{:.1} Z", chart_x(0.0), PLOT_BASELINE)));
    }

    #[test]
    fn empty_series_produces_empty_paths() {
        assert!(line_path(&[]).is_empty());
        assert!(area_path(&[]).is_empty());
    }
}
