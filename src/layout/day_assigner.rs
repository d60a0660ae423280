//! Map block positions onto weekday columns.

use crate::layout::day_bands::DayBand;
use crate::model::{DayLabel, Weekday};

/// Weekday whose band contains `x`, or [`DayLabel::Unknown`].
///
/// Bands map to weekdays positionally (first band is Monday). A position
/// outside every band, or inside a band with no weekday (a sixth band), maps
/// to the unknown marker so the entry stays visible for manual correction.
///
/// # Examples
///
/// ```
/// use calendify::layout::{assign_day, DayBand};
/// use calendify::model::{DayLabel, Weekday};
///
/// let bands = [DayBand::new(80.0, 120.0), DayBand::new(180.0, 220.0)];
/// assert_eq!(assign_day(100.0, &bands), DayLabel::Day(Weekday::Mon));
/// assert_eq!(assign_day(220.0, &bands), DayLabel::Day(Weekday::Tue));
/// assert_eq!(assign_day(150.0, &bands), DayLabel::Unknown);
/// ```
pub fn assign_day(x: f32, bands: &[DayBand]) -> DayLabel {
    bands
        .iter()
        .position(|band| band.contains(x))
        .and_then(Weekday::from_index)
        .map(DayLabel::Day)
        .unwrap_or(DayLabel::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week_bands() -> Vec<DayBand> {
        vec![
            DayBand::new(80.0, 120.0),
            DayBand::new(180.0, 220.0),
            DayBand::new(280.0, 320.0),
            DayBand::new(380.0, 420.0),
            DayBand::new(480.0, 520.0),
        ]
    }

    #[test]
    fn test_every_band_maps_to_its_weekday() {
        let bands = week_bands();
        for (band, day) in bands.iter().zip(Weekday::ALL) {
            assert_eq!(assign_day(band.min_x, &bands), DayLabel::Day(day));
            assert_eq!(assign_day(band.max_x, &bands), DayLabel::Day(day));
        }
    }

    #[test]
    fn test_outside_all_bands() {
        let bands = week_bands();
        assert_eq!(assign_day(0.0, &bands), DayLabel::Unknown);
        assert_eq!(assign_day(250.0, &bands), DayLabel::Unknown);
        assert_eq!(assign_day(f32::NAN, &bands), DayLabel::Unknown);
    }

    #[test]
    fn test_no_bands() {
        assert_eq!(assign_day(100.0, &[]), DayLabel::Unknown);
    }

    #[test]
    fn test_sixth_band_has_no_weekday() {
        let mut bands = week_bands();
        bands.push(DayBand::new(580.0, 620.0));
        assert_eq!(assign_day(600.0, &bands), DayLabel::Unknown);
    }
}
