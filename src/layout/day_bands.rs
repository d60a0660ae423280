//! Gap-based column inference for weekday detection.
//!
//! Scanned timetables carry no reliable grid lines, so column boundaries are
//! recovered from the block anchors alone: the widest horizontal gaps between
//! consecutive x-coordinates are taken as the boundaries between weekday
//! columns.
//!
//! ```text
//!  x:  98 101 104        300 302        497 503      701       899 905
//!      |--- Mon ---|     |- Tue -|      |- Wed -|    Thu       |- Fri -|
//!                  ^gap^         ^gap^          ^gap^    ^gap^
//! ```

use crate::utils::safe_float_cmp;

/// Number of weekday columns in a teaching week.
pub const WEEKDAY_COLUMNS: usize = 5;

/// Horizontal extent of one inferred day column.
///
/// Bands are ordered left to right; the n-th band corresponds to the n-th
/// weekday.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayBand {
    /// Smallest x-coordinate in the column
    pub min_x: f32,
    /// Largest x-coordinate in the column
    pub max_x: f32,
}

impl DayBand {
    /// Create a band covering `[min_x, max_x]`.
    pub fn new(min_x: f32, max_x: f32) -> Self {
        Self { min_x, max_x }
    }

    /// Check whether `x` lies inside the band (both ends inclusive).
    ///
    /// # Examples
    ///
    /// ```
    /// use calendify::layout::DayBand;
    ///
    /// let band = DayBand::new(80.0, 120.0);
    /// assert!(band.contains(80.0));
    /// assert!(band.contains(120.0));
    /// assert!(!band.contains(120.5));
    /// ```
    pub fn contains(&self, x: f32) -> bool {
        x >= self.min_x && x <= self.max_x
    }

    /// Width of the band.
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }
}

/// Infer the five weekday columns from block x-coordinates.
///
/// See [`infer_bands`].
///
/// # Examples
///
/// ```
/// use calendify::layout::infer_day_bands;
///
/// let xs = [100.0, 102.0, 300.0, 305.0, 500.0, 700.0, 703.0, 900.0];
/// let bands = infer_day_bands(&xs);
/// assert_eq!(bands.len(), 5);
/// assert_eq!((bands[0].min_x, bands[0].max_x), (100.0, 102.0));
/// assert_eq!((bands[4].min_x, bands[4].max_x), (900.0, 900.0));
/// ```
pub fn infer_day_bands(xs: &[f32]) -> Vec<DayBand> {
    infer_bands(xs, WEEKDAY_COLUMNS)
}

/// Partition x-coordinates into at most `columns` contiguous bands.
///
/// The coordinates are sorted, the gaps between consecutive values are
/// ranked, and the `columns - 1` widest gaps become band boundaries.
///
/// - Equal gaps: the leftmost gap ranks first, so the result does not depend
///   on the order the coordinates arrived in.
/// - Zero gaps (repeated coordinates) never become boundaries. Inputs with
///   fewer distinct clusters than `columns` therefore yield fewer bands.
/// - Non-finite coordinates are ignored. Empty input yields no bands.
pub fn infer_bands(xs: &[f32], columns: usize) -> Vec<DayBand> {
    let mut sorted: Vec<f32> = xs.iter().copied().filter(|x| x.is_finite()).collect();
    if sorted.len() < xs.len() {
        log::debug!("Ignoring {} non-finite x-coordinates", xs.len() - sorted.len());
    }
    if sorted.is_empty() || columns == 0 {
        return Vec::new();
    }
    sorted.sort_by(|a, b| safe_float_cmp(*a, *b));

    // (index of left coordinate, gap to the next one)
    let mut gaps: Vec<(usize, f32)> = sorted
        .windows(2)
        .enumerate()
        .map(|(i, pair)| (i, pair[1] - pair[0]))
        .filter(|&(_, gap)| gap > 0.0)
        .collect();

    // Stable sort keeps ascending index order among equal gaps
    gaps.sort_by(|a, b| safe_float_cmp(b.1, a.1));

    let mut cuts: Vec<usize> = gaps.iter().take(columns - 1).map(|&(i, _)| i).collect();
    cuts.sort_unstable();

    let mut bands = Vec::with_capacity(cuts.len() + 1);
    let mut start = 0;
    for cut in cuts.into_iter().chain(std::iter::once(sorted.len() - 1)) {
        let group = &sorted[start..=cut];
        if let (Some(&min_x), Some(&max_x)) = (group.first(), group.last()) {
            bands.push(DayBand::new(min_x, max_x));
        }
        start = cut + 1;
    }

    log::debug!(
        "Inferred {} day bands from {} coordinates: {:?}",
        bands.len(),
        sorted.len(),
        bands
    );

    bands
}
