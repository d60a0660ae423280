//! Schedule reconstruction pipeline.
//!
//! ```text
//! OcrBlock[] (unordered, from the OCR collaborator)
//!     ↓
//! [infer_day_bands]  (all x-coordinates → five weekday columns)
//!     ↓
//! [parse_block]      (text → course, time range, location)
//!     ↓
//! [assign_day]       (x-coordinate → weekday or Unknown)
//!     ↓
//! ScheduleEntry[]    (flat, one weekday per entry)
//! ```
//!
//! Every stage is a pure function of its input. Nothing here fails: blocks
//! that cannot be read are skipped and counted, and positions outside every
//! day column produce entries marked [`DayLabel::Unknown`].

use crate::layout::{assign_day, infer_day_bands, DayBand};
use crate::model::{DayLabel, ScheduleEntry};
use crate::ocr::OcrBlock;
use crate::text::parse_block;

/// Result of reconstructing one upload.
#[derive(Debug, Clone, Default)]
pub struct Reconstruction {
    /// Flat schedule entries, in input block order
    pub entries: Vec<ScheduleEntry>,
    /// Day columns the entries were assigned against
    pub bands: Vec<DayBand>,
    /// Blocks dropped for having fewer than two lines
    pub skipped_blocks: usize,
    /// Entries whose position fell outside every day column
    pub unassigned_entries: usize,
}

/// Reconstruct flat schedule entries from one batch of OCR blocks, inferring
/// the day columns from the blocks themselves.
///
/// # Examples
///
/// ```
/// use calendify::geometry::Position;
/// use calendify::ocr::OcrBlock;
/// use calendify::pipeline::reconstruct;
///
/// let blocks = vec![
///     OcrBlock::new("MATH 222\n9:55AM-10:45AM", Position::at_x(100.0)),
///     OcrBlock::new("noise", Position::at_x(300.0)),
/// ];
/// let result = reconstruct(&blocks);
/// assert_eq!(result.entries.len(), 1);
/// assert_eq!(result.skipped_blocks, 1);
/// ```
pub fn reconstruct(blocks: &[OcrBlock]) -> Reconstruction {
    let xs: Vec<f32> = blocks.iter().map(|block| block.position.x).collect();
    let bands = infer_day_bands(&xs);
    reconstruct_with_bands(blocks, bands)
}

/// Reconstruct flat schedule entries against known day columns.
pub fn reconstruct_with_bands(blocks: &[OcrBlock], bands: Vec<DayBand>) -> Reconstruction {
    let mut result = Reconstruction {
        bands,
        ..Default::default()
    };

    for block in blocks {
        let parsed = match parse_block(&block.text) {
            Some(parsed) => parsed,
            None => {
                log::debug!(
                    "Skipping block at x={} with fewer than two lines: {:?}",
                    block.position.x,
                    block.text
                );
                result.skipped_blocks += 1;
                continue;
            },
        };

        let day = assign_day(block.position.x, &result.bands);
        if day == DayLabel::Unknown {
            log::warn!(
                "Block '{}' at x={} is outside every day column",
                parsed.course,
                block.position.x
            );
            result.unassigned_entries += 1;
        }

        result.entries.push(ScheduleEntry {
            course: parsed.course,
            section: parsed.section,
            days: vec![day],
            start_time: parsed.start_time,
            end_time: parsed.end_time,
            location: parsed.location,
            source_text: block.text.clone(),
            source_position: block.position,
        });
    }

    log::info!(
        "Reconstructed {} entries from {} blocks ({} skipped, {} unassigned, {} day bands)",
        result.entries.len(),
        blocks.len(),
        result.skipped_blocks,
        result.unassigned_entries,
        result.bands.len()
    );

    result
}

/// Flat entries for one batch of OCR blocks.
pub fn build_entries(blocks: &[OcrBlock]) -> Vec<ScheduleEntry> {
    reconstruct(blocks).entries
}
