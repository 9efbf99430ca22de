/*!
 * Per-file cleaning pipeline.
 *
 * A file is read whole, its caption lines are removed, the remaining lines are
 * rebuilt into a densely numbered subtitle stream and the result is written to
 * the destination. Nothing is written when the file holds no caption line.
 */

use std::path::Path;
use log::{debug, error, info};

use crate::caption_filter::classify_text;
use crate::errors::CleanError;
use crate::file_utils::FileManager;
use crate::subtitle_processor::SubtitleCollection;

/// Outcome of the pure text transformation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanResult {
    /// Extracted caption lines, in encounter order
    pub captions: Vec<String>,

    /// Rebuilt subtitle text; `None` when no caption was extracted
    pub rebuilt: Option<String>,

    /// Number of blocks in `rebuilt`
    pub block_count: usize,
}

/// Successful outcome of cleaning one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanOutcome {
    /// Captions were removed and the rebuilt file was written
    Cleaned {
        /// Removed caption lines
        captions: Vec<String>,
        /// Subtitle blocks written to the destination
        blocks_written: usize,
    },

    /// The file held no caption line; nothing was written
    NoCaptions,
}

impl CleanOutcome {
    /// Removed caption lines (empty for `NoCaptions`)
    pub fn captions(&self) -> &[String] {
        match self {
            Self::Cleaned { captions, .. } => captions,
            Self::NoCaptions => &[],
        }
    }

    /// Consume the outcome, keeping only the removed caption lines
    pub fn into_captions(self) -> Vec<String> {
        match self {
            Self::Cleaned { captions, .. } => captions,
            Self::NoCaptions => Vec::new(),
        }
    }
}

/// Strip caption lines from subtitle text and rebuild the remaining blocks
pub fn clean_text(text: &str) -> CleanResult {
    let classified = classify_text(text);

    if !classified.has_captions() {
        return CleanResult::default();
    }

    let collection = SubtitleCollection::from_kept_lines(&classified.kept);

    CleanResult {
        captions: classified.captions,
        block_count: collection.len(),
        rebuilt: Some(collection.to_srt_string()),
    }
}

/// Clean one subtitle file, writing the result to `output_path` when captions were found
pub fn process<P1: AsRef<Path>, P2: AsRef<Path>>(
    input_path: P1,
    output_path: P2,
) -> Result<CleanOutcome, CleanError> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();

    let content = FileManager::read_to_string(input_path).map_err(|source| CleanError::Read {
        path: input_path.to_path_buf(),
        source,
    })?;

    let result = clean_text(&content);
    let Some(rebuilt) = result.rebuilt else {
        debug!("No closed captions in {}", input_path.display());
        return Ok(CleanOutcome::NoCaptions);
    };

    if let Err(source) = FileManager::write_atomic(output_path, &rebuilt) {
        return Err(CleanError::Write {
            path: output_path.to_path_buf(),
            captions: result.captions,
            source,
        });
    }

    info!(
        "Removed {} captions from {}, wrote {} blocks to {}",
        result.captions.len(),
        input_path.display(),
        result.block_count,
        output_path.display()
    );

    Ok(CleanOutcome::Cleaned {
        captions: result.captions,
        blocks_written: result.block_count,
    })
}

/// Lenient variant of [`process`] that reports failures as an empty caption list.
///
/// The failure is logged, so callers that treat "nothing removed" as a no-op can use this directly.
pub fn clean_single_file<P1: AsRef<Path>, P2: AsRef<Path>>(input_path: P1, output_path: P2) -> Vec<String> {
    match process(input_path, output_path) {
        Ok(outcome) => outcome.into_captions(),
        Err(e) => {
            error!("{}", e);
            Vec::new()
        }
    }
}
