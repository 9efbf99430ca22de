use std::fmt;
use std::path::Path;
use regex::Regex;
use once_cell::sync::Lazy;
use anyhow::Result;
use log::debug;
use crate::file_utils::FileManager;

// @module: Subtitle block reconstruction and serialization

// @const: SRT timestamp regex, searched anywhere in a line
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{2}:\d{2}:\d{2},\d{3} --> \d{2}:\d{2}:\d{2},\d{3}").unwrap()
});

/// Check whether a line holds an SRT time range (`HH:MM:SS,mmm --> HH:MM:SS,mmm`)
pub fn is_timestamp_line(line: &str) -> bool {
    TIMESTAMP_REGEX.is_match(line)
}

// @struct: Single rebuilt subtitle block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleBlock {
    // @field: Dense 1-based sequence number
    pub seq_num: usize,

    // @field: Timestamp line, verbatim
    pub timestamp: String,

    // @field: Content lines, never empty
    pub lines: Vec<String>,
}

impl SubtitleBlock {
    /// Create a block; returns `None` when there is no content to show
    pub fn new(seq_num: usize, timestamp: String, lines: Vec<String>) -> Option<Self> {
        if lines.is_empty() {
            return None;
        }

        Some(SubtitleBlock {
            seq_num,
            timestamp,
            lines,
        })
    }
}

impl fmt::Display for SubtitleBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.seq_num)?;
        writeln!(f, "{}", self.timestamp)?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)
    }
}

/// Ordered, densely numbered sequence of subtitle blocks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubtitleCollection {
    /// Blocks in the order their timestamps were found
    pub blocks: Vec<SubtitleBlock>,
}

impl SubtitleCollection {
    /// Rebuild subtitle blocks from the lines left after caption removal.
    ///
    /// Each timestamp line opens a block whose content runs up to the next empty
    /// line or the end of input. Blocks without content are dropped and do not
    /// consume a sequence number. A timestamp on the very last line is ignored.
    pub fn from_kept_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut blocks = Vec::new();
        let mut discarded = 0;

        for (i, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            if !is_timestamp_line(line) {
                continue;
            }

            if i + 1 >= lines.len() {
                debug!("Ignoring timestamp on last line: {}", line);
                continue;
            }

            let content: Vec<String> = lines[i + 1..]
                .iter()
                .map(|l| l.as_ref())
                .take_while(|l| !l.is_empty())
                .map(str::to_string)
                .collect();

            match SubtitleBlock::new(blocks.len() + 1, line.to_string(), content) {
                Some(block) => blocks.push(block),
                None => discarded += 1,
            }
        }

        if discarded > 0 {
            debug!("Discarded {} subtitle blocks left without content", discarded);
        }

        SubtitleCollection { blocks }
    }

    /// Number of blocks in the collection
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// True when no block survived
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Serialize all blocks in SRT layout
    pub fn to_srt_string(&self) -> String {
        self.to_string()
    }

    /// Write subtitles to an SRT file, replacing it atomically
    pub fn write_to_srt<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        FileManager::write_atomic(path.as_ref(), &self.to_srt_string())?;
        Ok(())
    }
}

impl fmt::Display for SubtitleCollection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for block in &self.blocks {
            write!(f, "{}", block)?;
        }
        Ok(())
    }
}
