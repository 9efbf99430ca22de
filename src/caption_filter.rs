use log::debug;

// @module: Caption line classification

// @const: Shortest line (in chars) that can never be a caption
const MIN_CAPTION_CHARS: usize = 3;

/// Result of partitioning raw lines into kept lines and caption lines.
///
/// Both partitions keep the relative order the lines had in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedLines {
    /// Dialogue and structural lines (sequence numbers, timestamps, blanks)
    pub kept: Vec<String>,

    /// Bracketed non-dialogue annotations, in encounter order
    pub captions: Vec<String>,
}

impl ClassifiedLines {
    /// True when at least one caption line was found
    pub fn has_captions(&self) -> bool {
        !self.captions.is_empty()
    }
}

/// Check whether a line is a closed-caption annotation such as `[door creaks]` or `(laughs)`.
///
/// Only trailing whitespace is ignored. The opening and closing characters are
/// checked independently, so `[mismatched)` and `(mismatched]` count as captions too.
pub fn is_caption_line(line: &str) -> bool {
    let line = line.trim_end();
    line.chars().count() >= MIN_CAPTION_CHARS
        && line.starts_with(['[', '('])
        && line.ends_with([']', ')'])
}

/// Partition lines into kept lines and caption lines.
///
/// Every line is stored with its trailing whitespace stripped.
pub fn classify_lines<I, S>(lines: I) -> ClassifiedLines
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut classified = ClassifiedLines::default();

    for line in lines {
        let line = line.as_ref().trim_end();
        if is_caption_line(line) {
            classified.captions.push(line.to_string());
        } else {
            classified.kept.push(line.to_string());
        }
    }

    debug!(
        "Classified {} lines: {} kept, {} captions",
        classified.kept.len() + classified.captions.len(),
        classified.kept.len(),
        classified.captions.len()
    );

    classified
}

/// Split a whole file's text into lines and classify them
pub fn classify_text(text: &str) -> ClassifiedLines {
    classify_lines(text.lines())
}
