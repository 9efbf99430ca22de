/*!
 * Integration tests for cleaning subtitle files on disk
 */

use std::fs;
use anyhow::Result;
use regex::Regex;

use ccremover::cleaner::{process, CleanOutcome};
use crate::common;

/// Sequence numbers of a rebuilt file are a dense 1..N run in block order
#[test]
fn test_clean_workflow_withGappyInput_shouldProduceDenseNumbering() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut content = String::new();
    for i in 0..20 {
        let text = if i % 3 == 0 { "[footsteps]".to_string() } else { format!("Line {}", i) };
        content.push_str(&format!(
            "{}\n00:00:{:02},000 --> 00:00:{:02},500\n{}\n\n",
            i + 1, i, i, text
        ));
    }
    let input = common::create_test_file(temp_dir.path(), "gappy.srt", &content)?;
    let output = temp_dir.path().join("output").join("gappy.srt");

    let outcome = process(&input, &output)?;
    assert_eq!(outcome.captions().len(), 7);

    let rebuilt = fs::read_to_string(&output)?;
    let blocks: Vec<&str> = rebuilt.split("\n\n").filter(|b| !b.is_empty()).collect();
    assert_eq!(blocks.len(), 13);

    let seq = Regex::new(r"^(\d+)\n").unwrap();
    for (i, block) in blocks.iter().enumerate() {
        let caps = seq.captures(block).expect("block starts with a sequence number");
        assert_eq!(caps[1].parse::<usize>()?, i + 1);
        assert!(!block.contains("[footsteps]"));
    }

    // Original order of the surviving text is preserved
    assert!(blocks[0].ends_with("Line 1"));
    assert!(blocks[12].ends_with("Line 19"));

    Ok(())
}

/// Running the tool on its own output finds nothing and writes nothing
#[test]
fn test_clean_workflow_onOwnOutput_shouldBeNoOp() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "movie.srt", common::CAPTIONED_SUBTITLE)?;
    let first_output = temp_dir.path().join("pass1").join("movie.srt");
    let second_output = temp_dir.path().join("pass2").join("movie.srt");

    process(&input, &first_output)?;
    let outcome = process(&first_output, &second_output)?;

    assert_eq!(outcome, CleanOutcome::NoCaptions);
    assert!(!second_output.exists());

    Ok(())
}

#[test]
fn test_clean_workflow_withCrlfInput_shouldWriteLfOutput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let content = common::CAPTIONED_SUBTITLE.replace('\n', "\r\n");
    let input = common::create_test_file(temp_dir.path(), "windows.srt", &content)?;
    let output = temp_dir.path().join("windows.clean.srt");

    process(&input, &output)?;

    assert_eq!(fs::read_to_string(&output)?, common::CAPTIONED_SUBTITLE_CLEANED);

    Ok(())
}

#[test]
fn test_clean_workflow_withTrailingTimestamp_shouldDropIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let content = "1\n00:00:01,000 --> 00:00:02,000\nHi\n(laughs)\n\n2\n00:00:03,000 --> 00:00:04,000\n";
    let input = common::create_test_file(temp_dir.path(), "truncated.srt", content)?;
    let output = temp_dir.path().join("truncated.clean.srt");

    let outcome = process(&input, &output)?;

    assert_eq!(outcome.captions(), ["(laughs)"]);
    assert_eq!(fs::read_to_string(&output)?, "1\n00:00:01,000 --> 00:00:02,000\nHi\n\n");

    Ok(())
}
