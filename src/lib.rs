/*!
 * # ccremover - Closed Captions Remover
 *
 * A Rust library for stripping closed-caption annotations from SRT subtitle files.
 *
 * ## Features
 *
 * - Detect bracketed non-dialogue lines such as `[door creaks]` or `(laughs)`
 * - Remove them and drop subtitle blocks left without content
 * - Renumber the remaining blocks densely from 1
 * - Write the cleaned file atomically and report the removed captions
 * - Batch processing of files and directories
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `caption_filter`: Classification of caption lines
 * - `subtitle_processor`: Rebuilding and serializing subtitle blocks
 * - `cleaner`: Per-file pipeline and its result types
 * - `file_utils`: File system operations
 * - `app_config`: Configuration management
 * - `app_controller`: Batch controller used by the command line tool
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod caption_filter;
pub mod cleaner;
pub mod errors;
pub mod file_utils;
pub mod subtitle_processor;

// Re-export main types for easier usage
pub use app_config::Config;
pub use caption_filter::{classify_lines, is_caption_line, ClassifiedLines};
pub use cleaner::{clean_single_file, clean_text, process, CleanOutcome, CleanResult};
pub use errors::{AppError, CleanError};
pub use subtitle_processor::{SubtitleBlock, SubtitleCollection};
