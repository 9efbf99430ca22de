use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::app_config::Config;
use crate::cleaner::{self, CleanOutcome};
use crate::errors::AppError;
use crate::file_utils::{CollectedInputs, FileManager};

// @module: Application controller for batch caption removal

/// Result of processing one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Captions removed and the cleaned file written
    Cleaned {
        captions: Vec<String>,
    },

    /// No captions found, no file written
    NoCaptions,

    /// Reading or writing failed; captions extracted before a write failure are kept
    Failed {
        message: String,
        captions: Vec<String>,
    },
}

/// Report for a single processed file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Input subtitle file
    pub input: PathBuf,

    /// Destination of the cleaned file
    pub output: PathBuf,

    /// What happened
    pub status: FileStatus,
}

impl FileReport {
    /// File name used in user-facing messages
    pub fn file_name(&self) -> String {
        self.input
            .file_name()
            .map(|f| f.to_string_lossy().to_string())
            .unwrap_or_else(|| self.input.display().to_string())
    }

    /// Removed caption lines for this file
    pub fn captions(&self) -> &[String] {
        match &self.status {
            FileStatus::Cleaned { captions } | FileStatus::Failed { captions, .. } => captions,
            FileStatus::NoCaptions => &[],
        }
    }

    /// One-line human readable summary
    pub fn summary_line(&self) -> String {
        let name = self.file_name();
        match &self.status {
            FileStatus::Cleaned { captions } => {
                format!("Removed {} closed captions from {}", captions.len(), name)
            }
            FileStatus::NoCaptions => format!("No closed captions detected in {}", name),
            FileStatus::Failed { message, .. } => format!("Error processing {}: {}", name, message),
        }
    }
}

/// Totals over a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Per-file reports, in processing order
    pub reports: Vec<FileReport>,

    /// Existing explicit inputs ignored because they are not subtitle files
    pub skipped: Vec<PathBuf>,
}

impl BatchSummary {
    pub fn cleaned_count(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Cleaned { .. }))
    }

    pub fn untouched_count(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::NoCaptions))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Failed { .. }))
    }

    /// Captions removed from files that were written successfully
    pub fn total_captions_removed(&self) -> usize {
        self.reports
            .iter()
            .filter_map(|r| match &r.status {
                FileStatus::Cleaned { captions } => Some(captions.len()),
                _ => None,
            })
            .sum()
    }

    fn count(&self, pred: impl Fn(&FileStatus) -> bool) -> usize {
        self.reports.iter().filter(|r| pred(&r.status)).count()
    }
}

/// Main application controller for caption removal
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Process a single subtitle file into the configured output directory
    pub fn process_file(&self, input_file: &Path) -> FileReport {
        let output = FileManager::generate_output_path(input_file, &self.config.output_dir);
        Self::clean_into(input_file, output)
    }

    fn clean_into(input_file: &Path, output: PathBuf) -> FileReport {
        let status = match cleaner::process(input_file, &output) {
            Ok(CleanOutcome::Cleaned { captions, .. }) => FileStatus::Cleaned { captions },
            Ok(CleanOutcome::NoCaptions) => FileStatus::NoCaptions,
            Err(e) => FileStatus::Failed {
                message: e.to_string(),
                captions: e.captions().to_vec(),
            },
        };

        FileReport {
            input: input_file.to_path_buf(),
            output,
            status,
        }
    }

    fn failed_report(&self, input_file: &Path, message: String) -> FileReport {
        FileReport {
            input: input_file.to_path_buf(),
            output: FileManager::generate_output_path(input_file, &self.config.output_dir),
            status: FileStatus::Failed {
                message,
                captions: Vec::new(),
            },
        }
    }

    /// Run the workflow over files and directories, one file at a time.
    ///
    /// Inputs that do not exist are reported as failures. A file whose output
    /// path was already written in this run is reported as a failure instead of
    /// replacing the earlier result.
    pub fn run(&self, inputs: &[PathBuf]) -> Result<BatchSummary, AppError> {
        let start_time = Instant::now();

        let CollectedInputs { files, skipped, missing } = FileManager::collect_inputs(
            inputs,
            &self.config.extensions,
            self.config.recursive,
        )?;

        for path in &skipped {
            warn!("Skipping {}: not a subtitle file", path.display());
        }

        let mut reports = Vec::with_capacity(missing.len() + files.len());
        for path in &missing {
            let report = self.failed_report(path, "Input path does not exist".to_string());
            error!("{}", report.summary_line());
            reports.push(report);
        }

        if files.is_empty() {
            if reports.is_empty() {
                warn!("No subtitle files found to process");
            }
            return Ok(BatchSummary { reports, skipped });
        }

        FileManager::ensure_dir(&self.config.output_dir).map_err(|e| {
            AppError::File(format!(
                "Failed to create output directory {}: {}",
                self.config.output_dir.display(),
                e
            ))
        })?;

        let progress_bar = if files.len() > 1 {
            let pb = ProgressBar::new(files.len() as u64);
            let style = ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar());
            pb.set_style(style.progress_chars("█▓▒░"));
            pb
        } else {
            ProgressBar::hidden()
        };

        // Output path -> input that wrote it
        let mut written: HashMap<PathBuf, PathBuf> = HashMap::new();

        for file in &files {
            let output = FileManager::generate_output_path(file, &self.config.output_dir);
            let report = match written.get(&output) {
                Some(first) => self.failed_report(
                    file,
                    format!("Would overwrite output of {}", first.display()),
                ),
                None => Self::clean_into(file, output),
            };
            progress_bar.set_message(report.file_name());

            if matches!(report.status, FileStatus::Cleaned { .. }) {
                written.insert(report.output.clone(), report.input.clone());
            }

            progress_bar.suspend(|| match &report.status {
                FileStatus::Cleaned { .. } | FileStatus::NoCaptions => info!("{}", report.summary_line()),
                FileStatus::Failed { captions, .. } => {
                    error!("{}", report.summary_line());
                    if !captions.is_empty() {
                        warn!("{} captions were extracted from {} but not saved", captions.len(), report.file_name());
                    }
                }
            });

            reports.push(report);
            progress_bar.inc(1);
        }
        progress_bar.finish_and_clear();

        let summary = BatchSummary { reports, skipped };
        info!(
            "Finished in {}: {} cleaned, {} without captions, {} errors ({} captions removed)",
            Self::format_duration(start_time.elapsed()),
            summary.cleaned_count(),
            summary.untouched_count(),
            summary.failed_count(),
            summary.total_captions_removed()
        );

        Ok(summary)
    }

    // Format duration in a human-readable format
    fn format_duration(duration: Duration) -> String {
        let total_seconds = duration.as_secs();
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;

        if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
