use log::{error, info, debug};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::converter::{self, ConversionOptions};
use crate::errors::AppError;
use crate::file_utils::{FileManager, SRT_EXTENSION};
use crate::styles::PreparedStyles;

// @module: Batch conversion controller

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Number of SRT files attempted
    pub total: usize,

    /// Output paths of the files converted successfully
    pub succeeded: Vec<PathBuf>,

    /// Source paths that failed, with the error message
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    pub fn summary(&self) -> String {
        format!(
            "Conversion finished: {} files processed, {} succeeded, {} failed",
            self.total,
            self.succeeded.len(),
            self.failed.len()
        )
    }
}

/// Main application controller for subtitle conversion
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        config.validate().map_err(|e| AppError::Config(e.to_string()))?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert every SRT file found in `inputs`.
    ///
    /// Files are converted one after another; a failing file is recorded in
    /// the report and the batch moves on. `output_dir` overrides the
    /// configured output directory. A source reached twice through the inputs
    /// is converted once, and a file whose output path was already written in
    /// this run is reported as failed instead of overwriting that output.
    pub fn run(&self, inputs: &[PathBuf], output_dir: Option<&Path>) -> Result<BatchReport, AppError> {
        let srt_files = Self::collect_srt_files(inputs)?;
        if srt_files.is_empty() {
            return Err(AppError::File(format!("No SRT files found in {:?}", inputs)));
        }

        let output_dir = output_dir
            .map(Path::to_path_buf)
            .or_else(|| self.config.output_dir.clone());
        if let Some(dir) = &output_dir {
            FileManager::ensure_dir(dir).map_err(|e| AppError::File(e.to_string()))?;
        }

        let options = self.config.conversion_options();
        let style_sheet = self.config.style_sheet_text()
            .map_err(|e| AppError::Config(e.to_string()))?;
        let styles = PreparedStyles::new(&style_sheet, options.bilingual);

        let progress_bar = ProgressBar::new(srt_files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("#>-"));

        let mut report = BatchReport {
            total: srt_files.len(),
            ..BatchReport::default()
        };
        // Output path -> source that wrote it
        let mut claimed_outputs: HashMap<PathBuf, PathBuf> = HashMap::new();

        for srt_file in &srt_files {
            let file_name = srt_file.file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            progress_bar.set_message(format!("Converting: {}", file_name));

            let target_dir = match &output_dir {
                Some(dir) => dir.clone(),
                None => srt_file.parent().unwrap_or(Path::new(".")).to_path_buf(),
            };

            let output_path = FileManager::generate_output_path(srt_file, &target_dir);
            if let Some(previous) = claimed_outputs.get(&output_path) {
                let message = format!("Output path {:?} already written by {:?}", output_path, previous);
                progress_bar.suspend(|| error!("Skipping {}: {}", file_name, message));
                report.failed.push((srt_file.clone(), message));
                progress_bar.inc(1);
                continue;
            }

            match self.convert_file(srt_file, &output_path, &styles, options) {
                Ok(output_path) => {
                    progress_bar.suspend(|| info!("Converted: {} -> {:?}", file_name, output_path));
                    claimed_outputs.insert(output_path.clone(), srt_file.clone());
                    report.succeeded.push(output_path);
                }
                Err(e) => {
                    progress_bar.suspend(|| error!("Failed to convert {}: {}", file_name, e));
                    report.failed.push((srt_file.clone(), e.to_string()));
                }
            }

            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();
        info!("{}", report.summary());

        Ok(report)
    }

    fn convert_file(
        &self,
        srt_file: &Path,
        output_path: &Path,
        styles: &PreparedStyles,
        options: ConversionOptions,
    ) -> Result<PathBuf, AppError> {
        debug!("Converting {:?} into {:?}", srt_file, output_path);

        Ok(converter::convert_with_styles(srt_file, output_path, styles, options)?)
    }

    /// Expand files and directories into the list of SRT files to convert.
    ///
    /// Sources are kept in input order; a file reached more than once is only
    /// listed the first time.
    fn collect_srt_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, AppError> {
        let mut srt_files = Vec::new();
        let mut seen = HashSet::new();

        for input in inputs {
            let found = if FileManager::dir_exists(input) {
                FileManager::find_files(input, SRT_EXTENSION).map_err(|e| AppError::File(e.to_string()))?
            } else if FileManager::file_exists(input) {
                vec![input.clone()]
            } else {
                return Err(AppError::File(format!("Input path does not exist: {:?}", input)));
            };

            for srt_file in found {
                let identity = fs::canonicalize(&srt_file).unwrap_or_else(|_| srt_file.clone());
                if seen.insert(identity) {
                    srt_files.push(srt_file);
                } else {
                    debug!("Skipping duplicate input {:?}", srt_file);
                }
            }
        }

        Ok(srt_files)
    }
}
