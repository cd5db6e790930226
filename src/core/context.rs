use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::{Result, bail};
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        collect::RegistryCollector,
        data::FileExtraction,
        extract::FileExtractor,
        file_scanner::{scan_files, scan_roots},
        parsers::csharp::{ParsedSource, parse_csharp_file},
        semantic::ProjectIndex,
    },
};

/// Extraction output of one file.
#[derive(Debug)]
pub struct ExtractedFile {
    pub path: String,
    pub extraction: FileExtraction,
}

/// A file that could not be loaded or parsed.
#[derive(Debug)]
pub struct FailedFile {
    pub path: String,
    pub error: String,
}

/// Results of extracting every scanned file, sorted by path.
#[derive(Debug, Default)]
pub struct ExtractionRun {
    pub files: Vec<ExtractedFile>,
    pub failures: Vec<FailedFile>,
}

impl ExtractionRun {
    /// Number of files that were processed, failed or not.
    pub fn scanned_count(&self) -> usize {
        self.files.len() + self.failures.len()
    }

    pub fn message_count(&self) -> usize {
        self.files.iter().map(|f| f.extraction.messages.len()).sum()
    }

    pub fn plural_count(&self) -> usize {
        self.files.iter().map(|f| f.extraction.plurals.len()).sum()
    }
}

/// Per-run context: merged configuration and the files to extract from.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g. `--source-root`, explicit paths)
/// 2. `.trawlrc.json` config file
/// 3. Built-in defaults
pub struct ExtractContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Directory files are scanned from.
    pub root_dir: PathBuf,

    /// C# files to extract from, sorted.
    pub files: BTreeSet<String>,

    /// Paths that could not be accessed while scanning.
    pub skipped_count: usize,
}

impl ExtractContext {
    /// Load configuration and discover files.
    ///
    /// With explicit `paths`, only those files and directories are scanned;
    /// otherwise the configured includes under the source root are.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid or an explicit path does
    /// not exist.
    pub fn new(common_args: &CommonArgs, paths: &[PathBuf]) -> Result<Self> {
        let search_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&search_dir)?;
        if !config_result.from_file {
            tracing::debug!("No .trawlrc.json found, using default configuration");
        }
        let mut config = config_result.config;

        if let Some(ref source_root) = common_args.source_root {
            config.source_root = source_root.to_string_lossy().to_string();
        }
        let root_dir = PathBuf::from(&config.source_root);

        let scan_result = if paths.is_empty() {
            scan_files(
                &root_dir,
                &config.includes,
                &config.ignores,
                config.ignore_generated_files,
            )
        } else {
            if let Some(missing) = paths.iter().find(|p| !p.exists()) {
                bail!("Path does not exist: {}", missing.display());
            }
            scan_roots(
                paths,
                &root_dir,
                &config.ignores,
                config.ignore_generated_files,
            )
        };

        if scan_result.skipped_count > 0 {
            tracing::warn!(
                "{} path(s) skipped due to access errors",
                scan_result.skipped_count
            );
        }

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            skipped_count: scan_result.skipped_count,
        })
    }

    /// Extract every file in parallel.
    ///
    /// Runs in two passes. All files are parsed first and their type
    /// declarations go into one frozen [`ProjectIndex`], so a script can
    /// derive from a class declared in another file. Each file is then
    /// walked on its own thread against that index. A file that fails to
    /// load never affects the others.
    pub fn extract(&self) -> ExtractionRun {
        let started = Instant::now();

        let parsed: Vec<(String, Result<ParsedSource>)> = self
            .files
            .par_iter()
            .map(|path| (path.clone(), parse_csharp_file(Path::new(path))))
            .collect();

        let project = ProjectIndex::build(
            parsed
                .par_iter()
                .filter_map(|(_, result)| result.as_ref().ok())
                .flat_map_iter(RegistryCollector::summarize)
                .collect(),
        );
        tracing::debug!(types = project.len(), "built project type index");

        let mut outcomes: Vec<(String, Result<FileExtraction>)> = parsed
            .into_par_iter()
            .map(|(path, result)| {
                let extraction = result.map(|source| {
                    if source.has_syntax_errors() {
                        tracing::debug!(path = %path, "file has syntax errors, extracting what parsed");
                    }
                    FileExtractor::with_project(&source, &project).extract()
                });
                (path, extraction)
            })
            .collect();
        outcomes.sort_by(|a, b| a.0.cmp(&b.0));

        let mut run = ExtractionRun::default();
        for (path, outcome) in outcomes {
            match outcome {
                Ok(extraction) => run.files.push(ExtractedFile { path, extraction }),
                Err(err) => {
                    tracing::debug!(path = %path, "extraction failed: {:#}", err);
                    run.failures.push(FailedFile {
                        path,
                        error: format!("{:#}", err),
                    });
                }
            }
        }

        tracing::debug!(
            files = run.scanned_count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "extraction finished"
        );
        run
    }
}
