//! IndexBuilder - discovery, extraction and store rebuild

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use walkdir::WalkDir;

use super::report::{BuildFailure, BuildReport};
use crate::config::IndexConfig;
use crate::features::extraction::{FileExtraction, SymbolExtractor};
use crate::features::parsing::TreeSource;
use crate::features::storage::IndexStore;
use crate::shared::models::{Result, TreeIndexError};

/// Output of the discovery walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    /// Source files to index, sorted
    pub files: Vec<String>,
    /// Entries the walk could not read
    pub failures: Vec<BuildFailure>,
}

/// `/`-joined path of `path` below `repo_root`
fn relative_path(repo_root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(repo_root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Builds a complete index for one repository
pub struct IndexBuilder {
    config: IndexConfig,
    source: Arc<dyn TreeSource>,
    extractor: SymbolExtractor,
}

impl IndexBuilder {
    /// Builder with the tree source named in `config`
    pub fn new(config: IndexConfig) -> Result<Self> {
        config.validate()?;
        let source = config.tree_source.build()?;
        Ok(Self::with_source(config, source))
    }

    pub fn with_source(config: IndexConfig, source: Arc<dyn TreeSource>) -> Self {
        let extractor = SymbolExtractor::from_config(&config);
        Self {
            config,
            source,
            extractor,
        }
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Repository-relative source paths, `/`-separated and sorted
    ///
    /// Only an unreadable repository root is an error. Entries the walk
    /// cannot read are reported in `failures` and skipped.
    pub fn discover(&self, repo_root: &Path) -> Result<Discovery> {
        std::fs::read_dir(repo_root).map_err(|e| {
            TreeIndexError::io(format!("Cannot read repository root: {}", e))
                .with_file(repo_root.display().to_string())
                .with_source(e)
        })?;

        let mut discovery = Discovery::default();

        let walker = WalkDir::new(repo_root)
            .follow_links(self.config.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0
                    || !(e.file_type().is_dir()
                        && self.config.is_excluded_dir(&e.file_name().to_string_lossy()))
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let file_path = e
                        .path()
                        .map(|path| relative_path(repo_root, path))
                        .unwrap_or_default();
                    tracing::warn!(file = %file_path, error = %e, "entry skipped during discovery");
                    discovery.failures.push(BuildFailure {
                        file_path,
                        message: TreeIndexError::io(format!("Walk error: {}", e)).to_string(),
                    });
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let indexed = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| self.config.is_source_extension(ext))
                .unwrap_or(false);
            if indexed {
                discovery.files.push(relative_path(repo_root, path));
            }
        }

        discovery.files.sort();
        Ok(discovery)
    }

    /// Load and extract one file
    pub fn extract_file(&self, repo_root: &Path, relative_path: &str) -> Result<FileExtraction> {
        let parsed = self.source.load(repo_root, relative_path)?;
        Ok(self.extractor.extract(parsed))
    }

    /// Extract every file, keeping input order
    pub fn extract_all(
        &self,
        repo_root: &Path,
        files: &[String],
    ) -> Result<Vec<(String, Result<FileExtraction>)>> {
        let run = |path: &String| (path.clone(), self.extract_file(repo_root, path));

        if cfg!(feature = "parallel") && self.config.parallel {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.config.worker_threads())
                .build()
                .map_err(|e| TreeIndexError::internal(format!("Thread pool: {}", e)))?;
            return Ok(pool.install(|| files.par_iter().map(run).collect()));
        }

        Ok(files.iter().map(run).collect())
    }

    /// Discover, extract and replace the contents of `store`
    pub fn build(&self, repo_root: &Path, store: &dyn IndexStore) -> Result<BuildReport> {
        let start = Instant::now();
        let Discovery { files, failures } = self.discover(repo_root)?;
        tracing::info!(
            repo = %repo_root.display(),
            files = files.len(),
            source = self.source.name(),
            "starting index build"
        );

        let mut report = BuildReport {
            files_discovered: files.len(),
            failures,
            ..BuildReport::default()
        };
        let mut extractions = Vec::with_capacity(files.len());

        for (file_path, result) in self.extract_all(repo_root, &files)? {
            match result {
                Ok(extraction) => extractions.push(extraction),
                Err(e) => {
                    tracing::warn!(file = %file_path, error = %e, "file skipped");
                    report.failures.push(BuildFailure {
                        file_path,
                        message: e.to_string(),
                    });
                }
            }
        }

        let stats = store.rebuild(&extractions)?;

        report.files_indexed = stats.files;
        report.files_skipped = report.failures.len();
        report.symbols = stats.symbols;
        report.references = stats.references;
        report.elapsed_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            files = report.files_indexed,
            skipped = report.files_skipped,
            symbols = report.symbols,
            references = report.references,
            elapsed_ms = report.elapsed_ms,
            "index build finished"
        );

        Ok(report)
    }
}
