use crate::pipeline::error::PipelineError;
use glob::glob;
use std::path::{Path, PathBuf};

/// Expand the configured input into the list of files to read.
///
/// A file path is used as is. A directory is searched with `pattern`
/// (relative to the directory), keeping regular files only, in sorted order
/// so that record order is stable across runs.
pub fn discover_inputs(path: &Path, pattern: &str) -> Result<Vec<PathBuf>, PipelineError> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let pattern = resolve_glob(path, pattern);
    let mut files: Vec<_> = glob(&pattern)
        .map_err(|e| PipelineError::Pattern {
            pattern: pattern.clone(),
            source: e,
        })?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        return Err(PipelineError::NoInputFiles {
            dir: path.to_path_buf(),
            pattern,
        });
    }

    files.sort();
    Ok(files)
}

/// Join a glob pattern onto its root directory.
pub fn resolve_glob(root: &Path, pattern: &str) -> String {
    root.join(pattern).to_string_lossy().into_owned()
}
