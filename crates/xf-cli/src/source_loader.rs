use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::CliError;

/// Every `.xml` file under `results_dir`, keyed by its slash-separated path
/// relative to the directory, in path order.
pub(crate) fn collect_result_files(
    results_dir: &Path,
) -> Result<Vec<(String, PathBuf)>, CliError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(results_dir)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|error| CliError::ResultScan {
            path: results_dir.display().to_string(),
            message: error.to_string(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("xml") {
            continue;
        }

        let relative = path
            .strip_prefix(results_dir)
            .map_err(|error| CliError::ResultScan {
                path: results_dir.display().to_string(),
                message: error.to_string(),
            })?
            .to_string_lossy()
            .replace('\\', "/");
        files.push((relative, path.to_path_buf()));
    }

    if files.is_empty() {
        return Err(CliError::ResultEmpty {
            path: results_dir.display().to_string(),
        });
    }

    Ok(files)
}
