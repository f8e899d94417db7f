use crate::models::InputFile;
use log::{debug, warn};
use relative_path::{Component, RelativePath, RelativePathBuf};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Input unavailable: {path}: {source}")]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid input directory: {0}")]
    InvalidInputDir(String),
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),
}

impl IoError {
    fn unavailable(path: &Path, kind: ErrorKind, msg: &str) -> Self {
        IoError::InputUnavailable {
            path: path.to_path_buf(),
            source: std::io::Error::new(kind, msg.to_string()),
        }
    }
}

/// Read a dasha text file.
///
/// Anything that keeps the file from being read as text (missing, permission
/// denied, a directory, not UTF-8, binary) is `InputUnavailable`.
pub fn read_input(path: &Path) -> Result<String, IoError> {
    if path.is_dir() {
        return Err(IoError::unavailable(path, ErrorKind::InvalidInput, "is a directory"));
    }
    let bytes = fs::read(path).map_err(|source| IoError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    if bytes.contains(&0) {
        return Err(IoError::unavailable(path, ErrorKind::InvalidData, "binary content"));
    }
    String::from_utf8(bytes).map_err(|e| IoError::InputUnavailable {
        path: path.to_path_buf(),
        source: std::io::Error::new(ErrorKind::InvalidData, e),
    })
}

/// Write an output document, creating parent directories.
///
/// Only plain path components are accepted, so nothing lands outside
/// `output_root`.
pub fn write_output(
    relative_path: &RelativePath,
    output_root: &Path,
    content: &str,
) -> Result<PathBuf, IoError> {
    if relative_path
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return Err(IoError::Io(std::io::Error::new(
            ErrorKind::InvalidInput,
            format!("output path {relative_path} leaves the output directory"),
        )));
    }
    let absolute_path = relative_path.to_path(output_root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)?;
    Ok(absolute_path)
}

/// Scan for input files whose name matches `pattern` (a glob such as `*.txt`).
pub fn scan_input_files(input_root: &Path, pattern: &str) -> Result<Vec<InputFile>, IoError> {
    validate_input_dir(input_root)?;
    let pattern = glob::Pattern::new(pattern)?;

    let mut paths = Vec::new();
    scan_directory_recursive(input_root, &pattern, &mut paths)?;
    paths.sort();

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let relative = path.strip_prefix(input_root).unwrap_or(&path);
        match RelativePathBuf::from_path(relative) {
            Ok(rel) => files.push(InputFile::new(rel)),
            Err(e) => warn!("skipping {}: {e}", path.display()),
        }
    }
    debug!("found {} input file(s) under {}", files.len(), input_root.display());
    Ok(files)
}

fn scan_directory_recursive(
    dir: &Path,
    pattern: &glob::Pattern,
    files: &mut Vec<PathBuf>,
) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, pattern, files)?;
        } else if let Some(name) = path.file_name().and_then(|n| n.to_str())
            && pattern.matches(name)
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_input_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidInputDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}
