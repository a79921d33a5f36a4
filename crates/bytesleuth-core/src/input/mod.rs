/// Input resolution — turns requested files and directories into the list
/// of paths to analyse, and reads each one into memory.
///
/// Directories are listed one level deep only. Every path that cannot be
/// used is recorded as an [`InputError`] in the [`Selection`] rather than
/// dropped, so the caller can report it and still process the rest.
use crate::error::InputError;
use crate::model::FileIdentity;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A file read fully into memory, ready for analysis.
#[derive(Debug, Clone)]
pub struct ResolvedInput {
    pub identity: FileIdentity,
    pub bytes: Vec<u8>,
}

/// The outcome of resolving a set of requested paths.
#[derive(Debug, Default)]
pub struct Selection {
    /// Regular files to analyse, in request order.
    pub files: Vec<PathBuf>,
    /// Paths that were requested but cannot be analysed.
    pub errors: Vec<InputError>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Add explicitly requested files, validating each one.
    pub fn add_files<P: AsRef<Path>>(&mut self, paths: &[P]) {
        for path in paths {
            let path = path.as_ref();
            match validate_file(path) {
                Ok(()) => {
                    info!("File '{}' provided.", path.display());
                    self.files.push(path.to_path_buf());
                }
                Err(e) => {
                    debug!("{e}");
                    self.errors.push(e);
                }
            }
        }
    }

    /// Add the top-level files of each requested directory.
    pub fn add_dirs<P: AsRef<Path>>(&mut self, dirs: &[P]) {
        for dir in dirs {
            let dir = dir.as_ref();
            match list_directory(dir) {
                Ok(listing) => {
                    info!(
                        "Directory '{}' provided with {} files.",
                        dir.display(),
                        listing.files.len()
                    );
                    self.files.extend(listing.files);
                    self.errors.extend(listing.errors);
                }
                Err(e) => {
                    debug!("{e}");
                    self.errors.push(e);
                }
            }
        }
    }
}

/// Resolve explicit file and directory requests in one go.
pub fn resolve<F: AsRef<Path>, D: AsRef<Path>>(files: &[F], dirs: &[D]) -> Selection {
    let mut selection = Selection::new();
    selection.add_files(files);
    selection.add_dirs(dirs);
    selection
}

/// Check that `path` exists and is a regular file (symlinks are followed).
pub fn validate_file(path: &Path) -> Result<(), InputError> {
    if !path.exists() {
        return Err(InputError::NotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(InputError::NotAFile(path.to_path_buf()));
    }
    Ok(())
}

/// Files found directly inside one directory, plus any entries that could
/// not be inspected.
#[derive(Debug, Default)]
pub struct DirListing {
    pub files: Vec<PathBuf>,
    pub errors: Vec<InputError>,
}

/// List the regular files directly inside `dir`, sorted by name.
///
/// Subdirectories are not descended into. A directory with no files is an
/// error so the user learns why nothing was analysed.
pub fn list_directory(dir: &Path) -> Result<DirListing, InputError> {
    if !dir.exists() {
        return Err(InputError::NotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(InputError::NotADirectory(dir.to_path_buf()));
    }

    let walker = jwalk::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(jwalk::Parallelism::Serial);

    let mut listing = DirListing::default();
    for entry_result in walker {
        match entry_result {
            Ok(entry) => {
                let path = entry.path();
                match std::fs::metadata(&path) {
                    Ok(meta) if meta.is_file() => listing.files.push(path),
                    Ok(meta) if meta.is_dir() => {
                        debug!("skipping subdirectory {}", path.display());
                    }
                    Ok(_) => {
                        warn!("'{}' is not a regular file", path.display());
                        listing.errors.push(InputError::NotAFile(path));
                    }
                    // Dangling symlink or an entry that vanished mid-listing.
                    Err(source) => {
                        warn!("cannot inspect '{}': {source}", path.display());
                        listing.errors.push(InputError::Read { path, source });
                    }
                }
            }
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| dir.to_path_buf());
                listing.errors.push(InputError::Read {
                    path,
                    source: std::io::Error::other(err.to_string()),
                });
            }
        }
    }

    if listing.files.is_empty() && listing.errors.is_empty() {
        return Err(InputError::EmptyDirectory(dir.to_path_buf()));
    }
    Ok(listing)
}

/// Read `path` in binary mode, untransformed.
pub fn read_input(path: &Path) -> Result<ResolvedInput, InputError> {
    let bytes = std::fs::read(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(ResolvedInput {
        identity: FileIdentity::new(path, bytes.len() as u64),
        bytes,
    })
}
