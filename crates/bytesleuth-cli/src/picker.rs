/// Interactive file and directory selection.
///
/// Used when the command line names no paths. The native dialog backend is
/// behind the `picker` feature; without it the picker returns nothing and
/// the run ends with "no files selected".
use std::path::PathBuf;

/// Source of interactively chosen paths.
pub trait Picker {
    /// Let the user choose any number of files. Empty when cancelled.
    fn pick_files(&self) -> Vec<PathBuf>;

    /// Let the user choose one directory. `None` when cancelled.
    fn pick_directory(&self) -> Option<PathBuf>;
}

/// Native OS file dialogs.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialogPicker;

#[cfg(feature = "picker")]
impl Picker for DialogPicker {
    fn pick_files(&self) -> Vec<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Select files to analyze")
            .pick_files()
            .unwrap_or_default()
    }

    fn pick_directory(&self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Select directory to analyze")
            .pick_folder()
    }
}

#[cfg(not(feature = "picker"))]
impl Picker for DialogPicker {
    fn pick_files(&self) -> Vec<PathBuf> {
        tracing::warn!("interactive picker not available in this build; pass -f or -d");
        Vec::new()
    }

    fn pick_directory(&self) -> Option<PathBuf> {
        tracing::warn!("interactive picker not available in this build; pass -f or -d");
        None
    }
}
