//! Native open / save-as dialogs behind the form's path fields.

use {
    crate::ui::UI_TEXT,
    rfd::FileDialog,
    std::path::{Path, PathBuf},
};

const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx"];

/// Blocks until the user picks an input workbook or cancels.
pub(crate) fn pick_input_workbook(current: &str) -> Option<PathBuf> {
    let (dir, _) = dialog_location(current);
    let mut dialog = FileDialog::new()
        .set_title(&UI_TEXT.dialog_open_title)
        .add_filter(&UI_TEXT.dialog_filter, WORKBOOK_EXTENSIONS);
    if let Some(dir) = dir {
        dialog = dialog.set_directory(dir);
    }
    dialog.pick_file()
}

/// Blocks until the user chooses where to save the report or cancels.
pub(crate) fn pick_report_path(current: &str) -> Option<PathBuf> {
    let (dir, name) = dialog_location(current);
    let mut dialog = FileDialog::new()
        .set_title(&UI_TEXT.dialog_save_title)
        .add_filter(&UI_TEXT.dialog_filter, WORKBOOK_EXTENSIONS);
    if let Some(dir) = dir {
        dialog = dialog.set_directory(dir);
    }
    if let Some(name) = name {
        dialog = dialog.set_file_name(name);
    }
    dialog.save_file().map(with_xlsx_extension)
}

/// Starting folder and file name for a dialog opened from a path field.
/// Folders that do not exist are left to the platform default.
fn dialog_location(current: &str) -> (Option<PathBuf>, Option<String>) {
    let text = current.trim();
    if text.is_empty() {
        return (None, None);
    }
    let path = Path::new(text);
    if path.is_dir() {
        return (Some(path.to_path_buf()), None);
    }
    let dir = path
        .parent()
        .filter(|parent| parent.is_dir())
        .map(Path::to_path_buf);
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());
    (dir, name)
}

/// Some platforms return the typed name verbatim from a save dialog.
fn with_xlsx_extension(path: PathBuf) -> PathBuf {
    let is_xlsx = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"));
    if is_xlsx {
        path
    } else {
        let mut raw = path.into_os_string();
        raw.push(".xlsx");
        PathBuf::from(raw)
    }
}
