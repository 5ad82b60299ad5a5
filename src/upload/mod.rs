mod file_filter;
mod types;

pub use file_filter::{from_dropped, is_accepted_drop, load_from_path, RESUME_EXTENSIONS};
pub use types::{FileSource, SelectedFile, UploadStatus};
