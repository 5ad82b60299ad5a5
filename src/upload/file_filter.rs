use crate::upload::types::{FileSource, SelectedFile};
use std::path::Path;
use tracing::debug;

/// Extensions offered by the browse dialog.
pub const RESUME_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

const PDF_MIME: &str = "application/pdf";
const FALLBACK_MIME: &str = "application/octet-stream";

/// Dropped files are only taken when their declared type is a PDF or some
/// kind of document.
pub fn is_accepted_drop(mime: &str) -> bool {
    mime == PDF_MIME || mime.contains("document")
}

fn mime_for_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    let mime = match ext.as_str() {
        "pdf" => PDF_MIME,
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "odt" => "application/vnd.oasis.opendocument.text",
        "rtf" => "application/rtf",
        "txt" => "text/plain",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => return None,
    };
    Some(mime)
}

/// Resolves the declared type of a file: an explicit hint from the windowing
/// layer, then the extension, then the content itself.
pub fn declared_mime(path: &Path, hint: &str) -> String {
    if !hint.is_empty() {
        return hint.to_string();
    }

    if let Some(mime) = mime_for_extension(path) {
        return mime.to_string();
    }

    match infer::get_from_path(path) {
        Ok(Some(kind)) => kind.mime_type().to_string(),
        _ => FALLBACK_MIME.to_string(),
    }
}

pub fn load_from_path(path: &Path) -> std::io::Result<SelectedFile> {
    let metadata = std::fs::metadata(path)?;
    let name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    Ok(SelectedFile {
        name,
        mime: declared_mime(path, ""),
        size: Some(metadata.len()),
        source: FileSource::Path(path.to_path_buf()),
    })
}

/// Converts a file dropped onto the window. Returns `None` when the drop
/// carried neither a path nor bytes.
pub fn from_dropped(file: &egui::DroppedFile) -> Option<SelectedFile> {
    if let Some(bytes) = &file.bytes {
        let mime = if file.mime.is_empty() {
            infer::get(bytes)
                .map(|kind| kind.mime_type().to_string())
                .or_else(|| mime_for_extension(Path::new(&file.name)).map(str::to_string))
                .unwrap_or_else(|| FALLBACK_MIME.to_string())
        } else {
            file.mime.clone()
        };
        return Some(SelectedFile::from_bytes(file.name.clone(), mime, bytes.clone()));
    }

    let path = file.path.as_ref()?;
    let size = std::fs::metadata(path).ok().map(|m| m.len());
    let name = if file.name.is_empty() {
        path.file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    } else {
        file.name.clone()
    };

    debug!("Dropped file resolved from path: {}", path.display());
    Some(SelectedFile {
        name,
        mime: declared_mime(path, &file.mime),
        size,
        source: FileSource::Path(path.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Arc;

    #[test]
    fn accepts_pdf_and_document_types() {
        assert!(is_accepted_drop("application/pdf"));
        assert!(is_accepted_drop(
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        ));
        assert!(is_accepted_drop("application/vnd.oasis.opendocument.text"));
    }

    #[test]
    fn rejects_other_types() {
        assert!(!is_accepted_drop("image/png"));
        assert!(!is_accepted_drop("text/plain"));
        assert!(!is_accepted_drop("application/msword"));
        assert!(!is_accepted_drop(""));
    }

    #[test]
    fn hint_takes_precedence_over_extension() {
        let path = PathBuf::from("resume.pdf");
        assert_eq!(declared_mime(&path, "text/plain"), "text/plain");
        assert_eq!(declared_mime(&path, ""), "application/pdf");
    }

    #[test]
    fn extension_lookup_is_case_insensitive() {
        assert_eq!(
            declared_mime(Path::new("CV.DOCX"), ""),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
    }

    #[test]
    fn dropped_bytes_are_sniffed_when_untyped() {
        let pdf: Arc<[u8]> = Arc::from(&b"%PDF-1.7\n%rest of file"[..]);
        let dropped = egui::DroppedFile {
            name: "resume".to_string(),
            bytes: Some(pdf),
            ..Default::default()
        };

        let file = from_dropped(&dropped).unwrap();
        assert_eq!(file.mime, "application/pdf");
        assert_eq!(file.size, Some(22));
    }

    #[test]
    fn empty_drop_yields_nothing() {
        assert!(from_dropped(&egui::DroppedFile::default()).is_none());
    }
}
