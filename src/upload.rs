//! Upload state for the handwriting homework page.
//!
//! Files are opaque: only the name, size and declared MIME type are ever read
//! from the browser, the bytes never are. Text and PDF can both be held at the
//! same time; [`HomeworkContent`] resolves which one counts (PDF wins).

use thiserror::Error;

use crate::toast::Notification;

/// What the page knows about a user-selected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    pub name: String,
    /// Bytes
    pub size: u64,
    /// MIME type reported by the browser, possibly empty
    pub declared_type: String,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, size: u64, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            declared_type: declared_type.into(),
        }
    }

    pub fn is_image(&self) -> bool {
        self.declared_type.starts_with("image/")
    }

    /// Size in kilobytes with two decimals, e.g. `12.50 KB`.
    pub fn size_label(&self) -> String {
        format!("{:.2} KB", self.size as f64 / 1024.0)
    }
}

impl From<&web_sys::File> for FileHandle {
    fn from(file: &web_sys::File) -> Self {
        Self::new(file.name(), file.size() as u64, file.type_())
    }
}

/// How a file reached the handwriting upload target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOrigin {
    /// Picked through the file dialog.
    Browse,
    /// Dropped onto the drop zone.
    Drop,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Invalid file type")]
    UnsupportedDrop,

    #[error("Missing information")]
    MissingInformation,
}

impl WizardError {
    fn hint(&self) -> &'static str {
        match self {
            WizardError::UnsupportedDrop => "Please upload an image file.",
            WizardError::MissingInformation => {
                "Please upload a handwriting sample and enter homework text or PDF."
            }
        }
    }

    pub fn to_notification(&self) -> Notification {
        Notification::destructive(self.to_string(), self.hint())
    }
}

/// The homework that would be rendered in the user's handwriting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkContent<'a> {
    Text(&'a str),
    Pdf(&'a FileHandle),
}

impl HomeworkContent<'_> {
    pub fn kind_label(&self) -> &'static str {
        match self {
            HomeworkContent::Text(_) => "text",
            HomeworkContent::Pdf(_) => "PDF",
        }
    }

    pub fn preview_caption(&self) -> String {
        format!(
            "This is how your {} will be converted to match your handwriting style",
            self.kind_label()
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadWizard {
    handwriting_sample: Option<FileHandle>,
    homework_text: String,
    homework_pdf: Option<FileHandle>,
}

impl UploadWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handwriting_sample(&self) -> Option<&FileHandle> {
        self.handwriting_sample.as_ref()
    }

    pub fn homework_text(&self) -> &str {
        &self.homework_text
    }

    pub fn homework_pdf(&self) -> Option<&FileHandle> {
        self.homework_pdf.as_ref()
    }

    /// Stores a handwriting sample.
    ///
    /// Dropped files must declare an image type; anything else (or a drop that
    /// carried no file) leaves the current sample in place. Browsed files are
    /// taken as-is. A browse that yields no file does nothing.
    pub fn upload_handwriting_sample(
        &mut self,
        file: Option<FileHandle>,
        origin: UploadOrigin,
    ) -> Option<Notification> {
        match (origin, file) {
            (UploadOrigin::Browse, None) => None,
            (UploadOrigin::Browse, Some(file)) => Some(self.store_sample(file)),
            (UploadOrigin::Drop, Some(file)) if file.is_image() => Some(self.store_sample(file)),
            (UploadOrigin::Drop, file) => {
                let declared = file.map(|f| f.declared_type).unwrap_or_default();
                log::warn!("Rejected handwriting drop with type {:?}", declared);
                Some(WizardError::UnsupportedDrop.to_notification())
            }
        }
    }

    fn store_sample(&mut self, file: FileHandle) -> Notification {
        log::info!("Handwriting sample set: {} ({} bytes)", file.name, file.size);
        let toast = uploaded(&file, "Handwriting sample uploaded!");
        self.handwriting_sample = Some(file);
        toast
    }

    /// The text box is disabled while a PDF is present.
    pub fn text_locked(&self) -> bool {
        self.homework_pdf.is_some()
    }

    /// Replaces the typed homework. Ignored while a PDF is present.
    pub fn set_homework_text(&mut self, text: impl Into<String>) -> bool {
        if self.text_locked() {
            return false;
        }
        self.homework_text = text.into();
        true
    }

    /// Replaces the homework PDF. Typed text is kept as it is.
    pub fn upload_homework_pdf(&mut self, file: Option<FileHandle>) -> Option<Notification> {
        let file = file?;
        log::info!("Homework PDF set: {} ({} bytes)", file.name, file.size);
        let toast = uploaded(&file, "PDF uploaded!");
        self.homework_pdf = Some(file);
        Some(toast)
    }

    /// PDF if one is set, otherwise non-empty text.
    pub fn content(&self) -> Option<HomeworkContent<'_>> {
        match &self.homework_pdf {
            Some(pdf) => Some(HomeworkContent::Pdf(pdf)),
            None if !self.homework_text.is_empty() => {
                Some(HomeworkContent::Text(&self.homework_text))
            }
            None => None,
        }
    }

    /// Checks that a sample and some homework content are present.
    pub fn check_export(&self) -> Result<HomeworkContent<'_>, WizardError> {
        if self.handwriting_sample.is_none() {
            return Err(WizardError::MissingInformation);
        }
        self.content().ok_or(WizardError::MissingInformation)
    }

    /// Content shown in the preview panel, if the panel is shown at all.
    pub fn preview(&self) -> Option<HomeworkContent<'_>> {
        self.check_export().ok()
    }

    /// Stub: no print file is produced.
    pub fn request_export(&self) -> Notification {
        match self.check_export() {
            Ok(content) => {
                log::info!("Export requested for homework {}", content.kind_label());
                Notification::new(
                    "Generating 3D print file...",
                    "Your homework is being converted to 3D printer format.",
                )
            }
            Err(err) => {
                log::warn!("Export rejected: {}", err);
                err.to_notification()
            }
        }
    }

    /// Line under the text box.
    pub fn status_line(&self) -> String {
        if self.homework_pdf.is_some() {
            "PDF uploaded".to_string()
        } else {
            format!("{} characters", self.homework_text.chars().count())
        }
    }

    pub fn pdf_button_label(&self) -> &'static str {
        if self.homework_pdf.is_some() {
            "Change PDF"
        } else {
            "Upload PDF"
        }
    }

    pub fn drop_zone_headline(&self) -> String {
        self.handwriting_sample
            .as_ref()
            .map(|f| f.name.clone())
            .unwrap_or_else(|| "Drop your handwriting image here".to_string())
    }
}

fn uploaded(file: &FileHandle, title: &str) -> Notification {
    Notification::new(title, format!("{} has been uploaded successfully.", file.name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(name: &str) -> FileHandle {
        FileHandle::new(name, 2048, "image/png")
    }

    fn pdf(name: &str) -> FileHandle {
        FileHandle::new(name, 51_200, "application/pdf")
    }

    fn with_sample() -> UploadWizard {
        let mut wizard = UploadWizard::new();
        wizard.upload_handwriting_sample(Some(png("sample.png")), UploadOrigin::Browse);
        wizard
    }

    #[test]
    fn test_new_wizard_is_empty() {
        let wizard = UploadWizard::new();
        assert!(wizard.handwriting_sample().is_none());
        assert_eq!(wizard.homework_text(), "");
        assert!(wizard.homework_pdf().is_none());
        assert!(wizard.preview().is_none());
        assert_eq!(wizard.status_line(), "0 characters");
        assert_eq!(wizard.pdf_button_label(), "Upload PDF");
        assert_eq!(wizard.drop_zone_headline(), "Drop your handwriting image here");
    }

    #[test]
    fn test_export_without_anything_is_missing_information() {
        let toast = UploadWizard::new().request_export();
        assert!(toast.is_destructive());
        assert_eq!(toast.title, "Missing information");
        assert_eq!(
            toast.description,
            "Please upload a handwriting sample and enter homework text or PDF."
        );
    }

    #[test]
    fn test_export_with_sample_and_text() {
        let mut wizard = with_sample();
        assert!(wizard.set_homework_text("Hello"));

        let toast = wizard.request_export();
        assert!(!toast.is_destructive());
        assert_eq!(toast.title, "Generating 3D print file...");
        assert_eq!(
            toast.description,
            "Your homework is being converted to 3D printer format."
        );
    }

    #[test]
    fn test_export_with_sample_and_pdf() {
        let mut wizard = with_sample();
        wizard.upload_homework_pdf(Some(pdf("essay.pdf")));

        assert_eq!(wizard.homework_text(), "");
        let toast = wizard.request_export();
        assert_eq!(toast.title, "Generating 3D print file...");
        assert!(!toast.is_destructive());
    }

    #[test]
    fn test_export_with_text_but_no_sample() {
        let mut wizard = UploadWizard::new();
        wizard.set_homework_text("Hello");
        assert_eq!(wizard.check_export(), Err(WizardError::MissingInformation));
        assert!(wizard.request_export().is_destructive());
        assert!(wizard.preview().is_none());
    }

    #[test]
    fn test_export_with_sample_only() {
        let wizard = with_sample();
        assert!(wizard.request_export().is_destructive());
    }

    #[test]
    fn test_dropped_text_file_is_rejected() {
        let mut wizard = UploadWizard::new();
        let toast = wizard
            .upload_handwriting_sample(
                Some(FileHandle::new("notes.txt", 10, "text/plain")),
                UploadOrigin::Drop,
            )
            .unwrap();

        assert!(toast.is_destructive());
        assert_eq!(toast.title, "Invalid file type");
        assert_eq!(toast.description, "Please upload an image file.");
        assert!(wizard.handwriting_sample().is_none());
    }

    #[test]
    fn test_rejected_drop_keeps_previous_sample() {
        let mut wizard = with_sample();
        wizard.upload_handwriting_sample(
            Some(FileHandle::new("notes.txt", 10, "text/plain")),
            UploadOrigin::Drop,
        );
        assert_eq!(wizard.handwriting_sample(), Some(&png("sample.png")));
    }

    #[test]
    fn test_empty_drop_is_rejected() {
        let mut wizard = UploadWizard::new();
        let toast = wizard.upload_handwriting_sample(None, UploadOrigin::Drop).unwrap();
        assert!(toast.is_destructive());
        assert!(wizard.handwriting_sample().is_none());
    }

    #[test]
    fn test_dropped_image_is_accepted() {
        let mut wizard = UploadWizard::new();
        let toast = wizard
            .upload_handwriting_sample(Some(png("hand.png")), UploadOrigin::Drop)
            .unwrap();

        assert_eq!(toast.title, "Handwriting sample uploaded!");
        assert_eq!(toast.description, "hand.png has been uploaded successfully.");
        assert_eq!(wizard.drop_zone_headline(), "hand.png");
    }

    #[test]
    fn test_browse_accepts_any_type() {
        let mut wizard = UploadWizard::new();
        let toast = wizard.upload_handwriting_sample(
            Some(FileHandle::new("scan.pdf", 900, "application/pdf")),
            UploadOrigin::Browse,
        );
        assert!(toast.is_some_and(|t| !t.is_destructive()));
        assert_eq!(wizard.handwriting_sample().map(|f| f.name.as_str()), Some("scan.pdf"));
    }

    #[test]
    fn test_browse_without_file_is_noop() {
        let mut wizard = with_sample();
        assert!(wizard.upload_handwriting_sample(None, UploadOrigin::Browse).is_none());
        assert!(wizard.upload_homework_pdf(None).is_none());
        assert_eq!(wizard.handwriting_sample(), Some(&png("sample.png")));
    }

    #[test]
    fn test_new_sample_replaces_old() {
        let mut wizard = with_sample();
        wizard.upload_handwriting_sample(Some(png("second.png")), UploadOrigin::Drop);
        assert_eq!(wizard.handwriting_sample(), Some(&png("second.png")));
    }

    #[test]
    fn test_pdf_takes_precedence_in_preview_and_keeps_text() {
        let mut wizard = with_sample();
        wizard.set_homework_text("abc");
        let toast = wizard.upload_homework_pdf(Some(pdf("essay.pdf"))).unwrap();

        assert_eq!(toast.title, "PDF uploaded!");
        assert_eq!(toast.description, "essay.pdf has been uploaded successfully.");
        assert_eq!(wizard.homework_text(), "abc");

        let preview = wizard.preview().unwrap();
        assert_eq!(preview, HomeworkContent::Pdf(&pdf("essay.pdf")));
        assert_eq!(
            preview.preview_caption(),
            "This is how your PDF will be converted to match your handwriting style"
        );
    }

    #[test]
    fn test_text_preview() {
        let mut wizard = with_sample();
        wizard.set_homework_text("Line one\nLine two");
        let preview = wizard.preview().unwrap();
        assert_eq!(preview, HomeworkContent::Text("Line one\nLine two"));
        assert_eq!(
            preview.preview_caption(),
            "This is how your text will be converted to match your handwriting style"
        );
    }

    #[test]
    fn test_text_is_locked_while_pdf_present() {
        let mut wizard = UploadWizard::new();
        wizard.set_homework_text("draft");
        wizard.upload_homework_pdf(Some(pdf("essay.pdf")));

        assert!(wizard.text_locked());
        assert!(!wizard.set_homework_text("changed"));
        assert_eq!(wizard.homework_text(), "draft");
    }

    #[test]
    fn test_text_accepts_empty_and_verbatim() {
        let mut wizard = UploadWizard::new();
        assert!(wizard.set_homework_text("  spaced  "));
        assert_eq!(wizard.homework_text(), "  spaced  ");
        assert!(wizard.set_homework_text(""));
        assert_eq!(wizard.homework_text(), "");
    }

    #[test]
    fn test_new_pdf_replaces_old() {
        let mut wizard = UploadWizard::new();
        wizard.upload_homework_pdf(Some(pdf("one.pdf")));
        wizard.upload_homework_pdf(Some(pdf("two.pdf")));
        assert_eq!(wizard.homework_pdf().map(|f| f.name.as_str()), Some("two.pdf"));
        assert_eq!(wizard.pdf_button_label(), "Change PDF");
    }

    #[test]
    fn test_status_line_counts_characters() {
        let mut wizard = UploadWizard::new();
        wizard.set_homework_text("naïve");
        assert_eq!(wizard.status_line(), "5 characters");

        wizard.upload_homework_pdf(Some(pdf("essay.pdf")));
        assert_eq!(wizard.status_line(), "PDF uploaded");
    }

    #[test]
    fn test_size_label() {
        assert_eq!(FileHandle::new("a.png", 12_800, "image/png").size_label(), "12.50 KB");
        assert_eq!(FileHandle::new("b.png", 0, "image/png").size_label(), "0.00 KB");
    }

    #[test]
    fn test_is_image() {
        assert!(FileHandle::new("a.jpg", 1, "image/jpeg").is_image());
        assert!(!FileHandle::new("a", 1, "").is_image());
        assert!(!FileHandle::new("a.pdf", 1, "application/pdf").is_image());
    }
}
