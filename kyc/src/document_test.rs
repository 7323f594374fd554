use super::*;

fn file(name: &str, mime: &str) -> DocumentFile {
    DocumentFile::new(name, mime, vec![1_u8, 2, 3], IntakeSource::Picker)
}

// =============================================================
// DocumentFile
// =============================================================

#[test]
fn extension_is_lowercased() {
    assert_eq!(file("Scan.PDF", "application/pdf").extension().as_deref(), Some("pdf"));
}

#[test]
fn extension_absent_for_dotfiles_and_bare_names() {
    assert_eq!(file(".hidden", "text/plain").extension(), None);
    assert_eq!(file("README", "text/plain").extension(), None);
    assert_eq!(file("trailing.", "text/plain").extension(), None);
}

#[test]
fn data_url_embeds_mime_and_base64() {
    let doc = DocumentFile::new("a.png", "image/png", b"hi".to_vec(), IntakeSource::DragDrop);
    assert_eq!(doc.data_url(), "data:image/png;base64,aGk=");
}

#[test]
fn data_url_falls_back_to_octet_stream() {
    let doc = DocumentFile::new("blob", "", b"hi".to_vec(), IntakeSource::Picker);
    assert!(doc.data_url().starts_with("data:application/octet-stream;base64,"));
}

#[test]
fn debug_output_omits_bytes() {
    let doc = file("a.jpg", "image/jpeg");
    let dbg = format!("{doc:?}");
    assert!(dbg.contains("len: 3"));
    assert!(!dbg.contains("[1, 2, 3]"));
}

#[test]
fn is_image_checks_mime_family() {
    assert!(file("a.jpg", "image/jpeg").is_image());
    assert!(!file("a.pdf", "application/pdf").is_image());
}

// =============================================================
// AcceptFilter
// =============================================================

#[test]
fn images_filter_accepts_any_image_mime() {
    let filter = AcceptFilter::images();
    assert!(filter.accepts(&file("a.png", "image/png")));
    assert!(filter.accepts(&file("a.heic", "image/heic")));
    assert!(!filter.accepts(&file("a.pdf", "application/pdf")));
}

#[test]
fn images_and_pdf_filter_matches_by_extension() {
    let filter = AcceptFilter::images_and_pdf();
    assert_eq!(filter.as_attr(), "image/*,.pdf");
    assert!(filter.accepts(&file("aadhar.pdf", "application/pdf")));
    assert!(filter.accepts(&file("aadhar.PDF", "")));
    assert!(!filter.accepts(&file("notes.txt", "text/plain")));
}

#[test]
fn exact_mime_rule_is_case_insensitive() {
    let filter = AcceptFilter::parse("Application/PDF");
    assert!(filter.accepts(&file("x", "application/pdf")));
}

#[test]
fn empty_filter_accepts_everything() {
    let filter = AcceptFilter::parse(" , ");
    assert!(filter.accepts(&file("x.bin", "application/octet-stream")));
}
