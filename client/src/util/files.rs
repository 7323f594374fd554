//! Turning browser `File` objects into `kyc::DocumentFile`s.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

/// MIME type to record for a file.
///
/// Browsers leave `File.type` empty for extensions they do not recognise
/// (HEIC on some platforms, PDFs dragged from certain apps). Fall back to
/// the extension so accept filters still have something to match.
pub fn effective_mime(declared: &str, name: &str) -> String {
    let declared = declared.trim();
    if !declared.is_empty() {
        return declared.to_ascii_lowercase();
    }
    let ext = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    let guessed = match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("heic") => "image/heic",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    };
    guessed.to_owned()
}

/// Image source for a filled slot's thumbnail. Non-image documents such as
/// PDFs get `None` and are shown as a generic document icon.
pub fn thumbnail(slot: &kyc::FileSlot) -> Option<&str> {
    slot.file().filter(|file| file.is_image()).and(slot.preview())
}

/// Read the whole file into memory.
#[cfg(feature = "csr")]
pub async fn read_document(file: &web_sys::File, source: kyc::IntakeSource) -> Result<kyc::DocumentFile, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("failed to read {}: {e:?}", file.name()))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let name = file.name();
    let mime = effective_mime(&file.type_(), &name);
    Ok(kyc::DocumentFile::new(name, mime, bytes, source))
}
