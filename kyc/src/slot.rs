//! Document slots.
//!
//! DESIGN
//! ======
//! A [`FileSlot`] holds at most one document, a preview derived from it, and
//! an optional error. The preview is never set independently: it is rebuilt
//! every time the file reference changes, so "preview present iff file
//! present" holds by construction.

#[cfg(test)]
#[path = "slot_test.rs"]
mod slot_test;

use crate::document::{AcceptFilter, DocumentFile};

// =============================================================================
// SLOT IDENTIFIERS
// =============================================================================

/// Logical document requirements collected on the documents step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SlotId {
    PassportPhoto,
    AadharCard,
    LiveSelfie,
    GalleryPhoto,
}

impl SlotId {
    pub const ALL: [Self; 4] = [Self::PassportPhoto, Self::AadharCard, Self::LiveSelfie, Self::GalleryPhoto];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PassportPhoto => "passportPhoto",
            Self::AadharCard => "aadharCard",
            Self::LiveSelfie => "liveSelfie",
            Self::GalleryPhoto => "galleryPhoto",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::PassportPhoto => "Passport Photo",
            Self::AadharCard => "Aadhar Card",
            Self::LiveSelfie => "Live Selfie",
            Self::GalleryPhoto => "Photo from Gallery",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::PassportPhoto => "Upload a clear passport size photo",
            Self::AadharCard => "Upload front side of Aadhar",
            Self::LiveSelfie => "Take a selfie using your camera",
            Self::GalleryPhoto => "Upload any photo from gallery",
        }
    }

    /// File types the slot's picker offers.
    #[must_use]
    pub fn accept(self) -> AcceptFilter {
        match self {
            Self::AadharCard => AcceptFilter::images_and_pdf(),
            Self::PassportPhoto | Self::LiveSelfie | Self::GalleryPhoto => AcceptFilter::images(),
        }
    }

    /// Whether the slot is filled from the live camera instead of a picker.
    #[must_use]
    pub fn is_camera(self) -> bool {
        matches!(self, Self::LiveSelfie)
    }

    fn index(self) -> usize {
        match self {
            Self::PassportPhoto => 0,
            Self::AadharCard => 1,
            Self::LiveSelfie => 2,
            Self::GalleryPhoto => 3,
        }
    }
}

// =============================================================================
// FILE SLOT
// =============================================================================

/// One document placeholder.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileSlot {
    file: Option<DocumentFile>,
    preview: Option<String>,
    error: Option<String>,
}

impl FileSlot {
    #[must_use]
    pub fn file(&self) -> Option<&DocumentFile> {
        self.file.as_ref()
    }

    /// `data:` URL for the current file, if any.
    #[must_use]
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.file.is_some()
    }

    /// Replace the file (or clear it with `None`) and rebuild the preview.
    /// Any slot-level error is dropped since the value changed.
    pub fn set(&mut self, file: Option<DocumentFile>) {
        self.preview = file.as_ref().map(DocumentFile::data_url);
        self.file = file;
        self.error = None;
    }

    pub fn clear(&mut self) {
        self.set(None);
    }

    pub fn set_error(&mut self, message: Option<String>) {
        self.error = message;
    }
}

// =============================================================================
// SLOT SET
// =============================================================================

/// The four document slots, addressed by [`SlotId`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileSlots {
    slots: [FileSlot; 4],
}

impl FileSlots {
    #[must_use]
    pub fn get(&self, id: SlotId) -> &FileSlot {
        &self.slots[id.index()]
    }

    pub fn get_mut(&mut self, id: SlotId) -> &mut FileSlot {
        &mut self.slots[id.index()]
    }

    #[must_use]
    pub fn is_filled(&self, id: SlotId) -> bool {
        self.get(id).is_filled()
    }

    /// `true` when no slot holds a file.
    #[must_use]
    pub fn all_empty(&self) -> bool {
        self.slots.iter().all(|s| !s.is_filled())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
