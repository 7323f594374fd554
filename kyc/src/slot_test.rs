use super::*;
use crate::document::IntakeSource;

fn doc(name: &str) -> DocumentFile {
    DocumentFile::new(name, "image/png", b"png".to_vec(), IntakeSource::Picker)
}

// =============================================================
// SlotId
// =============================================================

#[test]
fn slot_ids_have_unique_indices() {
    let mut seen = Vec::new();
    for id in SlotId::ALL {
        assert!(!seen.contains(&id.index()), "{id:?}");
        seen.push(id.index());
    }
}

#[test]
fn only_aadhar_accepts_pdf() {
    for id in SlotId::ALL {
        let accepts_pdf = id.accept().accepts(&DocumentFile::new(
            "scan.pdf",
            "application/pdf",
            Vec::<u8>::new(),
            IntakeSource::Picker,
        ));
        assert_eq!(accepts_pdf, id == SlotId::AadharCard, "{id:?}");
    }
}

#[test]
fn only_live_selfie_uses_camera() {
    assert!(SlotId::LiveSelfie.is_camera());
    assert!(!SlotId::GalleryPhoto.is_camera());
}

// =============================================================
// FileSlot
// =============================================================

#[test]
fn empty_slot_has_no_preview() {
    let slot = FileSlot::default();
    assert!(!slot.is_filled());
    assert!(slot.preview().is_none());
}

#[test]
fn set_builds_preview_from_file() {
    let mut slot = FileSlot::default();
    slot.set(Some(doc("a.png")));
    assert!(slot.is_filled());
    assert_eq!(slot.preview(), Some("data:image/png;base64,cG5n"));
}

#[test]
fn replacing_file_regenerates_preview() {
    let mut slot = FileSlot::default();
    slot.set(Some(doc("a.png")));
    slot.set(Some(DocumentFile::new("b.jpg", "image/jpeg", b"jpg".to_vec(), IntakeSource::Camera)));
    assert_eq!(slot.file().map(DocumentFile::name), Some("b.jpg"));
    assert_eq!(slot.preview(), Some("data:image/jpeg;base64,anBn"));
}

#[test]
fn clear_drops_file_and_preview_together() {
    let mut slot = FileSlot::default();
    slot.set(Some(doc("a.png")));
    slot.clear();
    assert!(slot.file().is_none());
    assert!(slot.preview().is_none());
}

#[test]
fn set_clears_slot_error() {
    let mut slot = FileSlot::default();
    slot.set_error(Some("bad file".into()));
    assert_eq!(slot.error(), Some("bad file"));
    slot.set(Some(doc("a.png")));
    assert!(slot.error().is_none());
}

// =============================================================
// FileSlots
// =============================================================

#[test]
fn slots_are_addressed_independently() {
    let mut slots = FileSlots::default();
    slots.get_mut(SlotId::GalleryPhoto).set(Some(doc("g.png")));
    assert!(slots.is_filled(SlotId::GalleryPhoto));
    assert!(!slots.is_filled(SlotId::LiveSelfie));
    assert!(!slots.all_empty());
}

#[test]
fn reset_empties_every_slot() {
    let mut slots = FileSlots::default();
    for id in SlotId::ALL {
        slots.get_mut(id).set(Some(doc("x.png")));
    }
    slots.reset();
    assert!(slots.all_empty());
}
