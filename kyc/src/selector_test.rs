use super::*;
use crate::document::IntakeSource;

fn doc(name: &str) -> DocumentFile {
    DocumentFile::new(name, "image/png", b"img".to_vec(), IntakeSource::Picker)
}

// =============================================================
// SlotGroup
// =============================================================

#[test]
fn every_slot_belongs_to_the_group_that_lists_it() {
    for group in SlotGroup::ALL {
        let (a, b) = group.alternatives();
        assert_eq!(SlotGroup::of(a), group);
        assert_eq!(SlotGroup::of(b), group);
    }
}

#[test]
fn groups_attach_errors_to_distinct_keys() {
    assert_eq!(SlotGroup::IdProof.error_key(), ErrorKey::IdDocument);
    assert_eq!(SlotGroup::PhotoSource.error_key(), ErrorKey::PhotoDocument);
}

// =============================================================
// Mutual exclusion
// =============================================================

#[test]
fn select_b_after_a_clears_a() {
    let mut slots = FileSlots::default();
    let mut selector = SlotSelector::new(SlotGroup::IdProof);

    assert_eq!(selector.select(&mut slots, SlotId::PassportPhoto, doc("p.png")), Ok(None));
    assert_eq!(selector.select(&mut slots, SlotId::AadharCard, doc("a.png")), Ok(Some(SlotId::PassportPhoto)));

    assert!(!slots.is_filled(SlotId::PassportPhoto));
    assert!(slots.get(SlotId::PassportPhoto).preview().is_none());
    assert!(slots.is_filled(SlotId::AadharCard));
    assert_eq!(selector.active(), Some(SlotId::AadharCard));
}

#[test]
fn select_a_after_b_clears_b() {
    let mut slots = FileSlots::default();
    let mut selector = SlotSelector::new(SlotGroup::PhotoSource);

    selector.select(&mut slots, SlotId::GalleryPhoto, doc("g.png")).unwrap();
    selector.select(&mut slots, SlotId::LiveSelfie, doc("s.jpg")).unwrap();

    assert!(slots.is_filled(SlotId::LiveSelfie));
    assert!(!slots.is_filled(SlotId::GalleryPhoto));
}

#[test]
fn never_both_populated_across_alternating_selects() {
    let mut slots = FileSlots::default();
    let mut selector = SlotSelector::new(SlotGroup::IdProof);
    let order = [
        SlotId::PassportPhoto,
        SlotId::PassportPhoto,
        SlotId::AadharCard,
        SlotId::PassportPhoto,
        SlotId::AadharCard,
        SlotId::AadharCard,
    ];
    for choice in order {
        selector.select(&mut slots, choice, doc("x.png")).unwrap();
        let filled = [SlotId::PassportPhoto, SlotId::AadharCard]
            .iter()
            .filter(|id| slots.is_filled(**id))
            .count();
        assert_eq!(filled, 1);
        assert!(slots.is_filled(choice));
    }
}

#[test]
fn reselecting_same_slot_replaces_file() {
    let mut slots = FileSlots::default();
    let mut selector = SlotSelector::new(SlotGroup::IdProof);
    selector.select(&mut slots, SlotId::AadharCard, doc("one.png")).unwrap();
    assert_eq!(selector.select(&mut slots, SlotId::AadharCard, doc("two.png")), Ok(None));
    assert_eq!(slots.get(SlotId::AadharCard).file().map(DocumentFile::name), Some("two.png"));
}

#[test]
fn foreign_slot_is_rejected_without_side_effects() {
    let mut slots = FileSlots::default();
    let mut selector = SlotSelector::new(SlotGroup::IdProof);
    let err = selector.select(&mut slots, SlotId::LiveSelfie, doc("s.png")).unwrap_err();
    assert_eq!(err, NotInGroup { slot: SlotId::LiveSelfie, group: SlotGroup::IdProof });
    assert!(slots.all_empty());
    assert!(selector.active().is_none());
}

// =============================================================
// Satisfaction, removal, reset
// =============================================================

#[test]
fn satisfied_iff_one_alternative_filled() {
    let mut slots = FileSlots::default();
    let mut selector = SlotSelector::new(SlotGroup::PhotoSource);
    assert!(!selector.is_satisfied(&slots));
    selector.select(&mut slots, SlotId::LiveSelfie, doc("s.jpg")).unwrap();
    assert!(selector.is_satisfied(&slots));
}

#[test]
fn remove_active_clears_marker() {
    let mut slots = FileSlots::default();
    let mut selector = SlotSelector::new(SlotGroup::IdProof);
    selector.select(&mut slots, SlotId::PassportPhoto, doc("p.png")).unwrap();
    selector.remove(&mut slots, SlotId::PassportPhoto).unwrap();
    assert!(selector.active().is_none());
    assert!(!selector.is_satisfied(&slots));
}

#[test]
fn reset_clears_both_and_marker() {
    let mut slots = FileSlots::default();
    let mut selector = SlotSelector::new(SlotGroup::IdProof);
    selector.select(&mut slots, SlotId::AadharCard, doc("a.png")).unwrap();
    selector.reset(&mut slots);
    assert!(slots.all_empty());
    assert!(selector.active().is_none());
}

#[test]
fn independent_selectors_do_not_interact() {
    let mut slots = FileSlots::default();
    let mut id = SlotSelector::new(SlotGroup::IdProof);
    let mut photo = SlotSelector::new(SlotGroup::PhotoSource);

    id.select(&mut slots, SlotId::PassportPhoto, doc("p.png")).unwrap();
    photo.select(&mut slots, SlotId::GalleryPhoto, doc("g.png")).unwrap();
    photo.reset(&mut slots);

    assert!(slots.is_filled(SlotId::PassportPhoto));
    assert_eq!(id.active(), Some(SlotId::PassportPhoto));
    assert!(photo.active().is_none());
}
