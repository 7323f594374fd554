//! "One of two" document selector.
//!
//! DESIGN
//! ======
//! A logical requirement such as "ID proof" can be met by either of two
//! slots. [`SlotSelector`] owns only the group identity and the marker of
//! which alternative is active; the slots themselves live in [`FileSlots`]
//! and are passed in by the wizard. Two selectors therefore never share
//! state, and the mutual-exclusion guarantee is enforced at the single point
//! where a file enters the group.

#[cfg(test)]
#[path = "selector_test.rs"]
mod selector_test;

use crate::document::DocumentFile;
use crate::field::ErrorKey;
use crate::slot::{FileSlots, SlotId};

/// The two mutual-exclusion groups on the documents step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotGroup {
    IdProof,
    PhotoSource,
}

impl SlotGroup {
    pub const ALL: [Self; 2] = [Self::IdProof, Self::PhotoSource];

    #[must_use]
    pub fn alternatives(self) -> (SlotId, SlotId) {
        match self {
            Self::IdProof => (SlotId::PassportPhoto, SlotId::AadharCard),
            Self::PhotoSource => (SlotId::LiveSelfie, SlotId::GalleryPhoto),
        }
    }

    /// Group containing `slot`. Every slot belongs to exactly one group.
    #[must_use]
    pub fn of(slot: SlotId) -> Self {
        match slot {
            SlotId::PassportPhoto | SlotId::AadharCard => Self::IdProof,
            SlotId::LiveSelfie | SlotId::GalleryPhoto => Self::PhotoSource,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::IdProof => "Identity Proof",
            Self::PhotoSource => "Your Photo",
        }
    }

    /// Key the group's "nothing provided" error is attached to.
    #[must_use]
    pub fn error_key(self) -> ErrorKey {
        match self {
            Self::IdProof => ErrorKey::IdDocument,
            Self::PhotoSource => ErrorKey::PhotoDocument,
        }
    }

    #[must_use]
    pub fn missing_message(self) -> &'static str {
        match self {
            Self::IdProof => "Please upload either Passport Photo or Aadhar Card",
            Self::PhotoSource => "Please upload either Live Selfie or Gallery Photo",
        }
    }
}

/// Raised when a slot is routed to a selector that does not govern it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("slot {slot:?} is not part of the {group:?} group")]
pub struct NotInGroup {
    pub slot: SlotId,
    pub group: SlotGroup,
}

/// Enforces "at most one of {A, B}" over a pair of slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotSelector {
    group: SlotGroup,
    active: Option<SlotId>,
}

impl SlotSelector {
    #[must_use]
    pub fn new(group: SlotGroup) -> Self {
        Self { group, active: None }
    }

    #[must_use]
    pub fn group(&self) -> SlotGroup {
        self.group
    }

    /// The alternative the user chose most recently, for display.
    #[must_use]
    pub fn active(&self) -> Option<SlotId> {
        self.active
    }

    #[must_use]
    pub fn contains(&self, slot: SlotId) -> bool {
        let (a, b) = self.group.alternatives();
        slot == a || slot == b
    }

    /// The alternative paired with `slot`.
    ///
    /// # Errors
    ///
    /// Returns [`NotInGroup`] if `slot` is not governed by this selector.
    pub fn other(&self, slot: SlotId) -> Result<SlotId, NotInGroup> {
        let (a, b) = self.group.alternatives();
        if slot == a {
            Ok(b)
        } else if slot == b {
            Ok(a)
        } else {
            Err(NotInGroup { slot, group: self.group })
        }
    }

    /// Put `file` into `choice` and clear the other alternative.
    ///
    /// Returns the alternative that was emptied, if it held a file.
    ///
    /// # Errors
    ///
    /// Returns [`NotInGroup`] if `choice` is not governed by this selector;
    /// no slot is touched in that case.
    pub fn select(&mut self, slots: &mut FileSlots, choice: SlotId, file: DocumentFile) -> Result<Option<SlotId>, NotInGroup> {
        let other = self.other(choice)?;
        let displaced = slots.is_filled(other).then_some(other);
        if displaced.is_some() {
            tracing::debug!(group = ?self.group, cleared = ?other, "mutual exclusion cleared alternative");
            slots.get_mut(other).clear();
        }
        slots.get_mut(choice).set(Some(file));
        self.active = Some(choice);
        Ok(displaced)
    }

    /// Remove the file from `slot`. Clears the active marker if it pointed there.
    ///
    /// # Errors
    ///
    /// Returns [`NotInGroup`] if `slot` is not governed by this selector.
    pub fn remove(&mut self, slots: &mut FileSlots, slot: SlotId) -> Result<(), NotInGroup> {
        self.other(slot)?;
        slots.get_mut(slot).clear();
        if self.active == Some(slot) {
            self.active = None;
        }
        Ok(())
    }

    /// `true` iff at least one alternative holds a file.
    #[must_use]
    pub fn is_satisfied(&self, slots: &FileSlots) -> bool {
        let (a, b) = self.group.alternatives();
        slots.is_filled(a) || slots.is_filled(b)
    }

    /// Empty both alternatives and forget the active choice.
    pub fn reset(&mut self, slots: &mut FileSlots) {
        let (a, b) = self.group.alternatives();
        slots.get_mut(a).clear();
        slots.get_mut(b).clear();
        self.active = None;
    }
}
