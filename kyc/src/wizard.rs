//! Wizard controller.
//!
//! DESIGN
//! ======
//! [`Wizard`] is the single owned state object behind the intake flow. The UI
//! holds it in one signal and mutates it only through the named setters
//! below, so every rule lives here:
//!
//! - forward navigation is gated by [`validate_step`]; backward is not
//! - while a submission is in flight the form is frozen: setters and
//!   `previous` do nothing, so a failed attempt lands back on the final
//!   step with exactly what was sent
//! - editing a value clears the error attached to it and nothing else
//! - document slots go through the two [`SlotSelector`]s so each pair stays
//!   mutually exclusive
//! - submission is split into [`Wizard::begin_submit`] and
//!   [`Wizard::finish_submit`] so a UI can release its borrow across the
//!   network await; a second `begin_submit` while one is in flight is
//!   refused, which keeps it to one outbound call per click
//!
//! On success everything resets and the phase carries an application
//! reference for the confirmation dialog. On failure the wizard stays on the
//! final step with its state intact and the error held for display.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use crate::document::DocumentFile;
use crate::field::{FieldErrors, TextField};
use crate::form::FormState;
use crate::payload::{SubmissionPayload, SubmitError, Submitter};
use crate::selector::{NotInGroup, SlotGroup, SlotSelector};
use crate::slot::{FileSlots, SlotId};
use crate::solutions::{Solution, SolutionsSelection};
use crate::validate::validate_step;

const REFERENCE_PREFIX: &str = "CRK-";
const REFERENCE_LEN: usize = 8;
const BASE36: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// =============================================================================
// STEPS / CONFIG
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WizardStep {
    PersonalInfo,
    Organization,
    Documents,
    Solutions,
}

impl WizardStep {
    pub const ALL: [Self; 4] = [Self::PersonalInfo, Self::Organization, Self::Documents, Self::Solutions];
    /// The flow without the Solutions step.
    pub const CORE: [Self; 3] = [Self::PersonalInfo, Self::Organization, Self::Documents];

    /// Label shown under the step indicator.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Info",
            Self::Organization => "Organization",
            Self::Documents => "KYC Documents",
            Self::Solutions => "Solutions",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WizardConfig {
    /// Spreadsheet webhook the relay forwards records to.
    pub webhook_url: String,
    /// Whether the trailing Solutions step is part of the flow.
    pub include_solutions: bool,
}

impl WizardConfig {
    #[must_use]
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self { webhook_url: webhook_url.into(), include_solutions: true }
    }

    #[must_use]
    pub fn with_solutions(mut self, include: bool) -> Self {
        self.include_solutions = include;
        self
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self::new(String::new())
    }
}

// =============================================================================
// PHASE / ERRORS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum WizardPhase {
    #[default]
    Editing,
    Submitting,
    /// The last submission succeeded and state has been reset.
    Submitted { reference: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("submission is only possible from the final step")]
    NotFinalStep,

    #[error("a submission is already in flight")]
    InProgress,

    #[error("the current step has validation errors")]
    Invalid,

    #[error("{0}")]
    Submit(#[from] SubmitError),
}

/// Why a file could not be placed in a slot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("{slot:?} does not accept {mime:?}")]
    Unsupported { slot: SlotId, mime: String },

    #[error(transparent)]
    Group(#[from] NotInGroup),

    #[error("documents cannot change while a submission is in flight")]
    Submitting,
}

/// Message attached to a slot when a dropped or picked file fails its
/// accept filter.
pub const UNSUPPORTED_FILE_MESSAGE: &str = "Unsupported file type";

/// Issued by [`Wizard::begin_submit`]; carries the payload to send.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct SubmitTicket {
    generation: u64,
    payload: SubmissionPayload,
}

impl SubmitTicket {
    #[must_use]
    pub fn payload(&self) -> &SubmissionPayload {
        &self.payload
    }
}

// =============================================================================
// WIZARD
// =============================================================================

#[derive(Clone, Debug)]
pub struct Wizard {
    config: WizardConfig,
    form: FormState,
    slots: FileSlots,
    id_proof: SlotSelector,
    photo: SlotSelector,
    solutions: SolutionsSelection,
    errors: FieldErrors,
    step: usize,
    phase: WizardPhase,
    submit_error: Option<SubmitError>,
    generation: u64,
}

impl Wizard {
    #[must_use]
    pub fn new(config: WizardConfig) -> Self {
        Self {
            config,
            form: FormState::default(),
            slots: FileSlots::default(),
            id_proof: SlotSelector::new(SlotGroup::IdProof),
            photo: SlotSelector::new(SlotGroup::PhotoSource),
            solutions: SolutionsSelection::default(),
            errors: FieldErrors::new(),
            step: 0,
            phase: WizardPhase::Editing,
            submit_error: None,
            generation: 0,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    #[must_use]
    pub fn slots(&self) -> &FileSlots {
        &self.slots
    }

    #[must_use]
    pub fn selector(&self, group: SlotGroup) -> &SlotSelector {
        match group {
            SlotGroup::IdProof => &self.id_proof,
            SlotGroup::PhotoSource => &self.photo,
        }
    }

    #[must_use]
    pub fn solutions(&self) -> &SolutionsSelection {
        &self.solutions
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub fn phase(&self) -> &WizardPhase {
        &self.phase
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == WizardPhase::Submitting
    }

    /// Failure from the most recent submission, until dismissed or retried.
    #[must_use]
    pub fn submit_error(&self) -> Option<&SubmitError> {
        self.submit_error.as_ref()
    }

    /// Steps in flow order for this configuration.
    #[must_use]
    pub fn steps(&self) -> &'static [WizardStep] {
        if self.config.include_solutions { &WizardStep::ALL } else { &WizardStep::CORE }
    }

    #[must_use]
    pub fn step_index(&self) -> usize {
        self.step
    }

    #[must_use]
    pub fn step(&self) -> WizardStep {
        let steps = self.steps();
        steps[self.step.min(steps.len() - 1)]
    }

    #[must_use]
    pub fn is_first_step(&self) -> bool {
        self.step == 0
    }

    #[must_use]
    pub fn is_last_step(&self) -> bool {
        self.step + 1 >= self.steps().len()
    }

    // -------------------------------------------------------------------------
    // Editing
    // -------------------------------------------------------------------------

    /// Ignored while submitting.
    pub fn set_field(&mut self, field: TextField, value: impl Into<String>) {
        if self.is_submitting() {
            tracing::debug!(field = field.as_str(), "edit ignored during submission");
            return;
        }
        if self.form.set(field, value) {
            self.errors.clear(field);
        }
    }

    /// Place `file` in `slot`, emptying the other alternative of its pair.
    /// Returns the alternative that was displaced, if any.
    ///
    /// # Errors
    ///
    /// [`IntakeError::Unsupported`] when the file fails the slot's accept
    /// filter; the slot then carries [`UNSUPPORTED_FILE_MESSAGE`].
    /// [`IntakeError::Submitting`] while a submission is in flight.
    pub fn set_slot(&mut self, slot: SlotId, file: DocumentFile) -> Result<Option<SlotId>, IntakeError> {
        if self.is_submitting() {
            return Err(IntakeError::Submitting);
        }
        if !slot.accept().accepts(&file) {
            self.slots.get_mut(slot).set_error(Some(UNSUPPORTED_FILE_MESSAGE.to_owned()));
            return Err(IntakeError::Unsupported { slot, mime: file.mime().to_owned() });
        }
        let group = SlotGroup::of(slot);
        let (selector, slots) = self.group_mut(group);
        let displaced = selector.select(slots, slot, file)?;
        self.errors.clear(group.error_key());
        Ok(displaced)
    }

    /// Empty `slot`.
    ///
    /// # Errors
    ///
    /// [`IntakeError::Submitting`] while a submission is in flight, or
    /// [`IntakeError::Group`] if the slot is not governed by its own group's
    /// selector.
    pub fn remove_slot(&mut self, slot: SlotId) -> Result<(), IntakeError> {
        if self.is_submitting() {
            return Err(IntakeError::Submitting);
        }
        let (selector, slots) = self.group_mut(SlotGroup::of(slot));
        selector.remove(slots, slot)?;
        Ok(())
    }

    /// Ignored while submitting.
    pub fn set_solution(&mut self, solution: Solution, selected: bool) {
        if self.is_submitting() {
            tracing::debug!(solution = ?solution, "edit ignored during submission");
            return;
        }
        self.solutions.set(solution, selected);
        self.errors.clear(crate::field::ErrorKey::Solutions);
    }

    pub fn dismiss_submit_error(&mut self) {
        self.submit_error = None;
    }

    fn group_mut(&mut self, group: SlotGroup) -> (&mut SlotSelector, &mut FileSlots) {
        match group {
            SlotGroup::IdProof => (&mut self.id_proof, &mut self.slots),
            SlotGroup::PhotoSource => (&mut self.photo, &mut self.slots),
        }
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Validate the current step as it stands.
    #[must_use]
    pub fn validate_current(&self) -> FieldErrors {
        validate_step(self.step(), &self.form, &self.slots, &self.solutions)
    }

    /// Advance one step if the current one validates. The error bag is
    /// replaced by the validation result either way. Returns whether the
    /// step changed.
    pub fn next(&mut self) -> bool {
        self.errors = self.validate_current();
        if !self.errors.is_empty() {
            tracing::debug!(step = self.step().title(), errors = self.errors.len(), "step blocked by validation");
            return false;
        }
        if self.is_last_step() {
            return false;
        }
        self.step += 1;
        true
    }

    /// Go back one step. Errors are kept. Refused while submitting.
    pub fn previous(&mut self) -> bool {
        if self.step == 0 || self.is_submitting() {
            return false;
        }
        self.step -= 1;
        true
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Validate the final step and enter [`WizardPhase::Submitting`].
    ///
    /// # Errors
    ///
    /// Refuses while a submission is in flight, off the final step, or when
    /// the final step has errors (which are then stored).
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, WizardError> {
        if self.is_submitting() {
            return Err(WizardError::InProgress);
        }
        if !self.is_last_step() {
            return Err(WizardError::NotFinalStep);
        }
        self.errors = self.validate_current();
        if !self.errors.is_empty() {
            return Err(WizardError::Invalid);
        }
        self.generation += 1;
        self.phase = WizardPhase::Submitting;
        self.submit_error = None;
        let payload = SubmissionPayload::build(&self.config.webhook_url, &self.form, &self.slots, &self.solutions);
        tracing::info!(generation = self.generation, "submission started");
        Ok(SubmitTicket { generation: self.generation, payload })
    }

    /// Apply the outcome of the submission started by `ticket`. Returns
    /// `false` and changes nothing if the ticket is stale.
    pub fn finish_submit(&mut self, ticket: SubmitTicket, result: Result<(), SubmitError>) -> bool {
        if ticket.generation != self.generation || !self.is_submitting() {
            tracing::debug!(ticket = ticket.generation, generation = self.generation, "stale submission result ignored");
            return false;
        }
        match result {
            Ok(()) => {
                let reference = application_reference();
                tracing::info!(%reference, "submission accepted");
                self.reset();
                self.phase = WizardPhase::Submitted { reference };
            }
            Err(err) => {
                tracing::warn!(error = %err, "submission failed");
                self.phase = WizardPhase::Editing;
                self.submit_error = Some(err);
            }
        }
        true
    }

    /// `begin_submit`, send, `finish_submit`.
    ///
    /// # Errors
    ///
    /// Anything `begin_submit` refuses, or the submitter's failure.
    pub async fn submit<S>(&mut self, submitter: &S) -> Result<(), WizardError>
    where
        S: Submitter + ?Sized,
    {
        let ticket = self.begin_submit()?;
        let result = submitter.submit(ticket.payload()).await;
        let failure = result.as_ref().err().cloned();
        self.finish_submit(ticket, result);
        match failure {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    /// Close the success confirmation.
    pub fn acknowledge_success(&mut self) {
        if matches!(self.phase, WizardPhase::Submitted { .. }) {
            self.phase = WizardPhase::Editing;
        }
    }

    /// Back to a blank first step. Invalidates any in-flight submission.
    pub fn reset(&mut self) {
        self.form.reset();
        self.id_proof.reset(&mut self.slots);
        self.photo.reset(&mut self.slots);
        self.slots.reset();
        self.solutions.reset();
        self.errors.clear_all();
        self.step = 0;
        self.phase = WizardPhase::Editing;
        self.submit_error = None;
        self.generation += 1;
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(WizardConfig::default())
    }
}

/// `CRK-` followed by eight uppercase base-36 characters.
#[must_use]
pub fn application_reference() -> String {
    reference_from(uuid::Uuid::new_v4().as_u128())
}

fn reference_from(mut seed: u128) -> String {
    let mut out = String::with_capacity(REFERENCE_PREFIX.len() + REFERENCE_LEN);
    out.push_str(REFERENCE_PREFIX);
    for _ in 0..REFERENCE_LEN {
        out.push(char::from(BASE36[(seed % 36) as usize]));
        seed /= 36;
    }
    out
}
