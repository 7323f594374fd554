//! Domain model and state machines for the KYC intake wizard.
//!
//! This crate is compiled both natively (for the relay service and tests) and
//! to WebAssembly (for the browser client). It owns everything that is not
//! DOM plumbing: the form state, document slots and their mutual-exclusion
//! rules, per-step validation, the wizard controller, the camera session
//! lifecycle, still-frame re-encoding, and the submission wire contract.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`field`] | Closed enumerations of text fields and error keys, plus the typed error bag |
//! | [`form`] | Text field values owned by the wizard |
//! | [`document`] | Source-agnostic document files and `accept` filters |
//! | [`slot`] | Per-document file slots with derived previews |
//! | [`selector`] | "One of two" slot selector |
//! | [`solutions`] | The twelve addable solutions and their selection flags |
//! | [`validate`] | Pure per-step validators |
//! | [`wizard`] | Step state machine, validation gating and submission |
//! | [`camera`] | Camera acquisition session and media backend traits |
//! | [`frame`] | RGBA still frames, mirroring and JPEG encoding |
//! | [`payload`] | Submission payload, sheet record and the `Submitter` seam |

pub mod camera;
pub mod document;
pub mod field;
pub mod form;
pub mod frame;
pub mod payload;
pub mod selector;
pub mod slot;
pub mod solutions;
pub mod validate;
pub mod wizard;

pub use camera::{
    AcquireTicket, CameraError, CameraSession, CameraStatus, FacingMode, MediaDevices, MediaStream, OpenOutcome,
    VideoConstraints,
};
pub use document::{AcceptFilter, DocumentFile, IntakeSource};
pub use field::{ErrorKey, FieldErrors, TextField};
pub use form::FormState;
pub use frame::{Frame, FrameError};
pub use payload::{SheetRecord, SubmissionPayload, SubmitError, Submitter};
pub use selector::{NotInGroup, SlotGroup, SlotSelector};
pub use slot::{FileSlot, FileSlots, SlotId};
pub use solutions::{Solution, SolutionCategory, SolutionsSelection};
pub use wizard::{IntakeError, SubmitTicket, Wizard, WizardConfig, WizardError, WizardPhase, WizardStep};
