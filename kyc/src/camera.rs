//! Camera acquisition and still capture.
//!
//! DESIGN
//! ======
//! [`CameraSession`] is a state machine over one live video stream:
//!
//! ```text
//! Idle ──begin_open──▶ Loading ──finish_open──▶ Active ──capture──▶ PendingConfirmation
//!                        ▲   └────────────────▶ Error                 │        │
//!                        │                        │ retry             │ retake │ confirm
//!                        └────────────────────────┴───────────────────┘        ▼
//!                                                                         emit + Idle
//! ```
//!
//! Acquisition suspends, and the UI runs on a single thread, so opening is
//! split in two: [`CameraSession::begin_open`] hands out an [`AcquireTicket`]
//! and [`CameraSession::finish_open`] accepts the resolved stream. Every
//! `begin_open` and `close` bumps a generation counter; a ticket from an
//! older generation is stale, and a stream delivered against a stale ticket
//! is stopped on arrival. That is how a capture dialog closed mid-acquisition
//! still releases the hardware once the browser hands the stream over.
//!
//! Any stream the session holds is stopped before a new acquisition starts,
//! on capture, on close, and on drop.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::document::{DocumentFile, IntakeSource};
use crate::frame::{Frame, FrameError, JPEG_QUALITY};

/// Message shown in place of the preview when acquisition fails.
pub const ACCESS_DENIED_MESSAGE: &str = "Unable to access camera. Please allow camera permissions.";

pub const IDEAL_WIDTH: u32 = 1280;
pub const IDEAL_HEIGHT: u32 = 720;

// =============================================================================
// FACING / CONSTRAINTS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FacingMode {
    /// Front camera. The live preview is shown mirrored.
    #[default]
    User,
    /// Rear camera.
    Environment,
}

impl FacingMode {
    /// `facingMode` constraint value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Environment => "environment",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::User => Self::Environment,
            Self::Environment => Self::User,
        }
    }

    /// Whether the preview for this mode is drawn mirrored, and therefore
    /// whether captured stills must be flipped to match it.
    #[must_use]
    pub fn is_mirrored(self) -> bool {
        matches!(self, Self::User)
    }
}

/// Video-only stream request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoConstraints {
    pub facing: FacingMode,
    pub ideal_width: u32,
    pub ideal_height: u32,
}

impl VideoConstraints {
    #[must_use]
    pub fn for_facing(facing: FacingMode) -> Self {
        Self { facing, ideal_width: IDEAL_WIDTH, ideal_height: IDEAL_HEIGHT }
    }
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CameraError {
    #[error("camera permission denied")]
    PermissionDenied,

    #[error("no camera device found")]
    NotFound,

    #[error("camera unavailable: {0}")]
    Unavailable(String),

    #[error("camera is not streaming")]
    NotActive,

    #[error("no captured image awaiting confirmation")]
    NothingPending,

    #[error(transparent)]
    Frame(#[from] FrameError),
}

impl CameraError {
    /// Text suitable for the in-place error panel.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::PermissionDenied | Self::NotFound | Self::Unavailable(_) => ACCESS_DENIED_MESSAGE,
            Self::NotActive => "Camera is not ready yet.",
            Self::NothingPending => "Take a photo first.",
            Self::Frame(_) => "Could not process the captured photo. Please retake.",
        }
    }
}

// =============================================================================
// MEDIA BACKEND
// =============================================================================

/// A live video stream bound to a preview surface.
pub trait MediaStream {
    /// Stop every track. Must be idempotent.
    fn stop(&self);

    /// Grab the current frame at the stream's native resolution, unmirrored.
    ///
    /// # Errors
    ///
    /// Returns an error if no frame is available yet.
    fn capture_frame(&self) -> Result<Frame, CameraError>;
}

/// Source of camera streams (`navigator.mediaDevices` in the browser).
#[async_trait::async_trait(?Send)]
pub trait MediaDevices {
    type Stream: MediaStream;

    /// Request a video-only stream. Binding it to a preview is left to the
    /// caller once the session has accepted it, since a stale stream must
    /// never reach the screen.
    async fn acquire(&self, constraints: &VideoConstraints) -> Result<Self::Stream, CameraError>;
}

// =============================================================================
// SESSION
// =============================================================================

/// Handed out by [`CameraSession::begin_open`]; redeemed by
/// [`CameraSession::finish_open`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct AcquireTicket {
    generation: u64,
    constraints: VideoConstraints,
}

impl AcquireTicket {
    #[must_use]
    pub fn constraints(&self) -> &VideoConstraints {
        &self.constraints
    }
}

/// Observable session state, for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraStatus {
    Idle,
    Loading,
    Active,
    Error,
    PendingConfirmation,
}

/// Result of redeeming an [`AcquireTicket`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    Active,
    Failed,
    /// The ticket was superseded; any delivered stream has been stopped.
    Stale,
}

enum State<S> {
    Idle,
    Loading,
    Active(S),
    Error(&'static str),
    Pending { still: Frame, preview: String },
}

/// One camera acquisition, exclusively owned by the capture UI.
pub struct CameraSession<S: MediaStream> {
    facing: FacingMode,
    generation: u64,
    state: State<S>,
}

impl<S: MediaStream> CameraSession<S> {
    #[must_use]
    pub fn new(facing: FacingMode) -> Self {
        Self { facing, generation: 0, state: State::Idle }
    }

    #[must_use]
    pub fn facing(&self) -> FacingMode {
        self.facing
    }

    #[must_use]
    pub fn status(&self) -> CameraStatus {
        match self.state {
            State::Idle => CameraStatus::Idle,
            State::Loading => CameraStatus::Loading,
            State::Active(_) => CameraStatus::Active,
            State::Error(_) => CameraStatus::Error,
            State::Pending { .. } => CameraStatus::PendingConfirmation,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&'static str> {
        match self.state {
            State::Error(message) => Some(message),
            _ => None,
        }
    }

    /// The live stream, while active.
    #[must_use]
    pub fn stream(&self) -> Option<&S> {
        match &self.state {
            State::Active(stream) => Some(stream),
            _ => None,
        }
    }

    /// The captured still awaiting confirmation.
    #[must_use]
    pub fn pending_still(&self) -> Option<&Frame> {
        match &self.state {
            State::Pending { still, .. } => Some(still),
            _ => None,
        }
    }

    /// JPEG `data:` URL of the pending still.
    #[must_use]
    pub fn pending_preview(&self) -> Option<&str> {
        match &self.state {
            State::Pending { preview, .. } => Some(preview),
            _ => None,
        }
    }

    /// Start a new acquisition for the current facing mode.
    ///
    /// Any stream held by the session is stopped first, and any acquisition
    /// still in flight is invalidated.
    pub fn begin_open(&mut self) -> AcquireTicket {
        self.release();
        self.generation += 1;
        self.state = State::Loading;
        tracing::debug!(generation = self.generation, facing = self.facing.as_str(), "camera acquisition started");
        AcquireTicket { generation: self.generation, constraints: VideoConstraints::for_facing(self.facing) }
    }

    /// Deliver the outcome of the acquisition started by `ticket`.
    pub fn finish_open(&mut self, ticket: AcquireTicket, result: Result<S, CameraError>) -> OpenOutcome {
        let current = ticket.generation == self.generation && matches!(self.state, State::Loading);
        if !current {
            if let Ok(stream) = result {
                stream.stop();
            }
            tracing::debug!(ticket = ticket.generation, generation = self.generation, "stale camera acquisition discarded");
            return OpenOutcome::Stale;
        }
        match result {
            Ok(stream) => {
                self.state = State::Active(stream);
                tracing::debug!(generation = self.generation, "camera active");
                OpenOutcome::Active
            }
            Err(err) => {
                tracing::warn!(error = %err, "camera acquisition failed");
                self.state = State::Error(err.user_message());
                OpenOutcome::Failed
            }
        }
    }

    /// `begin_open` + acquire + `finish_open` in one call.
    pub async fn open<D>(&mut self, devices: &D) -> OpenOutcome
    where
        D: MediaDevices<Stream = S>,
    {
        let ticket = self.begin_open();
        let result = devices.acquire(ticket.constraints()).await;
        self.finish_open(ticket, result)
    }

    /// Re-open after a failed acquisition. `None` unless in the error state.
    pub fn retry(&mut self) -> Option<AcquireTicket> {
        matches!(self.state, State::Error(_)).then(|| self.begin_open())
    }

    /// Switch between front and rear cameras and re-open.
    pub fn toggle_facing(&mut self) -> AcquireTicket {
        self.facing = self.facing.toggled();
        self.begin_open()
    }

    /// Grab the current frame and hold it for confirmation.
    ///
    /// Front-facing stills are mirrored so they match the mirrored preview.
    /// The live stream is stopped once the still is held.
    ///
    /// # Errors
    ///
    /// [`CameraError::NotActive`] unless streaming; frame and encode errors
    /// leave the stream running.
    pub fn capture(&mut self) -> Result<(), CameraError> {
        let State::Active(stream) = &self.state else {
            return Err(CameraError::NotActive);
        };
        let mut still = stream.capture_frame()?;
        if self.facing.is_mirrored() {
            still.mirror_horizontal();
        }
        let preview = still.jpeg_data_url(JPEG_QUALITY)?;
        if let State::Active(stream) = std::mem::replace(&mut self.state, State::Pending { still, preview }) {
            stream.stop();
        }
        Ok(())
    }

    /// Discard the pending still and re-open.
    ///
    /// # Errors
    ///
    /// [`CameraError::NothingPending`] unless a still is pending.
    pub fn retake(&mut self) -> Result<AcquireTicket, CameraError> {
        if !matches!(self.state, State::Pending { .. }) {
            return Err(CameraError::NothingPending);
        }
        Ok(self.begin_open())
    }

    /// Re-encode the pending still as a JPEG document and close the session.
    ///
    /// # Errors
    ///
    /// [`CameraError::NothingPending`] unless a still is pending; encode
    /// failures keep the still so the user can retake.
    pub fn confirm(&mut self) -> Result<DocumentFile, CameraError> {
        let State::Pending { still, .. } = &self.state else {
            return Err(CameraError::NothingPending);
        };
        let jpeg = still.encode_jpeg(JPEG_QUALITY)?;
        let name = format!("selfie-{}.jpg", uuid::Uuid::new_v4().simple());
        let file = DocumentFile::new(name, "image/jpeg", jpeg, IntakeSource::Camera);
        self.close();
        Ok(file)
    }

    /// Stop everything and return to idle. Safe to call from any state, any
    /// number of times.
    pub fn close(&mut self) {
        self.release();
        self.generation += 1;
        self.state = State::Idle;
    }

    fn release(&mut self) {
        if let State::Active(stream) = std::mem::replace(&mut self.state, State::Idle) {
            stream.stop();
            tracing::debug!(generation = self.generation, "camera stream stopped");
        }
    }
}

impl<S: MediaStream> Default for CameraSession<S> {
    fn default() -> Self {
        Self::new(FacingMode::default())
    }
}

impl<S: MediaStream> Drop for CameraSession<S> {
    fn drop(&mut self) {
        self.close();
    }
}
