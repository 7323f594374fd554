//! `getUserMedia` backend for `kyc::CameraSession`.
//!
//! DESIGN
//! ======
//! The session owns lifecycle and staleness; this module only knows how to
//! ask the browser for a stream, stop its tracks, and grab a frame through an
//! offscreen canvas. A stream is attached to the `<video>` preview only after
//! the session has accepted it (`BrowserStream::bind`), so a stream resolving
//! for a superseded request never reaches the screen.
//!
//! Native builds get `DetachedStream`, which never yields frames, so the
//! camera component still type-checks outside the browser.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use kyc::CameraError;

/// Map a `DOMException` name from `getUserMedia` onto a camera error.
pub fn classify_dom_error(name: &str, message: &str) -> CameraError {
    match name {
        "NotAllowedError" | "SecurityError" | "PermissionDeniedError" => CameraError::PermissionDenied,
        "NotFoundError" | "OverconstrainedError" | "DevicesNotFoundError" => CameraError::NotFound,
        _ if message.is_empty() => CameraError::Unavailable(name.to_owned()),
        _ => CameraError::Unavailable(format!("{name}: {message}")),
    }
}

#[cfg(feature = "csr")]
pub use browser::{BrowserDevices, BrowserStream};

/// Stream type the camera component is instantiated with.
#[cfg(feature = "csr")]
pub type PreviewStream = BrowserStream;

#[cfg(not(feature = "csr"))]
pub type PreviewStream = DetachedStream;

/// Stand-in stream for native builds.
#[cfg(not(feature = "csr"))]
#[derive(Debug, Default)]
pub struct DetachedStream;

#[cfg(not(feature = "csr"))]
impl kyc::MediaStream for DetachedStream {
    fn stop(&self) {}

    fn capture_frame(&self) -> Result<kyc::Frame, CameraError> {
        Err(CameraError::NotActive)
    }
}

#[cfg(feature = "csr")]
mod browser {
    use js_sys::{Object, Reflect};
    use kyc::{CameraError, Frame, MediaDevices, MediaStream, VideoConstraints};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement};

    use super::classify_dom_error;

    /// `navigator.mediaDevices`, remembering which `<video>` streams will
    /// eventually be bound to.
    pub struct BrowserDevices {
        video: HtmlVideoElement,
    }

    impl BrowserDevices {
        pub fn new(video: HtmlVideoElement) -> Self {
            Self { video }
        }
    }

    #[async_trait::async_trait(?Send)]
    impl MediaDevices for BrowserDevices {
        type Stream = BrowserStream;

        async fn acquire(&self, constraints: &VideoConstraints) -> Result<BrowserStream, CameraError> {
            let devices = web_sys::window()
                .ok_or_else(|| CameraError::Unavailable("no window".to_owned()))?
                .navigator()
                .media_devices()
                .map_err(dom_error)?;

            let request = web_sys::MediaStreamConstraints::new();
            request.set_audio(&JsValue::FALSE);
            request.set_video(&video_constraints(constraints).map_err(dom_error)?);

            let promise = devices.get_user_media_with_constraints(&request).map_err(dom_error)?;
            let stream = JsFuture::from(promise).await.map_err(dom_error)?;
            let stream = stream
                .dyn_into::<web_sys::MediaStream>()
                .map_err(|_| CameraError::Unavailable("getUserMedia returned a non-stream".to_owned()))?;

            Ok(BrowserStream { stream, video: self.video.clone() })
        }
    }

    /// A live camera stream plus the preview element it belongs to.
    pub struct BrowserStream {
        stream: web_sys::MediaStream,
        video: HtmlVideoElement,
    }

    impl BrowserStream {
        /// Attach to the preview and start playback.
        pub fn bind(&self) {
            self.video.set_src_object(Some(&self.stream));
            if let Err(e) = self.video.play() {
                leptos::logging::warn!("camera preview failed to play: {e:?}");
            }
        }

        fn is_bound(&self) -> bool {
            self.video
                .src_object()
                .is_some_and(|current| AsRef::<JsValue>::as_ref(&current) == AsRef::<JsValue>::as_ref(&self.stream))
        }
    }

    impl MediaStream for BrowserStream {
        fn stop(&self) {
            for track in self.stream.get_tracks().iter() {
                if let Ok(track) = track.dyn_into::<web_sys::MediaStreamTrack>() {
                    track.stop();
                }
            }
            if self.is_bound() {
                self.video.set_src_object(None);
            }
        }

        fn capture_frame(&self) -> Result<Frame, CameraError> {
            let width = self.video.video_width();
            let height = self.video.video_height();
            if width == 0 || height == 0 {
                return Err(CameraError::Unavailable("no video frame yet".to_owned()));
            }

            let canvas = web_sys::window()
                .and_then(|w| w.document())
                .ok_or_else(|| CameraError::Unavailable("no document".to_owned()))?
                .create_element("canvas")
                .map_err(dom_error)?
                .dyn_into::<HtmlCanvasElement>()
                .map_err(|_| CameraError::Unavailable("canvas element unavailable".to_owned()))?;
            canvas.set_width(width);
            canvas.set_height(height);

            let ctx = canvas
                .get_context("2d")
                .map_err(dom_error)?
                .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
                .ok_or_else(|| CameraError::Unavailable("2d context unavailable".to_owned()))?;
            ctx.draw_image_with_html_video_element(&self.video, 0.0, 0.0)
                .map_err(dom_error)?;
            let pixels = ctx
                .get_image_data(0.0, 0.0, f64::from(width), f64::from(height))
                .map_err(dom_error)?;

            Ok(Frame::new(width, height, pixels.data().0)?)
        }
    }

    impl Drop for BrowserStream {
        fn drop(&mut self) {
            self.stop();
        }
    }

    /// `{ facingMode, width: { ideal }, height: { ideal } }`
    fn video_constraints(constraints: &VideoConstraints) -> Result<JsValue, JsValue> {
        let ideal = |value: u32| -> Result<Object, JsValue> {
            let obj = Object::new();
            Reflect::set(&obj, &"ideal".into(), &value.into())?;
            Ok(obj)
        };

        let video = Object::new();
        Reflect::set(&video, &"facingMode".into(), &constraints.facing.as_str().into())?;
        Reflect::set(&video, &"width".into(), &ideal(constraints.ideal_width)?)?;
        Reflect::set(&video, &"height".into(), &ideal(constraints.ideal_height)?)?;
        Ok(video.into())
    }

    fn dom_error(err: JsValue) -> CameraError {
        let field = |key: &str| {
            Reflect::get(&err, &JsValue::from_str(key))
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default()
        };
        classify_dom_error(&field("name"), &field("message"))
    }
}
