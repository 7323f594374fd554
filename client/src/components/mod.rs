pub mod camera_capture;
pub mod documents_step;
pub mod file_upload_card;
pub mod live_selfie_card;
pub mod notice_banner;
pub mod solutions_step;
pub mod step_indicator;
pub mod success_modal;
pub mod text_step;
