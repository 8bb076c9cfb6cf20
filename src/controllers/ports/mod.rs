pub mod display_presenter;
pub mod file_presenter;
