pub mod file_upload;
pub mod ui;
