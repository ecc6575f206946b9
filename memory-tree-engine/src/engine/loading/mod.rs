pub mod photo_manifest;
pub mod placeholder;
