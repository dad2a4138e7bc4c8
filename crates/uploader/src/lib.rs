mod errors;
mod reporter;
mod uploader;

pub use errors::UploadError;
pub use reporter::{TracingReporter, UploadReporter};
pub use uploader::Uploader;
