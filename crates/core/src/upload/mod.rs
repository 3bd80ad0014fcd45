//! The upload pipeline - validate a multipart form, name files
//! deterministically, push blobs and insert metadata rows.

mod pipeline;
mod types;
mod validate;

pub use pipeline::{generate_file_name, Uploader};
pub use types::*;
