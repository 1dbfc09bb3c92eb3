// Resume upload flow: multipart intake → staged temp file → text → fields + match → JSON.

pub mod analyze;
pub mod handlers;
pub mod models;
pub mod upload;
