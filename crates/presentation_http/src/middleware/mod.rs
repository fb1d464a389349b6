//! HTTP middleware

mod security_headers;

pub use security_headers::{PAGE_CONTENT_SECURITY_POLICY, SecurityHeaders, SecurityHeadersLayer};
