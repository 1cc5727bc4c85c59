//! Fixed client-facing error messages.

pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";
pub const UNAUTHORIZED_API_KEY: &str = "Unauthorized: Invalid or missing API key";
pub const ROUTE_NOT_FOUND: &str = "The requested resource was not found";
pub const METHOD_NOT_ALLOWED: &str = "The HTTP method is not allowed for this resource";
