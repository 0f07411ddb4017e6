use serde::Serialize;

/// Result of `POST /api/seed`
#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub success: bool,
    /// Number of projects inserted by this call
    pub count: usize,
    pub message: String,
}
