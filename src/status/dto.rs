use serde::Deserialize;

/// Request body for recording a status check.
#[derive(Debug, Deserialize)]
pub struct CreateStatusCheck {
    pub client_name: String,
}
