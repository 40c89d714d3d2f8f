use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::Request;

#[derive(Default, Debug, Clone, Serialize)]
pub struct Health;

impl Request for Health {
    type Data = ();
    type Response = HealthStatus;

    fn endpoint(&self) -> Cow<'_, str> {
        "/health".into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
