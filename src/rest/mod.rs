pub mod error;
pub mod v1;

use actix_web::web::Json;
use error::RestApiError;
use serde::{Deserialize, Serialize};

pub type RestResult<T, E = RestApiError> = std::result::Result<Json<Envelope<T>>, E>;

/// Body of every successful response.
#[derive(Serialize, Deserialize)]
pub struct Envelope<T> {
    pub message: String,
    pub request_id: String,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Envelope {
            message: "Request received".into(),
            request_id: format!("req-{}", uuid::Uuid::new_v4()),
            data,
        }
    }

    pub fn json(data: T) -> Json<Self> {
        Json(Self::new(data))
    }
}
