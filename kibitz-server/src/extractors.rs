use axum::{
    async_trait,
    body::{Bytes, HttpBody},
    extract::FromRequest,
    http::Request,
    BoxError,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::Error;

/// JSON request body, read leniently
///
/// The content type is not checked and an empty body or a JSON array reads as
/// `{}`, so that such requests fail validation rather than extraction. Other
/// non-object JSON values are rejected as malformed.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, B, T> FromRequest<S, B> for JsonBody<T>
where
    T: DeserializeOwned,
    B: HttpBody + Send + 'static,
    B::Data: Send,
    B::Error: Into<BoxError>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request<B>, state: &S) -> Result<JsonBody<T>, Error> {
        let body = Bytes::from_request(req, state).await.map_err(|err| {
            tracing::debug!(?err, "failed reading request body");
            Error::malformed_body()
        })?;
        let body: &[u8] = if body.is_empty() { b"{}" } else { &body };
        let value = serde_json::from_slice::<Value>(body).map_err(|err| {
            tracing::debug!(?err, "failed parsing request body");
            Error::malformed_body()
        })?;
        let value = match value {
            Value::Object(_) => value,
            // arrays have no named fields, so every field reads as missing
            Value::Array(_) => Value::Object(Map::new()),
            other => {
                tracing::debug!(?other, "request body is not an object");
                return Err(Error::malformed_body());
            }
        };
        serde_json::from_value(value).map(JsonBody).map_err(|err| {
            tracing::debug!(?err, "request body does not match the expected fields");
            Error::malformed_body()
        })
    }
}
