use anyhow::{anyhow, Context};
use serde_json::json;

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),

    #[error("Comment text is required")]
    CommentTextRequired,

    #[error("Reply text is required")]
    ReplyTextRequired,

    #[error("Visitor ID is required")]
    VisitorIdRequired,

    #[error("Malformed request body")]
    MalformedBody,

    #[error("Comment not found")]
    CommentNotFound,

    #[error("Reply not found")]
    ReplyNotFound,

    #[error("Not found")]
    RouteNotFound,
}

impl Error {
    pub fn status_code(&self) -> http::StatusCode {
        use http::StatusCode;
        match self {
            Error::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::CommentTextRequired => StatusCode::BAD_REQUEST,
            Error::ReplyTextRequired => StatusCode::BAD_REQUEST,
            Error::VisitorIdRequired => StatusCode::BAD_REQUEST,
            Error::MalformedBody => StatusCode::BAD_REQUEST,
            Error::CommentNotFound => StatusCode::NOT_FOUND,
            Error::ReplyNotFound => StatusCode::NOT_FOUND,
            Error::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }

    pub fn contents(&self) -> Vec<u8> {
        serde_json::to_vec(&json!({ "error": self.to_string() })).expect("serializing error")
    }

    /// Recovers the error from a body produced by `contents`
    ///
    /// Messages that do not match a known error are kept as `Unknown`.
    pub fn parse(body: &[u8]) -> anyhow::Result<Error> {
        let data: serde_json::Value =
            serde_json::from_slice(body).context("parsing error contents")?;
        let msg = data
            .get("error")
            .and_then(|e| e.as_str())
            .ok_or_else(|| anyhow!("error message is not a string"))?;
        Ok(
            match [
                Error::CommentTextRequired,
                Error::ReplyTextRequired,
                Error::VisitorIdRequired,
                Error::MalformedBody,
                Error::CommentNotFound,
                Error::ReplyNotFound,
                Error::RouteNotFound,
            ]
            .into_iter()
            .find(|e| e.to_string() == msg)
            {
                Some(e) => e,
                None => Error::Unknown(String::from(msg)),
            },
        )
    }
}
