use chrono::Utc;

pub type Time = chrono::DateTime<Utc>;

mod comment;
pub use comment::{Comment, CommentId, Liked, Likes, Reply, ReplyId};

mod error;
pub use error::Error;

mod request;
pub use request::{LikeRequest, NewComment, NewReply};

mod visitor;
pub use visitor::VisitorId;

/// Username recorded when the poster did not give one
pub const ANONYMOUS: &str = "Anonymous";

/// Liveness payload returned on `GET /`
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ServerInfo {
    pub message: String,
    pub endpoints: Vec<String>,
}

impl ServerInfo {
    pub fn running() -> ServerInfo {
        ServerInfo {
            message: String::from("Server is running"),
            endpoints: vec![String::from("/api/comments")],
        }
    }
}

/// Returns `name` unless it is missing or empty, in which case the poster is anonymous
pub fn username_or_anonymous(name: Option<String>) -> String {
    match name {
        Some(name) if !name.is_empty() => name,
        _ => String::from(ANONYMOUS),
    }
}

/// Checks that `text` is present and not only whitespace, failing with `err` otherwise
pub fn validate_text(text: Option<&str>, err: Error) -> Result<(), Error> {
    match text {
        Some(t) if !t.trim().is_empty() => Ok(()),
        _ => Err(err),
    }
}
