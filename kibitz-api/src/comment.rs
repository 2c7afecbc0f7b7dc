use crate::{Time, VisitorId};

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct CommentId(pub u64);

/// Only unique among the replies of a single comment
#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct ReplyId(pub u64);

/// Like counter along with the visitors it counts
///
/// The counter always equals the number of visitors, and a visitor is never
/// listed twice. `toggle` is the only way to change either.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Likes {
    #[serde(rename = "likes")]
    count: u64,
    liked_by: Vec<VisitorId>,
}

impl Likes {
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn liked_by(&self) -> &[VisitorId] {
        &self.liked_by
    }

    pub fn is_liked_by(&self, visitor: &VisitorId) -> bool {
        self.liked_by.contains(visitor)
    }

    /// Flips `visitor`'s like, returning whether they like it now
    pub fn toggle(&mut self, visitor: &VisitorId) -> bool {
        if self.is_liked_by(visitor) {
            self.liked_by.retain(|v| v != visitor);
            self.count -= 1;
            false
        } else {
            self.liked_by.push(visitor.clone());
            self.count += 1;
            true
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
    pub username: String,
    #[serde(flatten)]
    pub likes: Likes,

    /// Replies in the order they were posted
    #[serde(default)]
    pub replies: Vec<Reply>,

    pub timestamp: Time,
}

impl Comment {
    pub fn reply(&self, id: ReplyId) -> Option<&Reply> {
        self.replies.iter().find(|r| r.id == id)
    }

    pub fn reply_mut(&mut self, id: ReplyId) -> Option<&mut Reply> {
        self.replies.iter_mut().find(|r| r.id == id)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub id: ReplyId,
    pub text: String,
    pub username: String,

    /// Author being answered when this replies to another reply; display only
    #[serde(default)]
    pub reply_to_user: Option<String>,

    #[serde(flatten)]
    pub likes: Likes,
    pub timestamp: Time,
}

/// An entity along with whether the requesting visitor now likes it
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Liked<T> {
    #[serde(flatten)]
    pub item: T,
    pub is_liked: bool,
}
