use std::{collections::HashMap, sync::Arc};

use chrono::Utc;
use kibitz_api::{
    username_or_anonymous, Comment, CommentId, Error as ApiError, Liked, Likes, Reply, ReplyId,
    VisitorId,
};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// All comments of the running process, in creation order
///
/// Ids come from counters kept next to the collections rather than from their
/// length, so they stay unique even if entries ever get removed.
#[derive(Debug, Default)]
pub struct Store {
    comments: Vec<Comment>,
    last_comment_id: u64,
    last_reply_id: HashMap<CommentId, u64>,
}

impl Store {
    pub fn new() -> Store {
        Store::default()
    }

    pub fn list_comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn get_comment(&self, id: CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == id)
    }

    pub fn create_comment(&mut self, text: String, username: Option<String>) -> Comment {
        self.last_comment_id += 1;
        let comment = Comment {
            id: CommentId(self.last_comment_id),
            text,
            username: username_or_anonymous(username),
            likes: Likes::default(),
            replies: Vec::new(),
            timestamp: Utc::now(),
        };
        tracing::debug!(id = ?comment.id, "created comment");
        self.comments.push(comment.clone());
        comment
    }

    pub fn add_reply(
        &mut self,
        comment_id: CommentId,
        text: String,
        username: Option<String>,
        reply_to_user: Option<String>,
    ) -> Result<Reply, ApiError> {
        let comment = self
            .comments
            .iter_mut()
            .find(|c| c.id == comment_id)
            .ok_or(ApiError::CommentNotFound)?;
        let last_id = self.last_reply_id.entry(comment_id).or_insert(0);
        *last_id += 1;
        let reply = Reply {
            id: ReplyId(*last_id),
            text,
            username: username_or_anonymous(username),
            reply_to_user: reply_to_user.filter(|u| !u.is_empty()),
            likes: Likes::default(),
            timestamp: Utc::now(),
        };
        tracing::debug!(comment = ?comment_id, reply = ?reply.id, "added reply");
        comment.replies.push(reply.clone());
        Ok(reply)
    }

    pub fn toggle_comment_like(
        &mut self,
        comment_id: CommentId,
        visitor: &VisitorId,
    ) -> Result<Liked<Comment>, ApiError> {
        let comment = self
            .comments
            .iter_mut()
            .find(|c| c.id == comment_id)
            .ok_or(ApiError::CommentNotFound)?;
        let is_liked = comment.likes.toggle(visitor);
        tracing::debug!(comment = ?comment_id, ?visitor, is_liked, "toggled comment like");
        Ok(Liked {
            item: comment.clone(),
            is_liked,
        })
    }

    pub fn toggle_reply_like(
        &mut self,
        comment_id: CommentId,
        reply_id: ReplyId,
        visitor: &VisitorId,
    ) -> Result<Liked<Reply>, ApiError> {
        let reply = self
            .comments
            .iter_mut()
            .find(|c| c.id == comment_id)
            .ok_or(ApiError::CommentNotFound)?
            .reply_mut(reply_id)
            .ok_or(ApiError::ReplyNotFound)?;
        let is_liked = reply.likes.toggle(visitor);
        tracing::debug!(comment = ?comment_id, reply = ?reply_id, ?visitor, is_liked, "toggled reply like");
        Ok(Liked {
            item: reply.clone(),
            is_liked,
        })
    }
}

/// Handle on the process-wide store
///
/// Every request takes the lock once for its whole read or mutation, which
/// keeps creations and toggles atomic with respect to each other.
#[derive(Clone, Debug, Default)]
pub struct SharedStore(Arc<RwLock<Store>>);

impl SharedStore {
    pub fn new() -> SharedStore {
        SharedStore::default()
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.0.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.0.write().await
    }
}
