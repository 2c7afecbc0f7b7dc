use std::fmt::Display;

use crate::api::{
    Comment, CommentId, Liked, NewComment, NewReply, Reply, ReplyId, VisitorId,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReplyView {
    pub reply: Reply,
    pub is_liked: bool,
}

impl ReplyView {
    pub fn new(reply: Reply, visitor: &VisitorId) -> ReplyView {
        ReplyView {
            is_liked: reply.likes.is_liked_by(visitor),
            reply,
        }
    }
}

/// A comment as displayed to the local visitor
///
/// `comment.replies` is always empty, the replies live in `replies`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommentView {
    pub comment: Comment,
    pub is_liked: bool,
    pub replies: Vec<ReplyView>,
}

impl CommentView {
    pub fn new(mut comment: Comment, visitor: &VisitorId) -> CommentView {
        let replies = std::mem::take(&mut comment.replies)
            .into_iter()
            .map(|r| ReplyView::new(r, visitor))
            .collect();
        CommentView {
            is_liked: comment.likes.is_liked_by(visitor),
            comment,
            replies,
        }
    }
}

/// The comment currently being replied to
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReplyTarget {
    pub comment: CommentId,

    /// Author of the reply being answered, shown as an @mention
    pub mention: Option<String>,

    pub draft: String,
}

/// Local state of the comment widget
///
/// Server responses are applied to the single entity they are about; nothing
/// is refetched after the initial load.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    visitor: VisitorId,
    pub comments: Vec<CommentView>,
    pub draft: String,
    pub username: String,
    pub reply: Option<ReplyTarget>,
    pub last_error: Option<String>,
}

impl Board {
    pub fn new(visitor: VisitorId) -> Board {
        Board {
            visitor,
            comments: Vec::new(),
            draft: String::new(),
            username: String::new(),
            reply: None,
            last_error: None,
        }
    }

    pub fn visitor(&self) -> &VisitorId {
        &self.visitor
    }

    pub fn loaded(&mut self, comments: Vec<Comment>) {
        self.comments = comments
            .into_iter()
            .map(|c| CommentView::new(c, &self.visitor))
            .collect();
    }

    fn comment_mut(&mut self, id: CommentId) -> Option<&mut CommentView> {
        let res = self.comments.iter_mut().find(|c| c.comment.id == id);
        if res.is_none() {
            tracing::warn!(?id, "got server response for comment not on the board");
        }
        res
    }

    fn username(&self) -> Option<String> {
        Some(self.username.clone()).filter(|u| !u.is_empty())
    }

    /// The comment to submit, if the draft has any text
    pub fn comment_to_post(&self) -> Option<NewComment> {
        (!self.draft.trim().is_empty()).then(|| NewComment::new(self.draft.clone(), self.username()))
    }

    pub fn comment_posted(&mut self, comment: Comment) {
        self.comments.push(CommentView {
            comment: Comment {
                replies: Vec::new(),
                ..comment
            },
            is_liked: false,
            replies: Vec::new(),
        });
        self.draft.clear();
    }

    /// Opens the reply form under `comment`, or closes it if it was already
    /// open there without a mention
    pub fn toggle_reply_form(&mut self, comment: CommentId) {
        match &self.reply {
            Some(t) if t.comment == comment && t.mention.is_none() => self.reply = None,
            _ => {
                self.reply = Some(ReplyTarget {
                    comment,
                    mention: None,
                    draft: String::new(),
                })
            }
        }
    }

    /// Opens the reply form under `comment`, addressed to `username`
    pub fn reply_to_reply(&mut self, comment: CommentId, username: String) {
        self.reply = Some(ReplyTarget {
            comment,
            mention: Some(username),
            draft: String::new(),
        });
    }

    pub fn clear_mention(&mut self) {
        if let Some(t) = &mut self.reply {
            t.mention = None;
        }
    }

    pub fn cancel_reply(&mut self) {
        self.reply = None;
    }

    pub fn set_reply_draft(&mut self, text: String) {
        if let Some(t) = &mut self.reply {
            t.draft = text;
        }
    }

    /// The reply to submit, if the reply form is open with some text
    pub fn reply_to_post(&self) -> Option<(CommentId, NewReply)> {
        let target = self.reply.as_ref()?;
        if target.draft.trim().is_empty() {
            return None;
        }
        Some((
            target.comment,
            NewReply::new(target.draft.clone(), self.username(), target.mention.clone()),
        ))
    }

    pub fn reply_posted(&mut self, comment: CommentId, reply: Reply) {
        if let Some(c) = self.comment_mut(comment) {
            c.replies.push(ReplyView {
                reply,
                is_liked: false,
            });
        }
        self.reply = None;
    }

    pub fn comment_like_toggled(&mut self, id: CommentId, resp: Liked<Comment>) {
        if let Some(c) = self.comment_mut(id) {
            c.comment.likes = resp.item.likes;
            c.is_liked = resp.is_liked;
        }
    }

    pub fn reply_like_toggled(&mut self, comment: CommentId, reply: ReplyId, resp: Liked<Reply>) {
        let reply = self
            .comment_mut(comment)
            .and_then(|c| c.replies.iter_mut().find(|r| r.reply.id == reply));
        if let Some(r) = reply {
            r.reply.likes = resp.item.likes;
            r.is_liked = resp.is_liked;
        }
    }

    pub fn request_failed(&mut self, action: &str, err: impl Display) {
        tracing::error!("failed to {action}: {err}");
        self.last_error = Some(format!("Could not {action}: {err}"));
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }
}
