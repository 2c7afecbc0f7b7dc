use chrono::Utc;
use kibitz_api::{
    Comment, CommentId, Error, LikeRequest, Liked, Likes, NewComment, NewReply, Reply, ReplyId,
    ANONYMOUS,
};

/// Straightforward model of the comment API, one method per route
///
/// Path segments are taken as the raw strings the router would see, and ids
/// are derived from collection lengths, which holds as long as nothing is
/// ever deleted.
pub struct MockServer(Vec<Comment>);

fn name(n: Option<String>) -> String {
    n.filter(|n| !n.is_empty())
        .unwrap_or_else(|| String::from(ANONYMOUS))
}

impl MockServer {
    pub fn new() -> MockServer {
        MockServer(Vec::new())
    }

    /// Return the current number of comments
    pub fn test_num_comments(&self) -> usize {
        self.0.len()
    }

    fn find(&mut self, id: &str) -> Result<&mut Comment, Error> {
        let id = id.parse::<u64>().map_err(|_| Error::CommentNotFound)?;
        self.0
            .iter_mut()
            .find(|c| c.id == CommentId(id))
            .ok_or(Error::CommentNotFound)
    }

    pub fn fetch_comments(&self) -> Result<Vec<Comment>, Error> {
        Ok(self.0.clone())
    }

    pub fn post_comment(&mut self, c: NewComment) -> Result<Comment, Error> {
        c.validate()?;
        let comment = Comment {
            id: CommentId(self.0.len() as u64 + 1),
            text: c.text.unwrap_or_default(),
            username: name(c.username),
            likes: Likes::default(),
            replies: Vec::new(),
            timestamp: Utc::now(),
        };
        self.0.push(comment.clone());
        Ok(comment)
    }

    pub fn post_reply(&mut self, id: &str, r: NewReply) -> Result<Reply, Error> {
        r.validate()?;
        let comment = self.find(id)?;
        let reply = Reply {
            id: ReplyId(comment.replies.len() as u64 + 1),
            text: r.text.unwrap_or_default(),
            username: name(r.username),
            reply_to_user: r.reply_to_user.filter(|u| !u.is_empty()),
            likes: Likes::default(),
            timestamp: Utc::now(),
        };
        comment.replies.push(reply.clone());
        Ok(reply)
    }

    pub fn like_comment(&mut self, id: &str, l: LikeRequest) -> Result<Liked<Comment>, Error> {
        l.validate()?;
        let comment = self.find(id)?;
        let is_liked = comment.likes.toggle(&l.visitor());
        Ok(Liked {
            item: comment.clone(),
            is_liked,
        })
    }

    pub fn like_reply(
        &mut self,
        comment: &str,
        reply: &str,
        l: LikeRequest,
    ) -> Result<Liked<Reply>, Error> {
        l.validate()?;
        let comment = self.find(comment)?;
        let reply = reply.parse::<u64>().map_err(|_| Error::ReplyNotFound)?;
        let reply = comment
            .replies
            .iter_mut()
            .find(|r| r.id == ReplyId(reply))
            .ok_or(Error::ReplyNotFound)?;
        let is_liked = reply.likes.toggle(&l.visitor());
        Ok(Liked {
            item: reply.clone(),
            is_liked,
        })
    }
}
