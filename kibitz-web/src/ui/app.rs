use kibitz_client::{
    api::{Comment, CommentId, LikeRequest, Liked, Reply, ReplyId},
    Board,
};
use yew::prelude::*;

use crate::{api, ui, util};

pub enum AppMsg {
    ReceivedComments(Vec<Comment>),
    RequestFailed(&'static str, String),
    DismissError,

    SetDraft(String),
    SetUsername(String),
    SubmitComment,
    CommentPosted(Comment),

    ToggleReplyForm(CommentId),
    ReplyToReply(CommentId, String),
    ClearMention,
    CancelReply,
    SetReplyDraft(String),
    SubmitReply,
    ReplyPosted(CommentId, Reply),

    LikeComment(CommentId),
    CommentLikeToggled(CommentId, Liked<Comment>),
    LikeReply(CommentId, ReplyId),
    ReplyLikeToggled(CommentId, ReplyId, Liked<Reply>),
}

pub struct App {
    board: Board,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_future(async move {
            match api::fetch_comments().await {
                Ok(comments) => AppMsg::ReceivedComments(comments),
                Err(e) => AppMsg::RequestFailed("load comments", format!("{e:#}")),
            }
        });
        App {
            board: Board::new(util::visitor_id()),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::ReceivedComments(comments) => {
                tracing::debug!(num = comments.len(), "loaded comments");
                self.board.loaded(comments);
            }
            AppMsg::RequestFailed(action, err) => self.board.request_failed(action, err),
            AppMsg::DismissError => self.board.dismiss_error(),
            AppMsg::SetDraft(text) => self.board.draft = text,
            AppMsg::SetUsername(name) => self.board.username = name,
            AppMsg::SubmitComment => {
                let Some(data) = self.board.comment_to_post() else {
                    return false;
                };
                ctx.link().send_future(async move {
                    match api::post_comment(&data).await {
                        Ok(comment) => AppMsg::CommentPosted(comment),
                        Err(e) => AppMsg::RequestFailed("post comment", format!("{e:#}")),
                    }
                });
                return false;
            }
            AppMsg::CommentPosted(comment) => self.board.comment_posted(comment),
            AppMsg::ToggleReplyForm(comment) => self.board.toggle_reply_form(comment),
            AppMsg::ReplyToReply(comment, username) => {
                self.board.reply_to_reply(comment, username)
            }
            AppMsg::ClearMention => self.board.clear_mention(),
            AppMsg::CancelReply => self.board.cancel_reply(),
            AppMsg::SetReplyDraft(text) => self.board.set_reply_draft(text),
            AppMsg::SubmitReply => {
                let Some((comment, data)) = self.board.reply_to_post() else {
                    return false;
                };
                ctx.link().send_future(async move {
                    match api::post_reply(comment, &data).await {
                        Ok(reply) => AppMsg::ReplyPosted(comment, reply),
                        Err(e) => AppMsg::RequestFailed("post reply", format!("{e:#}")),
                    }
                });
                return false;
            }
            AppMsg::ReplyPosted(comment, reply) => self.board.reply_posted(comment, reply),
            AppMsg::LikeComment(comment) => {
                let data = LikeRequest::new(self.board.visitor());
                ctx.link().send_future(async move {
                    match api::like_comment(comment, &data).await {
                        Ok(resp) => AppMsg::CommentLikeToggled(comment, resp),
                        Err(e) => AppMsg::RequestFailed("like comment", format!("{e:#}")),
                    }
                });
                return false;
            }
            AppMsg::CommentLikeToggled(comment, resp) => {
                self.board.comment_like_toggled(comment, resp)
            }
            AppMsg::LikeReply(comment, reply) => {
                let data = LikeRequest::new(self.board.visitor());
                ctx.link().send_future(async move {
                    match api::like_reply(comment, reply, &data).await {
                        Ok(resp) => AppMsg::ReplyLikeToggled(comment, reply, resp),
                        Err(e) => AppMsg::RequestFailed("like reply", format!("{e:#}")),
                    }
                });
                return false;
            }
            AppMsg::ReplyLikeToggled(comment, reply, resp) => {
                self.board.reply_like_toggled(comment, reply, resp)
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let now = chrono::Utc::now();
        html! {
            <div class="comments-widget">
                <h2 class="comments-title">{ "Comments" }</h2>
                <ui::ErrorBanner
                    message={ self.board.last_error.clone() }
                    on_dismiss={ link.callback(|_: ()| AppMsg::DismissError) }
                />
                <ui::CommentForm
                    draft={ self.board.draft.clone() }
                    username={ self.board.username.clone() }
                    on_draft_change={ link.callback(AppMsg::SetDraft) }
                    on_username_change={ link.callback(AppMsg::SetUsername) }
                    on_submit={ link.callback(|_: ()| AppMsg::SubmitComment) }
                />
                <div class="comments-list">
                    if self.board.comments.is_empty() {
                        <p class="no-comments">{ "No comments yet. Be the first to comment!" }</p>
                    } else {
                        { for self.board.comments.iter().map(|c| {
                            let id = c.comment.id;
                            let reply = self.board.reply.clone().filter(|t| t.comment == id);
                            html! {
                                <ui::CommentItem
                                    key={ id.0.to_string() }
                                    view={ c.clone() }
                                    { reply }
                                    { now }
                                    on_like={ link.callback(move |_: ()| AppMsg::LikeComment(id)) }
                                    on_toggle_reply={ link.callback(move |_: ()| AppMsg::ToggleReplyForm(id)) }
                                    on_reply_to={ link.callback(move |u: String| AppMsg::ReplyToReply(id, u)) }
                                    on_like_reply={ link.callback(move |r: ReplyId| AppMsg::LikeReply(id, r)) }
                                    on_reply_draft_change={ link.callback(AppMsg::SetReplyDraft) }
                                    on_clear_mention={ link.callback(|_: ()| AppMsg::ClearMention) }
                                    on_cancel_reply={ link.callback(|_: ()| AppMsg::CancelReply) }
                                    on_submit_reply={ link.callback(|_: ()| AppMsg::SubmitReply) }
                                />
                            }
                        }) }
                    }
                </div>
            </div>
        }
    }
}
