use kibitz_client::{
    api::{ReplyId, Time},
    avatar_letter, relative_time, CommentView, ReplyTarget,
};
use yew::prelude::*;

use crate::{ui, util};

#[derive(Clone, PartialEq, Properties)]
pub struct CommentItemProps {
    pub view: CommentView,

    /// Set when the reply form is open under this comment
    pub reply: Option<ReplyTarget>,

    pub now: Time,
    pub on_like: Callback<()>,
    pub on_toggle_reply: Callback<()>,
    pub on_reply_to: Callback<String>,
    pub on_like_reply: Callback<ReplyId>,
    pub on_reply_draft_change: Callback<String>,
    pub on_clear_mention: Callback<()>,
    pub on_cancel_reply: Callback<()>,
    pub on_submit_reply: Callback<()>,
}

#[function_component(CommentItem)]
pub fn comment_item(p: &CommentItemProps) -> Html {
    let comment = &p.view.comment;
    html! {
        <div class="comment-container">
            <div class="comment">
                <div class="avatar">{ avatar_letter(&comment.username) }</div>
                <div class="comment-body">
                    <div class="comment-header">
                        <span class="username">{ &comment.username }</span>
                        <span class="timestamp">
                            { relative_time(comment.timestamp, p.now, &util::local_tz()) }
                        </span>
                    </div>
                    <p class="comment-text">{ &comment.text }</p>
                    <div class="comment-actions">
                        <ui::LikeButton
                            is_liked={ p.view.is_liked }
                            count={ comment.likes.count() }
                            on_like={ p.on_like.clone() }
                        />
                        <button
                            type="button"
                            class="reply-btn"
                            onclick={ p.on_toggle_reply.reform(|_| ()) }
                        >
                            { "Reply" }
                        </button>
                    </div>
                </div>
            </div>
            if !p.view.replies.is_empty() {
                <div class="replies">
                    { for p.view.replies.iter().map(|r| {
                        let id = r.reply.id;
                        let username = r.reply.username.clone();
                        html! {
                            <ui::ReplyItem
                                key={ id.0.to_string() }
                                view={ r.clone() }
                                now={ p.now }
                                on_like={ p.on_like_reply.reform(move |_| id) }
                                on_reply={ p.on_reply_to.reform(move |_| username.clone()) }
                            />
                        }
                    }) }
                </div>
            }
            if let Some(target) = &p.reply {
                <ui::ReplyForm
                    target={ target.clone() }
                    on_draft_change={ p.on_reply_draft_change.clone() }
                    on_clear_mention={ p.on_clear_mention.clone() }
                    on_cancel={ p.on_cancel_reply.clone() }
                    on_submit={ p.on_submit_reply.clone() }
                />
            }
        </div>
    }
}
