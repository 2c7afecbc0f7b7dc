use kibitz_client::{api::Time, avatar_letter, relative_time, ReplyView};
use yew::prelude::*;

use crate::{ui, util};

#[derive(Clone, PartialEq, Properties)]
pub struct ReplyItemProps {
    pub view: ReplyView,
    pub now: Time,
    pub on_like: Callback<()>,
    pub on_reply: Callback<()>,
}

#[function_component(ReplyItem)]
pub fn reply_item(p: &ReplyItemProps) -> Html {
    let reply = &p.view.reply;
    html! {
        <div class="reply">
            <div class="avatar avatar-small">{ avatar_letter(&reply.username) }</div>
            <div class="reply-body">
                <div class="comment-header">
                    <span class="username">{ &reply.username }</span>
                    <span class="timestamp">
                        { relative_time(reply.timestamp, p.now, &util::local_tz()) }
                    </span>
                </div>
                <p class="comment-text">
                    if let Some(user) = &reply.reply_to_user {
                        <span class="mention">{ format!("@{user} ") }</span>
                    }
                    { &reply.text }
                </p>
                <div class="comment-actions">
                    <ui::LikeButton
                        is_liked={ p.view.is_liked }
                        count={ reply.likes.count() }
                        on_like={ p.on_like.clone() }
                    />
                    <button type="button" class="reply-btn" onclick={ p.on_reply.reform(|_| ()) }>
                        { "Reply" }
                    </button>
                </div>
            </div>
        </div>
    }
}
