use kibitz_client::ReplyTarget;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ReplyFormProps {
    pub target: ReplyTarget,
    pub on_draft_change: Callback<String>,
    pub on_clear_mention: Callback<()>,
    pub on_cancel: Callback<()>,
    pub on_submit: Callback<()>,
}

#[function_component(ReplyForm)]
pub fn reply_form(p: &ReplyFormProps) -> Html {
    let blank = p.target.draft.trim().is_empty();
    let placeholder = match &p.target.mention {
        Some(user) => format!("Reply to @{user}..."),
        None => String::from("Write a reply..."),
    };
    html! {
        <form
            class="reply-form"
            onsubmit={ p.on_submit.reform(|e: SubmitEvent| e.prevent_default()) }
        >
            if let Some(user) = &p.target.mention {
                <div class="replying-to">
                    { format!("Replying to @{user}") }
                    <button
                        type="button"
                        class="clear-mention-btn"
                        aria-label="Reply to the comment instead"
                        onclick={ p.on_clear_mention.reform(|_| ()) }
                    >
                        { "✕" }
                    </button>
                </div>
            }
            <input
                type="text"
                class="reply-input"
                { placeholder }
                value={ p.target.draft.clone() }
                oninput={ p.on_draft_change.reform(|e: InputEvent| {
                    e.target_unchecked_into::<web_sys::HtmlInputElement>().value()
                }) }
            />
            <div class="reply-actions">
                <button type="button" class="cancel-btn" onclick={ p.on_cancel.reform(|_| ()) }>
                    { "Cancel" }
                </button>
                <button type="submit" class="reply-submit-btn" disabled={ blank }>{ "Reply" }</button>
            </div>
        </form>
    }
}
