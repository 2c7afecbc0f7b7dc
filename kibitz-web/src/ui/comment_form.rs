use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentFormProps {
    pub draft: String,
    pub username: String,
    pub on_draft_change: Callback<String>,
    pub on_username_change: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(CommentForm)]
pub fn comment_form(p: &CommentFormProps) -> Html {
    let blank = p.draft.trim().is_empty();
    html! {
        <form
            class="comment-form"
            onsubmit={ p.on_submit.reform(|e: SubmitEvent| e.prevent_default()) }
        >
            <input
                type="text"
                class="username-input"
                placeholder="Your name (optional)"
                value={ p.username.clone() }
                oninput={ p.on_username_change.reform(|e: InputEvent| {
                    e.target_unchecked_into::<web_sys::HtmlInputElement>().value()
                }) }
            />
            <div class="comment-input-row">
                <input
                    type="text"
                    class="comment-input"
                    placeholder="Write a comment..."
                    value={ p.draft.clone() }
                    oninput={ p.on_draft_change.reform(|e: InputEvent| {
                        e.target_unchecked_into::<web_sys::HtmlInputElement>().value()
                    }) }
                />
                <button type="submit" class="post-btn" disabled={ blank }>{ "Post" }</button>
            </div>
        </form>
    }
}
