use kibitz_client::like_label;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct LikeButtonProps {
    pub is_liked: bool,
    pub count: u64,
    pub on_like: Callback<()>,
}

#[function_component(LikeButton)]
pub fn like_button(p: &LikeButtonProps) -> Html {
    html! {
        <button
            type="button"
            class={ classes!("like-btn", p.is_liked.then(|| "liked")) }
            aria-pressed={ if p.is_liked { "true" } else { "false" } }
            onclick={ p.on_like.reform(|_| ()) }
        >
            { like_label(p.is_liked, p.count) }
        </button>
    }
}
