use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ErrorBannerProps {
    pub message: Option<String>,
    pub on_dismiss: Callback<()>,
}

#[function_component(ErrorBanner)]
pub fn error_banner(p: &ErrorBannerProps) -> Html {
    let Some(message) = &p.message else {
        return html! {};
    };
    html! {
        <div class="error-banner" role="alert">
            <span>{ message }</span>
            <button
                type="button"
                class="dismiss-btn"
                aria-label="Dismiss"
                onclick={ p.on_dismiss.reform(|_| ()) }
            >
                { "✕" }
            </button>
        </div>
    }
}
