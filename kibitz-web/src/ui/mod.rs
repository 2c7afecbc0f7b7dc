mod app;
pub use app::{App, AppMsg};

mod comment_form;
pub use comment_form::CommentForm;

mod comment_item;
pub use comment_item::CommentItem;

mod error_banner;
pub use error_banner::ErrorBanner;

mod like_button;
pub use like_button::LikeButton;

mod reply_form;
pub use reply_form::ReplyForm;

mod reply_item;
pub use reply_item::ReplyItem;
