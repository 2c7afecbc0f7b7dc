mod board;
pub use board::{Board, CommentView, ReplyTarget, ReplyView};

mod display;
pub use display::{avatar_letter, like_label, relative_time};

pub mod api {
    pub use kibitz_api::*;
}
