use std::any::Any;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use kibitz_api::{
    Comment, CommentId, LikeRequest, Liked, NewComment, NewReply, Reply, ReplyId, ServerInfo,
};

use crate::{extractors::*, Error, SharedStore};

// Ids that do not parse cannot name anything, so they resolve to nothing.
fn comment_id(raw: &str) -> Option<CommentId> {
    raw.parse().ok().map(CommentId)
}

fn reply_id(raw: &str) -> Option<ReplyId> {
    raw.parse().ok().map(ReplyId)
}

pub async fn root() -> Json<ServerInfo> {
    Json(ServerInfo::running())
}

pub async fn fetch_comments(State(store): State<SharedStore>) -> Json<Vec<Comment>> {
    Json(store.read().await.list_comments().to_vec())
}

pub async fn post_comment(
    State(store): State<SharedStore>,
    JsonBody(data): JsonBody<NewComment>,
) -> Result<(StatusCode, Json<Comment>), Error> {
    data.validate()?;
    let comment = store
        .write()
        .await
        .create_comment(data.text.unwrap_or_default(), data.username);
    Ok((StatusCode::CREATED, Json(comment)))
}

pub async fn post_reply(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    JsonBody(data): JsonBody<NewReply>,
) -> Result<(StatusCode, Json<Reply>), Error> {
    data.validate()?;
    let id = comment_id(&id).ok_or_else(Error::comment_not_found)?;
    let reply = store.write().await.add_reply(
        id,
        data.text.unwrap_or_default(),
        data.username,
        data.reply_to_user,
    )?;
    Ok((StatusCode::CREATED, Json(reply)))
}

pub async fn like_comment(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    JsonBody(data): JsonBody<LikeRequest>,
) -> Result<Json<Liked<Comment>>, Error> {
    data.validate()?;
    let id = comment_id(&id).ok_or_else(Error::comment_not_found)?;
    Ok(Json(
        store
            .write()
            .await
            .toggle_comment_like(id, &data.visitor())?,
    ))
}

pub async fn like_reply(
    State(store): State<SharedStore>,
    Path((comment, reply)): Path<(String, String)>,
    JsonBody(data): JsonBody<LikeRequest>,
) -> Result<Json<Liked<Reply>>, Error> {
    data.validate()?;
    let mut store = store.write().await;
    let comment = comment_id(&comment)
        .filter(|id| store.get_comment(*id).is_some())
        .ok_or_else(Error::comment_not_found)?;
    let reply = reply_id(&reply).ok_or_else(Error::reply_not_found)?;
    Ok(Json(store.toggle_reply_like(
        comment,
        reply,
        &data.visitor(),
    )?))
}

pub async fn not_found() -> Error {
    Error::route_not_found()
}

pub fn panicked(err: Box<dyn Any + Send + 'static>) -> Response {
    let msg = err
        .downcast_ref::<&str>()
        .map(|s| String::from(*s))
        .or_else(|| err.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| String::from("unknown panic payload"));
    Error::Anyhow(anyhow::anyhow!("handler panicked: {msg}")).into_response()
}
