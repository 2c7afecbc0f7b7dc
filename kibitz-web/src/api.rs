use anyhow::{anyhow, Context};
use kibitz_client::api::{
    self, Comment, CommentId, LikeRequest, Liked, NewComment, NewReply, Reply, ReplyId,
};

/// Requests go to the server this page was served from
fn url(path: &str) -> anyhow::Result<String> {
    let origin = web_sys::window()
        .ok_or_else(|| anyhow!("no window available"))?
        .location()
        .origin()
        .map_err(|e| anyhow!("failed reading page origin: {e:?}"))?;
    Ok(format!("{origin}/api/{path}"))
}

async fn send<R>(req: reqwest::RequestBuilder) -> anyhow::Result<R>
where
    R: for<'de> serde::Deserialize<'de>,
{
    let resp = req.send().await.context("sending request to server")?;
    if resp.status().is_success() {
        return resp.json().await.context("parsing server response");
    }
    let status = resp.status();
    let body = resp.bytes().await.context("reading server error")?;
    let err = api::Error::parse(&body)
        .with_context(|| format!("parsing server error for status {status}"))?;
    Err(err.into())
}

pub async fn fetch_comments() -> anyhow::Result<Vec<Comment>> {
    send(crate::CLIENT.get(url("comments")?)).await
}

pub async fn post_comment(data: &NewComment) -> anyhow::Result<Comment> {
    send(crate::CLIENT.post(url("comments")?).json(data)).await
}

pub async fn post_reply(comment: CommentId, data: &NewReply) -> anyhow::Result<Reply> {
    send(
        crate::CLIENT
            .post(url(&format!("comments/{}/reply", comment.0))?)
            .json(data),
    )
    .await
}

pub async fn like_comment(comment: CommentId, data: &LikeRequest) -> anyhow::Result<Liked<Comment>> {
    send(
        crate::CLIENT
            .post(url(&format!("comments/{}/like", comment.0))?)
            .json(data),
    )
    .await
}

pub async fn like_reply(
    comment: CommentId,
    reply: ReplyId,
    data: &LikeRequest,
) -> anyhow::Result<Liked<Reply>> {
    send(
        crate::CLIENT
            .post(url(&format!("comments/{}/reply/{}/like", comment.0, reply.0))?)
            .json(data),
    )
    .await
}
