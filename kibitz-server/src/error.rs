use axum::http::header;
use kibitz_api::Error as ApiError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Error {
    pub fn malformed_body() -> Error {
        Error::Api(ApiError::MalformedBody)
    }

    pub fn comment_not_found() -> Error {
        Error::Api(ApiError::CommentNotFound)
    }

    pub fn reply_not_found() -> Error {
        Error::Api(ApiError::ReplyNotFound)
    }

    pub fn route_not_found() -> Error {
        Error::Api(ApiError::RouteNotFound)
    }
}

impl axum::response::IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let err = match self {
            Error::Anyhow(err) => {
                tracing::error!(?err, "internal server error");
                #[cfg(not(test))]
                let err = ApiError::Unknown(String::from("Internal server error"));
                #[cfg(test)]
                let err = ApiError::Unknown(format!("Internal server error: {err:?}"));
                err
            }
            Error::Api(err) => {
                tracing::info!("returning error to client: {err}");
                err
            }
        };
        (
            err.status_code(),
            [(header::CONTENT_TYPE, "application/json")],
            err.contents(),
        )
            .into_response()
    }
}
