use serde::{Deserialize, Deserializer};

use crate::{validate_text, Error, VisitorId};

// Any non-string value counts as a missing field.
fn string_or_none<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match serde_json::Value::deserialize(d)? {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NewComment {
    #[serde(default, deserialize_with = "string_or_none", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, deserialize_with = "string_or_none", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl NewComment {
    pub fn new(text: String, username: Option<String>) -> NewComment {
        NewComment {
            text: Some(text),
            username,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        validate_text(self.text.as_deref(), Error::CommentTextRequired)
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReply {
    #[serde(default, deserialize_with = "string_or_none", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, deserialize_with = "string_or_none", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, deserialize_with = "string_or_none", skip_serializing_if = "Option::is_none")]
    pub reply_to_user: Option<String>,
}

impl NewReply {
    pub fn new(text: String, username: Option<String>, reply_to_user: Option<String>) -> NewReply {
        NewReply {
            text: Some(text),
            username,
            reply_to_user,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        validate_text(self.text.as_deref(), Error::ReplyTextRequired)
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeRequest {
    #[serde(default, deserialize_with = "string_or_none", skip_serializing_if = "Option::is_none")]
    pub visitor_id: Option<String>,
}

impl LikeRequest {
    pub fn new(visitor: &VisitorId) -> LikeRequest {
        LikeRequest {
            visitor_id: Some(visitor.0.clone()),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        match &self.visitor_id {
            Some(v) if !v.is_empty() => Ok(()),
            _ => Err(Error::VisitorIdRequired),
        }
    }

    /// The visitor sending this request, or the empty id if there is none
    pub fn visitor(&self) -> VisitorId {
        VisitorId(self.visitor_id.clone().unwrap_or_default())
    }
}
