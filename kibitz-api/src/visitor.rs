use uuid::Uuid;

/// Self-reported identity of a browser, only ever used for like set membership
///
/// This is not a credential: any client can send any value.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct VisitorId(pub String);

impl VisitorId {
    pub fn random() -> VisitorId {
        VisitorId(format!("visitor_{}", Uuid::new_v4().simple()))
    }
}
