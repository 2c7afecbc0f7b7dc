use std::str::FromStr;

use gloo_storage::{LocalStorage, Storage};
use kibitz_client::api::VisitorId;
use wasm_bindgen::prelude::*;

const KEY_VISITOR_ID: &str = "visitorId";

#[wasm_bindgen(inline_js = "
    export function get_timezone() {
        return Intl.DateTimeFormat().resolvedOptions().timeZone;
    }
")]
extern "C" {
    fn get_timezone() -> String;
}

lazy_static::lazy_static! {
    static ref LOCAL_TZ: chrono_tz::Tz = {
        let name = get_timezone();
        chrono_tz::Tz::from_str(&name).unwrap_or_else(|_| {
            tracing::warn!(%name, "host js timezone is not in chrono-tz database, using UTC");
            chrono_tz::UTC
        })
    };
}

pub fn local_tz() -> chrono_tz::Tz {
    *LOCAL_TZ
}

/// The identity of this browser, created on first visit
pub fn visitor_id() -> VisitorId {
    if let Ok(id) = LocalStorage::get::<String>(KEY_VISITOR_ID) {
        if !id.is_empty() {
            return VisitorId(id);
        }
    }
    let id = VisitorId::random();
    if let Err(e) = LocalStorage::set(KEY_VISITOR_ID, &id.0) {
        tracing::warn!("failed saving visitor id to local storage: {e}");
    }
    id
}
