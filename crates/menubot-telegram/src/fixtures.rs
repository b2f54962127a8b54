//! Bot API JSON builders for adapter tests.

use serde_json::json;
use teloxide::types::Update;

pub fn user() -> serde_json::Value {
    json!({ "id": 1001, "is_bot": false, "first_name": "Olena" })
}

pub fn message(chat_id: i64, extra: serde_json::Value) -> serde_json::Value {
    let mut msg = json!({
        "message_id": 7,
        "date": 1_700_000_000,
        "chat": { "id": chat_id, "type": "private", "first_name": "Olena" },
        "from": user(),
    });
    if let (Some(obj), Some(add)) = (msg.as_object_mut(), extra.as_object()) {
        for (k, v) in add {
            obj.insert(k.clone(), v.clone());
        }
    }
    msg
}

/// Parse through text like the polling listener does; teloxide's `Update`
/// deserializer falls back to `UpdateKind::Error` when fed a `Value`.
pub fn parse(v: serde_json::Value) -> Update {
    serde_json::from_str(&v.to_string()).unwrap()
}

pub fn text_update(chat_id: i64, text: &str) -> Update {
    parse(json!({
        "update_id": 1,
        "message": message(chat_id, json!({ "text": text })),
    }))
}

pub fn callback_update(chat_id: i64, callback_id: &str, data: &str) -> Update {
    parse(json!({
        "update_id": 2,
        "callback_query": {
            "id": callback_id,
            "from": user(),
            "chat_instance": "ci-1",
            "data": data,
            "message": message(chat_id, json!({ "text": "Меню 1" })),
        },
    }))
}
