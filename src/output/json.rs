use serde::Serialize;
use serde_json::json;

pub fn emit_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}

pub fn emit_json_value(value: &serde_json::Value, pretty: bool) -> anyhow::Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}

pub fn error_json(message: &str, kind: &str) -> serde_json::Value {
    json!({
        "error": {
            "message": message,
            "kind": kind,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_payload_carries_kind_and_message() {
        let payload = error_json("no listener", "Connection");
        assert_eq!(payload["error"]["kind"], "Connection");
        assert_eq!(payload["error"]["message"], "no listener");
    }

    #[test]
    fn compact_and_pretty_forms_agree() {
        let value = json!({"a": 1});
        let compact = emit_json_value(&value, false).unwrap();
        let pretty = emit_json_value(&value, true).unwrap();
        assert_eq!(compact, "{\"a\":1}");
        assert!(pretty.contains('\n'));
    }
}
