//! `response_format` constraint objects for structured generation.
//! These are forwarded to the inference service verbatim; the service
//! enforces them, nothing is validated locally.

use serde_json::{json, Value};

/// Constrains generation to `{ sentences: string[] }`.
pub fn sentences_response_format() -> Value {
    json!({
        "type": "json_schema",
        "json_schema": {
            "type": "object",
            "properties": {
                "sentences": {
                    "type": "array",
                    "items": {
                        "type": "string",
                        "description": "A common sentence that someone might ask for a translation",
                    },
                },
            },
            "required": ["sentences"],
        },
    })
}

/// Constrains generation to `{ users: {username, profileStatus}[] }`.
pub fn users_response_format() -> Value {
    json!({
        "type": "json_schema",
        "json_schema": {
            "type": "object",
            "properties": {
                "users": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "username": {
                                "type": "string",
                                "description": "A username without spaces all lowercase",
                            },
                            "profileStatus": {
                                "type": "string",
                                "description": "Lightly describes what the user is currently are focussing on technology wise, and then lists previous employers. To be used in the profile header next to their photo.",
                            },
                        },
                    },
                },
            },
            "required": ["users"],
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentence_schema_requires_sentences_array() {
        let format = sentences_response_format();
        assert_eq!(format["type"], "json_schema");
        assert_eq!(format["json_schema"]["required"], json!(["sentences"]));
        assert_eq!(
            format["json_schema"]["properties"]["sentences"]["type"],
            "array"
        );
    }

    #[test]
    fn user_schema_requires_users_with_profile_fields() {
        let format = users_response_format();
        assert_eq!(format["json_schema"]["required"], json!(["users"]));
        let item_props = &format["json_schema"]["properties"]["users"]["items"]["properties"];
        assert!(item_props.get("username").is_some());
        assert!(item_props.get("profileStatus").is_some());
    }
}
