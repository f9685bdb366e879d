use serde::{Deserialize, Serialize};

/// One unit of translation work forwarded to the external service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_lang: Option<String>,
    pub target_lang: String,
    /// Opaque caller-supplied token echoed back by the service so the
    /// caller can re-associate results; never interpreted here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
}

/// A set of work items submitted together so the service can batch and
/// queue them server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEnvelope {
    pub requests: Vec<TranslationRequest>,
}

/// Parameters for polling a previously queued batch.
#[derive(Debug, Clone, Serialize)]
pub struct PollRequest {
    pub request_id: String,
}

/// Per-call options understood by the inference service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub queue_request: bool,
}

impl RunOptions {
    pub fn queued() -> Self {
        Self { queue_request: true }
    }
}

/// Inbound user record for the with-reference batch route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    #[serde(rename = "profileStatus")]
    pub profile_status: String,
}

/// Maps raw query strings to Spanish-translation work items, order
/// preserved.
pub fn batch_from_queries(queries: &[String]) -> BatchEnvelope {
    let requests = queries
        .iter()
        .map(|q| TranslationRequest {
            text: q.clone(),
            source_lang: None,
            target_lang: "es".to_string(),
            external_reference: None,
        })
        .collect();
    BatchEnvelope { requests }
}

/// Maps user records to work items carrying the username as the
/// external reference, order preserved.
pub fn batch_from_users(users: &[UserProfile]) -> BatchEnvelope {
    let requests = users
        .iter()
        .map(|user| TranslationRequest {
            text: user.profile_status.clone(),
            source_lang: Some("en".to_string()),
            target_lang: "es".to_string(),
            external_reference: Some(user.username.clone()),
        })
        .collect();
    BatchEnvelope { requests }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn queries_map_one_to_one_in_order() {
        let queries: Vec<String> = ["hello", "good morning", "where is the library"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let batch = batch_from_queries(&queries);

        assert_eq!(batch.requests.len(), queries.len());
        for (request, query) in batch.requests.iter().zip(&queries) {
            assert_eq!(request.text, *query);
            assert_eq!(request.target_lang, "es");
            assert!(request.source_lang.is_none());
            assert!(request.external_reference.is_none());
        }
    }

    #[test]
    fn query_batch_serializes_without_optional_fields() {
        let batch = batch_from_queries(&["hello".to_string()]);
        assert_eq!(
            serde_json::to_value(&batch).unwrap(),
            json!({ "requests": [{ "text": "hello", "target_lang": "es" }] })
        );
    }

    #[test]
    fn users_map_to_referenced_requests() {
        let users = vec![
            UserProfile {
                username: "abc".to_string(),
                profile_status: "likes rust".to_string(),
            },
            UserProfile {
                username: "xyz".to_string(),
                profile_status: "shipping wasm".to_string(),
            },
        ];
        let batch = batch_from_users(&users);

        assert_eq!(batch.requests.len(), 2);
        for (request, user) in batch.requests.iter().zip(&users) {
            assert_eq!(request.text, user.profile_status);
            assert_eq!(request.source_lang.as_deref(), Some("en"));
            assert_eq!(request.target_lang, "es");
            assert_eq!(request.external_reference.as_deref(), Some(user.username.as_str()));
        }
    }

    #[test]
    fn user_batch_serializes_all_fields() {
        let batch = batch_from_users(&[UserProfile {
            username: "abc".to_string(),
            profile_status: "likes rust".to_string(),
        }]);
        assert_eq!(
            serde_json::to_value(&batch).unwrap(),
            json!({
                "requests": [{
                    "text": "likes rust",
                    "source_lang": "en",
                    "target_lang": "es",
                    "external_reference": "abc",
                }]
            })
        );
    }

    #[test]
    fn empty_inputs_yield_empty_batches() {
        assert!(batch_from_queries(&[]).requests.is_empty());
        assert!(batch_from_users(&[]).requests.is_empty());
    }

    #[test]
    fn user_profile_deserializes_camel_case_status() {
        let user: UserProfile =
            serde_json::from_value(json!({ "username": "abc", "profileStatus": "likes rust" }))
                .unwrap();
        assert_eq!(user.username, "abc");
        assert_eq!(user.profile_status, "likes rust");
    }

    #[test]
    fn poll_request_serializes_to_request_id_only() {
        let poll = PollRequest {
            request_id: "123".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&poll).unwrap(),
            json!({ "request_id": "123" })
        );
    }
}
