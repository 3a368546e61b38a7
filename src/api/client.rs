//! Remote friend directory client.
//!
//! Builds the four HTTP operations against the backend. Request construction
//! is pure (and tested); dispatch hands the built request to the host via
//! `web_request`, whose response arrives later as a `WebRequestResult` event
//! tagged with the request's context map.

use crate::api::operation::{ApiOperation, CONTEXT_OP, CONTEXT_SENDER_EMAIL};
use std::collections::BTreeMap;
use zellij_tile::prelude::HttpVerb;
use zellij_tile::shim::web_request;

/// A fully built directory request, ready for dispatch.
///
/// Kept as a plain value so construction can be asserted on in tests without
/// a host runtime.
#[derive(Debug)]
pub struct DirectoryRequest {
    /// Absolute request URL.
    pub url: String,
    /// HTTP method.
    pub verb: HttpVerb,
    /// Request headers, always including Authorization.
    pub headers: BTreeMap<String, String>,
    /// JSON body for POST operations, empty for GETs.
    pub body: Vec<u8>,
    /// Context map echoed back on the response event.
    pub context: BTreeMap<String, String>,
}

impl DirectoryRequest {
    /// Issues this request through the host.
    ///
    /// Fire-and-forget: the result is delivered asynchronously as an
    /// `Event::WebRequestResult` carrying `self.context`.
    pub fn dispatch(self) {
        tracing::debug!(url = %self.url, op = ?self.context.get(CONTEXT_OP), "dispatching directory request");
        web_request(self.url, self.verb, self.headers, self.body, self.context);
    }
}

/// Client for the remote friend directory.
///
/// Holds the base URL and the session token captured at load time. All
/// methods build a [`DirectoryRequest`]; callers decide when to dispatch.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    base_url: String,
    access_token: Option<String>,
}

impl DirectoryClient {
    /// Creates a client for the given base URL and optional session token.
    ///
    /// A missing token is tolerated: requests carry an empty bearer value
    /// and the server rejects them, which the screen absorbs like any other
    /// failure.
    #[must_use]
    pub fn new(base_url: impl Into<String>, access_token: Option<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
        }
    }

    /// Builds the friends list fetch (GET `/friend/all`).
    #[must_use]
    pub fn list_friends(&self) -> DirectoryRequest {
        self.get("/friend/all", ApiOperation::ListFriends)
    }

    /// Builds the pending requests fetch (GET `/friend/requests/pending`).
    #[must_use]
    pub fn list_pending(&self) -> DirectoryRequest {
        self.get("/friend/requests/pending", ApiOperation::ListPending)
    }

    /// Builds the confirm call for an inbound request (POST `/friend/confirm`).
    ///
    /// The sender email is carried both in the JSON body and in the request
    /// context, so the response event can be matched back to the in-flight
    /// accept without extra state in the shim.
    #[must_use]
    pub fn confirm_request(&self, sender_email: &str) -> DirectoryRequest {
        let body = serde_json::json!({ "sender_email": sender_email });
        let mut request = self.post("/friend/confirm", ApiOperation::ConfirmRequest, &body);
        request
            .context
            .insert(CONTEXT_SENDER_EMAIL.to_string(), sender_email.to_string());
        request
    }

    /// Builds the send-request call (POST `/friend/add`).
    #[must_use]
    pub fn send_request(&self, receiver_email: &str) -> DirectoryRequest {
        let body = serde_json::json!({ "receiver_email": receiver_email });
        self.post("/friend/add", ApiOperation::SendRequest, &body)
    }

    fn get(&self, path: &str, op: ApiOperation) -> DirectoryRequest {
        DirectoryRequest {
            url: format!("{}{path}", self.base_url),
            verb: HttpVerb::Get,
            headers: self.auth_headers(false),
            body: Vec::new(),
            context: Self::context_for(op),
        }
    }

    fn post(&self, path: &str, op: ApiOperation, body: &serde_json::Value) -> DirectoryRequest {
        DirectoryRequest {
            url: format!("{}{path}", self.base_url),
            verb: HttpVerb::Post,
            headers: self.auth_headers(true),
            body: body.to_string().into_bytes(),
            context: Self::context_for(op),
        }
    }

    fn auth_headers(&self, with_json_body: bool) -> BTreeMap<String, String> {
        let mut headers = BTreeMap::new();
        let token = self.access_token.as_deref().unwrap_or_default();
        headers.insert("Authorization".to_string(), format!("Bearer {token}"));
        if with_json_body {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        headers
    }

    fn context_for(op: ApiOperation) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        context.insert(CONTEXT_OP.to_string(), op.tag().to_string());
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> DirectoryClient {
        DirectoryClient::new("https://friends.example.com/", Some("tok-1".to_string()))
    }

    #[test]
    fn list_friends_builds_authorized_get() {
        let request = client().list_friends();
        assert_eq!(request.url, "https://friends.example.com/friend/all");
        assert!(matches!(request.verb, HttpVerb::Get));
        assert_eq!(
            request.headers.get("Authorization").map(String::as_str),
            Some("Bearer tok-1")
        );
        assert!(request.body.is_empty());
        assert_eq!(ApiOperation::from_context(&request.context), Some(ApiOperation::ListFriends));
    }

    #[test]
    fn confirm_carries_sender_email_in_body_and_context() {
        let request = client().confirm_request("a@x.com");
        assert_eq!(request.url, "https://friends.example.com/friend/confirm");
        assert!(matches!(request.verb, HttpVerb::Post));
        let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
        assert_eq!(body["sender_email"], "a@x.com");
        assert_eq!(
            request.context.get(CONTEXT_SENDER_EMAIL).map(String::as_str),
            Some("a@x.com")
        );
        assert_eq!(
            request.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn send_request_posts_receiver_email() {
        let request = client().send_request("b@y.com");
        assert_eq!(request.url, "https://friends.example.com/friend/add");
        let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
        assert_eq!(body["receiver_email"], "b@y.com");
    }

    #[test]
    fn missing_token_yields_empty_bearer() {
        let client = DirectoryClient::new("https://friends.example.com", None);
        let request = client.list_pending();
        assert_eq!(
            request.headers.get("Authorization").map(String::as_str),
            Some("Bearer ")
        );
    }
}
