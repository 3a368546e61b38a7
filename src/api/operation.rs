//! Directory operation tags carried through the host request context.
//!
//! The host's `web_request` facility is fire-and-forget: the response comes
//! back later as a `WebRequestResult` event carrying the same context map the
//! request was issued with. Each request is tagged with one of these
//! operations so the plugin shim can route the response to the right
//! application event.

use std::collections::BTreeMap;

/// Context key holding the operation tag.
pub const CONTEXT_OP: &str = "op";

/// Context key holding the sender email of an in-flight confirm request.
pub const CONTEXT_SENDER_EMAIL: &str = "sender_email";

/// The four remote directory operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiOperation {
    /// GET `/friend/all` — full confirmed friends list.
    ListFriends,
    /// GET `/friend/requests/pending` — full inbound pending requests list.
    ListPending,
    /// POST `/friend/confirm` — accept a pending request by sender email.
    ConfirmRequest,
    /// POST `/friend/add` — send a friend request by receiver email.
    SendRequest,
}

impl ApiOperation {
    /// Stable string tag written into the request context.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::ListFriends => "list_friends",
            Self::ListPending => "list_pending",
            Self::ConfirmRequest => "confirm_request",
            Self::SendRequest => "send_request",
        }
    }

    /// Parses the operation tag back out of a response context.
    ///
    /// Returns `None` for contexts this plugin did not produce, which the
    /// shim ignores.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        match context.get(CONTEXT_OP).map(String::as_str) {
            Some("list_friends") => Some(Self::ListFriends),
            Some("list_pending") => Some(Self::ListPending),
            Some("confirm_request") => Some(Self::ConfirmRequest),
            Some("send_request") => Some(Self::SendRequest),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_context() {
        for op in [
            ApiOperation::ListFriends,
            ApiOperation::ListPending,
            ApiOperation::ConfirmRequest,
            ApiOperation::SendRequest,
        ] {
            let mut context = BTreeMap::new();
            context.insert(CONTEXT_OP.to_string(), op.tag().to_string());
            assert_eq!(ApiOperation::from_context(&context), Some(op));
        }
    }

    #[test]
    fn foreign_context_is_ignored() {
        let mut context = BTreeMap::new();
        context.insert("something".to_string(), "else".to_string());
        assert_eq!(ApiOperation::from_context(&context), None);
        context.insert(CONTEXT_OP.to_string(), "unknown".to_string());
        assert_eq!(ApiOperation::from_context(&context), None);
    }
}
