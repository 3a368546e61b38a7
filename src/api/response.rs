//! Directory response envelopes and parsing.
//!
//! Every backend response is a JSON envelope whose `status` field is the
//! literal `"success"` on success. Parsing reduces the raw host result
//! (HTTP status + body bytes) to an explicit [`ApiResult`]: the payload on
//! success, or the [`ApiFailure`] branch that was taken. Transport errors,
//! non-2xx statuses, malformed bodies, and rejected envelopes all end up in
//! the failure branch so the event handler sees one shape.

use crate::domain::error::{ApiFailure, ApiResult};
use crate::domain::Person;
use serde::Deserialize;

/// Envelope `status` value meaning success.
const STATUS_SUCCESS: &str = "success";

/// Envelope for GET `/friend/all`.
#[derive(Debug, Deserialize)]
struct FriendsEnvelope {
    status: String,
    /// Absent payload defaults to an empty list, matching the screen's
    /// "default to empty sequence" contract.
    #[serde(default)]
    friends: Vec<Person>,
}

/// Envelope for GET `/friend/requests/pending`.
#[derive(Debug, Deserialize)]
struct PendingEnvelope {
    status: String,
    #[serde(default)]
    requests: Vec<Person>,
}

/// Envelope for POST `/friend/confirm` and POST `/friend/add`.
#[derive(Debug, Deserialize)]
struct AckEnvelope {
    status: String,
    /// Optional server-side explanation, used as the rejection reason.
    #[serde(default)]
    message: Option<String>,
}

/// Parses the friends list response.
pub fn parse_friends(http_status: u16, body: &[u8]) -> ApiResult<Vec<Person>> {
    let envelope: FriendsEnvelope = decode(http_status, body)?;
    if envelope.status == STATUS_SUCCESS {
        Ok(envelope.friends)
    } else {
        Err(ApiFailure::Rejected {
            reason: envelope.status,
        })
    }
}

/// Parses the pending requests response.
pub fn parse_pending(http_status: u16, body: &[u8]) -> ApiResult<Vec<Person>> {
    let envelope: PendingEnvelope = decode(http_status, body)?;
    if envelope.status == STATUS_SUCCESS {
        Ok(envelope.requests)
    } else {
        Err(ApiFailure::Rejected {
            reason: envelope.status,
        })
    }
}

/// Parses a confirm or send acknowledgement response.
///
/// Success carries no payload; failure carries the server's `message` when
/// present, otherwise the envelope's `status` value.
pub fn parse_ack(http_status: u16, body: &[u8]) -> ApiResult<()> {
    let envelope: AckEnvelope = decode(http_status, body)?;
    if envelope.status == STATUS_SUCCESS {
        Ok(())
    } else {
        Err(ApiFailure::Rejected {
            reason: envelope.message.unwrap_or(envelope.status),
        })
    }
}

/// Reduces HTTP status + body to a decoded envelope or a failure branch.
fn decode<T: for<'de> Deserialize<'de>>(http_status: u16, body: &[u8]) -> ApiResult<T> {
    if !(200..300).contains(&http_status) {
        return Err(ApiFailure::Transport {
            status: http_status,
        });
    }
    serde_json::from_slice(body).map_err(|e| ApiFailure::Malformed {
        detail: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_yields_friends() {
        let body = br#"{"status":"success","friends":[{"first_name":"Ada","last_name":"L","username":"ada"}]}"#;
        let friends = parse_friends(200, body).unwrap();
        assert_eq!(friends.len(), 1);
        assert_eq!(friends[0].first_name, "Ada");
        assert_eq!(friends[0].sender_email, None);
    }

    #[test]
    fn absent_payload_defaults_to_empty() {
        assert_eq!(parse_friends(200, br#"{"status":"success"}"#).unwrap(), vec![]);
        assert_eq!(parse_pending(200, br#"{"status":"success"}"#).unwrap(), vec![]);
    }

    #[test]
    fn non_success_status_is_rejected() {
        let err = parse_pending(200, br#"{"status":"fail","requests":[]}"#).unwrap_err();
        assert_eq!(err, ApiFailure::Rejected { reason: "fail".to_string() });
    }

    #[test]
    fn ack_failure_prefers_server_message() {
        let err = parse_ack(200, br#"{"status":"fail","message":"not friends"}"#).unwrap_err();
        assert_eq!(err, ApiFailure::Rejected { reason: "not friends".to_string() });

        let err = parse_ack(200, br#"{"status":"fail"}"#).unwrap_err();
        assert_eq!(err, ApiFailure::Rejected { reason: "fail".to_string() });
    }

    #[test]
    fn non_2xx_is_transport_failure() {
        let err = parse_ack(503, b"").unwrap_err();
        assert_eq!(err, ApiFailure::Transport { status: 503 });
        // Status 0 is how the host reports a request that never completed.
        let err = parse_friends(0, b"").unwrap_err();
        assert_eq!(err, ApiFailure::Transport { status: 0 });
    }

    #[test]
    fn malformed_body_is_reported() {
        let err = parse_ack(200, b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, ApiFailure::Malformed { .. }));
    }

    #[test]
    fn pending_entries_carry_sender_email() {
        let body = br#"{"status":"success","requests":[{"first_name":"Bo","last_name":"K","username":"bo","sender_email":"bo@x.com"}]}"#;
        let pending = parse_pending(200, body).unwrap();
        assert_eq!(pending[0].sender_email.as_deref(), Some("bo@x.com"));
    }
}
