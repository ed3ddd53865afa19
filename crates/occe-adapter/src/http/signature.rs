/*
[INPUT]:  HTTP verb, API version, endpoint method, access key, timestamp, secret key
[OUTPUT]: Hex-encoded HMAC-SHA256 request signature
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or canonical message format
*/

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::http::endpoint::Verb;
use crate::http::{OcceError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Signs canonical request messages for authenticated endpoints
#[derive(Clone)]
pub struct RequestSigner {
    mac: HmacSha256,
}

impl RequestSigner {
    /// Create a new request signer keyed by the API secret
    pub fn new(secret_key: &str) -> Result<Self> {
        let mac = HmacSha256::new_from_slice(secret_key.as_bytes())
            .map_err(|e| OcceError::Config(format!("invalid HMAC key: {e}")))?;
        Ok(Self { mac })
    }

    /// Build the canonical message signed by the exchange
    ///
    /// Format: "{VERB}|{version}|{method}|access_key={access_key}&timestamp={timestamp}"
    pub fn canonical_message(
        verb: Verb,
        version: &str,
        method: &str,
        access_key: &str,
        timestamp: i64,
    ) -> String {
        format!(
            "{}|{version}|{method}|access_key={access_key}&timestamp={timestamp}",
            verb.as_str()
        )
    }

    /// Sign an arbitrary message, returns lowercase hex
    pub fn sign(&self, message: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(message.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Sign a request according to the OCCE v2 API
    pub fn sign_request(
        &self,
        verb: Verb,
        version: &str,
        method: &str,
        access_key: &str,
        timestamp: i64,
    ) -> String {
        let message = Self::canonical_message(verb, version, method, access_key, timestamp);
        self.sign(&message)
    }
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCESS_KEY: &str = "test-access-key";
    const SECRET_KEY: &str = "test-secret-key";
    const TIMESTAMP: i64 = 1_620_000_000_000;

    #[test]
    fn test_canonical_message() {
        let message = RequestSigner::canonical_message(
            Verb::Get,
            "/v2/",
            "account/balance",
            ACCESS_KEY,
            TIMESTAMP,
        );
        assert_eq!(
            message,
            "GET|/v2/|account/balance|access_key=test-access-key&timestamp=1620000000000"
        );
    }

    #[test]
    fn test_sign_balance_request_digest() {
        let signer = RequestSigner::new(SECRET_KEY).unwrap();
        let signature =
            signer.sign_request(Verb::Get, "/v2/", "account/balance", ACCESS_KEY, TIMESTAMP);
        assert_eq!(
            signature,
            "3051fda217dd7517e2266e45f957d28c0f368d01acc2e45ab205a58b76e884ab"
        );
    }

    #[test]
    fn test_sign_post_and_delete_digests() {
        let signer = RequestSigner::new(SECRET_KEY).unwrap();

        let post = signer.sign_request(Verb::Post, "/v2/", "krb_btc/orders/", ACCESS_KEY, TIMESTAMP);
        assert_eq!(
            post,
            "eaa231f892d5ec19ee7562136bc0395c2e3e690652bb9b92e745ad988edcb2d8"
        );

        let delete = signer.sign_request(
            Verb::Delete,
            "/v2/",
            "tlr_rub/orders40271",
            ACCESS_KEY,
            TIMESTAMP,
        );
        assert_eq!(
            delete,
            "82c5ca34461fe3388aee188276dbc4494218abc1f73db43d1bc1a71b8d5616c7"
        );
    }

    #[test]
    fn test_signer_is_reusable() {
        let signer = RequestSigner::new(SECRET_KEY).unwrap();
        let first = signer.sign("payload");
        let second = signer.sign("payload");
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_debug_hides_key() {
        let signer = RequestSigner::new(SECRET_KEY).unwrap();
        assert!(!format!("{signer:?}").contains(SECRET_KEY));
    }
}
