//! Raw responses returned by a [`Transport`](crate::clients::Transport).

/// The status code and undecoded body of a response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The response body bytes, already decompressed.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Creates a new response.
    #[must_use]
    pub fn new(code: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            code,
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_str_and_bytes() {
        assert_eq!(TransportResponse::new(200, "{}").body, b"{}".to_vec());
        assert_eq!(
            TransportResponse::new(404, br#"{"error":{}}"#.to_vec()).code,
            404
        );
    }
}
