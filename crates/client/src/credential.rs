use crate::error::ClientError;

/// API key credential: an optional numeric account identifier plus the
/// secret used to key request signatures.
///
/// Derived once at client construction and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    account_id: Option<u64>,
    secret: String,
}

impl Credential {
    /// Parse a raw API key of the form `"<account-id>:<secret>"` or a bare
    /// secret with no delimiter.
    pub fn parse(raw_key: &str) -> Result<Self, ClientError> {
        let account_id = match raw_key.split_once(':') {
            Some((prefix, _)) => {
                let id = prefix.parse::<u64>().map_err(|_| {
                    ClientError::MalformedCredential(format!(
                        "API key prefix {prefix:?} is not a non-negative integer"
                    ))
                })?;
                Some(id)
            }
            None => None,
        };

        Ok(Self {
            account_id,
            // The server keys its verification MAC with the full key string,
            // prefix included, so the prefix is never stripped here.
            secret: raw_key.to_string(),
        })
    }

    /// Account identifier extracted from the key, if the key carried one.
    pub fn account_id(&self) -> Option<u64> {
        self.account_id
    }

    /// MAC key. Always the entire original API key string.
    pub fn secret(&self) -> &str {
        &self.secret
    }
}
