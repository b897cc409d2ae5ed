use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseValueError {
    #[error("`{token}` is not a decimal integer")]
    InvalidFormat { token: String },
    #[error("`{token}` is negative, values must be non-negative")]
    OutOfDomain { token: String },
    #[error("`{token}` does not fit in 32 bits")]
    Overflow { token: String },
}

/// Parses a token as an unsigned 32-bit value.
///
/// Accepts an optional leading `+` or `-` followed by decimal digits.
/// Negative tokens (including `-0`) are out of domain, anything else that is
/// not a pure digit run is an invalid format.
pub fn parse_value(token: &str) -> Result<u32, ParseValueError> {
    let (negative, digits) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseValueError::InvalidFormat {
            token: token.to_owned(),
        });
    }

    if negative {
        return Err(ParseValueError::OutOfDomain {
            token: token.to_owned(),
        });
    }

    let mut value = 0_u64;
    for b in digits.bytes() {
        value = value * 10 + u64::from(b - b'0');
        if value > u64::from(u32::MAX) {
            return Err(ParseValueError::Overflow {
                token: token.to_owned(),
            });
        }
    }

    Ok(value as u32)
}

/// Parses a batch of tokens, aborting on the first failure.
pub fn parse_values<I, S>(tokens: I) -> Result<Vec<u32>, ParseValueError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|token| parse_value(token.as_ref()))
        .collect()
}
