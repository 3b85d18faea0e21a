//! Exit code constants for the repolens CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input, invalid config)
//! - 2: Not found (upstream 404)
//! - 3: Upstream API failure (other 4xx/5xx, GraphQL errors)
//! - 4: Rate limited
//! - 5: Network failure (transport error, timeout)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input file, or invalid config.
pub const USER_ERROR: i32 = 1;

/// The requested upstream resource does not exist.
pub const NOT_FOUND: i32 = 2;

/// The upstream API rejected the request or returned a malformed body.
pub const UPSTREAM_FAILURE: i32 = 3;

/// The API rate limit is exhausted.
pub const RATE_LIMITED: i32 = 4;

/// The request never completed: DNS, connect, TLS, or timeout failure.
pub const NETWORK_FAILURE: i32 = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            USER_ERROR,
            NOT_FOUND,
            UPSTREAM_FAILURE,
            RATE_LIMITED,
            NETWORK_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
