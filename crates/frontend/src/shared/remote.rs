//! Request state for asynchronous backend calls.
//!
//! Every fetch in the application is modelled as a `Remote<T>` held in a
//! signal, plus a `RequestSeq` generation counter per call site. A response
//! is applied only while its token is still the newest issued one, so a slow
//! response can never overwrite the result of a request started after it.

/// State of one remote resource.
#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    Idle,
    Pending,
    Ready(T),
    Failed(String),
}

impl<T> Remote<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Remote::Pending)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Remote::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Remote::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Remote::Idle
    }
}

/// Token identifying one issued request.
///
/// The default token was never issued and is never current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestToken(u64);

/// Per-call-site generation counter for overlapping requests.
///
/// Policy: stale responses are discarded. `next` supersedes every token
/// issued before it; a completion handler checks `is_current` before
/// applying its result.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSeq {
    issued: u64,
}

impl RequestSeq {
    pub fn next(&mut self) -> RequestToken {
        self.issued += 1;
        RequestToken(self.issued)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.issued && self.issued > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_token_wins() {
        let mut seq = RequestSeq::default();
        let first = seq.next();
        let second = seq.next();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_default_token_is_never_current() {
        let mut seq = RequestSeq::default();
        assert!(!seq.is_current(RequestToken::default()));
        let _ = seq.next();
        assert!(!seq.is_current(RequestToken::default()));
    }

    #[test]
    fn test_remote_accessors() {
        let state: Remote<u32> = Remote::Ready(7);
        assert_eq!(state.ready(), Some(&7));
        assert!(!state.is_pending());

        let failed: Remote<u32> = Remote::Failed("HTTP 500".into());
        assert_eq!(failed.error(), Some("HTTP 500"));
        assert!(failed.ready().is_none());
    }
}
