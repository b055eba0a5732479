//! Latest-wins request tracking

/// Sequence number stamped on every issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestSeq(u64);

impl std::fmt::Display for RequestSeq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The one outstanding request of a given purpose.
///
/// Issuing a new request supersedes the outstanding one; a completion is
/// accepted only if it carries the sequence number of the latest issue.
/// Nothing is cancelled on the network, stale results are dropped on arrival.
#[derive(Debug)]
pub struct PendingRequest<T> {
    last_issued: u64,
    outstanding: Option<(RequestSeq, T)>,
}

impl<T> Default for PendingRequest<T> {
    fn default() -> Self {
        Self {
            last_issued: 0,
            outstanding: None,
        }
    }
}

impl<T> PendingRequest<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp a new request, superseding any outstanding one.
    pub fn issue(&mut self, tag: T) -> RequestSeq {
        self.last_issued += 1;
        let seq = RequestSeq(self.last_issued);
        self.outstanding = Some((seq, tag));
        seq
    }

    /// Accept a completion. Returns the request's tag if `seq` is the latest
    /// outstanding request, `None` if it was superseded or cancelled.
    pub fn settle(&mut self, seq: RequestSeq) -> Option<T> {
        match &self.outstanding {
            Some((latest, _)) if *latest == seq => self.outstanding.take().map(|(_, tag)| tag),
            _ => None,
        }
    }

    /// Forget the outstanding request so its completion is discarded.
    pub fn cancel(&mut self) -> Option<T> {
        self.outstanding.take().map(|(_, tag)| tag)
    }

    pub fn outstanding(&self) -> Option<&T> {
        self.outstanding.as_ref().map(|(_, tag)| tag)
    }

    pub fn is_pending(&self) -> bool {
        self.outstanding.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_issue_settles() {
        let mut pending = PendingRequest::new();
        let seq = pending.issue("a");
        assert!(pending.is_pending());
        assert_eq!(pending.settle(seq), Some("a"));
        assert!(!pending.is_pending());
    }

    #[test]
    fn superseded_issue_is_discarded() {
        let mut pending = PendingRequest::new();
        let first = pending.issue("a");
        let second = pending.issue("b");

        assert_eq!(pending.settle(first), None);
        assert_eq!(pending.outstanding(), Some(&"b"));
        assert_eq!(pending.settle(second), Some("b"));
    }

    #[test]
    fn late_arrival_after_settle_is_discarded() {
        let mut pending = PendingRequest::new();
        let first = pending.issue(1);
        let second = pending.issue(2);
        assert_eq!(pending.settle(second), Some(2));
        assert_eq!(pending.settle(first), None);
    }

    #[test]
    fn cancelled_request_is_discarded() {
        let mut pending = PendingRequest::new();
        let seq = pending.issue(());
        pending.cancel();
        assert_eq!(pending.settle(seq), None);
    }

    #[test]
    fn sequence_numbers_never_repeat() {
        let mut pending = PendingRequest::new();
        let a = pending.issue(());
        pending.settle(a);
        let b = pending.issue(());
        assert!(b > a);
    }
}
