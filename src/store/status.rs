/// Where one kind of store operation stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Identifies one issued request. Tokens only grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// What happened to a result handed back to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Applied,
    /// A newer request of the same kind was issued; the result was dropped.
    Superseded,
}

/// Fences one kind of request so only the most recently issued one may
/// write its result.
#[derive(Debug, Default)]
pub struct RequestTracker {
    issued: u64,
    in_flight: Option<RequestToken>,
}

impl RequestTracker {
    pub fn issue(&mut self) -> RequestToken {
        self.issued += 1;
        let token = RequestToken(self.issued);
        self.in_flight = Some(token);
        token
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Consumes `token` if it is the one in flight. A token settles at most once.
    pub fn settle(&mut self, token: RequestToken) -> Settled {
        if self.in_flight == Some(token) {
            self.in_flight = None;
            Settled::Applied
        } else {
            Settled::Superseded
        }
    }
}
