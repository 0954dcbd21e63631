use std::fmt;

/// Lifecycle of one profile's sync session.
///
/// Idle until hydration starts, Hydrating while the remote state is being
/// applied, Ready once local mutations flow to the remote store. There is no
/// way back: a profile switch tears the session down and builds a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncState {
    #[default]
    Idle,
    Hydrating,
    Ready,
}

impl SyncState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Hydrating => "hydrating",
            Self::Ready => "ready",
        }
    }

    /// The only legal transitions are Idle -> Hydrating -> Ready.
    pub fn can_become(&self, next: SyncState) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Hydrating) | (Self::Hydrating, Self::Ready)
        )
    }
}

impl fmt::Display for SyncState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
