/// Lifecycle flags reported by a torrent.
///
/// The flags are "mutually exclusive-ish": a well behaved client only raises
/// one at a time, but nothing here enforces it and consumers must evaluate
/// them in a fixed precedence order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Lifecycle {
    pub stopped: bool,
    pub starting: bool,
    pub allocating: bool,
    pub checking: bool,
}

impl Lifecycle {
    pub const RUNNING: Lifecycle = Lifecycle {
        stopped: false,
        starting: false,
        allocating: false,
        checking: false,
    };

    pub const STOPPED: Lifecycle = Lifecycle {
        stopped: true,
        ..Self::RUNNING
    };

    pub const STARTING: Lifecycle = Lifecycle {
        starting: true,
        ..Self::RUNNING
    };

    pub const ALLOCATING: Lifecycle = Lifecycle {
        allocating: true,
        ..Self::RUNNING
    };

    pub const CHECKING: Lifecycle = Lifecycle {
        checking: true,
        ..Self::RUNNING
    };

    /// True when none of the flags is raised.
    pub fn is_running(&self) -> bool {
        *self == Self::RUNNING
    }
}
