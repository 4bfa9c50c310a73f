use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

use gil_types::{BlockHeight, Timestamp};

/// Host-supplied temporal boundary.
///
/// The ledgers never read time themselves; every timestamp and block height
/// they record flows through this trait at call time.
pub trait HostClock {
    fn timestamp(&self) -> Timestamp;
    fn block_height(&self) -> BlockHeight;
}

/// Wall-clock implementation for embedding outside a chain context.
///
/// With no chain to supply heights, wall-clock milliseconds stand in for
/// the block height; both readings stay monotone enough for bookkeeping.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    fn now_millis() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

impl HostClock for SystemClock {
    fn timestamp(&self) -> Timestamp {
        Timestamp::from_millis(Self::now_millis())
    }

    fn block_height(&self) -> BlockHeight {
        BlockHeight::new(Self::now_millis())
    }
}

/// Deterministic clock for tests and replay: readings are set explicitly
/// and only move when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    millis: Cell<u64>,
    height: Cell<u64>,
}

impl ManualClock {
    pub fn new(millis: u64, height: u64) -> Self {
        Self {
            millis: Cell::new(millis),
            height: Cell::new(height),
        }
    }

    pub fn set_millis(&self, millis: u64) {
        self.millis.set(millis);
    }

    pub fn set_height(&self, height: u64) {
        self.height.set(height);
    }

    pub fn advance(&self, millis: u64, blocks: u64) {
        self.millis.set(self.millis.get() + millis);
        self.height.set(self.height.get() + blocks);
    }
}

impl HostClock for ManualClock {
    fn timestamp(&self) -> Timestamp {
        Timestamp::from_millis(self.millis.get())
    }

    fn block_height(&self) -> BlockHeight {
        BlockHeight::new(self.height.get())
    }
}
