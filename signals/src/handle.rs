use std::fmt::{Display, Formatter, Result};

/// Handle returned by [`crate::Event::subscribe`], used to unsubscribe later.
///
/// A registry issues `1, 2, 3, ...` and never hands out the same value twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub fn value(self) -> u64 {
        self.0
    }

    pub(crate) fn next(self) -> Self {
        SubscriptionId(self.0 + 1)
    }
}

impl From<u64> for SubscriptionId {
    fn from(value: u64) -> Self {
        SubscriptionId(value)
    }
}

impl Display for SubscriptionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "#{}", self.0)
    }
}
