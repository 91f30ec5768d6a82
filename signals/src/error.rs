use std::any::Any;

use thiserror::Error;

use crate::SubscriptionId;

#[derive(Error, Debug, PartialEq)]
pub enum DispatchError {
    #[error("Dispatch failed: {} of {} slots panicked", .failures.len(), .invoked)]
    SlotsPanicked {
        failures: Vec<SlotFailure>,
        invoked: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotFailure {
    pub subscription: SubscriptionId,
    pub message: String,
}

impl SlotFailure {
    pub(crate) fn from_panic(subscription: SubscriptionId, payload: Box<dyn Any + Send>) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| message.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        SlotFailure {
            subscription,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::SubscriptionId;

    use super::{DispatchError, SlotFailure};

    #[test]
    fn test_from_panic() {
        let id = SubscriptionId::from(3);

        let failure = SlotFailure::from_panic(id, Box::new("static message"));
        assert_eq!("static message", failure.message);

        let failure = SlotFailure::from_panic(id, Box::new(format!("formatted {}", 1)));
        assert_eq!("formatted 1", failure.message);

        let failure = SlotFailure::from_panic(id, Box::new(12u8));
        assert_eq!("non-string panic payload", failure.message);
        assert_eq!(id, failure.subscription);
    }

    #[test]
    fn test_display() {
        let error = DispatchError::SlotsPanicked {
            failures: vec![SlotFailure {
                subscription: SubscriptionId::from(1),
                message: "boom".to_string(),
            }],
            invoked: 4,
        };

        assert_eq!("Dispatch failed: 1 of 4 slots panicked", error.to_string());
    }
}
