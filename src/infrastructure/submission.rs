use std::time::Duration;

use tracing::info;

use crate::domain::{ApplicationData, SubmissionResult};

/// Acknowledgement returned by a gateway for a delivered application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    pub reference: u64,
    pub bytes: usize,
}

/// Destination for completed applications.
///
/// The form controller waits [`delay`](SubmissionGateway::delay) after a
/// valid submit before calling [`deliver`](SubmissionGateway::deliver), so a
/// gateway never blocks the event loop.
pub trait SubmissionGateway: std::fmt::Debug {
    fn delay(&self) -> Duration;

    fn deliver(&mut self, application: &ApplicationData) -> SubmissionResult<Receipt>;
}

/// Stand-in service that accepts every application after a fixed delay.
///
/// The payload is encoded exactly as a real service would receive it and then
/// dropped; nothing is stored or sent.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
    delivered: u64,
}

impl SimulatedGateway {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

    pub fn new(delay: Duration) -> Self {
        Self { delay, delivered: 0 }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl SubmissionGateway for SimulatedGateway {
    fn delay(&self) -> Duration {
        self.delay
    }

    fn deliver(&mut self, application: &ApplicationData) -> SubmissionResult<Receipt> {
        let payload = serde_json::to_vec(application)?;
        self.delivered += 1;
        let receipt = Receipt {
            reference: self.delivered,
            bytes: payload.len(),
        };
        info!(reference = receipt.reference, bytes = receipt.bytes, "application delivered");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay() {
        assert_eq!(SimulatedGateway::default().delay(), Duration::from_millis(1500));
    }

    #[test]
    fn test_deliver_always_succeeds_and_counts() {
        let mut gateway = SimulatedGateway::new(Duration::ZERO);
        let data = ApplicationData::default();

        let first = gateway.deliver(&data).unwrap();
        let second = gateway.deliver(&data).unwrap();

        assert_eq!(first.reference, 1);
        assert_eq!(second.reference, 2);
    }

    #[test]
    fn test_receipt_reports_payload_size() {
        let mut gateway = SimulatedGateway::default();
        let mut data = ApplicationData::default();
        data.first_name = "Grace".to_string();

        let receipt = gateway.deliver(&data).unwrap();
        let expected = serde_json::to_vec(&data).unwrap().len();
        assert_eq!(receipt.bytes, expected);
    }
}
