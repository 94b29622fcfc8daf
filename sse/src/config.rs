use std::fmt;
use std::str::FromStr;

/// Default capacity of a subscriber's delivery channel. Tokio channels cannot
/// be unbuffered, one slot is the closest equivalent.
pub const DEFAULT_SUBSCRIBER_CAPACITY: usize = 1;

/// What the control loop does when a subscriber's delivery channel is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverflowPolicy {
    /// Wait for room. A subscriber that stops reading stalls the broadcast
    /// to every other subscriber.
    #[default]
    Block,
    /// Skip the event for that subscriber only.
    Drop,
}

impl OverflowPolicy {
    pub fn is_block(&self) -> bool {
        matches!(self, OverflowPolicy::Block)
    }

    pub fn is_drop(&self) -> bool {
        matches!(self, OverflowPolicy::Drop)
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverflowPolicy::Block => write!(f, "block"),
            OverflowPolicy::Drop => write!(f, "drop"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct OverflowPolicyParseError;

impl fmt::Display for OverflowPolicyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected one of: block, drop")
    }
}

impl std::error::Error for OverflowPolicyParseError {}

impl FromStr for OverflowPolicy {
    type Err = OverflowPolicyParseError;

    fn from_str(policy: &str) -> Result<Self, Self::Err> {
        match policy.to_lowercase().as_str() {
            "block" => Ok(OverflowPolicy::Block),
            "drop" => Ok(OverflowPolicy::Drop),
            _ => Err(OverflowPolicyParseError),
        }
    }
}

/// Per-subscriber delivery settings applied by the broker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrokerConfig {
    pub subscriber_capacity: usize,
    pub overflow_policy: OverflowPolicy,
}

impl BrokerConfig {
    pub fn new(subscriber_capacity: usize, overflow_policy: OverflowPolicy) -> Self {
        Self {
            subscriber_capacity: subscriber_capacity.max(1),
            overflow_policy,
        }
    }
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SUBSCRIBER_CAPACITY, OverflowPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reproduces_synchronous_fan_out() {
        let config = BrokerConfig::default();
        assert_eq!(config.subscriber_capacity, 1);
        assert!(config.overflow_policy.is_block());
    }

    #[test]
    fn test_zero_capacity_is_raised_to_one() {
        assert_eq!(
            BrokerConfig::new(0, OverflowPolicy::Drop).subscriber_capacity,
            1
        );
    }

    #[test]
    fn test_overflow_policy_parses_case_insensitively() {
        assert_eq!("BLOCK".parse(), Ok(OverflowPolicy::Block));
        assert_eq!("drop".parse(), Ok(OverflowPolicy::Drop));
        assert_eq!(
            "oldest".parse::<OverflowPolicy>(),
            Err(OverflowPolicyParseError)
        );
    }

    #[test]
    fn test_overflow_policy_display_round_trips() {
        for policy in [OverflowPolicy::Block, OverflowPolicy::Drop] {
            assert_eq!(policy.to_string().parse(), Ok(policy));
        }
    }
}
