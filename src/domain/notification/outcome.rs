//! Per-channel delivery outcomes.

use serde::Serialize;
use std::fmt;

/// Outbound notification channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Sms,
    Webhook,
}

impl ChannelKind {
    pub const ALL: [ChannelKind; 2] = [ChannelKind::Sms, ChannelKind::Webhook];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelKind::Sms => "sms",
            ChannelKind::Webhook => "webhook",
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened to one channel for one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ChannelOutcome {
    /// Required configuration is missing; nothing was attempted.
    Disabled,
    Sent,
    Failed { reason: String },
}

impl ChannelOutcome {
    pub fn failed(reason: impl Into<String>) -> Self {
        ChannelOutcome::Failed {
            reason: reason.into(),
        }
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, ChannelOutcome::Sent)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ChannelOutcome::Failed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelReport {
    pub channel: ChannelKind,
    #[serde(flatten)]
    pub outcome: ChannelOutcome,
}

/// Outcome of one dispatch, one entry per channel kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DispatchReport {
    pub channels: Vec<ChannelReport>,
}

impl DispatchReport {
    pub fn record(&mut self, channel: ChannelKind, outcome: ChannelOutcome) {
        self.channels.push(ChannelReport { channel, outcome });
    }

    pub fn outcome(&self, channel: ChannelKind) -> Option<&ChannelOutcome> {
        self.channels
            .iter()
            .find(|r| r.channel == channel)
            .map(|r| &r.outcome)
    }

    pub fn all_disabled(&self) -> bool {
        self.channels
            .iter()
            .all(|r| r.outcome == ChannelOutcome::Disabled)
    }

    pub fn sent_count(&self) -> usize {
        self.channels.iter().filter(|r| r.outcome.is_sent()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.channels.iter().filter(|r| r.outcome.is_failed()).count()
    }
}
