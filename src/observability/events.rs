//! Observable publication events
//!
//! Events are explicit and typed. Names are stable snake_case strings and
//! are part of the log contract.

use super::logger::{Logger, Severity};

/// Events emitted by the publish and revert executors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    /// A publish copied draft state to live (or removed a deleted draft's
    /// live copy)
    PublishComplete,
    /// A publish was refused by the capability check
    PublishDenied,
    /// A revert restored the pre-publish live state
    RevertComplete,
    /// A revert was refused by the capability check
    RevertDenied,
    /// A revert could not find the pre-publish version in history
    RevertHistoryMissing,
}

impl ChangeEvent {
    /// Returns the stable event name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            ChangeEvent::PublishComplete => "publish_complete",
            ChangeEvent::PublishDenied => "publish_denied",
            ChangeEvent::RevertComplete => "revert_complete",
            ChangeEvent::RevertDenied => "revert_denied",
            ChangeEvent::RevertHistoryMissing => "revert_history_missing",
        }
    }

    /// Returns the severity this event is logged at.
    pub fn severity(&self) -> Severity {
        match self {
            ChangeEvent::PublishComplete | ChangeEvent::RevertComplete => Severity::Info,
            ChangeEvent::PublishDenied | ChangeEvent::RevertDenied => Severity::Warn,
            ChangeEvent::RevertHistoryMissing => Severity::Error,
        }
    }

    /// Logs this event with the given fields.
    pub fn emit(&self, fields: &[(&str, &str)]) {
        Logger::log(self.severity(), self.name(), fields);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_snake_case() {
        let events = [
            ChangeEvent::PublishComplete,
            ChangeEvent::PublishDenied,
            ChangeEvent::RevertComplete,
            ChangeEvent::RevertDenied,
            ChangeEvent::RevertHistoryMissing,
        ];
        for event in events {
            let name = event.name();
            assert!(!name.is_empty());
            assert!(name.chars().all(|c| c.is_ascii_lowercase() || c == '_'));
        }
    }

    #[test]
    fn test_completion_events_are_info() {
        assert_eq!(ChangeEvent::PublishComplete.severity(), Severity::Info);
        assert_eq!(ChangeEvent::RevertComplete.severity(), Severity::Info);
    }

    #[test]
    fn test_denials_are_warnings() {
        assert_eq!(ChangeEvent::PublishDenied.severity(), Severity::Warn);
        assert_eq!(ChangeEvent::RevertDenied.severity(), Severity::Warn);
    }

    #[test]
    fn test_history_missing_is_error() {
        assert_eq!(
            ChangeEvent::RevertHistoryMissing.severity(),
            Severity::Error
        );
    }
}
