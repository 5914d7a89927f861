//! # Status Events Module / 状态事件模块
//!
//! The three lifecycle events a test-hosting process reports, and the wire
//! envelope they travel in. Envelopes carry an action string selecting the
//! event kind plus a content-type marker so receivers can discard broadcasts
//! that belong to somebody else.
//!
//! 测试宿主进程报告的三种生命周期事件，以及承载它们的线路信封。
//! 信封携带选择事件种类的 action 字符串和内容类型标记，
//! 使接收端可以丢弃属于其他系统的广播。

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Action marker for a run-started event.
pub const ACTION_RUN_STARTED: &str = "test-status/run-started";
/// Action marker for a run-finished event.
pub const ACTION_RUN_FINISHED: &str = "test-status/run-finished";
/// Action marker for an uncaught-exception event.
pub const ACTION_UNCAUGHT_EXCEPTION: &str = "test-status/uncaught-exception";

/// Content marker every status envelope is tagged with. Receivers ignore
/// envelopes carrying any other marker.
pub const DATA_TYPE_STATUS: &str = "application/x-harness-run-status";

/// A test lifecycle event.
///
/// Observed per test-hosting process, the states run
/// `NotStarted -> Running -> {Finished, Crashed}`: `RunStarted` marks the
/// transition into `Running`, and `RunFinished` / `UncaughtException` are the
/// terminal transitions. The receiver does not enforce exactly-once on
/// terminal events.
///
/// 测试生命周期事件。每个测试宿主进程的状态依次为
/// `NotStarted -> Running -> {Finished, Crashed}`。
/// 接收端不对终止事件强制恰好一次。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusEvent {
    /// The test run in process `pid` has started.
    RunStarted { pid: u32 },
    /// The test run in process `pid` completed normally.
    RunFinished { pid: u32 },
    /// The test run in process `pid` died with an unhandled failure.
    UncaughtException { pid: u32, stack_trace: String },
}

impl StatusEvent {
    /// The process id of the test-hosting process this event describes.
    pub fn pid(&self) -> u32 {
        match self {
            StatusEvent::RunStarted { pid }
            | StatusEvent::RunFinished { pid }
            | StatusEvent::UncaughtException { pid, .. } => *pid,
        }
    }

    /// The wire action string for this event kind.
    pub fn action(&self) -> &'static str {
        match self {
            StatusEvent::RunStarted { .. } => ACTION_RUN_STARTED,
            StatusEvent::RunFinished { .. } => ACTION_RUN_FINISHED,
            StatusEvent::UncaughtException { .. } => ACTION_UNCAUGHT_EXCEPTION,
        }
    }
}

/// An envelope received with an action string no event kind claims.
///
/// Recovered locally by the receiver: the envelope is logged and dropped,
/// nothing reaches the sender.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized status action \"{action}\"")]
pub struct ProtocolError {
    pub action: String,
}

/// The wire form of a status event.
///
/// Line-oriented JSON on the socket transport; passed as-is through the
/// in-process transport. `stack_trace` is only present for
/// uncaught-exception envelopes.
///
/// 状态事件的线路形式。套接字传输上为行式 JSON。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Which event this envelope carries; see the `ACTION_*` constants.
    pub action: String,
    /// Content marker; see [`DATA_TYPE_STATUS`].
    pub data_type: String,
    /// Process id of the test-hosting process.
    pub pid: u32,
    /// Stack trace, for uncaught-exception envelopes only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,
}

impl Envelope {
    /// Wraps an event for transport.
    pub fn from_event(event: &StatusEvent) -> Self {
        Self {
            action: event.action().to_string(),
            data_type: DATA_TYPE_STATUS.to_string(),
            pid: event.pid(),
            stack_trace: match event {
                StatusEvent::UncaughtException { stack_trace, .. } => Some(stack_trace.clone()),
                _ => None,
            },
        }
    }

    /// Recovers the typed event from this envelope.
    ///
    /// An absent stack trace on an uncaught-exception envelope decodes as an
    /// empty trace rather than a protocol error, matching the permissive
    /// read the receiver has always done.
    pub fn to_event(&self) -> Result<StatusEvent, ProtocolError> {
        match self.action.as_str() {
            ACTION_RUN_STARTED => Ok(StatusEvent::RunStarted { pid: self.pid }),
            ACTION_RUN_FINISHED => Ok(StatusEvent::RunFinished { pid: self.pid }),
            ACTION_UNCAUGHT_EXCEPTION => Ok(StatusEvent::UncaughtException {
                pid: self.pid,
                stack_trace: self.stack_trace.clone().unwrap_or_default(),
            }),
            _ => Err(ProtocolError {
                action: self.action.clone(),
            }),
        }
    }

    /// Encodes this envelope as one JSON line (without the newline).
    pub fn to_wire(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Decodes an envelope from one JSON line.
    pub fn from_wire(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str(line)
    }
}
