//! # Status Sender Module / 状态发送模块
//!
//! The publishing side of the status channel, driven by the test-hosting
//! process. Each notification builds the corresponding event and hands it to
//! the bus; delivery is fire-and-forget.
//!
//! 状态通道的发布端，由测试宿主进程驱动。
//! 每个通知构造对应事件并交给总线；发布即忘。

use std::sync::Arc;

use crate::reporter::bus::MessageBus;
use crate::reporter::events::{Envelope, StatusEvent};

/// Publishes test lifecycle status onto a message bus.
///
/// One reporter per test-hosting process. No notification observes delivery:
/// there is no acknowledgment and no retry at this layer.
pub struct StatusReporter {
    bus: Arc<dyn MessageBus>,
}

impl StatusReporter {
    pub fn new(bus: Arc<dyn MessageBus>) -> Self {
        Self { bus }
    }

    /// Announces that the test run in process `pid` has started.
    pub fn notify_run_started(&self, pid: u32) {
        self.send(StatusEvent::RunStarted { pid });
    }

    /// Announces that the test run in process `pid` completed normally.
    pub fn notify_run_finished(&self, pid: u32) {
        self.send(StatusEvent::RunFinished { pid });
    }

    /// Announces an unhandled failure in process `pid`, with the rendered
    /// stack trace. Distinct from a normal finish; a crashing process may
    /// emit both and the receiver does not reconcile them.
    pub fn notify_uncaught_exception(&self, pid: u32, stack_trace: impl Into<String>) {
        self.send(StatusEvent::UncaughtException {
            pid,
            stack_trace: stack_trace.into(),
        });
    }

    fn send(&self, event: StatusEvent) {
        self.bus.publish(Envelope::from_event(&event));
    }
}
