//! # Status Receiver Module / 状态接收模块
//!
//! The subscribing side of the status channel. A receiver owns an ordered
//! list of registered callbacks and fans every recognized event out to all
//! of them, in registration order. Envelopes tagged for other systems are
//! ignored; envelopes with an unknown action are logged and dropped without
//! anything reaching the sender.
//!
//! 状态通道的订阅端。接收器持有按序注册的回调列表，
//! 并按注册顺序将每个可识别事件分发给全部回调。
//! 标记为其他系统的信封被忽略；action 未知的信封被记录并丢弃，
//! 不会有任何信息回到发送端。

use anyhow::Result;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::reporter::bus::MessageBus;
use crate::reporter::events::{Envelope, StatusEvent, DATA_TYPE_STATUS};
use crate::t;

/// Callbacks invoked as a test-hosting process moves through its lifecycle.
///
/// One method per event kind; implementations are called on the receiver's
/// dispatch task.
pub trait RunStatusCallback: Send {
    fn on_run_started(&self, pid: u32);
    fn on_run_finished(&self, pid: u32);
    fn on_uncaught_exception(&self, pid: u32, stack_trace: &str);
}

/// Receives status envelopes and fans them out to registered listeners.
///
/// The listener list lives for the receiver's lifetime and is only ever
/// mutated by [`register_listener`]; there is no de-duplication and no
/// removal. Registration and dispatch are synchronized with a mutex, so a
/// listener registered while an event is being dispatched simply sees the
/// next event.
///
/// 接收状态信封并分发给已注册的监听器。监听器列表与接收器同生命周期，
/// 注册与分发通过互斥锁同步。
///
/// [`register_listener`]: StatusReceiver::register_listener
pub struct StatusReceiver {
    listeners: Mutex<Vec<Box<dyn RunStatusCallback>>>,
}

impl StatusReceiver {
    pub fn new() -> Self {
        Self {
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Appends a listener. Listeners are invoked in registration order,
    /// every registered instance exactly once per recognized event.
    pub fn register_listener(&self, listener: Box<dyn RunStatusCallback>) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(listener);
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Delivers one envelope to the registered listeners.
    ///
    /// Envelopes whose content marker is not [`DATA_TYPE_STATUS`] belong to
    /// somebody else and are skipped silently. A recognized event reaches
    /// every listener in registration order; an unrecognized action is
    /// logged and dropped.
    pub fn dispatch(&self, envelope: &Envelope) {
        if envelope.data_type != DATA_TYPE_STATUS {
            return;
        }

        let event = match envelope.to_event() {
            Ok(event) => event,
            Err(e) => {
                eprintln!("{}", t!("status_unrecognized_event", action = e.action));
                return;
            }
        };

        let listeners = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for listener in listeners.iter() {
            match &event {
                StatusEvent::RunStarted { pid } => listener.on_run_started(*pid),
                StatusEvent::RunFinished { pid } => listener.on_run_finished(*pid),
                StatusEvent::UncaughtException { pid, stack_trace } => {
                    listener.on_uncaught_exception(*pid, stack_trace)
                }
            }
        }
    }

    /// Attaches this receiver to a bus subscription on a new tokio task.
    ///
    /// The task runs until `shutdown` is cancelled or the subscription ends.
    /// Dispatch is single-threaded per attached subscription. The `Arc` is
    /// moved into the task; clone it first to keep registering listeners
    /// afterwards.
    pub fn spawn(
        self: Arc<Self>,
        bus: &dyn MessageBus,
        shutdown: CancellationToken,
    ) -> Result<JoinHandle<()>> {
        let mut rx = bus.subscribe()?;
        Ok(tokio::spawn(async move {
            loop {
                tokio::select! {
                    biased;
                    _ = shutdown.cancelled() => break,
                    maybe = rx.recv() => match maybe {
                        Some(envelope) => self.dispatch(&envelope),
                        None => break,
                    },
                }
            }
        }))
    }
}

impl Default for StatusReceiver {
    fn default() -> Self {
        Self::new()
    }
}
