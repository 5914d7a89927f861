//! # Status Reporter Module / 状态报告模块
//!
//! This module carries test lifecycle status between the test-hosting
//! process and the observing harness process. The sender publishes typed
//! events onto a message bus; the receiver subscribes, filters out unrelated
//! traffic, and fans each event out to registered callbacks in registration
//! order.
//!
//! 此模块在测试宿主进程与观察方进程之间传递测试生命周期状态。
//! 发送端将类型化事件发布到消息总线；接收端订阅总线，
//! 过滤无关消息，并按注册顺序将每个事件分发给已注册的回调。
//!
//! ## Module Organization / 模块组织
//!
//! - `events` - Status events and their wire envelope
//! - `bus` - The pluggable message bus and its transports
//! - `sender` - The publishing side used by the test-hosting process
//! - `receiver` - The subscribing side with ordered callback fan-out
//!
//! - `events` - 状态事件及其线路信封
//! - `bus` - 可插拔的消息总线及其传输实现
//! - `sender` - 测试宿主进程使用的发布端
//! - `receiver` - 带有序回调分发的订阅端

pub mod bus;
pub mod events;
pub mod receiver;
pub mod sender;

// Re-exports
pub use bus::{InProcessBus, MessageBus, UnixSocketBus};
pub use events::{Envelope, StatusEvent};
pub use receiver::{RunStatusCallback, StatusReceiver};
pub use sender::StatusReporter;
