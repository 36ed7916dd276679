use std::collections::VecDeque;

#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use crate::module::params::ParamId;

/// Edits a host hands to the processing thread.
///
/// Input indices use the flat port layout (see `io::ports`).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum HostMessage {
    SetParam { id: ParamId, value: f32 },
    Connect { input: usize },
    Disconnect { input: usize },
    SetVoltage { input: usize, voltage: f32 },
    ResetParams,
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<HostMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<HostMessage> {
    fn pop(&mut self) -> Option<HostMessage> {
        Consumer::pop(self).ok()
    }
}

/// Offline hosts and tests queue edits without a ring buffer.
impl MessageReceiver for VecDeque<HostMessage> {
    fn pop(&mut self) -> Option<HostMessage> {
        self.pop_front()
    }
}
