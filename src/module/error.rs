use std::fmt;

/// A host addressed a parameter or jack the module does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortError {
    UnknownParam(usize),
    InputOutOfRange { index: usize, count: usize },
    ChannelOutOfRange { channel: usize, channels: usize },
}

impl fmt::Display for PortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortError::UnknownParam(index) => write!(f, "no parameter with index {index}"),
            PortError::InputOutOfRange { index, count } => {
                write!(f, "input {index} out of range (module has {count} inputs)")
            }
            PortError::ChannelOutOfRange { channel, channels } => {
                write!(f, "channel {channel} out of range (module has {channels} channels)")
            }
        }
    }
}

impl std::error::Error for PortError {}
