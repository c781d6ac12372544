//! Recognized gestures and the indicators they select.

/// Number of indicators, one per recognized gesture.
pub const CHANNELS: usize = 3;

/// Finalized click count of a single counting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    Single,
    Double,
    Triple,
}

impl Gesture {
    /// Interpret the number of clicks collected in a window.
    ///
    /// Anything other than one to three clicks is not a gesture.
    pub fn from_clicks(clicks: u8) -> Option<Self> {
        match clicks {
            1 => Some(Self::Single),
            2 => Some(Self::Double),
            3 => Some(Self::Triple),
            _ => None,
        }
    }

    pub fn channel(self) -> Channel {
        match self {
            Self::Single => Channel::A,
            Self::Double => Channel::B,
            Self::Triple => Channel::C,
        }
    }
}

/// One of the blinking indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    A,
    B,
    C,
}

impl Channel {
    pub const ALL: [Channel; CHANNELS] = [Channel::A, Channel::B, Channel::C];

    pub fn index(self) -> usize {
        match self {
            Channel::A => 0,
            Channel::B => 1,
            Channel::C => 2,
        }
    }
}
