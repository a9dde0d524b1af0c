use crate::types::errors::ChannelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Payment channel of a transaction, carried on the wire as its integer code.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "i64")]
pub enum Channel {
    Online,
    Atm,
    Pos,
    Mobile
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::Online, Channel::Atm, Channel::Pos, Channel::Mobile];

    pub fn code(self) -> u8 {
        match self {
            Channel::Online => 0,
            Channel::Atm => 1,
            Channel::Pos => 2,
            Channel::Mobile => 3
        }
    }

    pub fn from_code(code: i64) -> Result<Self, ChannelError> {
        match code {
            0 => Ok(Channel::Online),
            1 => Ok(Channel::Atm),
            2 => Ok(Channel::Pos),
            3 => Ok(Channel::Mobile),
            other => Err(ChannelError::UnknownCode(other))
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::Online => "Online",
            Channel::Atm => "ATM",
            Channel::Pos => "POS",
            Channel::Mobile => "Mobile"
        }
    }

    /// Display name for a mirrored code that may be outside the known range.
    pub fn describe_code(code: i64) -> &'static str {
        Channel::from_code(code).map(Channel::name).unwrap_or("Unknown")
    }
}

impl From<Channel> for u8 {
    fn from(channel: Channel) -> Self {
        channel.code()
    }
}

impl TryFrom<i64> for Channel {
    type Error = ChannelError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Channel::from_code(code)
    }
}

impl Display for Channel {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Accepts either a channel name (case-insensitive) or its numeric code.
impl FromStr for Channel {
    type Err = ChannelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if let Ok(code) = value.parse::<i64>() {
            return Channel::from_code(code);
        }

        Channel::ALL.into_iter()
            .find(|channel| channel.name().eq_ignore_ascii_case(value))
            .ok_or_else(|| ChannelError::UnknownName(value.to_string()))
    }
}
