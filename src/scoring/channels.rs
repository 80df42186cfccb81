//! Per-channel error analysis and the hints derived from it.

use std::fmt;

use crate::models::color::Rgb;

/// A channel difference above this gets a "higher/lower" hint.
const WORST_HINT_MIN_DIFF: u8 = 50;
/// A channel difference at or below this gets a "very close" hint.
const BEST_HINT_MAX_DIFF: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "Red",
            Channel::Green => "Green",
            Channel::Blue => "Blue",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelAccuracy {
    pub channel: Channel,
    /// Absolute difference between target and guess.
    pub diff: u8,
    pub target: u8,
    pub guess: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelAnalysis {
    pub best_channel: Channel,
    pub worst_channel: Channel,
    pub hints: Vec<String>,
    /// Channels sorted by ascending difference.
    pub channels: [ChannelAccuracy; 3],
}

/// Finds the closest and furthest channel and turns them into hints.
///
/// Ties keep R, G, B order.
pub fn analyze_channels(target: Rgb, guess: Rgb) -> ChannelAnalysis {
    let entry = |channel, target: u8, guess: u8| ChannelAccuracy {
        channel,
        diff: target.abs_diff(guess),
        target,
        guess,
    };

    let mut channels = [
        entry(Channel::Red, target.r, guess.r),
        entry(Channel::Green, target.g, guess.g),
        entry(Channel::Blue, target.b, guess.b),
    ];
    // stable
    channels.sort_by_key(|c| c.diff);

    let best = channels[0];
    let worst = channels[2];

    let mut hints = Vec::new();
    if worst.diff > WORST_HINT_MIN_DIFF {
        let direction = if worst.guess < worst.target {
            "higher"
        } else {
            "lower"
        };
        hints.push(format!("{} needs to be {}", worst.channel, direction));
    }
    if best.diff <= BEST_HINT_MAX_DIFF {
        hints.push(format!("{} was very close!", best.channel));
    }

    ChannelAnalysis {
        best_channel: best.channel,
        worst_channel: worst.channel,
        hints,
        channels,
    }
}
