use std::fmt;
use std::str::FromStr;

/// The draggable part of the slider a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    /// The start handle
    Start,
    /// The end handle
    End,
    /// The range bar between the handles
    Range,
}

impl Handle {
    /// Value of the `data-part` attribute identifying this part in markup.
    pub fn part_name(&self) -> &'static str {
        match self {
            Handle::Start => "start",
            Handle::End => "end",
            Handle::Range => "range",
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.part_name())
    }
}

impl FromStr for Handle {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Handle::Start),
            "end" => Ok(Handle::End),
            "range" => Ok(Handle::Range),
            _ => Err(()),
        }
    }
}

/// Pointer events the slider responds to.
///
/// `PointerDown` is scoped to the widget's own parts; `PointerMove` and
/// `PointerUp` are expected from the whole document while a drag is active.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Pointer pressed over a handle or the range bar.
    PointerDown { handle: Handle },
    /// Pointer moved, in client x coordinates.
    PointerMove { x: f64 },
    /// Pointer released anywhere.
    PointerUp,
}
