//! The built-in campaign
//!
//! Nine hand-authored levels that introduce the mechanics one at a time:
//! spikes and rebirth, pulling, pushing, the switch-gated exit, spikefall
//! in both its push and pull flavors, and finally layouts that combine
//! everything.

use crate::{Level, LevelError};

/// Level grids in play order, each with its title.
const LEVELS: &[(&str, &[&str])] = &[
    (
        // Tutorial: walking into spikes is how you become the ghost.
        "rebirth",
        &[
            ".........",
            ".k  x   .",
            ".   x  p.",
            ".   x   .",
            ".........",
        ],
    ),
    (
        // The ghost cannot push; the box must be pulled out of the way.
        "energy",
        &[
            ".........",
            ". .     .",
            ". . k   .",
            ".pb    x.",
            ".........",
        ],
    ),
    (
        // Sacrifice a box to the spike, then find another way to die.
        "pushy kat",
        &[
            ".........",
            ". kbx  p.",
            ".    bb..",
            ".   x   .",
            ".........",
        ],
    ),
    (
        // The portal stays shut until a box sits on the switch.
        "charged gate",
        &[
            ".........",
            ".k  b  z.",
            ".   x   .",
            ".b     p.",
            ".........",
        ],
    ),
    (
        // Weave through the box column; the spike is the only door.
        "serpentine",
        &[
            ".........",
            ".k b b  .",
            ".. bxb  .",
            "..     p.",
            ".........",
        ],
    ),
    (
        // Push the length of the corridor, then double back below.
        "longitudinal",
        &[
            ".........",
            ".k bx.  .",
            ".  b   p.",
            ".  .x . .",
            ".........",
        ],
    ),
    (
        // Pulling around a circle is neat.
        "ring around the rosie",
        &[
            ".........",
            ".k x b  .",
            ".  . . p.",
            ".  b .  .",
            ".........",
        ],
    ),
    (
        // The box guards the portal; drag it over the spike you left.
        "pocket full of posies",
        &[
            ".........",
            ". x x bp.",
            ". .b  ...",
            ".k  .b.  ",
            ". x x .  ",
            ".......  ",
        ],
    ),
    (
        // A long walk down, a short death, a long drift back.
        "the bends",
        &[
            ".........",
            ".      k.",
            ".p      .",
            "..... b .",
            "    . x .",
            "    .....",
        ],
    ),
];

/// Parse the whole campaign, in play order
pub fn campaign() -> Result<Vec<Level>, LevelError> {
    LEVELS
        .iter()
        .map(|(name, rows)| Level::parse(name, rows))
        .collect()
}
