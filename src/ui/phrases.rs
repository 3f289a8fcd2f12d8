//! Flavor text printed after a successful punch.

use crate::models::action::ActionKind;

const CHECK_IN: &[&str] = &[
    "Good morning! Let's make today count.",
    "Welcome back. Coffee first, then greatness.",
    "Clocked in. The inbox awaits.",
    "Another day, another chance to ship something good.",
    "Ready when you are.",
];

const CHECK_OUT: &[&str] = &[
    "Nice work today. See you tomorrow!",
    "Clocked out. Go enjoy your evening.",
    "That's a wrap. Rest up.",
    "Done for now. The code will still be there tomorrow.",
    "Good job. Time to recharge.",
];

const CHECK_IN_SNARK: &[&str] = &[
    "Oh, you're here. The meetings missed you.",
    "Clocked in. Try to look busy.",
    "Back again? Bold move.",
    "The build is broken. Just kidding. Probably.",
    "Welcome to the part of the day where you pretend to like standups.",
];

const CHECK_OUT_SNARK: &[&str] = &[
    "Leaving already? The bugs will wait. They always do.",
    "Clocked out. Nobody saw that last commit.",
    "Escape successful.",
    "Finally. Close the laptop before it notices.",
    "Another day survived. Barely.",
];

/// Picks phrases for a punch outcome.
pub trait Phrasebook {
    fn phrase(&self, kind: ActionKind) -> &'static str;
}

/// Chooses between friendly and snarky lists using a seeded roll.
pub struct RandomPhrases {
    snark_probability: f64,
    seed: u64,
}

impl RandomPhrases {
    pub fn new(snark_probability: f64, seed: u64) -> Self {
        Self {
            snark_probability,
            seed,
        }
    }

    /// Seeded from the sub-second part of the local clock.
    pub fn from_clock(snark_probability: f64) -> Self {
        let nanos = chrono::Local::now().timestamp_subsec_nanos() as u64;
        Self::new(snark_probability, nanos)
    }

    fn mix(&self) -> u64 {
        // splitmix64 finalizer
        let mut z = self.seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

impl Phrasebook for RandomPhrases {
    fn phrase(&self, kind: ActionKind) -> &'static str {
        let bits = self.mix();
        let roll = (bits >> 11) as f64 / (1u64 << 53) as f64;
        let snarky = roll < self.snark_probability;

        let list = phrase_list(kind, snarky);
        list[(bits as usize) % list.len()]
    }
}

/// The friendly or snarky phrases for `kind`.
pub fn phrase_list(kind: ActionKind, snarky: bool) -> &'static [&'static str] {
    match (kind, snarky) {
        (ActionKind::In, false) => CHECK_IN,
        (ActionKind::In, true) => CHECK_IN_SNARK,
        (ActionKind::Out, false) => CHECK_OUT,
        (ActionKind::Out, true) => CHECK_OUT_SNARK,
    }
}
