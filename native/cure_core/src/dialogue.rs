//! Path: native/cure_core/src/dialogue.rs
//! Summary: 開始前ブリーフィング（4 ページ）

use serde::Serialize;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum Speaker {
    Smith,
    Reed,
    Instructions,
}

#[derive(Clone, Copy, Debug)]
pub struct DialogueLine {
    pub speaker: Speaker,
    pub text:    &'static str,
}

pub static DIALOGUE: [DialogueLine; 4] = [
    DialogueLine {
        speaker: Speaker::Smith,
        text: "DR. SMITH: The patient's vitals are crashing. Pathogens are clotting the main artery.\n\n[ PRESS SPACE ]",
    },
    DialogueLine {
        speaker: Speaker::Reed,
        text: "DR. REED: I'm in the bloodstream. I'll transform them into healthy cells, but I'll need medical support.\n\n[ PRESS SPACE ]",
    },
    DialogueLine {
        speaker: Speaker::Smith,
        text: "DR. SMITH: Collect meds, store up to 2, and CHOOSE when to use them.\nINSULIN slows CELLS. ADRENALINE boosts fire. ANTIBIOTICS wipe the zone.\n\n[ PRESS SPACE ]",
    },
    DialogueLine {
        speaker: Speaker::Instructions,
        text: "MISSION BRIEFING:\n\n\
               - ARROW KEYS: Move\n\
               - Auto-Fire: Always on\n\
               - 1 & 2: Use Arsenal Meds\n\
               - Manual cures: +2 Stability\n\
               - Missed red cell: -3 Stability\n\
               - At 7%: FINAL STAND (Virus Core)\n\
               - Final level: Press C to combine 2 meds\n\n\
               [ PRESS SPACE TO DEPLOY ]",
    },
];

pub fn line(index: usize) -> Option<&'static DialogueLine> {
    DIALOGUE.get(index)
}
