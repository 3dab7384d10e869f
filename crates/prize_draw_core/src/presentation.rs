//! Fixed display copy for the draw screen.

use crate::contract::Rank;
use crate::draw::DrawPhase;
use crate::inventory::{PrizeInventory, FIRST_PRIZE_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultTone {
    Silver,
    Bronze,
    Muted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultDescriptor {
    pub emoji: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tone: ResultTone,
}

const SECOND_PRIZE: ResultDescriptor = ResultDescriptor {
    emoji: "🥈",
    title: "2nd prize!",
    subtitle: "Congratulations, you won an egobook memo pad!",
    tone: ResultTone::Silver,
};

const THIRD_PRIZE: ResultDescriptor = ResultDescriptor {
    emoji: "🥉",
    title: "3rd prize!",
    subtitle: "Congratulations, you won a snack!",
    tone: ResultTone::Bronze,
};

const NO_PRIZE: ResultDescriptor = ResultDescriptor {
    emoji: "😢",
    title: "So close…",
    subtitle: "All prizes have been claimed",
    tone: ResultTone::Muted,
};

/// Shown under the result for winning ranks only.
pub const PROMO_NOTE: &str = "egobook is launching soon!\n\
                              Thank you for your interest,\n\
                              and please vote for egobook before 4 o'clock! 🌿";

/// Closed mapping over {2, 3, 0}. Any other rank has no panel.
pub fn result_descriptor(rank: Rank) -> Option<ResultDescriptor> {
    match rank {
        Rank::SECOND => Some(SECOND_PRIZE),
        Rank::THIRD => Some(THIRD_PRIZE),
        Rank::NONE => Some(NO_PRIZE),
        _ => None,
    }
}

pub fn shows_promo_note(rank: Rank) -> bool {
    rank.is_winning()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonFace {
    pub icon: &'static str,
    pub label: &'static str,
}

pub fn button_face(phase: DrawPhase) -> ButtonFace {
    match phase {
        DrawPhase::Idle => ButtonFace {
            icon: "🎯",
            label: "Draw!",
        },
        DrawPhase::Shaking => ButtonFace {
            icon: "✨",
            label: "Drawing",
        },
        DrawPhase::Drawing => ButtonFace {
            icon: "✨",
            label: "Processing",
        },
        DrawPhase::Done => ButtonFace {
            icon: "✅",
            label: "Done",
        },
    }
}

pub fn machine_caption(phase: DrawPhase) -> &'static str {
    if phase == DrawPhase::Done {
        "Draw complete! ✨"
    } else {
        "Press the button below"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrizeBadge {
    pub emoji: &'static str,
    pub label: &'static str,
    pub count: i64,
    pub highlighted: bool,
}

pub fn prize_badges(inventory: PrizeInventory) -> [PrizeBadge; 3] {
    [
        PrizeBadge {
            emoji: "🏆",
            label: "1st",
            count: FIRST_PRIZE_COUNT,
            highlighted: true,
        },
        PrizeBadge {
            emoji: "🥈",
            label: "2nd",
            count: inventory.second,
            highlighted: false,
        },
        PrizeBadge {
            emoji: "🥉",
            label: "3rd",
            count: inventory.third,
            highlighted: false,
        },
    ]
}
