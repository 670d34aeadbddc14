//! Sticker catalog and unlock rules.

use crate::progress::GameData;
use tracing::info;

/// What a sticker requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockRule {
    TotalCorrectAtLeast(u32),
    StreakAtLeast(u32),
    CandiesAtLeast(u32),
    /// A challenge difficulty is selected and at least one answer was right
    ChallengeModeTried,
}

impl UnlockRule {
    pub fn is_met(self, data: &GameData) -> bool {
        match self {
            Self::TotalCorrectAtLeast(n) => data.total_correct >= n,
            Self::StreakAtLeast(n) => data.streak >= n,
            Self::CandiesAtLeast(n) => data.candies >= n,
            Self::ChallengeModeTried => {
                data.settings.difficulty.is_challenge() && data.total_correct > 0
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sticker {
    pub id: &'static str,
    pub name: &'static str,
    pub requirement: &'static str,
    pub rule: UnlockRule,
}

pub const STICKERS: &[Sticker] = &[
    Sticker {
        id: "s1",
        name: "初学乍练",
        requirement: "累计答对 10 题",
        rule: UnlockRule::TotalCorrectAtLeast(10),
    },
    Sticker {
        id: "s2",
        name: "算术小天才",
        requirement: "累计答对 50 题",
        rule: UnlockRule::TotalCorrectAtLeast(50),
    },
    Sticker {
        id: "s3",
        name: "连对大师",
        requirement: "连续答对 5 题",
        rule: UnlockRule::StreakAtLeast(5),
    },
    Sticker {
        id: "s4",
        name: "勤奋宝宝",
        requirement: "收集 100 颗糖果",
        rule: UnlockRule::CandiesAtLeast(100),
    },
    Sticker {
        id: "s5",
        name: "超级运算",
        requirement: "累计答对 100 题",
        rule: UnlockRule::TotalCorrectAtLeast(100),
    },
    Sticker {
        id: "s6",
        name: "挑战能手",
        requirement: "尝试两位数或连加模式",
        rule: UnlockRule::ChallengeModeTried,
    },
];

pub fn sticker(id: &str) -> Option<&'static Sticker> {
    STICKERS.iter().find(|s| s.id == id)
}

/// Unlock every sticker whose rule is now met. Returns the ids unlocked by
/// this call, in catalog order.
pub fn unlock_new_stickers(data: &mut GameData) -> Vec<&'static str> {
    let fresh: Vec<&'static str> = STICKERS
        .iter()
        .filter(|s| !data.has_sticker(s.id) && s.rule.is_met(data))
        .map(|s| s.id)
        .collect();

    for id in &fresh {
        info!(sticker = *id, "Sticker unlocked");
        data.stickers_unlocked.push((*id).to_string());
    }
    fresh
}
