//! Static educational content

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MythFact {
    pub myth: &'static str,
    pub fact: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TipGroup {
    pub title: &'static str,
    pub tips: &'static [&'static str],
}

pub const SLEEP_MYTHS: &[MythFact] = &[
    MythFact {
        myth: "More sleep is always better",
        fact: "Quality matters more than quantity.",
    },
    MythFact {
        myth: "You can \"catch up\" on lost sleep on weekends",
        fact: "Inconsistent sleep schedules can disrupt your body clock.",
    },
];

pub const SLEEP_FOODS: &[&str] = &[
    "Bananas 🍌 (rich in magnesium & potassium)",
    "Almonds 🌰 (contain melatonin)",
    "Warm milk 🥛 (tryptophan helps relaxation)",
    "Chamomile tea 🍵 (natural sleep aid)",
];

pub const LIFESTYLE_TIPS: &[TipGroup] = &[
    TipGroup {
        title: "😴 Better Sleep Habits",
        tips: &[
            "Go to bed and wake up at the same time every day",
            "Limit caffeine & alcohol before bedtime",
            "Reduce screen time before sleep",
            "Keep your bedroom dark and cool",
        ],
    },
    TipGroup {
        title: "🏋️ Healthy Lifestyle",
        tips: &[
            "Exercise at least 30 mins/day",
            "Drink 2–3 liters of water daily",
            "Eat fresh fruits and vegetables",
            "Avoid excessive junk food",
        ],
    },
    TipGroup {
        title: "🧘 Stress Management",
        tips: &[
            "Practice meditation or deep breathing",
            "Take short breaks during work",
            "Spend time outdoors",
        ],
    },
];

/// Everything in one serializable bundle
#[derive(Debug, Clone, Copy, Serialize)]
pub struct KnowledgeBase {
    pub myths: &'static [MythFact],
    pub sleep_foods: &'static [&'static str],
    pub tips: &'static [TipGroup],
}

pub fn knowledge_base() -> KnowledgeBase {
    KnowledgeBase {
        myths: SLEEP_MYTHS,
        sleep_foods: SLEEP_FOODS,
        tips: LIFESTYLE_TIPS,
    }
}

/// Plain-text rendering for the terminal
pub fn render() -> String {
    let mut out = String::new();

    out.push_str("💡 Myths vs Facts about Sleep\n");
    for item in SLEEP_MYTHS {
        out.push_str(&format!("  Myth: {}\n  Fact: {}\n\n", item.myth, item.fact));
    }

    out.push_str("🥗 Foods that help with better sleep\n");
    for food in SLEEP_FOODS {
        out.push_str(&format!("  - {}\n", food));
    }

    out.push_str("\n🌟 General Health & Lifestyle Tips\n");
    for group in LIFESTYLE_TIPS {
        out.push_str(&format!("\n{}\n", group.title));
        for tip in group.tips {
            out.push_str(&format!("  - {}\n", tip));
        }
    }

    out
}
