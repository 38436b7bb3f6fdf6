//! BaZi destiny palace (命宫) with its descriptive text.
//!
//! Lunar months count backwards from 子: 正月 → 子, 二月 → 亥, …, 十二月 → 丑.
//! The hour branch is added on top.

use crate::branch::Branch;

/// Destiny palace from the lunar month (1..=12) and the birth hour branch.
pub const fn destiny_palace(lunar_month: u8, hour: Branch) -> Branch {
    let m = (lunar_month as u32 + 11) % 12 + 1;
    let month_idx = (13 - m) % 12;
    Branch::from_index(((month_idx + hour.index() as u32) % 12) as u8)
}

/// Descriptive text for a destiny palace.
pub const fn destiny_explanation(palace: Branch) -> &'static str {
    match palace {
        Branch::Zi => "智慧深远，善于谋略，性格内敛。代表先天的智慧和思考能力。",
        Branch::Chou => "踏实稳重，耐力强，财富积累型。代表先天的稳定性和物质基础。",
        Branch::Yin => "积极进取，行动力强，领导才能。代表先天的活力和领导力。",
        Branch::Mao => "聪明敏锐，适应力强，善于交际。代表先天的适应性和社交能力。",
        Branch::Chen => "胸怀宽广，包容性强，贵人运佳。代表先天的包容性和人脉资源。",
        Branch::Si => "思维缜密，洞察力强，适合研究。代表先天的洞察力和专注力。",
        Branch::Wu => "热情开朗，精力充沛，事业心强。代表先天的热情和事业驱动力。",
        Branch::Wei => "温和善良，责任心强，家庭观念重。代表先天的责任感和家庭观念。",
        Branch::Shen => "机智灵活，应变力强，多才多艺。代表先天的灵活性和创造力。",
        Branch::You => "注重细节，完美主义，艺术天赋。代表先天的审美和艺术感知力。",
        Branch::Xu => "忠诚可靠，正义感强，适合公职。代表先天的正直和忠诚品质。",
        Branch::Hai => "感性敏锐，想象力丰富，适合创作。代表先天的直觉和想象力。",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_month_index() {
        assert_eq!(destiny_palace(1, Branch::Zi), Branch::Zi);
        assert_eq!(destiny_palace(2, Branch::Zi), Branch::Hai);
        assert_eq!(destiny_palace(3, Branch::Zi), Branch::Xu);
        assert_eq!(destiny_palace(12, Branch::Zi), Branch::Chou);
    }

    #[test]
    fn hour_added() {
        // 四月 → 酉 (9), 巳 hour (5) -> 14 mod 12 = 寅
        assert_eq!(destiny_palace(4, Branch::Si), Branch::Yin);
    }

    #[test]
    fn every_branch_has_text() {
        for b in crate::branch::ALL_BRANCHES {
            assert!(destiny_explanation(b).contains("代表先天"));
        }
    }
}
