use ratatui::style::Color;

/// Streak badge tiers, one per completed week; the last tier is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakBadge {
    Blue,   // 0-6 days
    Green,  // 7-13
    Yellow, // 14-20
    Orange, // 21-27
    Red,    // 28-34
    Purple, // 35-41
    Pink,   // 42+
}

impl StreakBadge {
    pub fn all() -> [StreakBadge; 7] {
        [
            StreakBadge::Blue,
            StreakBadge::Green,
            StreakBadge::Yellow,
            StreakBadge::Orange,
            StreakBadge::Red,
            StreakBadge::Purple,
            StreakBadge::Pink,
        ]
    }

    pub fn for_streak(current_streak: u32) -> Self {
        let tiers = Self::all();
        let index = ((current_streak / 7) as usize).min(tiers.len() - 1);
        tiers[index]
    }

    pub fn color(&self) -> Color {
        match self {
            StreakBadge::Blue => Color::Blue,
            StreakBadge::Green => Color::Green,
            StreakBadge::Yellow => Color::Yellow,
            StreakBadge::Orange => Color::Rgb(255, 165, 0),
            StreakBadge::Red => Color::Red,
            StreakBadge::Purple => Color::Magenta,
            StreakBadge::Pink => Color::LightMagenta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_tier_boundaries() {
        assert_eq!(StreakBadge::for_streak(0), StreakBadge::Blue);
        assert_eq!(StreakBadge::for_streak(6), StreakBadge::Blue);
        assert_eq!(StreakBadge::for_streak(7), StreakBadge::Green);
        assert_eq!(StreakBadge::for_streak(20), StreakBadge::Yellow);
        assert_eq!(StreakBadge::for_streak(41), StreakBadge::Purple);
        assert_eq!(StreakBadge::for_streak(42), StreakBadge::Pink);
        assert_eq!(StreakBadge::for_streak(365), StreakBadge::Pink);
    }
}
