//! Revenue goals: the monthly target and the seasonal daily/hourly tiers.

/// Monthly revenue goal in currency units. Overridable through `Config::monthly_target`.
pub const MONTHLY_TARGET: i64 = 400_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    /// December to March
    Winter,
    /// April to November
    Summer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourlyTiers {
    pub pass: i64,
    pub good: i64,
    pub excellent: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonTargets {
    /// Target for the average revenue of a 5h+ day
    pub daily_target: i64,
    pub tiers: HourlyTiers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HourlyGrade {
    NotMet,
    Pass,
    Good,
    Excellent,
}

impl Season {
    pub fn of_month(month: u32) -> Self {
        match month {
            12 | 1 | 2 | 3 => Season::Winter,
            _ => Season::Summer,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Summer => "summer",
        }
    }

    pub fn months_label(&self) -> &'static str {
        match self {
            Season::Winter => "Dec-Mar",
            Season::Summer => "Apr-Nov",
        }
    }

    pub fn targets(&self) -> SeasonTargets {
        match self {
            Season::Winter => SeasonTargets {
                daily_target: 20_000,
                tiers: HourlyTiers {
                    pass: 3_000,
                    good: 3_500,
                    excellent: 4_000,
                },
            },
            Season::Summer => SeasonTargets {
                daily_target: 15_000,
                tiers: HourlyTiers {
                    pass: 2_000,
                    good: 2_500,
                    excellent: 3_000,
                },
            },
        }
    }
}

impl HourlyTiers {
    /// Highest tier reached wins; a rate equal to a threshold reaches that tier.
    pub fn grade(&self, rate: i64) -> HourlyGrade {
        if rate >= self.excellent {
            HourlyGrade::Excellent
        } else if rate >= self.good {
            HourlyGrade::Good
        } else if rate >= self.pass {
            HourlyGrade::Pass
        } else {
            HourlyGrade::NotMet
        }
    }
}

impl HourlyGrade {
    pub fn label(&self) -> &'static str {
        match self {
            HourlyGrade::Excellent => "excellent ✅",
            HourlyGrade::Good => "good ✅",
            HourlyGrade::Pass => "pass ✅",
            HourlyGrade::NotMet => "not met ❌",
        }
    }
}
