//! Festival rule table.
//!
//! Rules fire on a tithi number, a nakshatra number or a fixed Gregorian
//! month/day range. The built-in Gregorian dates for Holi, Diwali,
//! Janmashtami and Ganesh Chaturthi are fixed approximations; the real
//! dates follow the lunisolar calendar and move from year to year.

use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FestivalKind {
    Major,
    Tithi,
    Nakshatra,
    Minor,
}

impl FestivalKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Tithi => "tithi",
            Self::Nakshatra => "nakshatra",
            Self::Minor => "minor",
        }
    }
}

/// What makes a rule fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Any of these tithi numbers (1–30).
    Tithi(&'static [u8]),
    /// Any of these nakshatra numbers (1–27).
    Nakshatra(&'static [u8]),
    /// Gregorian month (1–12) and an inclusive day range.
    Calendar {
        month: u32,
        first_day: u32,
        last_day: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FestivalRule {
    pub name: &'static str,
    pub kind: FestivalKind,
    pub trigger: Trigger,
    pub description: &'static str,
    pub significance: &'static str,
}

impl FestivalRule {
    pub fn matches(&self, date: NaiveDate, tithi: u8, nakshatra: u8) -> bool {
        match self.trigger {
            Trigger::Tithi(numbers) => numbers.contains(&tithi),
            Trigger::Nakshatra(numbers) => numbers.contains(&nakshatra),
            Trigger::Calendar {
                month,
                first_day,
                last_day,
            } => date.month() == month && (first_day..=last_day).contains(&date.day()),
        }
    }
}

/// A festival observed on a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Festival {
    pub name: &'static str,
    pub kind: FestivalKind,
    pub date: NaiveDate,
    pub description: &'static str,
    pub significance: &'static str,
}

/// Built-in rules, in output order.
pub const FESTIVAL_RULES: [FestivalRule; 6] = [
    FestivalRule {
        name: "Purnima",
        kind: FestivalKind::Tithi,
        trigger: Trigger::Tithi(&[15]),
        description: "Full Moon Day",
        significance: "Considered auspicious for spiritual practices and ceremonies",
    },
    // Also fires on Shukla Pratipada (tithi 1).
    FestivalRule {
        name: "Amavasya",
        kind: FestivalKind::Tithi,
        trigger: Trigger::Tithi(&[30, 1]),
        description: "New Moon Day",
        significance: "Day of new beginnings and ancestral offerings",
    },
    FestivalRule {
        name: "Holi",
        kind: FestivalKind::Major,
        trigger: Trigger::Calendar {
            month: 3,
            first_day: 22,
            last_day: 22,
        },
        description: "Festival of Colors",
        significance: "Celebrates the victory of good over evil and the arrival of spring",
    },
    FestivalRule {
        name: "Diwali",
        kind: FestivalKind::Major,
        trigger: Trigger::Calendar {
            month: 10,
            first_day: 19,
            last_day: 23,
        },
        description: "Festival of Lights",
        significance: "Celebrates the victory of light over darkness",
    },
    FestivalRule {
        name: "Janmashtami",
        kind: FestivalKind::Major,
        trigger: Trigger::Calendar {
            month: 8,
            first_day: 30,
            last_day: 31,
        },
        description: "Birth of Lord Krishna",
        significance: "Celebrates the birth of Lord Krishna",
    },
    FestivalRule {
        name: "Ganesh Chaturthi",
        kind: FestivalKind::Major,
        trigger: Trigger::Calendar {
            month: 9,
            first_day: 1,
            last_day: 10,
        },
        description: "Festival dedicated to Lord Ganesha",
        significance: "Celebrates the birth of Lord Ganesha",
    },
];

/// Festivals from an arbitrary rule table.
pub fn festivals_with_rules(
    rules: &[FestivalRule],
    date: NaiveDate,
    tithi: u8,
    nakshatra: u8,
) -> Vec<Festival> {
    rules
        .iter()
        .filter(|r| r.matches(date, tithi, nakshatra))
        .map(|r| Festival {
            name: r.name,
            kind: r.kind,
            date,
            description: r.description,
            significance: r.significance,
        })
        .collect()
}

/// Festivals from the built-in rules for a date and its tithi/nakshatra.
pub fn festivals_for(date: NaiveDate, tithi: u8, nakshatra: u8) -> Vec<Festival> {
    festivals_with_rules(&FESTIVAL_RULES, date, tithi, nakshatra)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, day).unwrap()
    }

    fn names(f: &[Festival]) -> Vec<&'static str> {
        f.iter().map(|x| x.name).collect()
    }

    #[test]
    fn purnima_on_tithi_15() {
        let f = festivals_for(d(4, 10), 15, 5);
        assert_eq!(names(&f), ["Purnima"]);
        assert_eq!(f[0].kind, FestivalKind::Tithi);
        assert_eq!(f[0].description, "Full Moon Day");
        assert_eq!(f[0].date, d(4, 10));
    }

    #[test]
    fn amavasya_on_30_and_1() {
        assert_eq!(names(&festivals_for(d(4, 10), 30, 5)), ["Amavasya"]);
        assert_eq!(names(&festivals_for(d(4, 10), 1, 5)), ["Amavasya"]);
        assert!(festivals_for(d(4, 10), 2, 5).is_empty());
    }

    #[test]
    fn holi_on_march_22_whatever_the_tithi() {
        let f = festivals_for(d(3, 22), 7, 12);
        assert_eq!(names(&f), ["Holi"]);
        assert_eq!(f[0].kind, FestivalKind::Major);
        assert!(festivals_for(d(3, 23), 7, 12).is_empty());
    }

    #[test]
    fn ranges_are_inclusive() {
        for day in 19..=23 {
            assert_eq!(names(&festivals_for(d(10, day), 7, 1)), ["Diwali"]);
        }
        assert!(festivals_for(d(10, 18), 7, 1).is_empty());
        assert!(festivals_for(d(10, 24), 7, 1).is_empty());
        assert_eq!(names(&festivals_for(d(8, 31), 7, 1)), ["Janmashtami"]);
        assert_eq!(names(&festivals_for(d(9, 10), 7, 1)), ["Ganesh Chaturthi"]);
        assert!(festivals_for(d(9, 11), 7, 1).is_empty());
    }

    #[test]
    fn tithi_and_calendar_rules_combine() {
        let f = festivals_for(d(3, 22), 15, 1);
        assert_eq!(names(&f), ["Purnima", "Holi"]);
    }

    #[test]
    fn custom_nakshatra_rule() {
        const RULES: [FestivalRule; 1] = [FestivalRule {
            name: "Pushya Day",
            kind: FestivalKind::Nakshatra,
            trigger: Trigger::Nakshatra(&[8]),
            description: "Moon in Pushya",
            significance: "Favoured for purchases",
        }];
        assert_eq!(names(&festivals_with_rules(&RULES, d(5, 1), 3, 8)), ["Pushya Day"]);
        assert!(festivals_with_rules(&RULES, d(5, 1), 3, 9).is_empty());
    }
}
