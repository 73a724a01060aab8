/// Catalog id of the entry whose overlay also shows the gig schedule.
pub const MUSIC_FEATURE_ID: &str = "4";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub date: &'static str,
    pub act: &'static str,
    pub note: Option<&'static str>,
    pub highlight: bool,
    pub special: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleMonth {
    pub month: &'static str,
    pub entries: &'static [ScheduleEntry],
}

impl ScheduleEntry {
    const fn gig(date: &'static str, act: &'static str) -> Self {
        Self {
            date,
            act,
            note: None,
            highlight: false,
            special: false,
        }
    }

    const fn note(self, note: &'static str) -> Self {
        Self { note: Some(note), ..self }
    }

    const fn highlighted(self) -> Self {
        Self { highlight: true, ..self }
    }

    const fn special(self) -> Self {
        Self { special: true, ..self }
    }

    pub fn row_class(&self) -> &'static str {
        match (self.special, self.highlight) {
            (true, _) => "schedule-row special",
            (false, true) => "schedule-row highlight",
            (false, false) => "schedule-row",
        }
    }
}

pub static MUSIC_SCHEDULE: [ScheduleMonth; 3] = [
    ScheduleMonth {
        month: "October",
        entries: &[
            ScheduleEntry::gig("Fri 3rd", "The Regent Street Ramblers"),
            ScheduleEntry::gig("Sat 4th", "DJ Moonbeam").note("Till late"),
            ScheduleEntry::gig("Fri 10th", "Velvet Hops"),
            ScheduleEntry::gig("Sat 11th", "Leam Soul Collective").highlighted(),
            ScheduleEntry::gig("Fri 17th", "Acoustic Session: Hannah Vale"),
            ScheduleEntry::gig("Sat 18th", "The Copper Kettles"),
            ScheduleEntry::gig("Fri 31st", "Halloween Fancy Dress Party")
                .note("Prizes for best costume")
                .special(),
        ],
    },
    ScheduleMonth {
        month: "November",
        entries: &[
            ScheduleEntry::gig("Fri 7th", "Stereo Lantern"),
            ScheduleEntry::gig("Sat 8th", "DJ Moonbeam").note("Till late"),
            ScheduleEntry::gig("Fri 14th", "The Spa Town Strays").highlighted(),
            ScheduleEntry::gig("Sat 15th", "Mersey Beat Tribute"),
            ScheduleEntry::gig("Fri 21st", "Open Mic Night").note("Sign up at the bar"),
            ScheduleEntry::gig("Sat 29th", "Fizzy Moon Birthday Bash")
                .note("Free fizz on arrival")
                .special(),
        ],
    },
    ScheduleMonth {
        month: "December",
        entries: &[
            ScheduleEntry::gig("Fri 5th", "Velvet Hops"),
            ScheduleEntry::gig("Sat 6th", "Christmas Jumper Disco").highlighted(),
            ScheduleEntry::gig("Fri 12th", "Leam Soul Collective"),
            ScheduleEntry::gig("Sat 13th", "The Copper Kettles"),
            ScheduleEntry::gig("Sat 20th", "DJ Moonbeam Xmas Special").highlighted(),
            ScheduleEntry::gig("Wed 31st", "New Year's Eve Party")
                .note("Ticket only")
                .special(),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FEATURES;

    #[test]
    fn music_feature_is_in_catalog() {
        let item = FEATURES.iter().find(|item| item.id == MUSIC_FEATURE_ID);
        assert_eq!(item.map(|item| item.name), Some("Live Music"));
    }

    #[test]
    fn every_month_has_entries() {
        for month in MUSIC_SCHEDULE.iter() {
            assert!(!month.entries.is_empty(), "{} is empty", month.month);
        }
    }

    #[test]
    fn special_styling_wins_over_highlight() {
        let both = ScheduleEntry::gig("Sat 1st", "Act").highlighted().special();
        assert_eq!(both.row_class(), "schedule-row special");
        assert_eq!(
            ScheduleEntry::gig("Sat 1st", "Act").highlighted().row_class(),
            "schedule-row highlight"
        );
        assert_eq!(ScheduleEntry::gig("Sat 1st", "Act").row_class(), "schedule-row");
    }
}
