use std::rc::Rc;

use log::{debug, info};
use yew::Reducible;

pub const DISCLAIMER: &str = "Demo site: no booking made";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Cyan,
    White,
    Pink,
    Gold,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Cyan => "accent-cyan",
            Accent::White => "accent-white",
            Accent::Pink => "accent-pink",
            Accent::Gold => "accent-gold",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Callout {
    pub icon: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingCategory {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub accent: Accent,
    pub callouts: &'static [Callout],
}

impl BookingCategory {
    /// Gold cards call out their last perk in the accent colour.
    pub fn callout_highlighted(&self, index: usize) -> bool {
        self.accent == Accent::Gold && index == 2
    }
}

pub static BOOKING_CATEGORIES: [BookingCategory; 4] = [
    BookingCategory {
        name: "Table Booking",
        price: "Standard",
        description: "Reserve a table in our main bar, restaurant or garden. Perfect for casual drinks, dinner, or Sunday Roast.",
        accent: Accent::Cyan,
        callouts: &[
            Callout { icon: "👥", text: "Any Group Size" },
            Callout { icon: "🍴", text: "Full Menu & Drinks" },
            Callout { icon: "📅", text: "Instant Confirmation" },
        ],
    },
    BookingCategory {
        name: "VIP Hut",
        price: "Exclusive",
        description: "The most exclusive experience at Fizzy Moon. Fully sheltered and heated luxury marquee.",
        accent: Accent::White,
        callouts: &[
            Callout { icon: "👥", text: "Groups of 4-8 people" },
            Callout { icon: "📍", text: "Sheltered & Heated" },
            Callout { icon: "🎉", text: "Perfect for Occasions" },
        ],
    },
    BookingCategory {
        name: "Luxe Lounge",
        price: "£50pp",
        description: "Step into your own VIP hideaway. No hire fee, just a minimum spend across food & drinks.",
        accent: Accent::Pink,
        callouts: &[
            Callout { icon: "👥", text: "Minimum 10 guests" },
            Callout { icon: "🍷", text: "Dedicated Waitress" },
            Callout { icon: "👑", text: "Exclusive Area" },
        ],
    },
    BookingCategory {
        name: "Private Hire",
        price: "Enquire",
        description: "Tailored for corporate events, product launches, and birthdays. Available for full marquee or venue hire.",
        accent: Accent::Gold,
        callouts: &[
            Callout { icon: "💼", text: "Corporate & Launches" },
            Callout { icon: "👑", text: "Full Venue / Marquee" },
            Callout { icon: "🎉", text: "Birthdays & Parties" },
        ],
    },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BookingStatus {
    #[default]
    Idle,
    Processing(usize),
    Confirmed(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingAction {
    Book(usize),
    /// Fired by the confirmation timer for the index it was started for.
    Confirm(usize),
}

/// Fake reservation flow for the whole selector. Once a category is
/// confirmed the selector stays frozen for the page lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BookingState {
    categories: &'static [BookingCategory],
    status: BookingStatus,
}

impl BookingState {
    pub fn new(categories: &'static [BookingCategory]) -> Self {
        Self {
            categories,
            status: BookingStatus::Idle,
        }
    }

    pub fn categories(&self) -> &'static [BookingCategory] {
        self.categories
    }

    pub fn processing(&self) -> Option<usize> {
        match self.status {
            BookingStatus::Processing(index) => Some(index),
            _ => None,
        }
    }

    pub fn confirmed(&self) -> Option<usize> {
        match self.status {
            BookingStatus::Confirmed(index) => Some(index),
            _ => None,
        }
    }

    pub fn can_book(&self, index: usize) -> bool {
        self.status == BookingStatus::Idle && index < self.categories.len()
    }

    /// Every control is disabled as soon as any booking is in flight or done.
    pub fn is_disabled(&self) -> bool {
        self.status != BookingStatus::Idle
    }

    pub fn is_processing(&self, index: usize) -> bool {
        self.processing() == Some(index)
    }

    pub fn is_confirmed(&self, index: usize) -> bool {
        self.confirmed() == Some(index)
    }

    /// Greyed-out cards: everything but the one in flight or confirmed.
    pub fn is_dimmed(&self, index: usize) -> bool {
        self.is_disabled() && !self.is_confirmed(index) && !self.is_processing(index)
    }

    pub fn button_label(&self, index: usize) -> &'static str {
        if self.is_processing(index) {
            "Processing..."
        } else if self.is_confirmed(index) {
            "Confirmed"
        } else {
            "Book Now"
        }
    }

    pub fn disclaimer(&self, index: usize) -> Option<&'static str> {
        self.is_confirmed(index).then_some(DISCLAIMER)
    }

    pub fn apply(self, action: BookingAction) -> Self {
        match action {
            BookingAction::Book(index) if self.can_book(index) => Self {
                status: BookingStatus::Processing(index),
                ..self
            },
            BookingAction::Confirm(index) if self.is_processing(index) => Self {
                status: BookingStatus::Confirmed(index),
                ..self
            },
            _ => self,
        }
    }
}

impl Reducible for BookingState {
    type Action = BookingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            debug!("Ignoring {:?} while {:?}", action, self.status);
            return self;
        }
        match next.status {
            BookingStatus::Processing(index) => {
                info!("Processing booking for {}", self.categories[index].name)
            }
            BookingStatus::Confirmed(index) => {
                info!("Booking confirmed for {}", self.categories[index].name)
            }
            BookingStatus::Idle => {}
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> BookingState {
        BookingState::new(&BOOKING_CATEGORIES)
    }

    #[test]
    fn book_moves_to_processing_then_confirmed() {
        let processing = state().apply(BookingAction::Book(1));
        assert_eq!(processing.processing(), Some(1));
        assert_eq!(processing.confirmed(), None);

        let confirmed = processing.apply(BookingAction::Confirm(1));
        assert_eq!(confirmed.processing(), None);
        assert_eq!(confirmed.confirmed(), Some(1));
    }

    #[test]
    fn book_while_processing_has_no_effect() {
        let processing = state().apply(BookingAction::Book(0));
        for index in 0..BOOKING_CATEGORIES.len() {
            assert_eq!(processing.apply(BookingAction::Book(index)), processing);
        }
    }

    #[test]
    fn confirmed_is_terminal() {
        let confirmed = state()
            .apply(BookingAction::Book(2))
            .apply(BookingAction::Confirm(2));
        for index in 0..BOOKING_CATEGORIES.len() {
            assert_eq!(confirmed.apply(BookingAction::Book(index)), confirmed);
            assert_eq!(confirmed.apply(BookingAction::Confirm(index)), confirmed);
        }
    }

    #[test]
    fn stray_confirm_is_ignored() {
        let idle = state();
        assert_eq!(idle.apply(BookingAction::Confirm(0)), idle);

        let processing = idle.apply(BookingAction::Book(3));
        assert_eq!(processing.apply(BookingAction::Confirm(1)), processing);
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let idle = state();
        assert!(!idle.can_book(BOOKING_CATEGORIES.len()));
        assert_eq!(idle.apply(BookingAction::Book(BOOKING_CATEGORIES.len())), idle);
    }

    #[test]
    fn processing_disables_every_card() {
        let processing = state().apply(BookingAction::Book(1));
        assert!(processing.is_disabled());
        assert!(processing.is_dimmed(0));
        assert!(!processing.is_dimmed(1));
        assert!(processing.is_dimmed(2));
        assert_eq!(processing.button_label(1), "Processing...");
        assert_eq!(processing.button_label(0), "Book Now");
        assert!((0..4).all(|index| processing.disclaimer(index).is_none()));
    }

    #[test]
    fn disclaimer_only_on_confirmed_card() {
        let confirmed = state()
            .apply(BookingAction::Book(1))
            .apply(BookingAction::Confirm(1));
        assert_eq!(confirmed.disclaimer(1), Some(DISCLAIMER));
        assert_eq!(confirmed.disclaimer(0), None);
        assert_eq!(confirmed.disclaimer(2), None);
        assert_eq!(confirmed.button_label(1), "Confirmed");
        assert!(confirmed.is_dimmed(0));
        assert!(!confirmed.is_dimmed(1));
    }

    #[test]
    fn idle_has_nothing_disabled() {
        let idle = state();
        assert!(!idle.is_disabled());
        assert!((0..4).all(|index| !idle.is_dimmed(index) && idle.can_book(index)));
    }

    #[test]
    fn only_gold_highlights_third_callout() {
        let gold = &BOOKING_CATEGORIES[3];
        assert!(gold.callout_highlighted(2));
        assert!(!gold.callout_highlighted(1));
        assert!(!BOOKING_CATEGORIES[0].callout_highlighted(2));
    }

    #[test]
    fn reducer_returns_same_rc_for_rejected_action() {
        let processing = Rc::new(state()).reduce(BookingAction::Book(0));
        let again = processing.clone().reduce(BookingAction::Book(2));
        assert!(Rc::ptr_eq(&processing, &again));
    }
}
