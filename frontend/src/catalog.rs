use std::rc::Rc;

use log::{debug, warn};
use yew::Reducible;

/// One card in the "Taste Makers" grid. The catalog order is the order the
/// detail overlay steps through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureItem {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub tag: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

pub static FEATURES: [FeatureItem; 5] = [
    FeatureItem {
        id: "1",
        name: "Fizzy Burger",
        category: "Signature Grill",
        tag: "FOOD",
        image: "https://images.unsplash.com/photo-1568901346375-23c9450c58cd?q=80&w=1000&auto=format&fit=crop",
        description: "Our legendary house burger. Double smashed beef patty, smoked bacon, american cheese, and our secret Fizzy sauce. Served with rosemary fries.",
    },
    FeatureItem {
        id: "2",
        name: "Our Home Brews",
        category: "Craft Ales",
        tag: "DRINK",
        image: "https://images.unsplash.com/photo-1584225064785-c62a8b43d148?q=80&w=1000&auto=format&fit=crop",
        description: "Taste our exclusive home brews. From hoppy IPAs to smooth Stouts, our rotation changes weekly.",
    },
    FeatureItem {
        id: "3",
        name: "Sunday Roast",
        category: "Weekly Tradition",
        tag: "SUNDAY",
        image: "https://images.unsplash.com/photo-1606850780554-b55eaefa84cb?q=80&w=1000&auto=format&fit=crop",
        description: "A proper Sunday Feast. Slow-roasted meats, giant yorkshire puddings, roast potatoes and seasonal veg. Served all day Sunday until sold out.",
    },
    FeatureItem {
        id: "4",
        name: "Live Music",
        category: "Entertainment",
        tag: "FRI / SAT",
        image: "https://images.unsplash.com/photo-1516450360452-9312f5e86fc7?q=80&w=1000&auto=format&fit=crop",
        description: "The best local bands and DJs spinning tracks until late. Get your dancing shoes on and enjoy the best atmosphere in town.",
    },
    FeatureItem {
        id: "6",
        name: "Heated Marquee",
        category: "Al Fresco",
        tag: "OUTDOORS",
        image: "https://images.unsplash.com/photo-1572569722368-2c938c4b1257?q=80&w=1000&auto=format&fit=crop",
        description: "Enjoy our large, heated outdoor terrace all year round. The perfect spot for summer drinks or cosy winter evenings under the stars.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerAction {
    Open(&'static str),
    Close,
    Navigate(Direction),
}

impl ViewerAction {
    /// Maps a `KeyboardEvent::key()` value to the overlay command bound to it.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Navigate(Direction::Backward)),
            "ArrowRight" => Some(Self::Navigate(Direction::Forward)),
            "Escape" => Some(Self::Close),
            _ => None,
        }
    }
}

/// Selection state of the detail overlay: a fixed catalog plus an optional
/// index into it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureViewer {
    catalog: &'static [FeatureItem],
    selected: Option<usize>,
}

impl FeatureViewer {
    pub fn new(catalog: &'static [FeatureItem]) -> Self {
        Self { catalog, selected: None }
    }

    pub fn catalog(&self) -> &'static [FeatureItem] {
        self.catalog
    }

    pub fn selected(&self) -> Option<&'static FeatureItem> {
        self.selected.map(|index| &self.catalog[index])
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.catalog.iter().position(|item| item.id == id)
    }

    pub fn open(self, id: &str) -> Self {
        match self.position_of(id) {
            Some(index) => Self { selected: Some(index), ..self },
            None => {
                warn!("Tried to open unknown feature '{}'", id);
                self
            }
        }
    }

    pub fn close(self) -> Self {
        Self { selected: None, ..self }
    }

    pub fn navigate(self, direction: Direction) -> Self {
        let Some(current) = self.selected() else {
            return self;
        };
        // Resolve by id so the step always starts from the item on screen.
        let Some(index) = self.position_of(current.id) else {
            return self;
        };
        let len = self.catalog.len();
        let next = match direction {
            Direction::Forward => (index + 1) % len,
            Direction::Backward => (index + len - 1) % len,
        };
        Self { selected: Some(next), ..self }
    }

    pub fn apply(self, action: ViewerAction) -> Self {
        match action {
            ViewerAction::Open(id) => self.open(id),
            ViewerAction::Close => self.close(),
            ViewerAction::Navigate(direction) => self.navigate(direction),
        }
    }
}

impl Reducible for FeatureViewer {
    type Action = ViewerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            return self;
        }
        debug!("Feature viewer {:?} -> {:?}", action, next.selected().map(|item| item.id));
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &'static str) -> FeatureItem {
        FeatureItem {
            id,
            name: id,
            category: "",
            tag: "",
            image: "",
            description: "",
        }
    }

    fn abc() -> &'static [FeatureItem] {
        Box::leak(vec![item("A"), item("B"), item("C")].into_boxed_slice())
    }

    fn selected_id(viewer: FeatureViewer) -> Option<&'static str> {
        viewer.selected().map(|item| item.id)
    }

    #[test]
    fn forward_wraps_from_last_to_first() {
        let viewer = FeatureViewer::new(abc()).open("B");
        let viewer = viewer.navigate(Direction::Forward);
        assert_eq!(selected_id(viewer), Some("C"));
        let viewer = viewer.navigate(Direction::Forward);
        assert_eq!(selected_id(viewer), Some("A"));
    }

    #[test]
    fn backward_wraps_from_first_to_last() {
        let viewer = FeatureViewer::new(abc()).open("A").navigate(Direction::Backward);
        assert_eq!(selected_id(viewer), Some("C"));
    }

    #[test]
    fn n_forward_steps_return_to_start() {
        for start in FEATURES.iter() {
            let opened = FeatureViewer::new(&FEATURES).open(start.id);
            let mut viewer = opened;
            for _ in 0..FEATURES.len() {
                viewer = viewer.navigate(Direction::Forward);
            }
            assert_eq!(viewer, opened);
        }
    }

    #[test]
    fn opposite_steps_cancel_out() {
        for start in FEATURES.iter() {
            let opened = FeatureViewer::new(&FEATURES).open(start.id);
            let there_and_back = opened
                .navigate(Direction::Forward)
                .navigate(Direction::Backward);
            let back_and_forth = opened
                .navigate(Direction::Backward)
                .navigate(Direction::Forward);
            assert_eq!(there_and_back, opened);
            assert_eq!(back_and_forth, opened);
        }
    }

    #[test]
    fn navigate_without_selection_is_noop() {
        let viewer = FeatureViewer::new(&FEATURES);
        assert_eq!(viewer.navigate(Direction::Forward), viewer);
        assert_eq!(viewer.navigate(Direction::Backward), viewer);
        assert!(viewer.selected().is_none());
    }

    #[test]
    fn close_is_idempotent_and_reopen_restores_item() {
        let viewer = FeatureViewer::new(&FEATURES).open("3");
        let closed = viewer.close();
        assert!(closed.selected().is_none());
        assert_eq!(closed.close(), closed);
        for item in FEATURES.iter() {
            assert_eq!(closed.open(item.id).selected(), Some(item));
        }
    }

    #[test]
    fn unknown_id_leaves_selection_alone() {
        let viewer = FeatureViewer::new(&FEATURES).open("2");
        assert_eq!(viewer.open("nope"), viewer);
    }

    #[test]
    fn keys_map_to_overlay_commands() {
        assert_eq!(
            ViewerAction::from_key("ArrowLeft"),
            Some(ViewerAction::Navigate(Direction::Backward))
        );
        assert_eq!(
            ViewerAction::from_key("ArrowRight"),
            Some(ViewerAction::Navigate(Direction::Forward))
        );
        assert_eq!(ViewerAction::from_key("Escape"), Some(ViewerAction::Close));
        assert_eq!(ViewerAction::from_key("Enter"), None);
    }

    #[test]
    fn reducer_keeps_same_rc_when_nothing_changes() {
        let viewer = Rc::new(FeatureViewer::new(&FEATURES));
        let next = viewer.clone().reduce(ViewerAction::Navigate(Direction::Forward));
        assert!(Rc::ptr_eq(&viewer, &next));

        let opened = viewer.reduce(ViewerAction::Open("4"));
        assert_eq!(opened.selected_index(), Some(3));
    }

    #[test]
    fn catalog_ids_are_unique() {
        for (i, a) in FEATURES.iter().enumerate() {
            for b in FEATURES.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
