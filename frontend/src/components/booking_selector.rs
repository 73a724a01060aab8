use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::booking::{BookingAction, BookingCategory, BookingState};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct BookingSelectorProps {
    pub categories: &'static [BookingCategory],
}

#[function_component(BookingSelector)]
pub fn booking_selector(props: &BookingSelectorProps) -> Html {
    let categories = props.categories;
    let booking = use_reducer(move || BookingState::new(categories));
    let confirmation = use_mut_ref(|| None::<Timeout>);

    // The pending confirmation must not outlive the selector.
    {
        let confirmation = confirmation.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    if let Some(timeout) = confirmation.borrow_mut().take() {
                        drop(timeout);
                        debug!("Booking selector unmounted, confirmation timer released");
                    }
                }
            },
            (),
        );
    }

    let on_book = {
        let booking = booking.clone();
        let confirmation = confirmation.clone();
        Callback::from(move |index: usize| {
            // The handle is a render-time snapshot; an armed timer means a
            // booking was already accepted even if we haven't re-rendered.
            if !booking.can_book(index) || confirmation.borrow().is_some() {
                return;
            }
            booking.dispatch(BookingAction::Book(index));
            let dispatcher = booking.dispatcher();
            let timeout = Timeout::new(config::CONFIRMATION_DELAY_MS, move || {
                dispatcher.dispatch(BookingAction::Confirm(index));
            });
            *confirmation.borrow_mut() = Some(timeout);
        })
    };

    html! {
        <div class="booking-grid">
            {
                booking.categories().iter().enumerate().map(|(index, category)| {
                    let processing = booking.is_processing(index);
                    let confirmed = booking.is_confirmed(index);
                    let disabled = booking.is_disabled();
                    let onclick = {
                        let on_book = on_book.clone();
                        Callback::from(move |_: MouseEvent| on_book.emit(index))
                    };
                    let button_class = classes!(
                        "booking-button",
                        confirmed.then_some("confirmed"),
                        processing.then_some("processing"),
                        (disabled && !confirmed && !processing).then_some("locked")
                    );

                    html! {
                        <div
                            key={index}
                            class={classes!(
                                "booking-card",
                                category.accent.class(),
                                booking.is_dimmed(index).then_some("dimmed"),
                                (!disabled).then_some("live")
                            )}
                            data-hover={(!disabled).to_string()}
                        >
                            <div class="booking-card-shine"></div>
                            <div class="booking-card-body">
                                <h3>{category.name}</h3>
                                <p class="booking-price">{category.price}</p>
                                <p class="booking-description">{category.description}</p>
                                <ul class="booking-callouts">
                                    { for category.callouts.iter().enumerate().map(|(i, callout)| html! {
                                        <li key={i}>
                                            <span class={classes!(
                                                "callout-icon",
                                                category.callout_highlighted(i).then_some("highlighted")
                                            )}>{callout.icon}</span>
                                            {callout.text}
                                        </li>
                                    }) }
                                </ul>
                            </div>
                            <button class={button_class} {onclick} {disabled}>
                                <span>{booking.button_label(index)}</span>
                            </button>
                            if let Some(disclaimer) = booking.disclaimer(index) {
                                <p class="booking-disclaimer">{disclaimer}</p>
                            }
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlButtonElement};

    use crate::booking::{BOOKING_CATEGORIES, DISCLAIMER};

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount() -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<BookingSelector>::with_root_and_props(
            root.clone(),
            BookingSelectorProps { categories: &BOOKING_CATEGORIES[..] },
        )
        .render();
        root
    }

    fn buttons(root: &Element) -> Vec<HtmlButtonElement> {
        let nodes = root.query_selector_all(".booking-button").unwrap();
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .map(|node| node.dyn_into::<HtmlButtonElement>().unwrap())
            .collect()
    }

    async fn settle() {
        TimeoutFuture::new(20).await;
    }

    #[wasm_bindgen_test]
    async fn booking_confirms_after_delay() {
        let root = mount();
        settle().await;

        let before = buttons(&root);
        assert_eq!(before.len(), BOOKING_CATEGORIES.len());
        assert!(before.iter().all(|button| !button.disabled()));

        before[1].click();
        settle().await;

        let during = buttons(&root);
        assert!(during.iter().all(|button| button.disabled()));
        assert_eq!(during[1].text_content().unwrap(), "Processing...");
        assert!(!root.text_content().unwrap().contains(DISCLAIMER));

        TimeoutFuture::new(config::CONFIRMATION_DELAY_MS).await;

        let after = buttons(&root);
        assert!(after.iter().all(|button| button.disabled()));
        assert_eq!(after[1].text_content().unwrap(), "Confirmed");
        assert_eq!(root.query_selector_all(".booking-disclaimer").unwrap().length(), 1);
        assert!(root.text_content().unwrap().contains(DISCLAIMER));
    }

    #[wasm_bindgen_test]
    async fn second_click_before_render_keeps_first_booking() {
        let root = mount();
        settle().await;

        let initial = buttons(&root);
        initial[0].click();
        initial[2].click();

        TimeoutFuture::new(config::CONFIRMATION_DELAY_MS + 100).await;

        let after = buttons(&root);
        assert_eq!(after[0].text_content().unwrap(), "Confirmed");
        assert_eq!(after[2].text_content().unwrap(), "Book Now");
    }
}
