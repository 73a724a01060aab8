use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::catalog::{Direction, FeatureItem, ViewerAction};
use crate::schedule::{ScheduleMonth, MUSIC_FEATURE_ID, MUSIC_SCHEDULE};

#[derive(Properties, PartialEq)]
pub struct FeatureModalProps {
    pub item: &'static FeatureItem,
    pub position: usize,
    pub total: usize,
    pub on_action: Callback<ViewerAction>,
}

/// Detail overlay for the selected feature. Only mounted while something is
/// selected, so the window key listener lives exactly as long as the
/// selection does.
#[function_component(FeatureModal)]
pub fn feature_modal(props: &FeatureModalProps) -> Html {
    let FeatureModalProps { item, position, total, on_action } = props;

    {
        let on_action = on_action.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let listener = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                        if let Some(action) = ViewerAction::from_key(&e.key()) {
                            e.prevent_default();
                            on_action.emit(action);
                        }
                    });
                    match window.add_event_listener_with_callback(
                        "keydown",
                        listener.as_ref().unchecked_ref(),
                    ) {
                        Ok(()) => debug!("Feature overlay key listener registered"),
                        Err(e) => warn!("Failed to register overlay key listener: {:?}", e),
                    }
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "keydown",
                            listener.as_ref().unchecked_ref(),
                        );
                        debug!("Feature overlay key listener removed");
                    })
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            (),
        );
    }

    let close = {
        let on_action = on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(ViewerAction::Close))
    };

    // Clicks inside the panel must not reach the backdrop.
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    let step = |direction: Direction| {
        let on_action = on_action.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_action.emit(ViewerAction::Navigate(direction));
        })
    };

    html! {
        <div class="feature-modal-backdrop" onclick={close.clone()}>
            <div class="feature-modal" onclick={stop}>
                <button class="modal-close" onclick={close} data-hover="true" aria-label="Close">
                    {"✕"}
                </button>
                <button
                    class="modal-nav modal-prev"
                    onclick={step(Direction::Backward)}
                    data-hover="true"
                    aria-label="Previous Feature"
                >
                    {"‹"}
                </button>
                <button
                    class="modal-nav modal-next"
                    onclick={step(Direction::Forward)}
                    data-hover="true"
                    aria-label="Next Feature"
                >
                    {"›"}
                </button>

                <div class="modal-image">
                    <img key={item.id} src={item.image} alt={item.name} />
                    <div class="modal-image-shade"></div>
                </div>

                <div class="modal-content" key={item.id}>
                    <div class="modal-tag">
                        <span>{"📅"}</span>
                        <span>{item.tag}</span>
                    </div>
                    <h3 class="modal-title">{item.name}</h3>
                    <p class="modal-category">{item.category}</p>
                    <div class="modal-rule"></div>
                    <p class="modal-description">{item.description}</p>
                    if item.id == MUSIC_FEATURE_ID {
                        <ScheduleTable months={&MUSIC_SCHEDULE[..]} />
                    }
                    <p class="modal-position">{format!("{} / {}", position + 1, total)}</p>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ScheduleTableProps {
    pub months: &'static [ScheduleMonth],
}

#[function_component(ScheduleTable)]
fn schedule_table(props: &ScheduleTableProps) -> Html {
    html! {
        <div class="schedule">
            { for props.months.iter().map(|month| html! {
                <div key={month.month} class="schedule-month">
                    <h4>{month.month}</h4>
                    <table>
                        <tbody>
                            { for month.entries.iter().map(|entry| html! {
                                <tr class={entry.row_class()}>
                                    <td class="schedule-date">{entry.date}</td>
                                    <td class="schedule-act">
                                        {entry.act}
                                        if let Some(note) = entry.note {
                                            <span class="schedule-note">{note}</span>
                                        }
                                    </td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>
            }) }
        </div>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::KeyboardEventInit;

    use crate::catalog::FEATURES;

    wasm_bindgen_test_configure!(run_in_browser);

    fn press(key: &str) {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        web_sys::window().unwrap().dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    async fn key_listener_follows_overlay_lifetime() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let on_action = {
            let seen = seen.clone();
            Callback::from(move |action: ViewerAction| seen.borrow_mut().push(action))
        };

        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        let handle = yew::Renderer::<FeatureModal>::with_root_and_props(
            root,
            FeatureModalProps {
                item: &FEATURES[0],
                position: 0,
                total: FEATURES.len(),
                on_action,
            },
        )
        .render();
        TimeoutFuture::new(20).await;

        press("ArrowRight");
        press("Escape");
        press("Enter");
        assert_eq!(
            *seen.borrow(),
            vec![ViewerAction::Navigate(Direction::Forward), ViewerAction::Close]
        );

        handle.destroy();
        TimeoutFuture::new(20).await;

        press("ArrowRight");
        assert_eq!(seen.borrow().len(), 2);
    }
}
