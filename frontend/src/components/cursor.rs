use stylist::yew::styled_component;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::use_event_with_window;

/// Selector for anything the cursor should swell over.
const HOVER_TARGETS: &str = "[data-hover=\"true\"], button, a";

#[styled_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let position = use_state(|| (-100.0_f64, -100.0_f64));
    let hovering = use_state(|| false);

    {
        let position = position.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            position.set((e.client_x() as f64, e.client_y() as f64));
        });
    }

    {
        let hovering = hovering.clone();
        use_event_with_window("mouseover", move |e: MouseEvent| {
            let over_target = e
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|element| element.closest(HOVER_TARGETS).ok().flatten())
                .is_some();
            hovering.set(over_target);
        });
    }

    let (x, y) = *position;
    let scale = if *hovering { 2.5 } else { 1.0 };

    let cursor = css!(
        r#"
        position: fixed;
        top: 0;
        left: 0;
        z-index: 100;
        pointer-events: none;
        mix-blend-mode: difference;

        .cursor-dot,
        .cursor-ring {
            position: absolute;
            border-radius: 50%;
        }

        .cursor-dot {
            width: 10px;
            height: 10px;
            margin: -5px 0 0 -5px;
            background: #f59e0b;
        }

        .cursor-ring {
            width: 36px;
            height: 36px;
            margin: -18px 0 0 -18px;
            border: 1px solid rgba(255, 255, 255, 0.6);
            transition: transform 0.15s ease-out;
        }
    "#
    );

    html! {
        <div class={classes!(cursor, "custom-cursor")}>
            <div class="cursor-dot" style={format!("transform: translate({}px, {}px);", x, y)}></div>
            <div
                class="cursor-ring"
                style={format!("transform: translate({}px, {}px) scale({});", x, y, scale)}
            ></div>
            <style>
                {r#"
                @media (pointer: coarse), (max-width: 768px) {
                    .custom-cursor { display: none; }
                }
                "#}
            </style>
        </div>
    }
}
