use stylist::yew::styled_component;
use web_sys::js_sys;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Debug, PartialEq)]
pub struct Bubble {
    pub id: usize,
    pub size: f64,
    pub left: f64,
    pub duration: f64,
    pub delay: f64,
    pub wobble: f64,
}

impl Bubble {
    /// Builds a bubble from unit samples in `[0, 1)`.
    pub fn from_samples(id: usize, mut sample: impl FnMut() -> f64) -> Self {
        Self {
            id,
            size: sample() * 12.0 + 4.0,       // 4px to 16px
            left: sample() * 100.0,            // % of the hero width
            duration: sample() * 10.0 + 5.0,   // 5s to 15s rise time
            delay: sample() * 10.0,
            wobble: sample() * 40.0 - 20.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; width: {:.2}px; height: {:.2}px; animation-duration: {:.2}s; animation-delay: {:.2}s; --wobble: {:.2}px;",
            self.left, self.size, self.size, self.duration, self.delay, self.wobble
        )
    }
}

pub fn generate(count: usize, mut sample: impl FnMut() -> f64) -> Vec<Bubble> {
    (0..count).map(|id| Bubble::from_samples(id, &mut sample)).collect()
}

#[styled_component(Bubbles)]
pub fn bubbles() -> Html {
    let bubbles = use_state(Vec::<Bubble>::new);

    // Generated once per mount so every visit gets a fresh pattern.
    {
        let bubbles = bubbles.clone();
        use_effect_with_deps(
            move |_| {
                bubbles.set(generate(config::BUBBLE_COUNT, js_sys::Math::random));
                || ()
            },
            (),
        );
    }

    let layer = css!(
        r#"
        position: absolute;
        inset: 0;
        overflow: hidden;
        pointer-events: none;
        user-select: none;
        z-index: 0;

        .bubble {
            position: absolute;
            bottom: -20px;
            border-radius: 50%;
            border: 1px solid rgba(255, 255, 255, 0.2);
            background: rgba(255, 255, 255, 0.05);
            box-shadow: 0 0 8px rgba(255, 255, 255, 0.2);
            backdrop-filter: blur(1px);
            opacity: 0;
            animation-name: bubble-rise;
            animation-timing-function: linear;
            animation-iteration-count: infinite;
            will-change: transform, opacity;
        }
    "#
    );

    html! {
        <div class={layer}>
            {
                bubbles.iter().map(|bubble| html! {
                    <div key={bubble.id} class="bubble" style={bubble.style()}></div>
                }).collect::<Html>()
            }
            <style>
                {r#"
                @keyframes bubble-rise {
                    0% { transform: translate(0, 0); opacity: 0; }
                    10% { transform: translate(var(--wobble), -110px); opacity: 0.8; }
                    90% { transform: translate(calc(var(--wobble) * -1), -990px); opacity: 0.8; }
                    100% { transform: translate(0, -1100px); opacity: 0; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes_stay_in_range() {
        let low = Bubble::from_samples(0, || 0.0);
        assert_eq!(low.size, 4.0);
        assert_eq!(low.left, 0.0);
        assert_eq!(low.duration, 5.0);
        assert_eq!(low.delay, 0.0);
        assert_eq!(low.wobble, -20.0);

        let high = Bubble::from_samples(0, || 0.999_999);
        assert!(high.size < 16.0 && high.size > 15.9);
        assert!(high.left < 100.0);
        assert!(high.duration < 15.0);
        assert!(high.delay < 10.0);
        assert!(high.wobble < 20.0);
    }

    #[test]
    fn generate_consumes_five_samples_per_bubble() {
        let mut calls = 0;
        let bubbles = generate(config::BUBBLE_COUNT, || {
            calls += 1;
            0.5
        });
        assert_eq!(bubbles.len(), config::BUBBLE_COUNT);
        assert_eq!(calls, config::BUBBLE_COUNT * 5);
        assert!(bubbles.iter().enumerate().all(|(i, bubble)| bubble.id == i));
    }

    #[test]
    fn style_carries_wobble_variable() {
        let bubble = Bubble::from_samples(3, || 0.5);
        let style = bubble.style();
        assert!(style.contains("left: 50.00%"));
        assert!(style.contains("--wobble: 0.00px"));
        assert!(style.contains("animation-duration: 10.00s"));
    }
}
