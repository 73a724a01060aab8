use yew::prelude::*;

const WORDS: [&str; 3] = ["CRAFT BEER", "COCKTAILS", "SUNDAY ROAST"];
const REPEATS: usize = 4;

#[function_component(Marquee)]
pub fn marquee() -> Html {
    // Two identical halves: the track slides by -50% and loops seamlessly.
    let half = |copy: usize| {
        html! {
            <div key={copy} class="marquee-half" aria-hidden={(copy > 0).to_string()}>
                { for (0..REPEATS).map(|i| html! {
                    <span key={i} class="marquee-chunk">
                        { for WORDS.iter().map(|word| html! {
                            <span key={*word} class="marquee-word">
                                {*word}
                                <span class="marquee-dot">{"●"}</span>
                            </span>
                        }) }
                    </span>
                }) }
            </div>
        }
    };

    html! {
        <div class="marquee">
            <div class="marquee-track">
                { half(0) }
                { half(1) }
            </div>
            <style>
                {r#"
                .marquee {
                    position: absolute;
                    bottom: 4rem;
                    left: 0;
                    width: 100%;
                    padding: 1.5rem 0;
                    background: #f59e0b;
                    color: #000;
                    z-index: 20;
                    overflow: hidden;
                    border-top: 4px solid #000;
                    border-bottom: 4px solid #000;
                    box-shadow: 0 0 40px rgba(245, 158, 11, 0.2);
                }

                .marquee-track {
                    display: flex;
                    width: max-content;
                    will-change: transform;
                    animation: marquee-scroll 40s linear infinite;
                }

                .marquee-half {
                    display: flex;
                    white-space: nowrap;
                    flex-shrink: 0;
                }

                .marquee-chunk {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 0 2rem;
                    font-family: 'Syne', sans-serif;
                    font-weight: 900;
                    font-size: 3rem;
                }

                .marquee-word {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .marquee-dot {
                    color: #fff;
                    font-size: 2.25rem;
                }

                @keyframes marquee-scroll {
                    to { transform: translateX(-50%); }
                }

                @media (max-width: 768px) {
                    .marquee {
                        bottom: 3rem;
                        padding: 1rem 0;
                    }
                    .marquee-chunk {
                        font-size: 1.875rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
