use yew::prelude::*;
use yew::{Children, Properties};
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then_some("open"))}>
            <button class="faq-question" onclick={toggle} data-hover="true">
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <div class="faq-page">
            <section class="faq-hero">
                <h1>{"FAQ's"}</h1>
                <p>{"Everything you need to know before you visit Fizzy Moon"}</p>
            </section>

            <section class="faq-section">
                <h2>{"Visiting"}</h2>

                <FaqItem question="When are you open?">
                    <p>{"We're open every day from midday. Food is served until 9pm, and on Fridays and Saturdays the bar stays open late while the band or DJ is playing."}</p>
                </FaqItem>

                <FaqItem question="Where can I find you?">
                    <p>{format!("We're at {}, a short walk from the Parade.", config::ADDRESS)}</p>
                </FaqItem>

                <FaqItem question="Are dogs welcome?">
                    <p>{"Well behaved dogs are welcome in the bar and the heated marquee. Water bowls are on the house."}</p>
                </FaqItem>

                <h2>{"Bookings"}</h2>

                <FaqItem question="Do I need to book a table?">
                    <p>{"Walk-ins are always welcome, but tables go fast on weekends and for Sunday Roast. Booking ahead is the safest bet."}</p>
                </FaqItem>

                <FaqItem question="What's the difference between the VIP Hut and the Luxe Lounge?">
                    <ul>
                        <li><strong>{"VIP Hut:"}</strong>{" a sheltered, heated hut in the marquee for groups of 4-8."}</li>
                        <li><strong>{"Luxe Lounge:"}</strong>{" our private hideaway for 10 or more, with a dedicated waitress and a £50pp minimum spend."}</li>
                    </ul>
                </FaqItem>

                <FaqItem question="Can I hire the whole venue?">
                    <p>{"Yes. We host corporate events, product launches and birthdays, with either the full marquee or the whole venue. Get in touch and we'll tailor it to you."}</p>
                </FaqItem>

                <h2>{"Food & Drink"}</h2>

                <FaqItem question="Do you cater for allergies and dietary requirements?">
                    <p>{"Our menu is marked for the major allergens and we always have vegetarian and vegan options, including a nut roast on Sundays. Let the team know when you order."}</p>
                </FaqItem>

                <FaqItem question="What's on tap?">
                    <p>{"Our home brews rotate weekly, alongside guest craft ales, lagers, ciders and a full cocktail list."}</p>
                </FaqItem>

                <FaqItem question="When is the live music?">
                    <p>{"Every Friday and Saturday night. Open the Live Music card on the home page for this season's line-up."}</p>
                </FaqItem>
            </section>

            <div class="faq-back">
                <Link<Route> to={Route::Home} classes="faq-back-link">
                    {"← Back to Fizzy Moon"}
                </Link<Route>>
            </div>

            <style>
                {r#"
                .faq-page {
                    padding-top: 8rem;
                    min-height: 100vh;
                    color: #ffffff;
                    position: relative;
                    background: transparent;
                }

                .faq-hero {
                    text-align: center;
                    padding: 4rem 2rem;
                    background: rgba(26, 26, 26, 0.75);
                    backdrop-filter: blur(5px);
                    border-top: 1px solid rgba(245, 158, 11, 0.15);
                    border-bottom: 1px solid rgba(245, 158, 11, 0.15);
                    margin-bottom: 2rem;
                }

                .faq-hero h1 {
                    font-family: 'Syne', sans-serif;
                    font-size: 3.5rem;
                    margin-bottom: 1.5rem;
                    text-transform: uppercase;
                    background: linear-gradient(45deg, #f59e0b, #ec4899);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .faq-hero p {
                    font-size: 1.2rem;
                    color: #999;
                    max-width: 600px;
                    margin: 0 auto;
                }

                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 2rem;
                }

                .faq-section h2 {
                    font-family: 'Syne', sans-serif;
                    font-size: 2.5rem;
                    margin: 3rem 0 2rem;
                    color: #f59e0b;
                    text-transform: uppercase;
                }

                .faq-item {
                    background: rgba(26, 26, 26, 0.85);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: all 0.3s ease;
                }

                .faq-item:hover {
                    border-color: rgba(245, 158, 11, 0.4);
                }

                .faq-question {
                    width: 100%;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.2rem;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    transition: all 0.3s ease;
                }

                .faq-question:hover {
                    color: #f59e0b;
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    color: #ec4899;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.5s ease;
                    padding: 0 1.5rem;
                }

                .faq-item.open .faq-answer {
                    max-height: 1000px;
                    padding: 0 1.5rem 1.5rem;
                }

                .faq-answer p {
                    color: #bbb;
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }

                .faq-answer ul {
                    list-style: none;
                    padding: 0;
                    margin: 1rem 0;
                }

                .faq-answer li {
                    color: #bbb;
                    padding: 0.5rem 0;
                    padding-left: 1.5rem;
                    position: relative;
                }

                .faq-answer li::before {
                    content: '•';
                    position: absolute;
                    left: 0.5rem;
                    color: #f59e0b;
                }

                .faq-back {
                    text-align: center;
                    padding: 2rem 0 5rem;
                }

                .faq-back-link {
                    color: #f59e0b;
                    font-family: monospace;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    text-decoration: none;
                }

                @media (max-width: 768px) {
                    .faq-hero {
                        padding: 3rem 1rem;
                    }

                    .faq-hero h1 {
                        font-size: 2.5rem;
                    }

                    .faq-section {
                        padding: 1rem;
                    }

                    .faq-section h2 {
                        font-size: 2rem;
                    }

                    .faq-question {
                        font-size: 1.1rem;
                        padding: 1rem;
                    }

                    .faq-answer {
                        padding: 0 1rem;
                    }

                    .faq-item.open .faq-answer {
                        padding: 0 1rem 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
