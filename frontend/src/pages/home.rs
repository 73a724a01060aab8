use chrono::Datelike;
use yew::prelude::*;
use yew_hooks::prelude::use_window_scroll;
use yew_router::prelude::*;

use crate::booking::BOOKING_CATEGORIES;
use crate::catalog::{FeatureViewer, ViewerAction, FEATURES};
use crate::components::{
    booking_selector::BookingSelector, bubbles::Bubbles, feature_card::FeatureCard,
    feature_modal::FeatureModal, gradient_text::GradientText, marquee::Marquee,
};
use crate::config;
use crate::navigation::{
    scroll_progress, scroll_to_section, section_progress, CONTACT_SECTION, EAT_DRINK_SECTION,
};
use crate::Route;

/// Hero fade: gone after the first fifth of the page, drifting up 100px
/// over the whole scroll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroMotion {
    pub opacity: f64,
    pub offset: f64,
}

impl HeroMotion {
    pub fn at(progress: f64) -> Self {
        let progress = progress.clamp(0.0, 1.0);
        Self {
            opacity: (1.0 - progress / 0.2).max(0.0),
            offset: -100.0 * progress,
        }
    }

    pub fn style(&self) -> String {
        format!("opacity: {:.3}; transform: translateY({:.1}px);", self.opacity, self.offset)
    }
}

/// Vertical drift of the venue photo, in percent of its height, as the
/// atmosphere section crosses the viewport.
pub fn parallax_offset(progress: f64) -> f64 {
    -10.0 + 20.0 * progress.clamp(0.0, 1.0)
}

const HIGHLIGHTS: [(&str, &str, &str); 3] = [
    ("🍺", "Our Home Brews", "Enjoy our exclusive selection of home brewed ales."),
    ("🍴", "Gastropub Grill", "Locally sourced meats cooked on the grill."),
    ("🎵", "Live Entertainment", "Acoustic sessions and DJ sets every weekend."),
];

fn page_progress(scroll_y: f64) -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    let document_height = window
        .document()
        .and_then(|doc| doc.document_element())
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);
    scroll_progress(scroll_y, document_height, viewport_height)
}

fn viewport_progress(section: &NodeRef) -> f64 {
    let Some(element) = section.cast::<web_sys::Element>() else {
        return 0.0;
    };
    let viewport_height = web_sys::window()
        .and_then(|window| window.inner_height().ok())
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);
    let rect = element.get_bounding_client_rect();
    section_progress(rect.top(), rect.height(), viewport_height)
}

#[function_component(Home)]
pub fn home() -> Html {
    let viewer = use_reducer(|| FeatureViewer::new(&FEATURES));
    let (_, scroll_y) = use_window_scroll();
    let hero_motion = HeroMotion::at(page_progress(scroll_y));
    let atmosphere_ref = use_node_ref();
    let venue_offset = parallax_offset(viewport_progress(&atmosphere_ref));
    let navigator = use_navigator();

    let on_select = {
        let dispatcher = viewer.dispatcher();
        Callback::from(move |id: &'static str| dispatcher.dispatch(ViewerAction::Open(id)))
    };

    let on_action = {
        let dispatcher = viewer.dispatcher();
        Callback::from(move |action: ViewerAction| dispatcher.dispatch(action))
    };

    let scroll_to = |section: &'static str| {
        Callback::from(move |_: MouseEvent| {
            scroll_to_section(section);
        })
    };

    let open_faqs = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Faq);
        }
    });

    let year = chrono::Local::now().year();

    html! {
        <div class="home">
            <header class="hero">
                <Bubbles />
                <div class="hero-content" style={hero_motion.style()}>
                    <div class="hero-strip">
                        <span>{"Leamington Spa"}</span>
                        <span class="hero-pulse"></span>
                        <span>{"Open Daily"}</span>
                    </div>

                    <div class="hero-title">
                        <GradientText text="FIZZY" tag="h1" class="hero-word" />
                        <GradientText text="MOON" tag="h1" class="hero-word" />
                        <div class="hero-orb"></div>
                    </div>

                    <div class="hero-rule"></div>
                    <p class="hero-tagline">{"Home Brews • Grill • Live Music"}</p>
                    <p class="hero-subtagline">{"Where bubbles never stop flowing"}</p>

                    <div class="hero-award">
                        <span>{"🏆"}</span>
                        <span class="hero-award-label">{"Multi-Award Winning Bar"}</span>
                        <span>{"🏆"}</span>
                    </div>
                </div>
                <Marquee />
            </header>

            <section id={EAT_DRINK_SECTION} class="taste-makers">
                <div class="section-inner wide">
                    <div class="section-heading">
                        <h2>
                            {"Taste"}<br />
                            <span class="heading-accent">{"Makers"}</span>
                        </h2>
                        <p>{"From our home brews to our grill, we take flavour seriously."}</p>
                    </div>
                    <div class="feature-grid">
                        { for viewer.catalog().iter().map(|item| html! {
                            <FeatureCard key={item.id} {item} on_select={on_select.clone()} />
                        }) }
                    </div>
                </div>
            </section>

            <section id="the-vibe" class="atmosphere" ref={atmosphere_ref}>
                <div class="atmosphere-glow"></div>
                <div class="section-inner atmosphere-grid">
                    <div class="atmosphere-copy">
                        <h2>
                            {"THE"}<br />
                            <GradientText text="ATMOSPHERE" class="atmosphere-word" />
                        </h2>
                        <p class="atmosphere-lead">
                            {"Fizzy Moon isn't just a pub; it's a destination. Whether you're here for the freshly brewed ale, the sizzling steaks, or the late-night beats, we bring the energy."}
                        </p>
                        <div class="atmosphere-highlights">
                            { for HIGHLIGHTS.iter().map(|(icon, title, desc)| html! {
                                <div key={*title} class="highlight">
                                    <div class="highlight-icon">{*icon}</div>
                                    <div>
                                        <h4>{*title}</h4>
                                        <p>{*desc}</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div class="atmosphere-visual">
                        <div class="atmosphere-halo"></div>
                        <div class="atmosphere-frame">
                            <img
                                src={config::VENUE_IMAGE_URL}
                                alt="Bar Interior"
                                loading="lazy"
                                style={format!("transform: translateY({:.2}%) scale(1.2);", venue_offset)}
                            />
                            <div class="atmosphere-shade"></div>
                            <div class="atmosphere-caption">
                                <div class="atmosphere-est">{"EST."}</div>
                                <div class="atmosphere-town">{"Leamington Spa"}</div>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section id="bookings" class="bookings">
                <div class="section-inner">
                    <div class="bookings-heading">
                        <h2>{"BOOK"}</h2>
                        <p>{"Reserve your spot"}</p>
                    </div>
                    <BookingSelector categories={&BOOKING_CATEGORIES[..]} />
                </div>
            </section>

            <section class="quick-links">
                <div class="section-inner">
                    <div class="quick-links-panel">
                        <button class="quick-link" onclick={open_faqs}>{"FAQ'S"}</button>
                        <button class="quick-link" onclick={scroll_to(EAT_DRINK_SECTION)}>{"MENUS"}</button>
                        <button class="quick-link">{"GIFT CARDS"}</button>
                        <button class="quick-link" onclick={scroll_to(CONTACT_SECTION)}>{"CONTACT US"}</button>
                    </div>
                </div>
            </section>

            <footer id={CONTACT_SECTION} class="site-footer">
                <div class="section-inner footer-row">
                    <div>
                        <div class="footer-brand">{"FIZZY MOON"}</div>
                        <div class="footer-address">{config::ADDRESS}</div>
                        <div class="footer-copy">{format!("© {} Fizzy Moon", year)}</div>
                    </div>
                    <div class="footer-social">
                        <a href="#" data-hover="true">{"Instagram"}</a>
                        <a href="#" data-hover="true">{"Facebook"}</a>
                    </div>
                </div>
            </footer>

            if let (Some(item), Some(position)) = (viewer.selected(), viewer.selected_index()) {
                <FeatureModal
                    {item}
                    {position}
                    total={viewer.catalog().len()}
                    on_action={on_action.clone()}
                />
            }

            <style>
                {r#"
                .home {
                    position: relative;
                    min-height: 100vh;
                    color: #fff;
                    overflow-x: hidden;
                }

                .section-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .section-inner.wide {
                    max-width: 100rem;
                }

                .hero {
                    position: relative;
                    height: 100svh;
                    min-height: 600px;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    padding: 0 1rem;
                }

                .hero-content {
                    z-index: 10;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    width: 100%;
                    max-width: 72rem;
                    padding-bottom: 5rem;
                    text-align: center;
                    will-change: transform, opacity;
                }

                .hero-strip {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    margin-bottom: 1rem;
                    padding: 0.5rem 1.5rem;
                    border-radius: 999px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(0, 0, 0, 0.4);
                    backdrop-filter: blur(12px);
                    color: #f59e0b;
                    font-family: monospace;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    animation: rise-in 1s ease-out 0.2s both;
                }

                .hero-pulse {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 50%;
                    background: #ec4899;
                    animation: pulse 2s ease-in-out infinite;
                }

                .hero-title {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    width: 100%;
                }

                .gradient-text {
                    display: block;
                    font-family: 'Syne', sans-serif;
                    background: linear-gradient(90deg, #f59e0b, #ec4899, #f59e0b);
                    background-size: 200% auto;
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                    animation: gradient-shift 6s linear infinite;
                }

                .hero-word {
                    margin: 0;
                    font-size: 14vw;
                    line-height: 0.8;
                    font-weight: 900;
                    letter-spacing: -0.05em;
                }

                .hero-orb {
                    position: absolute;
                    z-index: -1;
                    width: 60vw;
                    height: 60vw;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.05);
                    filter: blur(60px);
                    pointer-events: none;
                    animation: orb 8s ease-in-out infinite;
                }

                .hero-rule {
                    width: 100%;
                    max-width: 28rem;
                    height: 1px;
                    margin: 2rem 0;
                    background: linear-gradient(90deg, transparent, rgba(245, 158, 11, 0.5), transparent);
                    transform-origin: center;
                    animation: grow-x 1.5s ease-out 0.5s both;
                }

                .hero-tagline {
                    max-width: 36rem;
                    font-size: 1.5rem;
                    font-weight: 300;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: rgba(255, 255, 255, 0.9);
                    animation: rise-in 1s ease-out 0.8s both;
                }

                .hero-subtagline {
                    margin-top: 0.75rem;
                    font-family: monospace;
                    font-style: italic;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    color: #22d3ee;
                    animation: rise-in 0.8s ease-out 1s both;
                }

                .hero-award {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-top: 2rem;
                    animation: rise-in 0.8s ease-out 1.2s both;
                }

                .hero-award-label {
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    border: 1px solid rgba(245, 158, 11, 0.5);
                    background: rgba(245, 158, 11, 0.1);
                    font-weight: 700;
                    font-size: 0.875rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                }

                .taste-makers {
                    position: relative;
                    z-index: 10;
                    padding: 8rem 0;
                }

                .section-heading {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    margin-bottom: 4rem;
                }

                .section-heading h2 {
                    font-family: 'Syne', sans-serif;
                    font-size: 6rem;
                    line-height: 0.9;
                    text-transform: uppercase;
                    margin: 0;
                }

                .section-heading p {
                    max-width: 28rem;
                    text-align: right;
                    color: #d1d5db;
                }

                .heading-accent {
                    background: linear-gradient(90deg, #f59e0b, #ec4899);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    border-left: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(0, 0, 0, 0.2);
                    backdrop-filter: blur(4px);
                }

                .feature-card {
                    position: relative;
                    height: 28rem;
                    padding: 0;
                    overflow: hidden;
                    border: none;
                    border-right: 1px solid rgba(255, 255, 255, 0.1);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    background: #000;
                    color: #fff;
                    text-align: left;
                    cursor: pointer;
                }

                .feature-card-image {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.7;
                    filter: grayscale(0.6);
                    transition: transform 0.7s ease, filter 0.7s ease, opacity 0.7s ease;
                }

                .feature-card:hover .feature-card-image {
                    transform: scale(1.08);
                    filter: grayscale(0);
                    opacity: 0.9;
                }

                .feature-card-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.9), transparent 60%);
                }

                .feature-card-body {
                    position: absolute;
                    left: 2rem;
                    bottom: 2rem;
                }

                .feature-card-tag {
                    display: inline-block;
                    margin-bottom: 0.75rem;
                    padding: 0.25rem 0.75rem;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    border-radius: 999px;
                    font-family: monospace;
                    font-size: 0.75rem;
                    letter-spacing: 0.1em;
                }

                .feature-card-name {
                    margin: 0;
                    font-family: 'Syne', sans-serif;
                    font-size: 2.25rem;
                    text-transform: uppercase;
                }

                .feature-card-category {
                    margin: 0.25rem 0 0;
                    color: #f59e0b;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                }

                .feature-card-arrow {
                    position: absolute;
                    top: 1.5rem;
                    right: 1.5rem;
                    font-size: 1.5rem;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }

                .feature-card:hover .feature-card-arrow {
                    opacity: 1;
                }

                .atmosphere {
                    position: relative;
                    z-index: 10;
                    padding: 8rem 0;
                    overflow: hidden;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(0, 0, 0, 0.2);
                    backdrop-filter: blur(4px);
                }

                .atmosphere-glow {
                    position: absolute;
                    top: 50%;
                    right: -20%;
                    width: 50vw;
                    height: 50vw;
                    border-radius: 50%;
                    background: rgba(236, 72, 153, 0.2);
                    filter: blur(40px);
                    pointer-events: none;
                }

                .atmosphere-grid {
                    position: relative;
                    display: grid;
                    grid-template-columns: 5fr 7fr;
                    gap: 4rem;
                    align-items: center;
                }

                .atmosphere-copy h2 {
                    font-family: 'Syne', sans-serif;
                    font-size: 4.5rem;
                    line-height: 1.1;
                    margin: 0 0 2rem;
                }

                .atmosphere-word {
                    font-size: 6rem;
                }

                .atmosphere-lead {
                    font-size: 1.25rem;
                    font-weight: 300;
                    line-height: 1.6;
                    color: #e5e7eb;
                    margin-bottom: 3rem;
                }

                .atmosphere-highlights {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }

                .highlight {
                    display: flex;
                    align-items: flex-start;
                    gap: 1.5rem;
                }

                .highlight-icon {
                    padding: 1rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    background: rgba(255, 255, 255, 0.1);
                    font-size: 1.5rem;
                }

                .highlight h4 {
                    margin: 0 0 0.5rem;
                    font-size: 1.25rem;
                }

                .highlight p {
                    margin: 0;
                    font-size: 0.875rem;
                    color: #d1d5db;
                }

                .atmosphere-visual {
                    position: relative;
                    height: 700px;
                }

                .atmosphere-halo {
                    position: absolute;
                    inset: 0;
                    border-radius: 1.5rem;
                    background: linear-gradient(135deg, #f59e0b, #ec4899);
                    opacity: 0.3;
                    filter: blur(24px);
                    transform: rotate(3deg);
                }

                .atmosphere-frame {
                    position: relative;
                    height: 100%;
                    overflow: hidden;
                    border-radius: 1.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }

                .atmosphere-frame img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    will-change: transform;
                }

                .atmosphere-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, #000, transparent 60%);
                    opacity: 0.8;
                    pointer-events: none;
                }

                .atmosphere-caption {
                    position: absolute;
                    left: 2.5rem;
                    bottom: 2.5rem;
                    pointer-events: none;
                }

                .atmosphere-est {
                    font-family: 'Syne', sans-serif;
                    font-size: 6rem;
                    font-weight: 700;
                    opacity: 0.5;
                }

                .atmosphere-town {
                    font-size: 1.25rem;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                }

                .bookings {
                    position: relative;
                    z-index: 10;
                    padding: 8rem 1.5rem;
                    background: rgba(0, 0, 0, 0.3);
                    backdrop-filter: blur(16px);
                }

                .bookings-heading {
                    text-align: center;
                    margin-bottom: 5rem;
                }

                .bookings-heading h2 {
                    margin: 0;
                    font-family: 'Syne', sans-serif;
                    font-size: 8rem;
                    opacity: 0.2;
                }

                .bookings-heading p {
                    position: relative;
                    margin-top: -2rem;
                    color: #f59e0b;
                    font-family: monospace;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                }

                .booking-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }

                .booking-card {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    min-height: 500px;
                    padding: 2.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(12px);
                    transition: transform 0.3s ease, opacity 0.3s ease, filter 0.3s ease;
                }

                .booking-card.live:hover {
                    transform: translateY(-20px);
                }

                .booking-card.dimmed {
                    opacity: 0.5;
                    filter: grayscale(1);
                }

                .accent-cyan { background: rgba(6, 182, 212, 0.1); border-color: rgba(6, 182, 212, 0.5); }
                .accent-white { background: rgba(255, 255, 255, 0.05); }
                .accent-pink { background: rgba(236, 72, 153, 0.1); border-color: rgba(236, 72, 153, 0.5); }
                .accent-gold { background: rgba(245, 158, 11, 0.1); border-color: rgba(245, 158, 11, 0.5); }

                .booking-card-shine {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 4px;
                    background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.2), transparent);
                }

                .booking-card-body {
                    flex: 1;
                }

                .booking-card h3 {
                    margin: 0 0 0.25rem;
                    font-family: 'Syne', sans-serif;
                    font-size: 1.875rem;
                }

                .booking-price {
                    margin: 0 0 1rem;
                    color: #f59e0b;
                    font-family: monospace;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                }

                .booking-description {
                    color: #d1d5db;
                    margin-bottom: 1.5rem;
                }

                .booking-callouts {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    font-size: 0.875rem;
                    color: #e5e7eb;
                }

                .booking-callouts li {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .callout-icon {
                    filter: grayscale(1);
                }

                .callout-icon.highlighted {
                    filter: none;
                }

                .booking-button {
                    position: relative;
                    width: 100%;
                    margin-top: 2rem;
                    padding: 1rem 0;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: transparent;
                    color: #fff;
                    font-weight: 700;
                    font-size: 0.875rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .booking-button:not(:disabled):hover {
                    background: #fff;
                    color: #000;
                    transform: scale(1.05);
                }

                .booking-button.processing {
                    background: rgba(255, 255, 255, 0.2);
                    cursor: wait;
                }

                .booking-button.confirmed {
                    background: #f59e0b;
                    border-color: #f59e0b;
                    color: #000;
                    cursor: default;
                }

                .booking-button.locked {
                    opacity: 0.5;
                    cursor: not-allowed;
                }

                .booking-disclaimer {
                    margin-top: 0.75rem;
                    text-align: center;
                    font-family: monospace;
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.4);
                    animation: rise-in 0.4s ease-out both;
                }

                .quick-links {
                    position: relative;
                    z-index: 10;
                    padding: 5rem 1.5rem;
                    background: #111;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }

                .quick-links-panel {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                    padding: 1.5rem;
                    border-radius: 3rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(12px);
                }

                .quick-link {
                    padding: 2rem 0;
                    border-radius: 999px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    color: #fff;
                    font-family: 'Syne', sans-serif;
                    font-size: 1.25rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .quick-link:hover {
                    background: rgba(255, 255, 255, 0.15);
                    transform: scale(1.02);
                }

                .site-footer {
                    position: relative;
                    z-index: 10;
                    padding: 4rem 0;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(24px);
                }

                .footer-row {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    gap: 2rem;
                }

                .footer-brand {
                    font-family: 'Syne', sans-serif;
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .footer-address,
                .footer-copy {
                    font-family: monospace;
                    font-size: 0.75rem;
                    color: #9ca3af;
                }

                .footer-social {
                    display: flex;
                    gap: 2rem;
                }

                .footer-social a {
                    color: #9ca3af;
                    font-weight: 700;
                    font-size: 0.75rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    text-decoration: none;
                }

                .footer-social a:hover {
                    color: #fff;
                }

                .feature-modal-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 60;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: rgba(0, 0, 0, 0.5);
                    backdrop-filter: blur(12px);
                    animation: fade-in 0.3s ease-out;
                }

                .feature-modal {
                    position: relative;
                    display: flex;
                    width: 100%;
                    max-width: 64rem;
                    max-height: 90vh;
                    overflow: hidden;
                    background: #1a1a1a;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    box-shadow: 0 25px 50px rgba(245, 158, 11, 0.1);
                    animation: pop-in 0.3s ease-out;
                }

                .modal-close,
                .modal-nav {
                    position: absolute;
                    z-index: 20;
                    border-radius: 50%;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(0, 0, 0, 0.5);
                    color: #fff;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .modal-close:hover,
                .modal-nav:hover {
                    background: #fff;
                    color: #000;
                }

                .modal-close {
                    top: 1rem;
                    right: 1rem;
                    width: 2.5rem;
                    height: 2.5rem;
                }

                .modal-nav {
                    top: 50%;
                    width: 3rem;
                    height: 3rem;
                    font-size: 1.75rem;
                    transform: translateY(-50%);
                }

                .modal-prev { left: 1rem; }
                .modal-next { right: 2rem; }

                .modal-image {
                    position: relative;
                    width: 50%;
                    overflow: hidden;
                }

                .modal-image img {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    animation: zoom-in 0.4s ease-out;
                }

                .modal-image-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to right, transparent, #1a1a1a);
                }

                .modal-content {
                    width: 50%;
                    padding: 3rem;
                    overflow-y: auto;
                    animation: slide-in 0.4s ease-out 0.1s both;
                }

                .modal-tag {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                    color: #f59e0b;
                    font-family: monospace;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                }

                .modal-title {
                    margin: 0 0 0.5rem;
                    font-family: 'Syne', sans-serif;
                    font-size: 3.75rem;
                    line-height: 1;
                    text-transform: uppercase;
                }

                .modal-category {
                    margin: 0 0 1.5rem;
                    color: #ec4899;
                    font-size: 1.125rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                }

                .modal-rule {
                    width: 5rem;
                    height: 1px;
                    margin-bottom: 1.5rem;
                    background: rgba(255, 255, 255, 0.2);
                }

                .modal-description {
                    color: #d1d5db;
                    font-size: 1.125rem;
                    font-weight: 300;
                    line-height: 1.6;
                }

                .modal-position {
                    margin-top: 2rem;
                    font-family: monospace;
                    color: rgba(255, 255, 255, 0.4);
                }

                .schedule h4 {
                    margin: 1.5rem 0 0.5rem;
                    color: #f59e0b;
                    font-family: monospace;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                }

                .schedule table {
                    width: 100%;
                    border-collapse: collapse;
                    font-size: 0.875rem;
                }

                .schedule-row td {
                    padding: 0.4rem 0.5rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                }

                .schedule-date {
                    width: 6rem;
                    font-family: monospace;
                    color: #9ca3af;
                }

                .schedule-row.highlight .schedule-act {
                    color: #22d3ee;
                    font-weight: 700;
                }

                .schedule-row.special {
                    background: rgba(236, 72, 153, 0.12);
                }

                .schedule-row.special .schedule-act {
                    color: #ec4899;
                    font-weight: 700;
                }

                .schedule-note {
                    margin-left: 0.5rem;
                    font-size: 0.75rem;
                    font-style: italic;
                    color: rgba(255, 255, 255, 0.5);
                }

                @keyframes rise-in {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @keyframes fade-in {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                @keyframes pop-in {
                    from { opacity: 0; transform: scale(0.9) translateY(20px); }
                    to { opacity: 1; transform: scale(1) translateY(0); }
                }

                @keyframes zoom-in {
                    from { opacity: 0; transform: scale(1.1); }
                    to { opacity: 1; transform: scale(1); }
                }

                @keyframes slide-in {
                    from { opacity: 0; transform: translateX(20px); }
                    to { opacity: 1; transform: translateX(0); }
                }

                @keyframes gradient-shift {
                    to { background-position: 200% center; }
                }

                @keyframes grow-x {
                    from { transform: scaleX(0); }
                    to { transform: scaleX(1); }
                }

                @keyframes pulse {
                    50% { opacity: 0.3; }
                }

                @keyframes orb {
                    0%, 100% { transform: scale(0.9); opacity: 0.2; }
                    50% { transform: scale(1.1); opacity: 0.4; }
                }

                @media (max-width: 1280px) {
                    .booking-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 1024px) {
                    .feature-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .atmosphere-grid {
                        grid-template-columns: 1fr;
                    }
                    .atmosphere-visual {
                        height: 400px;
                    }
                }

                @media (max-width: 768px) {
                    .hero-word {
                        font-size: 15vw;
                    }
                    .hero-tagline {
                        font-size: 1rem;
                    }
                    .section-heading {
                        flex-direction: column;
                        align-items: flex-start;
                    }
                    .section-heading h2 {
                        font-size: 3rem;
                    }
                    .feature-grid,
                    .booking-grid,
                    .quick-links-panel {
                        grid-template-columns: 1fr;
                    }
                    .atmosphere-copy h2 {
                        font-size: 2.25rem;
                    }
                    .atmosphere-word {
                        font-size: 3rem;
                    }
                    .bookings-heading h2 {
                        font-size: 3rem;
                    }
                    .bookings-heading p {
                        margin-top: -0.75rem;
                    }
                    .feature-modal {
                        flex-direction: column;
                    }
                    .modal-image {
                        width: 100%;
                        height: 16rem;
                    }
                    .modal-image-shade {
                        background: linear-gradient(to top, #1a1a1a, transparent);
                    }
                    .modal-content {
                        width: auto;
                        padding: 2rem 2rem 6rem;
                    }
                    .modal-nav {
                        top: auto;
                        bottom: 1rem;
                        transform: none;
                    }
                    .modal-next {
                        right: 1rem;
                    }
                    .footer-row {
                        flex-direction: column;
                        align-items: flex-start;
                    }
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
    fn hero_fades_over_first_fifth() {
        assert_eq!(HeroMotion::at(0.0), HeroMotion { opacity: 1.0, offset: 0.0 });
        let halfway = HeroMotion::at(0.1);
        assert!((halfway.opacity - 0.5).abs() < 1e-9);
        assert_eq!(HeroMotion::at(0.2).opacity, 0.0);
        assert_eq!(HeroMotion::at(0.6).opacity, 0.0);
    }

    #[test]
    fn hero_drifts_up_over_whole_page() {
        assert_eq!(HeroMotion::at(0.5).offset, -50.0);
        assert_eq!(HeroMotion::at(1.0).offset, -100.0);
        assert_eq!(HeroMotion::at(3.0).offset, -100.0);
    }

    #[test]
    fn hero_style_formats_both_channels() {
        let style = HeroMotion::at(0.5).style();
        assert_eq!(style, "opacity: 0.000; transform: translateY(-50.0px);");
    }

    #[test]
    fn venue_photo_drifts_ten_percent_each_way() {
        assert_eq!(parallax_offset(0.0), -10.0);
        assert_eq!(parallax_offset(0.5), 0.0);
        assert_eq!(parallax_offset(1.0), 10.0);
        assert_eq!(parallax_offset(-1.0), -10.0);
        assert_eq!(parallax_offset(2.0), 10.0);
    }
}
