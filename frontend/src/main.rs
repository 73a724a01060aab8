use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;
use yew_hooks::prelude::use_window_scroll;
use yew_router::prelude::*;

mod booking;
mod catalog;
mod config;
mod navigation;
mod schedule;
mod components {
    pub mod booking_selector;
    pub mod bubbles;
    pub mod cursor;
    pub mod feature_card;
    pub mod feature_modal;
    pub mod fluid_background;
    pub mod gradient_text;
    pub mod marquee;
}
mod pages {
    pub mod faq;
    pub mod home;
}

use components::{cursor::CustomCursor, fluid_background::FluidBackground};
use navigation::{scroll_to_section, BOOKINGS_SECTION, MAIN_MENU};
use pages::{faq::Faq, home::Home};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/faqs")]
    Faq,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Last orders"}</h1>
                    <p>{"This page has left the bar."}</p>
                    <Link<Route> to={Route::Home} classes="not-found-link">
                        {"Back to Fizzy Moon"}
                    </Link<Route>>
                </div>
            }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > config::NAV_SCROLLED_PX;
    let navigator = use_navigator();
    let route = use_route::<Route>();

    // Sections only exist on the home page; from anywhere else go home
    // first and scroll once it has rendered.
    let go_to = {
        let menu_open = menu_open.clone();
        let on_home = route == Some(Route::Home);
        Callback::from(move |section: &'static str| {
            menu_open.set(false);
            if on_home {
                scroll_to_section(section);
            } else if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
                Timeout::new(50, move || {
                    scroll_to_section(section);
                })
                .forget();
            }
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let menu_button = |section: &'static str| {
        let go_to = go_to.clone();
        Callback::from(move |_: MouseEvent| go_to.emit(section))
    };

    html! {
        <>
            <nav class={classes!("top-nav", is_scrolled.then_some("scrolled"))}>
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src={config::LOGO_URL} alt="Fizzy Moon" />
                </Link<Route>>

                <div class="nav-pill">
                    { for MAIN_MENU.iter().map(|item| html! {
                        <button
                            key={item.label}
                            class="nav-link"
                            onclick={menu_button(item.section)}
                            data-hover="true"
                        >
                            {item.label}
                        </button>
                    }) }
                </div>

                <button class="nav-book" onclick={menu_button(BOOKINGS_SECTION)} data-hover="true">
                    <span>{"📅"}</span>
                    <span class="nav-book-long">{"BOOK NOW"}</span>
                    <span class="nav-book-short">{"BOOK"}</span>
                </button>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    {if *menu_open { "✕" } else { "☰" }}
                </button>
            </nav>

            if *menu_open {
                <div class="mobile-menu">
                    { for MAIN_MENU.iter().map(|item| html! {
                        <button key={item.label} class="mobile-menu-link" onclick={menu_button(item.section)}>
                            {item.label}
                        </button>
                    }) }
                    <div class="mobile-menu-social">
                        <a href="#">{"Instagram"}</a>
                        <a href="#">{"Facebook"}</a>
                    </div>
                </div>
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 40;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1.5rem 2rem;
                    transition: background 0.3s ease, padding 0.3s ease;
                }

                .top-nav.scrolled {
                    padding: 0.75rem 2rem;
                    background: rgba(0, 0, 0, 0.6);
                    backdrop-filter: blur(16px);
                }

                .nav-logo {
                    position: absolute;
                    left: 2rem;
                    z-index: 50;
                }

                .nav-logo img {
                    height: 4rem;
                    width: auto;
                    object-fit: contain;
                }

                .nav-pill {
                    display: flex;
                    gap: 0.25rem;
                    padding: 0.375rem;
                    border-radius: 999px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(0, 0, 0, 0.3);
                    backdrop-filter: blur(24px);
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.36);
                }

                .nav-link {
                    padding: 0.625rem 1.5rem;
                    border-radius: 999px;
                    border: 1px solid transparent;
                    background: none;
                    color: rgba(255, 255, 255, 0.9);
                    font-family: 'Syne', sans-serif;
                    font-size: 0.75rem;
                    font-weight: 500;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .nav-link:hover {
                    background: rgba(255, 255, 255, 0.1);
                    border-color: rgba(255, 255, 255, 0.1);
                    color: #fff;
                }

                .nav-book {
                    position: absolute;
                    right: 2rem;
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    border-radius: 999px;
                    border: 1px solid #f59e0b;
                    background: #f59e0b;
                    color: #000;
                    font-family: 'Syne', sans-serif;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    cursor: pointer;
                    box-shadow: 0 0 20px rgba(245, 158, 11, 0.4);
                    transition: all 0.3s ease;
                }

                .nav-book:hover {
                    background: #fff;
                    transform: scale(1.05);
                }

                .nav-book-short,
                .burger-menu {
                    display: none;
                }

                .burger-menu {
                    position: absolute;
                    right: 1.5rem;
                    z-index: 50;
                    width: 3rem;
                    height: 3rem;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(12px);
                    color: #fff;
                    font-size: 1.25rem;
                    cursor: pointer;
                }

                .mobile-menu {
                    position: fixed;
                    inset: 0;
                    z-index: 30;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 2rem;
                    background: rgba(26, 26, 26, 0.95);
                    backdrop-filter: blur(24px);
                    animation: menu-drop 0.3s ease-out;
                }

                .mobile-menu-link {
                    border: none;
                    background: transparent;
                    color: #fff;
                    font-family: 'Syne', sans-serif;
                    font-size: 2.25rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    cursor: pointer;
                }

                .mobile-menu-link:hover {
                    color: #f59e0b;
                }

                .mobile-menu-social {
                    position: absolute;
                    bottom: 2.5rem;
                    display: flex;
                    gap: 1.5rem;
                }

                .mobile-menu-social a {
                    color: rgba(255, 255, 255, 0.5);
                    text-decoration: none;
                }

                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    text-align: center;
                }

                .not-found h1 {
                    font-family: 'Syne', sans-serif;
                    font-size: 4rem;
                    text-transform: uppercase;
                }

                .not-found-link {
                    color: #f59e0b;
                    text-decoration: none;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                }

                @keyframes menu-drop {
                    from { opacity: 0; transform: translateY(-20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @media (max-width: 768px) {
                    .top-nav {
                        padding: 1.5rem;
                    }
                    .nav-logo {
                        left: 1.5rem;
                    }
                    .nav-logo img {
                        height: 3rem;
                    }
                    .nav-pill,
                    .nav-book-long {
                        display: none;
                    }
                    .nav-book-short {
                        display: inline;
                    }
                    .nav-book {
                        right: 5rem;
                        padding: 0.5rem 1rem;
                        font-size: 0.625rem;
                    }
                    .burger-menu {
                        display: flex;
                    }
                }

                @media (min-width: 769px) {
                    .mobile-menu {
                        display: none;
                    }
                }
                "#}
            </style>
        </>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <CustomCursor />
            <FluidBackground />
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting Fizzy Moon");
    yew::Renderer::<App>::new().render();
}
