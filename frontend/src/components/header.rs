use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const NAV_LINKS: &[(Route, &str)] = &[
    (Route::HireUs, "Hire Us"),
    (Route::OurWork, "Our Work"),
    (Route::Collaborate, "Collaborate"),
    (Route::Track, "Track"),
    (Route::Insight, "Insight"),
];

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > 10.0;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "header-nav mobile-menu-open"
    } else {
        "header-nav"
    };

    html! {
        <header class={classes!("site-header", is_scrolled.then(|| "scrolled"))}>
            <div class="header-content">
                <div onclick={close_menu.clone()}>
                    <Link<Route> to={Route::Home} classes="header-logo">
                        <img src="/favicon.ico" alt="logo" />
                    </Link<Route>>
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class={menu_class}>
                    <ul>
                        { for NAV_LINKS.iter().map(|(route, title)| html! {
                            <li onclick={close_menu.clone()}>
                                <Link<Route> to={route.clone()} classes="header-link">
                                    { *title }
                                </Link<Route>>
                            </li>
                        }) }
                    </ul>
                </nav>
            </div>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 100;
                    background: #000;
                    color: #fff;
                    transition: box-shadow 0.3s;
                }
                .site-header.scrolled {
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.5);
                }
                .header-content {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    width: 80%;
                    height: 70px;
                    margin: 0 auto;
                    padding: 0.75rem 0;
                }
                .header-logo img {
                    height: 90px;
                    object-fit: cover;
                    cursor: pointer;
                }
                .header-nav ul {
                    display: flex;
                    align-items: center;
                    gap: 1.25rem;
                    list-style: none;
                    font-weight: 500;
                }
                .header-link {
                    color: #d1d5db;
                    text-decoration: none;
                    transition: color 0.3s;
                }
                .header-link:hover {
                    color: #60a5fa;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .header-nav {
                        display: none;
                        position: absolute;
                        top: 70px;
                        left: 0;
                        width: 100%;
                        padding: 1rem 10%;
                        background: #000;
                    }
                    .header-nav.mobile-menu-open {
                        display: block;
                    }
                    .header-nav ul {
                        flex-direction: column;
                        align-items: flex-start;
                    }
                }
                "#}
            </style>
        </header>
    }
}
