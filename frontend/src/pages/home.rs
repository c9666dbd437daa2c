use yew::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <section class="home-hero">
                <h1>{"We build what you "}<span class="accent">{"imagine."}</span></h1>
                <p>{"Websites, mobile apps, design and growth. Tell us about your project and we will take it from there."}</p>
                <Link<Route> to={Route::HireUs} classes="home-cta">
                    {"Hire Us"}
                </Link<Route>>
            </section>
            <footer class="home-footer">
                {format!("© {}", config::TEAM_NAME)}
            </footer>
            <style>
                {r#"
                .home-page {
                    min-height: 100vh;
                    padding-top: 70px;
                    display: flex;
                    flex-direction: column;
                    background: #000;
                    color: #fff;
                }
                @keyframes heroIn {
                    from { transform: translateY(20px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                .home-hero {
                    flex: 1;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    text-align: center;
                    padding: 6rem 2rem;
                    border-top: 1px solid #374151;
                    animation: heroIn 0.8s ease-out both;
                }
                .home-hero h1 {
                    font-size: 3.5rem;
                    font-weight: 800;
                    margin-bottom: 1rem;
                }
                .home-hero .accent {
                    color: #ef4444;
                }
                .home-hero p {
                    max-width: 36rem;
                    color: #d1d5db;
                    font-size: 1.125rem;
                    margin-bottom: 2rem;
                }
                .home-cta {
                    padding: 0.75rem 2rem;
                    background: #2563eb;
                    color: #fff;
                    border-radius: 6px;
                    font-weight: 600;
                    text-decoration: none;
                    transition: transform 0.2s, background 0.2s;
                }
                .home-cta:hover {
                    background: #1d4ed8;
                    transform: scale(1.05);
                }
                .home-footer {
                    padding: 1.5rem;
                    text-align: center;
                    color: #6b7280;
                    font-size: 0.875rem;
                }
                "#}
            </style>
        </div>
    }
}
