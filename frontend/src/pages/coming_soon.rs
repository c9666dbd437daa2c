use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ComingSoonProps {
    pub title: AttrValue,
}

/// Placeholder for sections that are linked from the header but not built yet.
#[function_component(ComingSoon)]
pub fn coming_soon(props: &ComingSoonProps) -> Html {
    html! {
        <div class="coming-soon-page">
            <h1>{ props.title.clone() }</h1>
            <p>{"We are still putting this page together. Check back soon."}</p>
            <Link<Route> to={Route::HireUs} classes="coming-soon-link">
                {"Start a project with us →"}
            </Link<Route>>
            <style>
                {r#"
                .coming-soon-page {
                    min-height: 100vh;
                    padding: 10rem 2rem 4rem;
                    text-align: center;
                    background: #000;
                    color: #fff;
                }
                .coming-soon-page h1 {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                }
                .coming-soon-page p {
                    color: #9ca3af;
                    margin-bottom: 2rem;
                }
                .coming-soon-link {
                    color: #60a5fa;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}
