use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct GratitudeProps {
    pub on_back: Callback<()>,
}

#[function_component(Gratitude)]
pub fn gratitude(props: &GratitudeProps) -> Html {
    let on_back = props.on_back.reform(|_: MouseEvent| ());

    html! {
        <div class="gratitude-card">
            <h2>{"Thank You! 🙌"}</h2>
            <p class="gratitude-lead">
                {"Your kindness and support mean the world to us."}<br />{"We truly appreciate it! 💙"}
            </p>
            <div class="gratitude-note">
                <p>
                    {"We will get back to you soon with more details."}<br />{"Meanwhile, take care and stay safe! 🌟"}
                </p>
                <span class="gratitude-signature">{format!("Team : {}", config::TEAM_NAME)}</span>
            </div>
            <button class="gratitude-back" onclick={on_back}>
                {"Back to Home"}
            </button>
        </div>
    }
}
