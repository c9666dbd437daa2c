use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::hire_us::fields::label_for;

/// Matches the `.error-alert.leaving` animation duration.
const EXIT_ANIMATION_MS: u32 = 500;

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    /// Control names of the blank fields, in display order.
    pub missing_fields: Vec<AttrValue>,
    pub on_close: Callback<()>,
}

#[function_component(ErrorAlert)]
pub fn error_alert(props: &ErrorAlertProps) -> Html {
    let leaving = use_state(|| false);
    // Dropping the handle cancels the timer if the banner unmounts first.
    let exit_timer = use_mut_ref(|| None::<Timeout>);

    let close = {
        let leaving = leaving.clone();
        let exit_timer = exit_timer.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            if *leaving {
                return;
            }
            leaving.set(true);
            let on_close = on_close.clone();
            *exit_timer.borrow_mut() = Some(Timeout::new(EXIT_ANIMATION_MS, move || {
                on_close.emit(());
            }));
        })
    };

    html! {
        <div class={classes!("error-alert", (*leaving).then(|| "leaving"))} role="alert">
            <div class="error-alert-header">
                <h2>{"Please Fill All Required Fields"}</h2>
                <button class="error-alert-close" onclick={close}>{"X"}</button>
            </div>
            <ul class="error-alert-list">
                { for props.missing_fields.iter().map(|field| html! {
                    <li key={field.to_string()}>{ label_for(field) }</li>
                }) }
            </ul>
        </div>
    }
}
