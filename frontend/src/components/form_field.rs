use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub label: AttrValue,
    /// Position in the form, used to stagger the entrance animation.
    #[prop_or_default]
    pub index: u32,
    pub children: Children,
}

#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let delay = format!("animation-delay: {:.1}s;", 0.3 + props.index as f32 * 0.2);

    html! {
        <div class="form-field" style={delay}>
            <label class="form-field-label">{ props.label.clone() }</label>
            <div class="form-field-control">
                { for props.children.iter() }
            </div>
        </div>
    }
}
