use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub message: Option<AttrValue>,
}

#[function_component(Toast)]
pub fn toast(props: &Props) -> Html {
    match &props.message {
        Some(message) => html! {
            <div class="toast-region" role="status" aria-live="polite">
                <div class="toast">{ message.clone() }</div>
            </div>
        },
        None => Html::default(),
    }
}
