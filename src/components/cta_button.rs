use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    pub onclick: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let onclick = {
        let onclick = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            onclick.emit(());
        })
    };

    html! {
        <button class={classes!("cta-button", "cta-primary", props.class.clone())} {onclick}>
            { for props.children.iter() }
        </button>
    }
}
