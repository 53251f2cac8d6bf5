use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub onmouseenter: Callback<MouseEvent>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Button)]
pub fn button(p: &Props) -> Html {
    let onclick = p.onclick.clone();
    let onmouseenter = p.onmouseenter.clone();
    let label = p.label.clone();
    html! {
        <button class={p.class.clone()} disabled={p.disabled} {onclick} {onmouseenter}>
            { label }
        </button>
    }
}
