use std::sync::atomic::{AtomicUsize, Ordering};
use yew::prelude::*;

static MODAL_IDS: AtomicUsize = AtomicUsize::new(0);

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub title: AttrValue,
    pub description: AttrValue,
    pub confirm_label: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub on_hover: Callback<()>,
}

/// Reveal dialog: closes on the confirm button, the backdrop, or Escape.
#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    if !props.open {
        return Html::default();
    }

    let modal_id = use_state(|| MODAL_IDS.fetch_add(1, Ordering::Relaxed));
    let title_id = format!("modal-title-{}", *modal_id);
    let desc_id = format!("modal-desc-{}", *modal_id);

    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_dialog_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_keydown = {
        let cb = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };
    let on_hover = {
        let cb = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="modal-backdrop" role="presentation" onclick={on_close.clone()}>
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby={title_id.clone()}
                aria-describedby={desc_id.clone()}
                onkeydown={on_keydown}
                onclick={on_dialog_click}
            >
                <h3 id={title_id} class="modal__title">{ props.title.clone() }</h3>
                <p id={desc_id} class="modal__description">{ props.description.clone() }</p>
                <button
                    type="button"
                    class="modal__confirm"
                    onclick={on_close}
                    onmouseenter={on_hover}
                >
                    { props.confirm_label.clone() }
                </button>
            </div>
        </div>
    }
}
