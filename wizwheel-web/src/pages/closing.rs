use crate::components::button::Button;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ClosingPageProps {
    pub on_complete: Callback<()>,
    #[prop_or_default]
    pub on_hover: Callback<()>,
}

/// Final screen. Completing it plays the session-end cue and reloads after a
/// short delay, which discards the session state.
#[function_component(ClosingPage)]
pub fn closing_page(props: &ClosingPageProps) -> Html {
    let on_complete = {
        let cb = props.on_complete.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_hover = {
        let cb = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="closing" data-testid="closing-screen">
            <h2 class="closing__title">{ crate::i18n::t("closing.title") }</h2>
            <blockquote class="closing__quote">{ crate::i18n::t("closing.quote") }</blockquote>

            <div class="closing__notes">
                <label for="closing-magic">{ crate::i18n::t("closing.magicLabel") }</label>
                <textarea id="closing-magic" rows="2"></textarea>
                <label for="closing-steady">{ crate::i18n::t("closing.steadyLabel") }</label>
                <textarea id="closing-steady" rows="2"></textarea>
            </div>

            <Button
                label={crate::i18n::t("closing.complete")}
                class={classes!("closing__complete")}
                onclick={on_complete}
                onmouseenter={on_hover}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn closing_page_renders_quote_and_complete_button() {
        crate::i18n::set_lang("en");
        let props = ClosingPageProps {
            on_complete: Callback::noop(),
            on_hover: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<ClosingPage>::with_props(props).render());
        assert!(html.contains("The Energy of Integrity"));
        assert!(html.contains("Session Complete"));
    }
}
