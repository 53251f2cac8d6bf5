use crate::components::button::Button;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StartPageProps {
    pub on_begin: Callback<()>,
}

/// Entry screen. The begin button is the user gesture that unlocks audio
/// playback for the rest of the session.
#[function_component(StartPage)]
pub fn start_page(props: &StartPageProps) -> Html {
    let on_begin = {
        let cb = props.on_begin.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="start-screen" data-testid="start-screen">
            <h1 class="start-screen__title">{ crate::i18n::t("app.title") }</h1>
            <Button
                label={crate::i18n::t("start.begin")}
                class={classes!("start-screen__begin")}
                onclick={on_begin}
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
    fn start_page_renders_title_and_begin_button() {
        crate::i18n::set_lang("en");
        let props = StartPageProps {
            on_begin: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<StartPage>::with_props(props).render());
        assert!(html.contains("Awakening the Inner Wizard"));
        assert!(html.contains("Begin the Journey"));
    }
}
