use yew::prelude::*;

/// Timed splash shown between the begin gesture and the wheel. The stage
/// advance itself is driven by the shell's timer, not by this component.
#[function_component(SplashPage)]
pub fn splash_page() -> Html {
    html! {
        <div class="splash" data-testid="splash-screen" aria-hidden="true">
            <div class="splash__flash"></div>
            <div class="splash__orb">
                <p class="splash__orb-label">{ crate::i18n::t("splash.orb") }</p>
            </div>
            <h1 class="splash__title">{ crate::i18n::t("splash.title") }</h1>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn splash_renders_orb_and_title() {
        crate::i18n::set_lang("en");
        let html = block_on(LocalServerRenderer::<SplashPage>::new().render());
        assert!(html.contains("splash__orb"));
        assert!(html.contains("Awakening the Inner Wizard"));
    }
}
