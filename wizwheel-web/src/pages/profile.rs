use crate::components::button::Button;
use wizwheel_game::WizardProfile;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProfilePageProps {
    pub profile: WizardProfile,
    pub on_continue: Callback<()>,
    #[prop_or_default]
    pub on_hover: Callback<()>,
}

/// Generated wizard profile: core element, guiding principle, latent power.
#[function_component(ProfilePage)]
pub fn profile_page(props: &ProfilePageProps) -> Html {
    let on_continue = {
        let cb = props.on_continue.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_hover = {
        let cb = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let profile = &props.profile;

    html! {
        <div class="profile" data-testid="profile-screen">
            <h2 class="profile__title">{ crate::i18n::t("profile.title") }</h2>
            <p class="profile__intro">{ crate::i18n::t("profile.intro") }</p>

            <div class="profile__card profile__card--element">
                <h3>{ crate::i18n::tr("profile.coreElement", &[("name", &profile.core_element.name)]) }</h3>
                <p class="profile__element-description">{ profile.core_element.description.clone() }</p>
            </div>
            <div class="profile__card">
                <h3>{ crate::i18n::t("profile.guidingPrinciple") }</h3>
                <p>{ profile.guiding_principle.clone() }</p>
            </div>
            <div class="profile__card">
                <h3>{ crate::i18n::t("profile.latentPower") }</h3>
                <p>{ profile.latent_power.clone() }</p>
            </div>

            <Button
                label={crate::i18n::t("profile.continue")}
                class={classes!("profile__continue")}
                onclick={on_continue}
                onmouseenter={on_hover}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use wizwheel_game::CoreElement;
    use yew::LocalServerRenderer;

    #[test]
    fn profile_page_renders_all_three_sections() {
        crate::i18n::set_lang("en");
        let props = ProfilePageProps {
            profile: WizardProfile {
                core_element: CoreElement {
                    name: "Earth".to_string(),
                    description: "Grounded choices.".to_string(),
                },
                guiding_principle: "Act right when unseen.".to_string(),
                latent_power: "Stone-steady resolve.".to_string(),
            },
            on_continue: Callback::noop(),
            on_hover: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<ProfilePage>::with_props(props).render());
        assert!(html.contains("Core Element: Earth"));
        assert!(html.contains("Grounded choices."));
        assert!(html.contains("Act right when unseen."));
        assert!(html.contains("Stone-steady resolve."));
    }
}
