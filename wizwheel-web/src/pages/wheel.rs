use crate::components::button::Button;
use crate::components::modal::Modal;
use std::f64::consts::PI;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use wizwheel_game::{Locale, Screen, SessionEvent, SessionState, TraitWheel};
use yew::prelude::*;

const LABEL_RADIUS_PX: f64 = 140.0;

#[derive(Properties, PartialEq, Clone)]
pub struct WheelPageProps {
    pub state: SessionState,
    pub wheel: TraitWheel,
    pub on_event: Callback<SessionEvent>,
    pub on_continue: Callback<()>,
    pub on_copy: Callback<()>,
    pub copy_label: AttrValue,
    pub share_href: AttrValue,
    #[prop_or_default]
    pub on_hover: Callback<()>,
}

/// The wheel session: language choice, the spinning wheel with its reveal
/// modal, and the casting form.
#[function_component(WheelPage)]
pub fn wheel_page(props: &WheelPageProps) -> Html {
    match props.state.screen {
        Screen::Language => render_language(props),
        Screen::Landing | Screen::Spinning => render_wheel(props),
        Screen::Form => render_form(props),
    }
}

fn hover_callback(props: &WheelPageProps) -> Callback<MouseEvent> {
    let cb = props.on_hover.clone();
    Callback::from(move |_: MouseEvent| cb.emit(()))
}

fn render_language(props: &WheelPageProps) -> Html {
    let on_hover = hover_callback(props);
    html! {
        <div class="language-select" data-testid="language-screen">
            <h1 class="language-select__title">{ crate::i18n::t("wheel.chooseLanguage") }</h1>
            <div class="language-select__options">
                { for Locale::ALL.iter().map(|locale| {
                    let locale = *locale;
                    let on_event = props.on_event.clone();
                    let onclick = Callback::from(move |_: MouseEvent| {
                        on_event.emit(SessionEvent::PickLanguage(locale));
                    });
                    html! {
                        <Button
                            label={locale.as_str().to_uppercase()}
                            class={classes!("language-select__option")}
                            {onclick}
                            onmouseenter={on_hover.clone()}
                        />
                    }
                }) }
            </div>
        </div>
    }
}

fn render_wheel(props: &WheelPageProps) -> Html {
    let locale = props.state.locale.unwrap_or_default();
    let spinning = props.state.screen == Screen::Spinning;
    let rotation = props.state.rotation_degrees;
    let duration = props.state.spin_duration_ms;
    let count = props.wheel.len().max(1);

    let wheel_style = format!(
        "transition: transform {duration}ms cubic-bezier(0.25, 1, 0.5, 1); \
         transform: rotate({rotation}deg);"
    );

    let on_spin = {
        let cb = props.on_event.clone();
        Callback::from(move |_: MouseEvent| cb.emit(SessionEvent::Spin))
    };
    let on_dismiss = {
        let cb = props.on_event.clone();
        Callback::from(move |()| cb.emit(SessionEvent::DismissReveal))
    };

    let reveal = props
        .state
        .modal_open
        .then(|| props.state.selected_trait.and_then(|i| props.wheel.get(i)))
        .flatten();

    html! {
        <div class="wheel-screen" data-testid="wheel-screen">
            <h1 class="wheel-screen__welcome">{ crate::i18n::t("wheel.welcome") }</h1>
            <p class="wheel-screen__instruction">{ crate::i18n::t("wheel.instruction") }</p>

            <div class="wheel">
                <div class="wheel__rotor" style={wheel_style}>
                    { for props.wheel.traits.iter().enumerate().map(|(index, t)| {
                        // Trait 0 sits at the top of the circle.
                        let angle = (index as f64 / count as f64) * 2.0 * PI - PI / 2.0;
                        let x = angle.cos() * LABEL_RADIUS_PX;
                        let y = angle.sin() * LABEL_RADIUS_PX;
                        let style = format!(
                            "top: calc(50% + {y:.1}px - 48px); left: calc(50% + {x:.1}px - 48px);"
                        );
                        let label_style = format!(
                            "transition: transform {duration}ms cubic-bezier(0.25, 1, 0.5, 1); \
                             transform: rotate({neg}deg);",
                            neg = -rotation
                        );
                        html! {
                            <div class="wheel__segment" {style} key={index}>
                                <span class="wheel__label" style={label_style}>
                                    { t.label.get(locale).to_string() }
                                </span>
                            </div>
                        }
                    }) }
                </div>
                <div class="wheel__hub">{ crate::i18n::t("wheel.hub") }</div>
                <div class="wheel__pointer"></div>
            </div>

            <Button
                label={crate::i18n::t("wheel.spinButton")}
                class={classes!("wheel-screen__spin")}
                disabled={spinning}
                onclick={on_spin}
                onmouseenter={hover_callback(props)}
            />

            { reveal.map(|t| html! {
                <Modal
                    open={true}
                    title={t.label.get(locale).to_string()}
                    description={t.prompt.get(locale).to_string()}
                    confirm_label={crate::i18n::t("wheel.modalButton")}
                    on_close={on_dismiss}
                    on_hover={props.on_hover.clone()}
                />
            }).unwrap_or_default() }
        </div>
    }
}

fn render_form(props: &WheelPageProps) -> Html {
    let locale = props.state.locale.unwrap_or_default();
    let Some(selected) = props.state.selected_trait.and_then(|i| props.wheel.get(i)) else {
        return Html::default();
    };

    let on_name = {
        let cb = props.on_event.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                cb.emit(SessionEvent::EditName(input.value()));
            }
        })
    };
    let on_spell = {
        let cb = props.on_event.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                cb.emit(SessionEvent::EditSpell(area.value()));
            }
        })
    };
    let on_tags = {
        let cb = props.on_event.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                cb.emit(SessionEvent::EditTags(input.value()));
            }
        })
    };
    let on_copy = {
        let cb = props.on_copy.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_continue = {
        let cb = props.on_continue.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_hover = hover_callback(props);

    html! {
        <div class="cast-form" data-testid="form-screen">
            <h1 class="cast-form__landed">
                { format!(
                    "{} {}",
                    crate::i18n::t("wheel.landedOn"),
                    selected.label.get(locale).to_uppercase()
                ) }
            </h1>
            <p class="cast-form__prompt">{ format!("\"{}\"", selected.prompt.get(locale)) }</p>

            <div class="cast-form__fields">
                <label>
                    { crate::i18n::t("form.yourName") }
                    <input
                        type="text"
                        value={props.state.form.name.clone()}
                        placeholder={crate::i18n::t("form.yourNamePlaceholder")}
                        oninput={on_name}
                    />
                </label>
                <label>
                    { crate::i18n::t("form.castSpell") }
                    <textarea
                        rows="3"
                        value={props.state.form.spell_text.clone()}
                        placeholder={crate::i18n::t("form.castSpellPlaceholder")}
                        oninput={on_spell}
                    />
                </label>
                <label>
                    { crate::i18n::t("form.tagWizards") }
                    <input
                        type="text"
                        value={props.state.form.tags.clone()}
                        placeholder={crate::i18n::t("form.tagPlaceholder")}
                        oninput={on_tags}
                    />
                </label>
            </div>

            <div class="cast-form__actions">
                <a
                    class="cast-form__share"
                    href={props.share_href.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                    onmouseenter={on_hover.clone()}
                >
                    { crate::i18n::t("form.shareWhatsApp") }
                </a>
                <Button
                    label={props.copy_label.clone()}
                    class={classes!("cast-form__copy")}
                    onclick={on_copy}
                    onmouseenter={on_hover.clone()}
                />
            </div>

            <p class="cast-form__instruction">{ crate::i18n::t("form.shareInstruction") }</p>
            <p class="cast-form__signature">{ crate::i18n::t("form.signature") }</p>

            <Button
                label={crate::i18n::t("form.continue")}
                class={classes!("cast-form__continue")}
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
    use wizwheel_game::{SessionEvent, WheelSession};
    use yew::LocalServerRenderer;

    fn props_for(state: SessionState) -> WheelPageProps {
        WheelPageProps {
            state,
            wheel: TraitWheel::load_from_static(),
            on_event: Callback::noop(),
            on_continue: Callback::noop(),
            on_copy: Callback::noop(),
            copy_label: AttrValue::from("Generate Shareable Link"),
            share_href: AttrValue::from("https://api.whatsapp.com/send?text=x"),
            on_hover: Callback::noop(),
        }
    }

    fn session_at_form() -> SessionState {
        let mut session = WheelSession::new(TraitWheel::load_from_static(), 5);
        session.apply(SessionEvent::PickLanguage(Locale::En));
        session.apply(SessionEvent::Spin);
        session.apply(SessionEvent::SpinElapsed);
        session.apply(SessionEvent::DismissReveal);
        session.state().clone()
    }

    #[test]
    fn language_screen_offers_both_locales() {
        crate::i18n::set_lang("en");
        let html = block_on(
            LocalServerRenderer::<WheelPage>::with_props(props_for(SessionState::default()))
                .render(),
        );
        assert!(html.contains("Choose Language"));
        assert!(html.contains("EN"));
        assert!(html.contains("ID"));
    }

    #[test]
    fn landing_renders_nine_labels_and_an_enabled_spin() {
        crate::i18n::set_lang("en");
        let mut session = WheelSession::new(TraitWheel::load_from_static(), 5);
        session.apply(SessionEvent::PickLanguage(Locale::En));
        let html = block_on(
            LocalServerRenderer::<WheelPage>::with_props(props_for(session.state().clone()))
                .render(),
        );
        assert_eq!(html.matches("wheel__segment").count(), 9);
        assert!(html.contains("Spin the Nucleus"));
        assert!(!html.contains("disabled"));
        assert!(!html.contains("modal-backdrop"));
    }

    #[test]
    fn spinning_disables_the_control_and_animates_the_rotor() {
        crate::i18n::set_lang("en");
        let mut session = WheelSession::new(TraitWheel::load_from_static(), 5);
        session.apply(SessionEvent::PickLanguage(Locale::En));
        session.apply(SessionEvent::Spin);
        let rotation = session.state().rotation_degrees;
        let html = block_on(
            LocalServerRenderer::<WheelPage>::with_props(props_for(session.state().clone()))
                .render(),
        );
        assert!(html.contains("disabled"));
        assert!(html.contains("transform 5000ms"));
        assert!(html.contains(&format!("rotate({rotation}deg)")));
    }

    #[test]
    fn reveal_modal_shows_the_landed_trait() {
        crate::i18n::set_lang("en");
        let mut session = WheelSession::new(TraitWheel::load_from_static(), 5);
        session.apply(SessionEvent::PickLanguage(Locale::En));
        session.apply(SessionEvent::Spin);
        session.apply(SessionEvent::SpinElapsed);
        let landed = session.selected_trait().unwrap().clone();
        let html = block_on(
            LocalServerRenderer::<WheelPage>::with_props(props_for(session.state().clone()))
                .render(),
        );
        assert!(html.contains("modal-backdrop"));
        assert!(html.contains(&landed.prompt.en));
    }

    #[test]
    fn form_screen_shows_fields_share_and_continue() {
        crate::i18n::set_lang("en");
        let html = block_on(
            LocalServerRenderer::<WheelPage>::with_props(props_for(session_at_form())).render(),
        );
        assert!(html.contains("You Landed On:"));
        assert!(html.contains("Share to WhatsApp"));
        assert!(html.contains("Generate Shareable Link"));
        assert!(html.contains("Continue the Ritual"));
        assert!(html.contains("https://api.whatsapp.com/send?text=x"));
    }

    #[test]
    fn indonesian_locale_drives_trait_copy() {
        crate::i18n::set_lang("id");
        let mut session = WheelSession::new(TraitWheel::load_from_static(), 5);
        session.apply(SessionEvent::PickLanguage(Locale::Id));
        let html = block_on(
            LocalServerRenderer::<WheelPage>::with_props(props_for(session.state().clone()))
                .render(),
        );
        assert!(html.contains("Putar Nukleus"));
        crate::i18n::set_lang("en");
    }
}
