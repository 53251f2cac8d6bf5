use crate::components::button::Button;
use web_sys::HtmlTextAreaElement;
use wizwheel_game::profile::ReflectionAnswers;
use wizwheel_game::{MIN_ANSWERED, Spell};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ReflectionPageProps {
    pub spells: Vec<Spell>,
    pub answers: ReflectionAnswers,
    pub busy: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_answer: Callback<(usize, String)>,
    pub on_submit: Callback<()>,
}

/// The five-question reflection form. Submission is gated locally on at
/// least three non-blank answers; the remote call only happens past that.
#[function_component(ReflectionPage)]
pub fn reflection_page(props: &ReflectionPageProps) -> Html {
    let can_submit = props.answers.can_submit() && !props.busy;

    let on_submit = {
        let cb = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let submit_label = if props.busy {
        crate::i18n::t("reflection.busy")
    } else {
        crate::i18n::t("reflection.submit")
    };

    html! {
        <div class="reflection" data-testid="reflection-screen">
            <h2 class="reflection__title">{ crate::i18n::t("reflection.title") }</h2>
            <p class="reflection__instruction">{ crate::i18n::t("reflection.instruction") }</p>

            <div class="reflection__grid">
                { for props.spells.iter().enumerate().map(|(index, spell)| {
                    let on_answer = props.on_answer.clone();
                    let oninput = Callback::from(move |e: InputEvent| {
                        if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                            on_answer.emit((index, area.value()));
                        }
                    });
                    html! {
                        <div class="reflection__card" key={spell.title.clone()}>
                            <h3 class="reflection__card-title">{ spell.title.clone() }</h3>
                            <p class="reflection__question">{ spell.question.clone() }</p>
                            <textarea
                                rows="4"
                                value={props.answers.get(index).to_string()}
                                placeholder={crate::i18n::t("reflection.placeholder")}
                                aria-label={format!("Reflection for {}", spell.title)}
                                {oninput}
                            />
                        </div>
                    }
                }) }
            </div>

            { props.error.as_ref().map(|message| html! {
                <p class="reflection__error" role="alert">{ message.clone() }</p>
            }).unwrap_or_default() }

            <Button
                label={submit_label}
                class={classes!("reflection__submit")}
                disabled={!can_submit}
                onclick={on_submit}
            />
        </div>
    }
}

/// True once enough answers are filled for the submit control to enable.
#[must_use]
pub fn submit_enabled(answers: &ReflectionAnswers) -> bool {
    answers.answered_count() >= MIN_ANSWERED
}
