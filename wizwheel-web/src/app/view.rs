use crate::app::handlers::AppHandlers;
use crate::app::stage::Stage;
use crate::app::state::AppState;
use crate::components::audio_controls::AudioControls;
use crate::pages::{
    closing::ClosingPage, nucleus::NucleusPage, profile::ProfilePage, reflection::ReflectionPage,
    splash::SplashPage, start::StartPage, wheel::WheelPage,
};
use wizwheel_game::{SpellBook, share_message};
use yew::prelude::*;

/// Build the chat share link for a message. The encoding is the browser's
/// `encodeURIComponent`; off-browser the raw message is embedded, which is
/// only reachable from render tests.
fn whatsapp_share_url(message: &str) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let encoded: String = js_sys::encode_uri_component(message).into();
        format!("https://api.whatsapp.com/send?text={encoded}")
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        format!("https://api.whatsapp.com/send?text={message}")
    }
}

pub fn render_app(state: &AppState, handlers: &AppHandlers) -> Html {
    let show_controls = !matches!(*state.stage, Stage::Start | Stage::Splash);

    html! {
        <main id="main" class="wizwheel-shell" role="main">
            { if show_controls {
                html! {
                    <AudioControls
                        prefs={*state.prefs}
                        on_change={handlers.prefs_change.clone()}
                    />
                }
            } else {
                Html::default()
            } }
            { render_stage(state, handlers) }
        </main>
    }
}

fn render_stage(state: &AppState, handlers: &AppHandlers) -> Html {
    match *state.stage {
        Stage::Start => html! { <StartPage on_begin={handlers.begin.clone()} /> },
        Stage::Splash => html! { <SplashPage /> },
        Stage::Wheel => render_wheel(state, handlers),
        Stage::Nucleus => render_nucleus(state, handlers),
        Stage::Reflection => render_reflection(state, handlers),
        Stage::Profile => render_profile(state, handlers),
        Stage::Closing => html! {
            <ClosingPage
                on_complete={handlers.closing_complete.clone()}
                on_hover={handlers.hover.clone()}
            />
        },
    }
}

fn render_wheel(state: &AppState, handlers: &AppHandlers) -> Html {
    let session = &*state.session;
    let message = share_message(
        session.locale().unwrap_or_default(),
        session.wheel(),
        &session.state().form,
    );

    html! {
        <WheelPage
            state={session.state().clone()}
            wheel={session.wheel().clone()}
            on_event={handlers.wheel_event.clone()}
            on_continue={handlers.wheel_continue.clone()}
            on_copy={handlers.copy_share.clone()}
            copy_label={(*state.copy_label).clone()}
            share_href={AttrValue::from(whatsapp_share_url(&message))}
            on_hover={handlers.hover.clone()}
        />
    }
}

fn render_nucleus(state: &AppState, handlers: &AppHandlers) -> Html {
    let game = &*state.nucleus;
    let clicked: Vec<bool> = (0..game.particles().len())
        .map(|i| game.is_clicked(i))
        .collect();

    html! {
        <NucleusPage
            particles={game.particles().to_vec()}
            {clicked}
            active={game.active_particle().cloned()}
            all_clicked={game.all_clicked()}
            on_particle={handlers.nucleus_particle.clone()}
            on_close={handlers.nucleus_close.clone()}
            on_complete={handlers.nucleus_complete.clone()}
            on_hover={handlers.hover.clone()}
        />
    }
}

fn render_reflection(state: &AppState, handlers: &AppHandlers) -> Html {
    html! {
        <ReflectionPage
            spells={SpellBook::load_from_static().spells}
            answers={(*state.answers).clone()}
            busy={*state.profile_busy}
            error={(*state.profile_error).clone()}
            on_answer={handlers.answer_change.clone()}
            on_submit={handlers.reflection_submit.clone()}
        />
    }
}

fn render_profile(state: &AppState, handlers: &AppHandlers) -> Html {
    state.profile.as_ref().map_or_else(Html::default, |profile| {
        html! {
            <ProfilePage
                profile={profile.clone()}
                on_continue={handlers.profile_continue.clone()}
                on_hover={handlers.hover.clone()}
            />
        }
    })
}
