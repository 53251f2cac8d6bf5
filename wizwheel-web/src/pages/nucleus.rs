use crate::components::button::Button;
use crate::components::modal::Modal;
use std::f64::consts::PI;
use wizwheel_game::Particle;
use yew::prelude::*;

const ORBIT_RADIUS_PX: f64 = 220.0;

#[derive(Properties, PartialEq, Clone)]
pub struct NucleusPageProps {
    pub particles: Vec<Particle>,
    pub clicked: Vec<bool>,
    #[prop_or_default]
    pub active: Option<Particle>,
    pub all_clicked: bool,
    pub on_particle: Callback<usize>,
    pub on_close: Callback<()>,
    pub on_complete: Callback<()>,
    #[prop_or_default]
    pub on_hover: Callback<()>,
}

/// The orbit mini-game: click every particle to reveal its prompt; the
/// nucleus glows once the ring is complete.
#[function_component(NucleusPage)]
pub fn nucleus_page(props: &NucleusPageProps) -> Html {
    let count = props.particles.len().max(1);

    let nucleus_class = if props.all_clicked {
        "nucleus__core nucleus__core--glowing"
    } else {
        "nucleus__core"
    };

    let on_complete = {
        let cb = props.on_complete.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="nucleus" data-testid="nucleus-screen">
            <h2 class="nucleus__title">{ crate::i18n::t("nucleus.title") }</h2>
            <p class="nucleus__instruction">{ crate::i18n::t("nucleus.instruction") }</p>

            <div class="nucleus__orbit">
                <div class={nucleus_class}>{ crate::i18n::t("nucleus.hub") }</div>
                { for props.particles.iter().enumerate().map(|(index, particle)| {
                    let angle = (index as f64 / count as f64) * 2.0 * PI;
                    let x = angle.cos() * ORBIT_RADIUS_PX;
                    let y = angle.sin() * ORBIT_RADIUS_PX;
                    let style = format!(
                        "top: calc(50% + {y:.1}px - 48px); left: calc(50% + {x:.1}px - 48px);"
                    );
                    let clicked = props.clicked.get(index).copied().unwrap_or(false);
                    let class = if clicked {
                        "nucleus__particle nucleus__particle--clicked"
                    } else {
                        "nucleus__particle"
                    };
                    let on_particle = props.on_particle.clone();
                    let onclick = Callback::from(move |_: MouseEvent| on_particle.emit(index));
                    html! {
                        <div {class} {style} {onclick} key={particle.id}>
                            { particle.name.clone() }
                        </div>
                    }
                }) }
            </div>

            { if props.all_clicked {
                html! {
                    <Button
                        label={crate::i18n::t("nucleus.complete")}
                        class={classes!("nucleus__finish")}
                        onclick={on_complete}
                    />
                }
            } else {
                Html::default()
            } }

            { props.active.as_ref().map(|particle| html! {
                <Modal
                    open={true}
                    title={particle.name.clone()}
                    description={particle.prompt.clone()}
                    confirm_label={crate::i18n::t("nucleus.close")}
                    on_close={props.on_close.clone()}
                    on_hover={props.on_hover.clone()}
                />
            }).unwrap_or_default() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use wizwheel_game::ParticleRing;
    use yew::LocalServerRenderer;

    fn props(clicked: Vec<bool>, all_clicked: bool, active: Option<Particle>) -> NucleusPageProps {
        NucleusPageProps {
            particles: ParticleRing::load_from_static().particles,
            clicked,
            active,
            all_clicked,
            on_particle: Callback::noop(),
            on_close: Callback::noop(),
            on_complete: Callback::noop(),
            on_hover: Callback::noop(),
        }
    }

    #[test]
    fn renders_nine_particles_around_the_core() {
        crate::i18n::set_lang("en");
        let html = block_on(
            LocalServerRenderer::<NucleusPage>::with_props(props(vec![false; 9], false, None))
                .render(),
        );
        assert_eq!(html.matches("nucleus__particle").count(), 9);
        assert!(html.contains("The Nucleus of Integrity"));
        assert!(!html.contains("Complete the Ritual"));
    }

    #[test]
    fn completed_ring_glows_and_offers_completion() {
        crate::i18n::set_lang("en");
        let html = block_on(
            LocalServerRenderer::<NucleusPage>::with_props(props(vec![true; 9], true, None))
                .render(),
        );
        assert!(html.contains("nucleus__core--glowing"));
        assert!(html.contains("Complete the Ritual"));
    }

    #[test]
    fn active_particle_opens_its_prompt_modal() {
        crate::i18n::set_lang("en");
        let ring = ParticleRing::load_from_static();
        let active = ring.particles[2].clone();
        let html = block_on(
            LocalServerRenderer::<NucleusPage>::with_props(props(
                vec![false; 9],
                false,
                Some(active.clone()),
            ))
            .render(),
        );
        assert!(html.contains(&active.prompt));
        assert!(html.contains("modal-backdrop"));
    }
}
