use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::{Section, css};
use crate::components::icons as ic;
use crate::components::reveal::Reveal;
use crate::config::reveal::STAGGER_SECS;

struct Phase {
    title: &'static str,
    description: &'static str,
    icon: IconData,
    tone: &'static str,
}

static PHASES: [Phase; 3] = [
    Phase {
        title: "Phase 1: Foundation",
        description: "Launch on PumpFun. Community building. Initial marketing push.",
        icon: ic::TRENDING_UP,
        tone: css::toneAccent,
    },
    Phase {
        title: "Phase 2: Expansion",
        description: "Flip TheWhiteWhale. Strategic partnerships. CEX listings.",
        icon: ic::EXTERNAL_LINK,
        tone: css::toneSecondary,
    },
    Phase {
        title: "Phase 3: Domination",
        description: "Global recognition. Ecosystem development. Meme singularity.",
        icon: ic::CHECK,
        tone: css::toneSuccess,
    },
];

#[component]
pub fn Roadmap() -> impl IntoView {
    view! {
        <Section id="roadmap">
            <Reveal class=css::intro>
                <h2 class=css::heading>"Strategic Roadmap"</h2>
                <p class=css::subheading>
                    "Our path to dominating the meme space is clear. We are executing with precision."
                </p>
            </Reveal>

            <div class=css::phases>
                {PHASES
                    .iter()
                    .enumerate()
                    .map(|(i, phase)| {
                        view! {
                            <Reveal delay={i as f64 * STAGGER_SECS} class=css::phaseCard>
                                <div class=format!("{} {}", css::phaseIcon, phase.tone)>
                                    <Icon icon=phase.icon />
                                </div>
                                <h3 class=css::phaseTitle>{phase.title}</h3>
                                <p class=css::phaseText>{phase.description}</p>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}
