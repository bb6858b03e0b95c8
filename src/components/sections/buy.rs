use leptos::prelude::*;
use leptos_icons::Icon;

use super::{Section, css};
use crate::components::icons as ic;
use crate::components::reveal::Reveal;
use crate::config::{BUY_SECTION_ID, BUY_URL};

#[component]
pub fn Buy() -> impl IntoView {
    view! {
        <Section id=BUY_SECTION_ID class=css::centered>
            <Reveal class=css::ctaCard>
                <div class=css::ctaGlow></div>
                <div class=css::ctaBody>
                    <h2 class=css::ctaHeading>"Ready to Join the Movement?"</h2>
                    <p class=css::ctaText>
                        "The train is leaving the station. Don't miss your chance to be part of history."
                    </p>
                    <a href=BUY_URL target="_blank" rel="noopener noreferrer" class=css::ctaButton>
                        "Buy on PumpFun"
                        <Icon icon=ic::EXTERNAL_LINK />
                    </a>
                </div>
            </Reveal>
        </Section>
    }
}
