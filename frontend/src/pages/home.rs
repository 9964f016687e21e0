use yew::prelude::*;

use crate::sections::{
    clients::Clients, contact::Contact, hero::Hero, mission::Mission, platforms::Platforms,
    services::Services, stats::Stats, timeline::Timeline, why_us::WhyUs,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="home">
            <Hero />
            <Stats />
            <Timeline />
            <Services />
            <Platforms />
            <Clients />
            <Mission />
            <WhyUs />
            <Contact />
        </main>
    }
}
