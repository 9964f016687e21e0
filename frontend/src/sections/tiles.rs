use yew::prelude::*;

use crate::components::card_3d::Card3D;
use crate::content::Tile;
use crate::i18n::use_i18n;

#[derive(Properties, PartialEq)]
pub struct TileGridProps {
    pub tiles: &'static [Tile],
    /// Key prefix; a tile reads `{prefix}.{key}.title` and
    /// `{prefix}.{key}.description`.
    pub prefix: &'static str,
    /// Wraps each tile in a pointer-tilt card leaning this many degrees.
    #[prop_or_default]
    pub tilt: Option<f64>,
}

/// Icon cards shared by the clients, mission and why-us sections.
#[function_component(TileGrid)]
pub fn tile_grid(props: &TileGridProps) -> Html {
    let i18n = use_i18n();

    html! {
        <div class="tile-grid">
            {
                props.tiles.iter().map(|tile| {
                    let card = html! {
                        <article class="card tile">
                            <div class="tile-icon" aria-hidden="true">{tile.icon}</div>
                            <h3>{i18n.t(&format!("{}.{}.title", props.prefix, tile.key))}</h3>
                            <p>{i18n.t(&format!("{}.{}.description", props.prefix, tile.key))}</p>
                        </article>
                    };
                    match props.tilt {
                        Some(intensity) => html! {
                            <Card3D key={tile.key} glow="rgba(0, 212, 255, 0.25)" {intensity}>{card}</Card3D>
                        },
                        None => html! { <div class="tile-cell" key={tile.key}>{card}</div> },
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
