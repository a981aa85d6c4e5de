use crate::paths::{asset_path, is_external};
use cowboy_safari_core::RelatedGame;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub game: RelatedGame,
}

#[function_component(RecommendationCard)]
pub fn recommendation_card(p: &Props) -> Html {
    let game = &p.game;
    let image = if is_external(&game.image) {
        game.image.clone()
    } else {
        asset_path(&game.image)
    };
    html! {
        <article class="recommendation-card">
            <div class="recommendation-media">
                <img src={image} alt={game.image_alt.clone()} width="640" height="360" loading="lazy" />
            </div>
            <div class="recommendation-body">
                <p class="eyebrow">{ &game.focus }</p>
                <h3>{ &game.name }</h3>
                <p class="muted">{ &game.platform }</p>
                <p>{ &game.summary }</p>
            </div>
            <div class="recommendation-footer">
                <span class="badge">{ game.difficulty.label() }</span>
                <a href={game.play_url.clone()} target="_blank" rel="noopener noreferrer">
                    { "Play" }
                </a>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct GridProps {
    pub games: Vec<RelatedGame>,
}

/// Cards in data order, keyed by game name.
#[function_component(RecommendationGrid)]
pub fn recommendation_grid(p: &GridProps) -> Html {
    html! {
        <div class="recommendation-grid">
            { for p.games.iter().map(|game| html! {
                <RecommendationCard key={game.name.clone()} game={game.clone()} />
            }) }
        </div>
    }
}
