use leptos::{component, view, CollectView, IntoView, Show};
use crate::components::game_signal::GameSignal;
use crate::models::{GameState, Place};

#[component]
pub fn RecommendationList(game: GameSignal) -> impl IntoView {
    let won = move || game.with(|e| e.state() == GameState::Won).unwrap_or(false);
    let heading = move || {
        game.with(|e| {
            let station = e.current_station().map(|s| s.name.as_str()).unwrap_or_default();
            format!("{} {station}", e.city().text.explore_nearby)
        })
        .unwrap_or_default()
    };
    let places = move || {
        game.with(|e| {
            let city = e.city();
            e.recommendations()
                .iter()
                .map(|place| (city.place_icon(&place.category), place.clone()))
                .collect::<Vec<(&'static str, Place)>>()
        })
        .unwrap_or_default()
    };
    let empty_text = move || game.with(|e| e.city().text.no_places).unwrap_or_default();

    view! {
        <Show when=won>
            <section class="recommendations">
                <h2 class="recommendations__title">{heading}</h2>
                {move || {
                    let places = places();
                    if places.is_empty() {
                        view! { <p class="recommendations__empty">{empty_text}</p> }.into_view()
                    } else {
                        view! {
                            <ul class="recommendations__list">
                                {places
                                    .into_iter()
                                    .map(|(icon, place)| view! {
                                        <li class="recommendations__item">
                                            <span class="recommendations__icon">{icon}</span>
                                            <div class="recommendations__details">
                                                <h3>{place.name}</h3>
                                                <p>{place.description}</p>
                                                <p class="recommendations__address">{place.address}</p>
                                            </div>
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        }
                        .into_view()
                    }
                }}
            </section>
        </Show>
    }
}
