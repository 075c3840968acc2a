use leptos::{
    component, create_signal, event_target_value, view, CollectView, IntoView, SignalGet, SignalSet,
};
use crate::components::game_signal::GameSignal;
use crate::journey::JourneyEngine;

#[derive(Clone)]
struct StationRow {
    id: String,
    name: String,
    is_interchange: bool,
    line_colors: Vec<String>,
}

fn matches_query(name: &str, query: &str) -> bool {
    query.is_empty() || name.to_lowercase().contains(query)
}

#[component]
pub fn StationPicker(game: GameSignal) -> impl IntoView {
    let (query, set_query) = create_signal(String::new());

    let rows = move || {
        let needle = query.get().trim().to_lowercase();
        game.with(|engine| {
            let network = engine.network();
            network
                .stations_sorted_by_name()
                .into_iter()
                .filter(|station| matches_query(&station.name, &needle))
                .map(|station| StationRow {
                    id: station.id.clone(),
                    name: station.name.clone(),
                    is_interchange: station.is_interchange,
                    line_colors: network
                        .lines_for_station(&station.id)
                        .iter()
                        .map(|line| network.line_color(line).to_string())
                        .collect(),
                })
                .collect::<Vec<_>>()
        })
        .unwrap_or_default()
    };

    let can_select = move || game.with(JourneyEngine::can_select_station).unwrap_or(false);
    let current_id = move || game.with(|e| e.current_station_id().map(str::to_string)).flatten();
    let prompt = move || game.with(|e| e.city().text.select_station).unwrap_or_default();
    let placeholder = move || game.with(|e| e.city().text.search_station).unwrap_or_default();

    view! {
        <section class="stations">
            <h2 class="stations__title">{prompt}</h2>
            <input
                type="search"
                class="stations__search"
                placeholder=placeholder
                prop:value=query
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            <ul class="stations__list">
                {move || {
                    let current = current_id();
                    rows()
                        .into_iter()
                        .map(|row| {
                            let is_current = current.as_deref() == Some(row.id.as_str());
                            let id = row.id;
                            view! {
                                <li class="stations__item" class:current=is_current class:interchange=row.is_interchange>
                                    <button
                                        class="stations__button"
                                        disabled=move || !can_select()
                                        on:click=move |_| {
                                            game.update(|engine| engine.start(&id));
                                        }
                                    >
                                        <span class="stations__dots">
                                            {row.line_colors
                                                .into_iter()
                                                .map(|color| view! {
                                                    <span class="stations__dot" style=format!("background-color: {color}")></span>
                                                })
                                                .collect_view()}
                                        </span>
                                        <span class="stations__name">{row.name}</span>
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </section>
    }
}
