use leptos::{
    component, create_signal, logging, spawn_local, store_value, view, IntoView, Signal, SignalGet,
    SignalGetUntracked, SignalSet, SignalUpdate,
};
use leptos_meta::{provide_meta_context, Html, Title};
use crate::api::{fetch_city_data, LoadGenerations, LoadStatus};
use crate::components::city_selector::CitySelector;
use crate::components::game_panel::GamePanel;
use crate::components::game_signal::GameSignal;
use crate::components::journey_track::JourneyTrack;
use crate::components::recommendation_list::RecommendationList;
use crate::components::station_picker::StationPicker;
use crate::journey::JourneyEngine;
use crate::models::{CityId, GameSettings};
use crate::storage::{load_settings, save_settings};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let initial_settings = load_settings().unwrap_or_else(|e| {
        logging::warn!("Using default settings: {e}");
        GameSettings::default()
    });
    let initial_city = initial_settings.city;

    let (settings, set_settings) = create_signal(initial_settings);
    let (status, set_status) = create_signal(LoadStatus::Loading);
    let game = GameSignal::new();
    let generations = store_value(LoadGenerations::default());

    // Only the most recent request may install its network
    let load_city = move |city: CityId| {
        let mut ticket = None;
        generations.update_value(|g| ticket = Some(g.begin()));
        let Some(ticket) = ticket else {
            return;
        };

        set_status.set(LoadStatus::Loading);
        game.replace(None);

        spawn_local(async move {
            let result = fetch_city_data(city).await;
            if !generations.with_value(|g| g.is_current(ticket)) {
                logging::warn!("Discarding stale {city} data");
                return;
            }
            match result {
                Ok(data) => {
                    game.replace(Some(JourneyEngine::new(data.network, city.config(), data.recommendations)));
                    set_status.set(LoadStatus::Ready);
                }
                Err(e) => {
                    logging::error!("Failed to load {city}: {e}");
                    set_status.set(LoadStatus::Failed(e));
                }
            }
        });
    };

    let switch_city = move |city: CityId| {
        set_settings.update(|s| *s = s.with_city(city));
        if let Err(e) = save_settings(&settings.get_untracked()) {
            logging::warn!("Failed to save settings: {e}");
        }
        load_city(city);
    };

    load_city(initial_city);

    let current_city = Signal::derive(move || settings.get().city);
    let spin_duration_ms = Signal::derive(move || settings.get().spin_duration_ms);

    view! {
        <Html lang=move || current_city.get().config().language.code()/>
        <Title text="Metro Roulette"/>

        <div class="app">
            <header class="header">
                <h1 class="header__title">"Metro Roulette"</h1>
                <CitySelector current=current_city on_select=switch_city/>
            </header>

            {move || match status.get() {
                LoadStatus::Loading => {
                    let config = current_city.get().config();
                    view! {
                        <div class="game__loading">
                            <div class="game__spinner"></div>
                            <p>{format!("Loading {} {}...", config.name, config.system_name)}</p>
                        </div>
                    }.into_view()
                }
                LoadStatus::Failed(error) => view! {
                    <div class="game__error">
                        <p>{format!("Failed to load metro data: {error}")}</p>
                        <button class="button" on:click=move |_| load_city(current_city.get_untracked())>
                            "Retry"
                        </button>
                    </div>
                }.into_view(),
                LoadStatus::Ready => view! {
                    <main class="game">
                        <div class="game__content">
                            <StationPicker game=game/>
                            <GamePanel game=game spin_duration_ms=spin_duration_ms/>
                        </div>
                        <JourneyTrack game=game/>
                        <RecommendationList game=game/>
                    </main>
                }.into_view(),
            }}
        </div>
    }
}
