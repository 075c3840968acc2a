use gloo_timers::callback::Timeout;
use leptos::{component, view, CollectView, IntoView, Show, Signal, SignalGetUntracked};
use crate::components::game_signal::GameSignal;
use crate::components::roulette_wheel::RouletteWheel;
use crate::journey::JourneyEngine;
use crate::models::{Direction, GameState};

#[derive(Clone)]
struct LineButton {
    id: String,
    name: String,
    color: String,
    text_color: String,
}

/// Game message, line and direction choices, exit confirmation and win summary
#[component]
pub fn GamePanel(game: GameSignal, spin_duration_ms: Signal<u32>) -> impl IntoView {
    let state = move || game.with(JourneyEngine::state).unwrap_or_default();
    let message = move || game.with(JourneyEngine::message_text).unwrap_or_default();
    let text = move || game.with(|e| e.city().text);
    let station_name = move || {
        game.with(|e| e.current_station().map(|s| s.name.clone()))
            .flatten()
            .unwrap_or_default()
    };

    let line_buttons = move || {
        game.with(|engine| {
            let network = engine.network();
            engine
                .available_lines()
                .iter()
                .map(|line| LineButton {
                    id: line.clone(),
                    name: network.line_name(line).to_string(),
                    color: network.line_color(line).to_string(),
                    text_color: network.line_text_color(line).to_string(),
                })
                .collect::<Vec<_>>()
        })
        .unwrap_or_default()
    };
    let direction_labels = move || game.with(JourneyEngine::direction_labels);

    // The outcome is applied once the wheel animation has settled
    let on_spin = move || {
        let spin_id = game
            .update(|engine| engine.spin(&mut rand::thread_rng()).map(|spin| spin.spin_id))
            .flatten();
        if let Some(spin_id) = spin_id {
            Timeout::new(spin_duration_ms.get_untracked(), move || {
                game.update(|engine| engine.finish_spin_if(spin_id));
            })
            .forget();
        }
    };

    let stats = move || {
        game.with(|e| {
            let text = e.city().text;
            format!(
                "{} {} · {} {}",
                e.stations_travelled(),
                text.stations_travelled,
                e.line_changes(),
                text.line_changes
            )
        })
        .unwrap_or_default()
    };

    view! {
        <section class="panel">
            <div class="panel__message">{message}</div>

            <Show when=move || state() == GameState::SelectLine>
                <div class="panel__section">
                    <h3 class="panel__heading">{move || text().map(|t| t.select_line)}</h3>
                    <div class="panel__buttons">
                        {move || line_buttons()
                            .into_iter()
                            .map(|line| {
                                let id = line.id;
                                view! {
                                    <button
                                        class="panel__line-button"
                                        style=format!("background-color: {}; color: {}", line.color, line.text_color)
                                        on:click=move |_| {
                                            game.update(|engine| engine.select_line(&id));
                                        }
                                    >
                                        {line.name}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>

            <Show when=move || state() == GameState::SelectDirection>
                <div class="panel__section">
                    <h3 class="panel__heading">{move || text().map(|t| t.select_direction)}</h3>
                    <div class="panel__buttons">
                        <button
                            class="panel__direction-button"
                            on:click=move |_| {
                                game.update(|engine| engine.select_direction(Direction::Forward));
                            }
                        >
                            {move || direction_labels().map(|labels| labels.forward)}
                        </button>
                        <button
                            class="panel__direction-button"
                            on:click=move |_| {
                                game.update(|engine| engine.select_direction(Direction::Backward));
                            }
                        >
                            {move || direction_labels().map(|labels| labels.backward)}
                        </button>
                    </div>
                </div>
            </Show>

            <Show when=move || matches!(state(), GameState::Playing | GameState::ConfirmExit | GameState::Won)>
                <RouletteWheel game=game spin_duration_ms=spin_duration_ms on_spin=on_spin/>
            </Show>

            <Show when=move || state() == GameState::ConfirmExit>
                <div class="panel__confirm">
                    <p class="panel__confirm-station">{station_name}</p>
                    <div class="panel__buttons">
                        <button
                            class="panel__validate-button"
                            on:click=move |_| {
                                game.update(|engine| engine.confirm_exit(true));
                            }
                        >
                            {move || text().map(|t| t.validate_exit)}
                        </button>
                        <button
                            class="panel__continue-button"
                            on:click=move |_| {
                                game.update(|engine| engine.confirm_exit(false));
                            }
                        >
                            {move || text().map(|t| t.keep_travelling)}
                        </button>
                    </div>
                </div>
            </Show>

            <Show when=move || state() == GameState::Won>
                <div class="panel__win">
                    <div class="panel__win-station">{station_name}</div>
                    <p class="panel__win-stats">{stats}</p>
                </div>
            </Show>

            <Show when=move || state() != GameState::SelectStation>
                <button
                    class="panel__reset-button"
                    on:click=move |_| {
                        game.update(JourneyEngine::reset);
                    }
                >
                    {move || text().map(|t| t.new_game)}
                </button>
            </Show>
        </section>
    }
}
