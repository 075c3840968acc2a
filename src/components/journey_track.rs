use leptos::{component, view, CollectView, IntoView, Show};
use crate::components::game_signal::GameSignal;
use crate::journey::JourneyEngine;

#[derive(Clone)]
struct TrackStop {
    icon: &'static str,
    name: String,
    /// Color of the segment leading to the next stop
    connector: Option<String>,
}

fn track_stops(engine: &JourneyEngine) -> Vec<TrackStop> {
    let network = engine.network();
    let history = engine.history();

    history
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let connector = history.get(index + 1).map(|next| {
                let line = next
                    .line
                    .as_deref()
                    .or(entry.line.as_deref())
                    .or(engine.current_line())
                    .unwrap_or_default();
                network.line_color(line).to_string()
            });
            TrackStop {
                icon: entry.action.icon(),
                name: network
                    .station(&entry.station_id)
                    .map_or_else(|| entry.station_id.clone(), |s| s.name.clone()),
                connector,
            }
        })
        .collect()
}

/// Horizontal trail of visited stations
#[component]
pub fn JourneyTrack(game: GameSignal) -> impl IntoView {
    let stops = move || game.with(track_stops).unwrap_or_default();
    let has_history = move || game.with(|e| !e.history().is_empty()).unwrap_or(false);

    view! {
        <Show when=has_history>
            <section class="journey">
                <div class="journey__track">
                    {move || stops()
                        .into_iter()
                        .map(|stop| view! {
                            <div class="journey__stop">
                                <div class="journey__icon">{stop.icon}</div>
                                <div class="journey__name">{stop.name}</div>
                            </div>
                            {stop.connector.map(|color| view! {
                                <div class="journey__line" style=format!("background-color: {color}")></div>
                            })}
                        })
                        .collect_view()}
                </div>
            </section>
        </Show>
    }
}
