use leptos::{component, view, CollectView, IntoView, Signal, SignalGet};
use crate::models::CityId;

/// Row of flag buttons; picking a city, even the current one, reloads it
#[component]
pub fn CitySelector(
    current: Signal<CityId>,
    on_select: impl Fn(CityId) + 'static + Copy,
) -> impl IntoView {
    view! {
        <nav class="city-selector">
            {CityId::ALL
                .into_iter()
                .map(|city| {
                    let config = city.config();
                    view! {
                        <button
                            class="city-selector__button"
                            class:active=move || current.get() == city
                            title=format!("{} ({})", config.name, config.country)
                            on:click=move |_| on_select(city)
                        >
                            <span class="city-selector__flag">{config.flag}</span>
                            <span class="city-selector__name">{config.name}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
