use leptos::{component, view, CollectView, IntoView, Show, Signal, SignalGet};
use crate::components::game_signal::GameSignal;
use crate::journey::JourneyEngine;
use crate::roulette::{Wheel, SLOT_ANGLE};

const VIEW_SIZE: f64 = 200.0;
const CENTER: f64 = VIEW_SIZE / 2.0;
const RADIUS: f64 = 95.0;
const LABEL_RADIUS: f64 = 60.0;
const HUB_RADIUS: f64 = 25.0;

struct SegmentGeometry {
    path: String,
    label_x: f64,
    label_y: f64,
    label_transform: String,
}

fn polar(angle_deg: f64, radius: f64) -> (f64, f64) {
    let angle = angle_deg.to_radians();
    (CENTER + radius * angle.cos(), CENTER + radius * angle.sin())
}

/// Pie slice for slot `index`, starting at the top and running clockwise
#[allow(clippy::cast_precision_loss)]
fn segment_geometry(index: usize) -> SegmentGeometry {
    let start = index as f64 * SLOT_ANGLE - 90.0;
    let end = start + SLOT_ANGLE;
    let (x1, y1) = polar(start, RADIUS);
    let (x2, y2) = polar(end, RADIUS);
    let mid = (start + end) / 2.0;
    let (label_x, label_y) = polar(mid, LABEL_RADIUS);

    SegmentGeometry {
        path: format!("M {CENTER} {CENTER} L {x1:.3} {y1:.3} A {RADIUS} {RADIUS} 0 0 1 {x2:.3} {y2:.3} Z"),
        label_x,
        label_y,
        label_transform: format!("rotate({} {label_x:.3} {label_y:.3})", mid + 90.0),
    }
}

fn wheel_style(rotation: f64, spinning: bool, duration_ms: u32) -> String {
    let transition = if spinning {
        format!("transform {duration_ms}ms cubic-bezier(0.17, 0.67, 0.12, 0.99)")
    } else {
        "none".to_string()
    };
    format!("transform: rotate({rotation}deg); transition: {transition};")
}

#[component]
pub fn RouletteWheel(
    game: GameSignal,
    spin_duration_ms: Signal<u32>,
    on_spin: impl Fn() + 'static + Copy,
) -> impl IntoView {
    let wheel = move || game.with(JourneyEngine::wheel).unwrap_or(Wheel::NoChange);
    let rotation = move || game.with(JourneyEngine::rotation).unwrap_or_default();
    let spinning = move || game.with(JourneyEngine::is_spinning).unwrap_or(false);
    let can_spin = move || game.with(JourneyEngine::can_spin).unwrap_or(false);
    let selected_slot = move || game.with(JourneyEngine::selected_slot).flatten();
    let spin_label = move || game.with(|e| e.city().text.spin_roulette);

    let segments = move || {
        wheel()
            .slots()
            .iter()
            .enumerate()
            .map(|(index, slot)| {
                let geometry = segment_geometry(index);
                let highlighted = move || !spinning() && selected_slot() == Some(index);
                view! {
                    <g class="roulette__segment" class:selected=highlighted>
                        <path d=geometry.path fill=slot.color stroke="#1a1a2e" stroke-width="2"/>
                        <text
                            x=geometry.label_x
                            y=geometry.label_y
                            text-anchor="middle"
                            dominant-baseline="middle"
                            fill="white"
                            font-size="20"
                            transform=geometry.label_transform
                        >
                            {slot.label}
                        </text>
                    </g>
                }
            })
            .collect_view()
    };

    view! {
        <div class="roulette">
            <div class="roulette__pointer">"▼"</div>
            <div
                class="roulette__wheel"
                class:clickable=can_spin
                style=move || wheel_style(rotation(), spinning(), spin_duration_ms.get())
                on:click=move |_| {
                    if can_spin() {
                        on_spin();
                    }
                }
            >
                <svg viewBox="0 0 200 200" class="roulette__svg">
                    {segments}
                    <circle cx=CENTER cy=CENTER r=HUB_RADIUS fill="#1a1a2e" stroke="#FFCD00" stroke-width="3"/>
                </svg>
            </div>
            <Show when=can_spin>
                <button class="roulette__spin-button" on:click=move |_| on_spin()>
                    {spin_label}
                </button>
            </Show>
        </div>
    }
}
