#![allow(clippy::needless_pass_by_value)]

pub mod app;
pub mod city_selector;
pub mod game_panel;
pub mod game_signal;
pub mod journey_track;
pub mod recommendation_list;
pub mod roulette_wheel;
pub mod station_picker;
