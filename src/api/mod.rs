pub mod city_data;

pub use city_data::{fetch_city_data, parse_city_data, CityData, LoadGenerations, LoadStatus, LoadTicket};
