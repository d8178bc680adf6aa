//! Built-in Carnegie Mellon shuttle network.
//!
//! A representative subset of stops: enough for every route to be
//! plannable, not the full published stop list.

use chrono::NaiveTime;

use crate::domain::{Coord, Network, RouteDefinition, ServiceWindow, Stop};

const MOREWOOD_FORBES: (&str, f64, f64) = ("Morewood & Forbes (Main Campus)", 40.4449, -79.9429);
const FIFTH_AIKEN: (&str, f64, f64) = ("Fifth Ave & Aiken Ave (Shadyside)", 40.4520, -79.9392);
const BAKERY_SQUARE: (&str, f64, f64) = ("Bakery Square (Penn Ave)", 40.4633, -79.9214);
const PTC_TECH_DR: (&str, f64, f64) = ("PTC (Technology Dr)", 40.4542, -79.9196);
const MILL_19: (&str, f64, f64) = ("Mill 19 (Hazelwood Green)", 40.4288, -79.9465);
const MURRAY_FORBES: (&str, f64, f64) = (
    "Forbes Ave & Murray Ave (Squirrel Hill)",
    40.4347,
    -79.9234,
);

fn stop((name, lat, lon): (&str, f64, f64)) -> Stop {
    Stop::new(name, Coord::new_unchecked(lat, lon))
}

fn window(start: (u32, u32), end: (u32, u32)) -> ServiceWindow {
    let hm = |(h, m): (u32, u32)| NaiveTime::from_hms_opt(h, m, 0).expect("valid built-in time");
    ServiceWindow::new(hm(start), hm(end))
}

/// The built-in route catalog, in priority order.
pub fn cmu_routes() -> Vec<RouteDefinition> {
    vec![
        RouteDefinition {
            name: "A/B/AB".into(),
            stops: vec![stop(MOREWOOD_FORBES), stop(FIFTH_AIKEN)],
            weekday_headway_mins: 10,
            weekend_headway_mins: Some(15),
            weekday_service: window((7, 0), (23, 30)),
            weekend_service: Some(window((10, 0), (23, 30))),
        },
        RouteDefinition {
            name: "C Route".into(),
            stops: vec![stop(MOREWOOD_FORBES), stop(MURRAY_FORBES)],
            weekday_headway_mins: 20,
            weekend_headway_mins: None,
            weekday_service: window((7, 0), (19, 30)),
            weekend_service: None,
        },
        RouteDefinition {
            name: "PTC & Mill 19".into(),
            stops: vec![stop(MOREWOOD_FORBES), stop(PTC_TECH_DR), stop(MILL_19)],
            weekday_headway_mins: 30,
            weekend_headway_mins: Some(45),
            weekday_service: window((7, 0), (20, 0)),
            weekend_service: Some(window((10, 0), (18, 0))),
        },
        RouteDefinition {
            name: "Bakery Square".into(),
            stops: vec![stop(MOREWOOD_FORBES), stop(BAKERY_SQUARE)],
            weekday_headway_mins: 30,
            weekend_headway_mins: None,
            weekday_service: window((7, 0), (19, 30)),
            weekend_service: None,
        },
    ]
}

/// The built-in network.
pub fn cmu_network() -> Network {
    Network::new(cmu_routes()).expect("built-in catalog is valid")
}
