//! Scenario tests for the single-route trip planner.

use super::*;
use crate::catalog::cmu_network;
use crate::domain::{
    Coord, DESTINATION_LABEL, Network, ORIGIN_LABEL, PlanFailure, RouteDefinition, ServiceWindow,
    Step, Stop, TripPlan,
};
use chrono::{NaiveDate, NaiveDateTime};
use std::cell::RefCell;

const MOREWOOD: &str = "Morewood & Forbes (Main Campus)";
const FIFTH_AIKEN: &str = "Fifth Ave & Aiken Ave (Shadyside)";
const MILL_19: &str = "Mill 19 (Hazelwood Green)";
const MURRAY: &str = "Forbes Ave & Murray Ave (Squirrel Hill)";

fn c(lat: f64, lon: f64) -> Coord {
    Coord::new(lat, lon).unwrap()
}

fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

/// Monday 2024-03-18.
fn monday(h: u32, m: u32) -> NaiveDateTime {
    at(18, h, m)
}

/// Saturday 2024-03-16.
fn saturday(h: u32, m: u32) -> NaiveDateTime {
    at(16, h, m)
}

/// Sunday 2024-03-17.
fn sunday(h: u32, m: u32) -> NaiveDateTime {
    at(17, h, m)
}

fn main_campus() -> Coord {
    c(40.4449, -79.9429)
}

fn shadyside() -> Coord {
    c(40.4520, -79.9392)
}

fn plan(network: &Network, origin: Coord, destination: Coord, when: NaiveDateTime) -> TripPlan {
    plan_trip(network, origin, destination, when, None, None)
}

fn itinerary(plan: &TripPlan) -> &crate::domain::Itinerary {
    plan.itinerary()
        .unwrap_or_else(|| panic!("expected a planned trip, got {plan:?}"))
}

#[test]
fn weekday_trip_between_campus_and_shadyside() {
    let network = cmu_network();
    let plan = plan(&network, main_campus(), shadyside(), monday(10, 0));
    let it = itinerary(&plan);

    assert_eq!(it.route_name, "A/B/AB");
    assert_eq!(it.origin_stop, MOREWOOD);
    assert_eq!(it.dest_stop, FIFTH_AIKEN);

    assert_eq!(
        it.steps,
        vec![
            Step::Walk {
                from: ORIGIN_LABEL.into(),
                to: MOREWOOD.into(),
                minutes: 1,
            },
            Step::Wait {
                at: MOREWOOD.into(),
                route: "A/B/AB".into(),
                minutes: 5,
            },
            Step::Shuttle {
                route: "A/B/AB".into(),
                from: MOREWOOD.into(),
                to: FIFTH_AIKEN.into(),
                minutes: 3,
                miles: 0.53,
            },
            Step::Walk {
                from: FIFTH_AIKEN.into(),
                to: DESTINATION_LABEL.into(),
                minutes: 1,
            },
        ]
    );

    assert_eq!(it.totals.minutes, 10);
    assert_eq!(it.totals.walk_minutes, 2);
    assert_eq!(it.totals.wait_minutes, 5);
    assert_eq!(it.totals.in_vehicle_minutes, 3);

    assert_eq!(it.board_time, monday(10, 6));
    assert_eq!(it.arrival_time, monday(10, 10));
    assert_eq!(it.board_clock(), "10:06 AM");
    assert_eq!(it.arrival_clock(), "10:10 AM");
    assert!(!it.used_external_estimates);
}

#[test]
fn saturday_before_weekend_service() {
    let network = cmu_network();
    let plan = plan(&network, main_campus(), shadyside(), saturday(9, 0));

    assert_eq!(
        plan,
        TripPlan::Infeasible(PlanFailure::ServiceInactive {
            route: "A/B/AB".into(),
            origin_stop: MOREWOOD.into(),
            dest_stop: FIFTH_AIKEN.into(),
        })
    );
    assert_eq!(
        plan.failure().unwrap().to_string(),
        "A/B/AB not operating at selected time"
    );
}

#[test]
fn saturday_mill_19_to_campus() {
    let network = cmu_network();
    let plan = plan(&network, c(40.4288, -79.9465), main_campus(), saturday(14, 0));
    let it = itinerary(&plan);

    assert_eq!(it.route_name, "PTC & Mill 19");
    assert_eq!(it.origin_stop, MILL_19);
    assert_eq!(it.dest_stop, MOREWOOD);

    // Half of the 45-minute weekend headway, truncated
    assert_eq!(it.totals.wait_minutes, 22);
    assert_eq!(it.totals.in_vehicle_minutes, 18);
    assert_eq!(it.totals.walk_minutes, 2);
    assert_eq!(it.totals.minutes, 42);

    match &it.steps[2] {
        Step::Shuttle { miles, .. } => assert_eq!(*miles, 3.64),
        other => panic!("expected shuttle step, got {other:?}"),
    }

    assert_eq!(it.board_clock(), "2:23 PM");
    assert_eq!(it.arrival_clock(), "2:42 PM");
}

#[test]
fn sunday_on_weekday_only_route() {
    let network = cmu_network();
    let plan = plan(&network, main_campus(), c(40.4347, -79.9234), sunday(12, 0));

    assert_eq!(
        plan,
        TripPlan::Infeasible(PlanFailure::ServiceInactive {
            route: "C Route".into(),
            origin_stop: MOREWOOD.into(),
            dest_stop: MURRAY.into(),
        })
    );
}

#[test]
fn late_weekday_after_bakery_square_closes() {
    let network = cmu_network();
    let plan = plan(
        &network,
        c(40.4460, -79.9440),
        c(40.4630, -79.9220),
        monday(23, 55),
    );

    assert_eq!(plan.route_name(), Some("Bakery Square"));
    assert!(matches!(
        plan.failure(),
        Some(PlanFailure::ServiceInactive { .. })
    ));
}

#[test]
fn stops_on_different_routes_do_not_connect() {
    let network = cmu_network();
    let plan = plan(&network, c(40.4347, -79.9234), shadyside(), monday(10, 0));

    assert_eq!(
        plan,
        TripPlan::Infeasible(PlanFailure::NoConnectingRoute {
            origin_stop: MURRAY.into(),
            dest_stop: FIFTH_AIKEN.into(),
        })
    );
    assert_eq!(plan.route_name(), None);
    assert_eq!(plan.origin_stop(), MURRAY);
    assert_eq!(plan.dest_stop(), FIFTH_AIKEN);
}

#[test]
fn same_nearest_stop_at_both_ends() {
    let network = cmu_network();
    let plan = plan(&network, main_campus(), c(40.4450, -79.9430), monday(10, 0));

    assert!(matches!(
        plan.failure(),
        Some(PlanFailure::NoConnectingRoute { origin_stop, dest_stop })
            if origin_stop == MOREWOOD && dest_stop == MOREWOOD
    ));
}

#[test]
fn planning_is_repeatable() {
    let network = cmu_network();
    let first = plan(&network, main_campus(), shadyside(), monday(10, 0));
    let second = plan(&network, main_campus(), shadyside(), monday(10, 0));
    assert_eq!(first, second);
}

#[test]
fn walking_estimator_replaces_both_walks() {
    let network = cmu_network();
    let walk = |_: Coord, _: Coord| Some(7u32);

    let plan = plan_trip(
        &network,
        main_campus(),
        shadyside(),
        monday(10, 0),
        Some(&walk),
        None,
    );
    let it = itinerary(&plan);

    assert_eq!(it.steps[0].minutes(), 7);
    assert_eq!(it.steps[3].minutes(), 7);
    assert_eq!(it.totals.walk_minutes, 14);
    // Ride still comes from the distance heuristic
    assert_eq!(it.totals.in_vehicle_minutes, 3);
    assert_eq!(it.totals.minutes, 7 + 5 + 3 + 7);
    assert!(it.used_external_estimates);
}

#[test]
fn walking_estimator_called_towards_and_from_stops() {
    let network = cmu_network();
    let origin = c(40.4460, -79.9440);
    let destination = c(40.4525, -79.9395);
    let calls = RefCell::new(Vec::new());
    let walk = |from: Coord, to: Coord| {
        calls.borrow_mut().push((from, to));
        None::<u32>
    };

    let plan = plan_trip(&network, origin, destination, monday(10, 0), Some(&walk), None);
    assert!(plan.is_success());

    let morewood = network.stop(MOREWOOD).unwrap().coord;
    let fifth = network.stop(FIFTH_AIKEN).unwrap().coord;
    assert_eq!(
        calls.into_inner(),
        vec![(origin, morewood), (fifth, destination)]
    );
}

#[test]
fn each_walk_falls_back_independently() {
    let network = cmu_network();
    let origin = main_campus();
    let walk = move |from: Coord, _: Coord| (from == origin).then_some(4u32);

    let plan = plan_trip(&network, origin, shadyside(), monday(10, 0), Some(&walk), None);
    let it = itinerary(&plan);

    assert_eq!(it.steps[0].minutes(), 4);
    assert_eq!(it.steps[3].minutes(), 1);
    assert!(it.used_external_estimates);
}

#[test]
fn declining_estimators_match_heuristics() {
    let network = cmu_network();
    let none = |_: Coord, _: Coord| None::<u32>;

    let with = plan_trip(
        &network,
        main_campus(),
        shadyside(),
        monday(10, 0),
        Some(&none),
        Some(&none),
    );
    let without = plan(&network, main_campus(), shadyside(), monday(10, 0));

    assert_eq!(with, without);
    assert!(!itinerary(&with).used_external_estimates);
}

#[test]
fn oversized_estimates_fall_back_to_heuristics() {
    let network = cmu_network();
    let huge = |_: Coord, _: Coord| Some(u32::MAX);

    let with = plan_trip(
        &network,
        main_campus(),
        shadyside(),
        monday(10, 0),
        Some(&huge),
        Some(&huge),
    );
    let without = plan(&network, main_campus(), shadyside(), monday(10, 0));

    assert_eq!(with, without);
    let it = itinerary(&with);
    assert_eq!(it.totals.minutes, 10);
    assert_eq!(it.totals.walk_minutes, 2);
    assert_eq!(it.totals.in_vehicle_minutes, 3);
    assert!(!it.used_external_estimates);
}

#[test]
fn day_long_estimates_are_still_used() {
    let network = cmu_network();
    let day = |_: Coord, _: Coord| Some(24 * 60u32);

    let plan = plan_trip(
        &network,
        main_campus(),
        shadyside(),
        monday(10, 0),
        Some(&day),
        None,
    );
    let it = itinerary(&plan);

    assert_eq!(it.totals.walk_minutes, 2 * 24 * 60);
    assert_eq!(it.board_time, at(19, 10, 5));
    assert!(it.used_external_estimates);
}

#[test]
fn driving_estimate_is_slowed_and_truncated() {
    let network = cmu_network();
    let drive = |_: Coord, _: Coord| Some(7u32);

    let plan = plan_trip(
        &network,
        main_campus(),
        shadyside(),
        monday(10, 0),
        None,
        Some(&drive),
    );
    let it = itinerary(&plan);

    // 7 * 1.2 = 8.4
    assert_eq!(it.totals.in_vehicle_minutes, 8);
    // Miles still come from the route geometry
    match &it.steps[2] {
        Step::Shuttle { minutes, miles, .. } => {
            assert_eq!(*minutes, 8);
            assert_eq!(*miles, 0.53);
        }
        other => panic!("expected shuttle step, got {other:?}"),
    }
    assert_eq!(it.arrival_time, monday(10, 15));
    assert!(it.used_external_estimates);
}

#[test]
fn estimators_not_consulted_for_infeasible_trips() {
    let network = cmu_network();
    let calls = RefCell::new(0);
    let counting = |_: Coord, _: Coord| {
        *calls.borrow_mut() += 1;
        Some(1u32)
    };

    let plan = plan_trip(
        &network,
        main_campus(),
        shadyside(),
        saturday(9, 0),
        Some(&counting),
        Some(&counting),
    );

    assert!(!plan.is_success());
    assert_eq!(*calls.borrow(), 0);
}

fn weekend_gap_network() -> Network {
    Network::new(vec![RouteDefinition {
        name: "Night Owl".into(),
        stops: vec![
            Stop::new("North", c(40.4600, -79.9400)),
            Stop::new("South", c(40.4300, -79.9400)),
        ],
        weekday_headway_mins: 15,
        weekend_headway_mins: None,
        weekday_service: ServiceWindow::from_hm((7, 0), (22, 0)).unwrap(),
        weekend_service: ServiceWindow::from_hm((9, 0), (17, 0)),
    }])
    .unwrap()
}

#[test]
fn weekend_window_without_weekend_headway() {
    let network = weekend_gap_network();
    let plan = plan(
        &network,
        c(40.4600, -79.9400),
        c(40.4300, -79.9400),
        saturday(12, 0),
    );

    assert_eq!(
        plan,
        TripPlan::Infeasible(PlanFailure::NoHeadwayDefined {
            route: "Night Owl".into(),
            origin_stop: "North".into(),
            dest_stop: "South".into(),
        })
    );
    assert_eq!(
        plan.failure().unwrap().to_string(),
        "Night Owl has no service at this time/day"
    );
}

#[test]
fn weekday_on_weekend_gap_route_is_fine() {
    let network = weekend_gap_network();
    let plan = plan(
        &network,
        c(40.4600, -79.9400),
        c(40.4300, -79.9400),
        monday(12, 0),
    );
    let it = itinerary(&plan);

    assert_eq!(it.totals.wait_minutes, 7);
    // 2.07 miles at 12 mph
    assert_eq!(it.totals.in_vehicle_minutes, 10);
}

#[test]
fn window_edges_are_inclusive() {
    let network = cmu_network();
    assert!(plan(&network, main_campus(), shadyside(), monday(7, 0)).is_success());
    assert!(plan(&network, main_campus(), shadyside(), monday(23, 30)).is_success());
    assert!(!plan(&network, main_campus(), shadyside(), monday(23, 31)).is_success());
    assert!(!plan(&network, main_campus(), shadyside(), monday(6, 59)).is_success());
}

#[test]
fn custom_config() {
    let network = cmu_network();
    let config = PlannerConfig::new(3.0, 12.0, 2, 10, 5, 1.5);
    let planner = Planner::new(&network, &config);

    let drive = |_: Coord, _: Coord| Some(4u32);
    let request = TripRequest::new(main_campus(), shadyside(), monday(10, 0));

    let plan = planner.plan(&request, &Estimators::none());
    let it = itinerary(&plan);
    assert_eq!(it.totals.walk_minutes, 4);
    assert_eq!(it.totals.wait_minutes, 10);
    assert_eq!(it.totals.in_vehicle_minutes, 5);

    let plan = planner.plan(&request, &Estimators::new(None, Some(&drive)));
    assert_eq!(itinerary(&plan).totals.in_vehicle_minutes, 6);
}

#[test]
fn timestamps_cross_midnight() {
    let network = all_day_network();
    let plan = plan(
        &network,
        c(40.4600, -79.9400),
        c(40.4300, -79.9400),
        monday(23, 55),
    );
    let it = itinerary(&plan);

    assert_eq!(it.board_time, at(19, 0, 3));
    assert_eq!(it.arrival_clock(), "12:14 AM");
}

#[test]
fn times_past_calendar_end_are_pinned() {
    let network = Network::new(vec![RouteDefinition {
        name: "Always".into(),
        stops: vec![
            Stop::new("North", c(40.4600, -79.9400)),
            Stop::new("South", c(40.4300, -79.9400)),
        ],
        weekday_headway_mins: 15,
        weekend_headway_mins: Some(15),
        weekday_service: ServiceWindow::from_hm((0, 0), (23, 59)).unwrap(),
        weekend_service: Some(ServiceWindow::from_hm((0, 0), (23, 59)).unwrap()),
    }])
    .unwrap();

    let plan = plan(
        &network,
        c(40.4600, -79.9400),
        c(40.4300, -79.9400),
        NaiveDateTime::MAX,
    );
    let it = itinerary(&plan);

    assert_eq!(it.board_time, NaiveDateTime::MAX);
    assert_eq!(it.arrival_time, NaiveDateTime::MAX);
}

fn all_day_network() -> Network {
    Network::new(vec![RouteDefinition {
        name: "Late".into(),
        stops: vec![
            Stop::new("North", c(40.4600, -79.9400)),
            Stop::new("South", c(40.4300, -79.9400)),
        ],
        weekday_headway_mins: 15,
        weekend_headway_mins: None,
        weekday_service: ServiceWindow::from_hm((0, 0), (23, 59)).unwrap(),
        weekend_service: None,
    }])
    .unwrap()
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn campus_coord() -> impl Strategy<Value = Coord> {
        (40.42f64..40.47, -79.96f64..-79.91).prop_map(|(lat, lon)| c(lat, lon))
    }

    fn any_time() -> impl Strategy<Value = NaiveDateTime> {
        (16u32..=22, 0u32..24, 0u32..60).prop_map(|(d, h, m)| at(d, h, m))
    }

    proptest! {
        #[test]
        fn plans_are_consistent(
            origin in campus_coord(),
            destination in campus_coord(),
            when in any_time(),
        ) {
            let network = cmu_network();
            let first = plan(&network, origin, destination, when);
            let second = plan(&network, origin, destination, when);
            prop_assert_eq!(&first, &second);

            if let TripPlan::Planned(it) = &first {
                let step_sum: u32 = it.steps.iter().map(Step::minutes).sum();
                prop_assert_eq!(step_sum, it.totals.minutes);
                prop_assert_eq!(
                    it.totals.minutes,
                    it.totals.walk_minutes + it.totals.wait_minutes + it.totals.in_vehicle_minutes
                );
                prop_assert!(it.totals.walk_minutes >= 2);
                prop_assert!(it.totals.wait_minutes >= 1);
                prop_assert!(it.totals.in_vehicle_minutes >= 3);
                prop_assert!(it.board_time >= when);
                prop_assert!(it.arrival_time > it.board_time);
                prop_assert_ne!(&it.origin_stop, &it.dest_stop);
            }
        }
    }
}
