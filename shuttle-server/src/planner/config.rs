//! Planner configuration: the speeds and floors behind the time heuristics.

use crate::domain::{SHUTTLE_MPH, WALKING_MPH, minutes_at_speed};

/// Tuning parameters for trip estimation.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Walking speed used when no walking estimator answers (mph).
    pub walking_mph: f64,

    /// Average shuttle speed including stops and signals (mph).
    pub shuttle_mph: f64,

    /// Shortest walk ever reported (minutes).
    pub min_walk_mins: u32,

    /// Shortest wait ever reported (minutes).
    pub min_wait_mins: u32,

    /// Shortest ride ever reported by the distance heuristic (minutes).
    pub min_ride_mins: u32,

    /// Multiplier applied to external driving estimates.
    /// Shuttles run slower than free-flowing cars.
    pub drive_slowdown: f64,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        walking_mph: f64,
        shuttle_mph: f64,
        min_walk_mins: u32,
        min_wait_mins: u32,
        min_ride_mins: u32,
        drive_slowdown: f64,
    ) -> Self {
        Self {
            walking_mph,
            shuttle_mph,
            min_walk_mins,
            min_wait_mins,
            min_ride_mins,
            drive_slowdown,
        }
    }

    /// Walking minutes for a straight-line distance.
    pub fn walking_minutes(&self, miles: f64) -> u32 {
        minutes_at_speed(miles, self.walking_mph, self.min_walk_mins)
    }

    /// In-vehicle minutes for an in-route distance.
    pub fn in_vehicle_minutes(&self, route_miles: f64) -> u32 {
        minutes_at_speed(route_miles, self.shuttle_mph, self.min_ride_mins)
    }

    /// Expected wait: half the headway, floored at `min_wait_mins`.
    pub fn wait_minutes(&self, headway_mins: u32) -> u32 {
        (headway_mins / 2).max(self.min_wait_mins)
    }

    /// Shuttle minutes derived from a driving estimate, truncated.
    pub fn shuttle_minutes_from_drive(&self, drive_mins: u32) -> u32 {
        (drive_mins as f64 * self.drive_slowdown) as u32
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            walking_mph: WALKING_MPH,
            shuttle_mph: SHUTTLE_MPH,
            min_walk_mins: 1,
            min_wait_mins: 1,
            min_ride_mins: 3,
            drive_slowdown: 1.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();

        assert_eq!(config.walking_mph, 3.0);
        assert_eq!(config.shuttle_mph, 12.0);
        assert_eq!(config.min_walk_mins, 1);
        assert_eq!(config.min_wait_mins, 1);
        assert_eq!(config.min_ride_mins, 3);
        assert_eq!(config.drive_slowdown, 1.2);
    }

    #[test]
    fn custom_config() {
        let config = PlannerConfig::new(2.5, 10.0, 2, 3, 4, 1.5);

        assert_eq!(config.walking_mph, 2.5);
        assert_eq!(config.shuttle_mph, 10.0);
        assert_eq!(config.min_walk_mins, 2);
        assert_eq!(config.min_wait_mins, 3);
        assert_eq!(config.min_ride_mins, 4);
        assert_eq!(config.drive_slowdown, 1.5);
    }

    #[test]
    fn wait_is_half_headway() {
        let config = PlannerConfig::default();

        assert_eq!(config.wait_minutes(10), 5);
        assert_eq!(config.wait_minutes(45), 22);
        assert_eq!(config.wait_minutes(3), 1);
        assert_eq!(config.wait_minutes(1), 1);
    }

    #[test]
    fn drive_estimate_is_slowed_and_truncated() {
        let config = PlannerConfig::default();

        assert_eq!(config.shuttle_minutes_from_drive(10), 12);
        assert_eq!(config.shuttle_minutes_from_drive(7), 8); // 8.4
        assert_eq!(config.shuttle_minutes_from_drive(0), 0);
    }

    #[test]
    fn distance_heuristics() {
        let config = PlannerConfig::default();

        assert_eq!(config.walking_minutes(0.0), 1);
        assert_eq!(config.walking_minutes(0.75), 15);
        assert_eq!(config.in_vehicle_minutes(0.53), 3);
        assert_eq!(config.in_vehicle_minutes(3.6375), 18);
    }
}
