//! Configuration for journey estimates.

use chrono::Duration;

/// Parameters used to turn a route distance into a travel time and a fare.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateConfig {
    /// Average train speed including stops (km/h).
    pub average_speed_kmh: f64,

    /// Fare bands as `(max_distance_km, fare)`, ascending by distance.
    /// A route pays the fare of the first band whose bound it does not exceed.
    pub fare_bands: Vec<(f64, u32)>,

    /// Fare for routes longer than every band.
    pub max_fare: u32,
}

impl EstimateConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(average_speed_kmh: f64, fare_bands: Vec<(f64, u32)>, max_fare: u32) -> Self {
        Self {
            average_speed_kmh,
            fare_bands,
            max_fare,
        }
    }

    /// Estimated travel time for `distance_km`, rounded to whole minutes.
    pub fn travel_time(&self, distance_km: f64) -> Duration {
        let minutes = (distance_km * 60.0 / self.average_speed_kmh).round();
        Duration::minutes(minutes as i64)
    }

    /// Fare for `distance_km`.
    pub fn fare(&self, distance_km: f64) -> u32 {
        self.fare_bands
            .iter()
            .find(|(max_distance, _)| distance_km <= *max_distance)
            .map(|(_, fare)| *fare)
            .unwrap_or(self.max_fare)
    }
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            average_speed_kmh: 40.0,
            fare_bands: vec![(2.0, 10), (5.0, 15), (12.0, 20), (21.0, 30), (32.0, 40)],
            max_fare: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = EstimateConfig::default();

        assert_eq!(config.average_speed_kmh, 40.0);
        assert_eq!(config.fare_bands.len(), 5);
        assert_eq!(config.max_fare, 50);
    }

    #[test]
    fn travel_time_rounds_to_minutes() {
        let config = EstimateConfig::default();

        assert_eq!(config.travel_time(0.0), Duration::minutes(0));
        assert_eq!(config.travel_time(10.0), Duration::minutes(15));
        // 8 km at 40 km/h is exactly 12 minutes
        assert_eq!(config.travel_time(8.0), Duration::minutes(12));
        // 1 km is 1.5 minutes, rounded up
        assert_eq!(config.travel_time(1.0), Duration::minutes(2));
        // 0.3 km is 0.45 minutes, rounded down
        assert_eq!(config.travel_time(0.3), Duration::minutes(0));
    }

    #[test]
    fn fare_bands_are_inclusive() {
        let config = EstimateConfig::default();

        assert_eq!(config.fare(0.0), 10);
        assert_eq!(config.fare(2.0), 10);
        assert_eq!(config.fare(2.1), 15);
        assert_eq!(config.fare(5.0), 15);
        assert_eq!(config.fare(12.0), 20);
        assert_eq!(config.fare(20.9), 30);
        assert_eq!(config.fare(32.0), 40);
        assert_eq!(config.fare(32.5), 50);
        assert_eq!(config.fare(120.0), 50);
    }

    #[test]
    fn custom_config() {
        let config = EstimateConfig::new(60.0, vec![(10.0, 5)], 9);

        assert_eq!(config.travel_time(30.0), Duration::minutes(30));
        assert_eq!(config.fare(10.0), 5);
        assert_eq!(config.fare(10.5), 9);
    }

    #[test]
    fn no_bands_means_flat_fare() {
        let config = EstimateConfig::new(40.0, vec![], 25);
        assert_eq!(config.fare(0.0), 25);
        assert_eq!(config.fare(50.0), 25);
    }
}
