//! Geodesy helpers, used to synthesize the field-of-view cone from the drone
//! position and the point its camera is aimed at.
//!
//! Both functions are pure and total: identical points give 0, never NaN.
//!

/// Mean Earth radius in meters
const R: f64 = 6_371_000.0;

/// Initial compass bearing from point 1 toward point 2, in degrees within
/// `[0, 360)`.  0 is true north, clockwise positive.
///
pub fn bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let x = d_lon.sin() * phi2.cos();
    let y = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lon.cos();

    (x.atan2(y).to_degrees() + 360.0) % 360.0
}

/// Great-circle surface distance between two points in meters (haversine).
///
/// Uses the atan2 form rather than asin for stability near antipodal points.
///
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin() * (d_lat / 2.0).sin()
        + lat1.to_radians().cos()
            * lat2.to_radians().cos()
            * (d_lon / 2.0).sin()
            * (d_lon / 2.0).sin();

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    R * c
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(48.573, 2.319, 48.573, 2.319)]
    #[case(0.0, 0.0, 0.0, 0.0)]
    #[case(-90.0, 45.0, -90.0, 45.0)]
    fn test_bearing_same_point(
        #[case] lat1: f64,
        #[case] lon1: f64,
        #[case] lat2: f64,
        #[case] lon2: f64,
    ) {
        assert_eq!(0.0, bearing(lat1, lon1, lat2, lon2));
    }

    #[rstest]
    #[case(0.0, 0.0, 0.0, 90.0, 90.0)]
    #[case(0.0, 0.0, 90.0, 0.0, 0.0)]
    #[case(0.0, 0.0, -90.0, 0.0, 180.0)]
    #[case(0.0, 0.0, 0.0, -90.0, 270.0)]
    fn test_bearing_cardinal(
        #[case] lat1: f64,
        #[case] lon1: f64,
        #[case] lat2: f64,
        #[case] lon2: f64,
        #[case] expected: f64,
    ) {
        let b = bearing(lat1, lon1, lat2, lon2);
        assert!((b - expected).abs() < 1e-9, "got {b}, expected {expected}");
    }

    #[rstest]
    #[case(48.573174, 2.319671, 48.566757, 2.303015)]
    #[case(10.0, 20.0, -30.0, 170.0)]
    #[case(89.9, 0.0, -89.9, 179.9)]
    fn test_bearing_in_range(
        #[case] lat1: f64,
        #[case] lon1: f64,
        #[case] lat2: f64,
        #[case] lon2: f64,
    ) {
        let b = bearing(lat1, lon1, lat2, lon2);
        assert!((0.0..360.0).contains(&b));
    }

    #[test]
    fn test_distance_same_point() {
        assert_eq!(0.0, distance(48.573, 2.319, 48.573, 2.319));
    }

    #[test]
    fn test_distance_one_degree() {
        // One degree of longitude on the equator.
        let d = distance(0.0, 0.0, 0.0, 1.0);
        assert!((d - 111_195.0).abs() / 111_195.0 < 0.01, "got {d}");
    }

    #[rstest]
    #[case(48.573174, 2.319671, 48.566757, 2.303015)]
    #[case(0.0, 0.0, 10.0, 20.0)]
    fn test_distance_symmetric(
        #[case] lat1: f64,
        #[case] lon1: f64,
        #[case] lat2: f64,
        #[case] lon2: f64,
    ) {
        let there = distance(lat1, lon1, lat2, lon2);
        let back = distance(lat2, lon2, lat1, lon1);
        assert!((there - back).abs() < 1e-9);
    }
}
