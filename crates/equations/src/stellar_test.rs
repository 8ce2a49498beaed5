#[cfg(test)]
mod tests {
    use crate::{absolute_magnitude, distance_from_magnitudes, stellar_luminosity};
    use approx::assert_relative_eq;
    use units::{Length, Temperature};

    #[test]
    fn test_solar_luminosity() {
        let l = stellar_luminosity(Length::from_solar_radii(1.0), Temperature::from_kelvin(5772.0));
        assert_relative_eq!(l.to_solar(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_luminosity_scaling() {
        // L ∝ R² T⁴
        let l = stellar_luminosity(Length::from_solar_radii(2.0), Temperature::from_kelvin(2886.0));
        assert_relative_eq!(l.to_solar(), 0.25, epsilon = 1e-9);
    }

    #[test]
    fn test_luminosity_missing_temperature() {
        let l = stellar_luminosity(Length::from_solar_radii(1.0), Temperature::unknown());
        assert!(!l.is_known());
    }

    #[test]
    fn test_solar_absolute_magnitude() {
        let m = absolute_magnitude(-26.74, Length::from_au(1.0));
        assert_relative_eq!(m, 4.83, epsilon = 0.01);
    }

    #[test]
    fn test_absolute_equals_apparent_at_ten_parsecs() {
        let m = absolute_magnitude(7.5, Length::from_parsecs(10.0));
        assert_relative_eq!(m, 7.5, epsilon = 1e-12);
    }

    #[test]
    fn test_absolute_magnitude_needs_distance() {
        assert!(absolute_magnitude(7.5, Length::unknown()).is_nan());
        assert!(absolute_magnitude(f64::NAN, Length::from_parsecs(10.0)).is_nan());
    }

    #[test]
    fn test_distance_from_magnitudes() {
        let d = distance_from_magnitudes(5.0, 0.0);
        assert_relative_eq!(d.to_parsecs(), 100.0, epsilon = 1e-9);
        assert!(!distance_from_magnitudes(f64::NAN, 0.0).is_known());
    }
}
