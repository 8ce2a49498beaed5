mod tests {
    use approx::assert_relative_eq;

    use crate::length::{AU_TO_CM, Length, PARSEC_TO_AU};

    #[test]
    fn test_length_conversions() {
        let length_au = Length::from_au(1.0);
        assert_relative_eq!(length_au.to_cm(), AU_TO_CM);

        let length_cm = Length::from_cm(AU_TO_CM);
        assert_relative_eq!(length_cm.to_au(), 1.0);

        let original = 5.7;
        let round_trip = Length::from_cm(Length::from_au(original).to_cm()).to_au();
        assert_relative_eq!(round_trip, original);
    }

    #[test]
    fn test_body_radii() {
        // Jupiter is ~11.2 Earth radii and ~0.1 solar radii
        let jupiter = Length::from_jupiter_radii(1.0);
        assert_relative_eq!(jupiter.to_earth_radii(), 11.209, epsilon = 1e-9);
        assert!(jupiter.to_solar_radii() > 0.09 && jupiter.to_solar_radii() < 0.11);

        // Sun ~ 696,000 km
        let sun = Length::from_solar_radii(1.0);
        assert_relative_eq!(sun.to_km(), 6.957e5, max_relative = 1e-3);
    }

    #[test]
    fn test_parsecs() {
        let d = Length::from_parsecs(1.0);
        assert_relative_eq!(d.to_au(), PARSEC_TO_AU);
        assert_relative_eq!(d.to_parsecs(), 1.0);
        // ~3.086e13 km
        assert_relative_eq!(d.to_km(), 3.086e13, max_relative = 1e-3);
    }

    #[test]
    fn test_length_arithmetic_operations() {
        let length1 = Length::from_au(5.0);
        let length2 = Length::from_au(3.0);

        assert_relative_eq!((length1 + length2).to_au(), 8.0);
        assert_relative_eq!((length1 - length2).to_au(), 2.0);
        assert_relative_eq!((length1 * 2.0).to_au(), 10.0);
        assert_relative_eq!((length1 / 2.0).to_au(), 2.5);
        assert_relative_eq!((1.5 * length1).to_au(), 7.5);
        assert_relative_eq!(length1 / length2, 5.0 / 3.0);
    }

    #[test]
    fn test_unknown_length() {
        assert!(!Length::unknown().is_known());
        assert!(!Length::zero().is_positive());
        assert!(!Length::from_au(-1.0).is_positive());
        assert!((Length::unknown() + Length::from_au(1.0)).to_au().is_nan());
    }
}
