mod tests {
    use approx::assert_relative_eq;

    use crate::mass::{JUPITER_MASS_G, Mass, SOLAR_MASS_G};

    #[test]
    fn test_mass_conversions() {
        let mass_sm = Mass::from_solar_masses(1.0);
        assert_relative_eq!(mass_sm.to_grams(), SOLAR_MASS_G);

        let mass_g = Mass::from_grams(SOLAR_MASS_G);
        assert_relative_eq!(mass_g.to_solar_masses(), 1.0);

        // Catalogue planets are recorded in Jupiter masses
        let jupiter = Mass::from_jupiter_masses(1.0);
        assert_relative_eq!(jupiter.to_grams(), JUPITER_MASS_G, max_relative = 1e-12);
        assert_relative_eq!(jupiter.to_earth_masses(), 317.8, epsilon = 0.1);
        assert_relative_eq!(jupiter.to_kg(), 1.898e27, max_relative = 1e-12);
    }

    #[test]
    fn test_mass_arithmetic_operations() {
        let mass1 = Mass::from_solar_masses(2.0);
        let mass2 = Mass::from_solar_masses(1.5);

        assert_relative_eq!((mass1 + mass2).to_solar_masses(), 3.5);
        assert_relative_eq!((mass1 - mass2).to_solar_masses(), 0.5);
        assert_relative_eq!((mass1 * 2.0).to_solar_masses(), 4.0);
        assert_relative_eq!((mass1 / 4.0).to_solar_masses(), 0.5);
        assert_relative_eq!(mass1 / mass2, 4.0 / 3.0);

        let total: Mass = [mass1, mass2].into_iter().sum();
        assert_relative_eq!(total.to_solar_masses(), 3.5);
    }

    #[test]
    fn test_unknown_mass_propagates() {
        let missing = Mass::unknown();
        assert!(!missing.is_known());
        assert!(!missing.is_positive());

        let total = Mass::from_solar_masses(1.0) + missing;
        assert!(total.to_solar_masses().is_nan());
        assert!(missing.to_jupiter_masses().is_nan());
    }

    #[test]
    fn test_mass_positivity() {
        assert!(Mass::from_jupiter_masses(0.5).is_positive());
        assert!(!Mass::zero().is_positive());
        assert!(!Mass::from_solar_masses(-1.0).is_positive());
        assert!(!Mass::from_solar_masses(f64::INFINITY).is_known());
    }
}
