#[cfg(test)]
mod tests {
    use crate::{density, log_g, mass_from_radius, surface_gravity};
    use approx::assert_relative_eq;
    use units::{Acceleration, Length, Mass};

    #[test]
    fn test_earth_density() {
        let rho = density(Mass::from_earth_masses(1.0), Length::from_earth_radii(1.0));
        assert_relative_eq!(rho.to_grams_per_cm3(), 5.51, epsilon = 0.01);
    }

    #[test]
    fn test_jupiter_density() {
        let rho = density(Mass::from_jupiter_masses(1.0), Length::from_jupiter_radii(1.0));
        // equatorial radius, so slightly under the mean-radius 1.33
        assert_relative_eq!(rho.to_grams_per_cm3(), 1.24, epsilon = 0.01);
    }

    #[test]
    fn test_earth_surface_gravity() {
        let g = surface_gravity(Mass::from_earth_masses(1.0), Length::from_earth_radii(1.0));
        assert_relative_eq!(g.to_meters_per_s2(), 9.82, epsilon = 0.01);
        assert_relative_eq!(g.to_earth_gravities(), 1.0, epsilon = 0.01);
    }

    #[test]
    fn test_solar_log_g() {
        let g = surface_gravity(Mass::from_solar_masses(1.0), Length::from_solar_radii(1.0));
        assert_relative_eq!(log_g(g), 4.44, epsilon = 0.01);
    }

    #[test]
    fn test_missing_inputs_give_sentinel() {
        assert!(!density(Mass::unknown(), Length::from_earth_radii(1.0)).is_known());
        assert!(!density(Mass::from_earth_masses(1.0), Length::unknown()).is_known());
        assert!(!surface_gravity(Mass::unknown(), Length::from_earth_radii(1.0)).is_known());
        assert!(log_g(Acceleration::unknown()).is_nan());
    }

    #[test]
    fn test_non_physical_inputs_give_sentinel() {
        assert!(!density(Mass::from_earth_masses(1.0), Length::zero()).is_known());
        let negative = Mass::from_earth_masses(-1.0);
        assert!(!surface_gravity(negative, Length::from_earth_radii(1.0)).is_known());
        assert!(log_g(Acceleration::from_meters_per_s2(0.0)).is_nan());
    }

    #[test]
    fn test_mass_from_radius_terran() {
        let m = mass_from_radius(Length::from_earth_radii(1.0));
        assert_relative_eq!(m.to_earth_masses(), 0.972, epsilon = 0.005);
    }

    #[test]
    fn test_mass_from_radius_neptunian() {
        let m = mass_from_radius(Length::from_earth_radii(3.86));
        assert_relative_eq!(m.to_earth_masses(), 14.2, epsilon = 0.1);
    }

    #[test]
    fn test_mass_from_radius_is_continuous_at_regime_boundary() {
        let below = mass_from_radius(Length::from_earth_radii(1.2299)).to_earth_masses();
        let above = mass_from_radius(Length::from_earth_radii(1.2301)).to_earth_masses();
        assert_relative_eq!(below, above, max_relative = 0.01);
        assert_relative_eq!(below, 2.04, epsilon = 0.02);
    }

    #[test]
    fn test_mass_from_radius_jovian_is_unknown() {
        assert!(!mass_from_radius(Length::from_earth_radii(20.0)).is_known());
        assert!(!mass_from_radius(Length::unknown()).is_known());
        assert!(!mass_from_radius(Length::zero()).is_known());
    }
}
