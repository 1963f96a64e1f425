// pf-core/src/units.rs

use uom::si::f64::{
    Mass as UomMass, MassDensity as UomMassDensity, Ratio as UomRatio,
    ThermodynamicTemperature as UomThermodynamicTemperature, Volume as UomVolume,
};

// Public canonical unit types (SI, f64)
pub type Mass = UomMass;
pub type Density = UomMassDensity;
pub type Ratio = UomRatio;
pub type Temperature = UomThermodynamicTemperature;
pub type Volume = UomVolume;

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn liters(v: f64) -> Volume {
    use uom::si::volume::liter;
    Volume::new::<liter>(v)
}

#[inline]
pub fn kgm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

/// Cargo documents quote density in kg/l; 1 kg/l = 1000 kg/m³.
#[inline]
pub fn kgl(v: f64) -> Density {
    kgm3(v * 1000.0)
}

#[inline]
pub fn celsius(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::mass_density::kilogram_per_cubic_meter;
    use uom::si::thermodynamic_temperature::degree_celsius;
    use uom::si::volume::liter;

    #[test]
    fn constructors_smoke() {
        let _m = kg(3_200_000.0);
        let _v = liters(50_000.0);
        let _rho = kgm3(850.0);
        let _t = celsius(15.0);
        let _r = unitless(0.997);
    }

    #[test]
    fn kgl_is_thousand_kgm3() {
        let rho = kgl(0.850);
        assert!((rho.get::<kilogram_per_cubic_meter>() - 850.0).abs() < 1e-12);
    }

    #[test]
    fn mass_over_density_is_volume() {
        let v = kg(850.0) / kgl(0.850);
        assert!((v.get::<liter>() - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn celsius_roundtrip() {
        let t = celsius(23.5);
        assert!((t.get::<degree_celsius>() - 23.5).abs() < 1e-9);
    }
}
