//! Extensions to [`uom`].
//!
//! Process inputs are [`uom`] quantities; the wet-end formulas are written in
//! tannery units (mm, m, kg, °C, percent) and convert at the point of use.
//!
//! ## Temperature differences
//!
//! Subtracting two absolute temperatures in [`uom`] yields another absolute
//! temperature, which is the wrong quantity for a float-bath temperature jump.
//! [`TemperatureDifference::minus`] returns a temperature interval instead:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::temperature_interval::kelvin as delta_kelvin;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use wet_end_models::support::units::TemperatureDifference;
//!
//! let retan = ThermodynamicTemperature::new::<degree_celsius>(35.0);
//! let fatliquor = ThermodynamicTemperature::new::<degree_celsius>(55.0);
//! let jump = fatliquor.minus(retan);
//! assert!((jump.get::<delta_kelvin>() - 20.0).abs() < 1e-9);
//! ```

mod temperature_difference;

pub use temperature_difference::TemperatureDifference;
