pub mod constants;
pub mod fixed;
pub mod random;


pub use constants::{
    CELSIUS_CENTIKELVIN, SUN_MASS_TO_EARTH_MASS, au_earth_radius, au_sol_radius, fixed_pi,
};
pub use fixed::{Fixed, Fixed48, FixedF, icbrt, isqrt};
pub use random::Random;
