//! Body classification, static star tables and seeded star sampling.

pub mod body_type;
pub mod sampling;
pub mod spectral;
pub mod star_table;


// Re-export types
pub use body_type::{BodyType, SuperType};
pub use star_table::StarTypeInfo;

// Re-export spectral types
pub use spectral::{LuminosityClass, SpectralType};

// Re-export sampling functions
pub use sampling::{
    StarSample, black_hole_min_radius, pick_companion_type, pick_star_count, pick_star_type,
    sample_star, star_type_for_roll,
};
