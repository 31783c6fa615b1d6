use stellar::SuperType;
use units::Fixed;

/// Hill-sphere radius in AU.
///
/// `a * (1 - e) * cbrt(m / (3 * M))` with the mass ratio, eccentricity and
/// cube root carried at 48 fractional bits, since moons and stations make
/// the ratio tiny. Stars and gravity points have no meaningful Hill sphere
/// and get zero.
///
/// # Arguments
/// * `super_type` - Supertype of the body
/// * `semi_major_axis` - AU
/// * `eccentricity` - Orbital eccentricity
/// * `mass` - Body mass in Earth masses
/// * `parent_mass_in_earths` - Parent mass converted to Earth masses
pub fn hill_radius(
    super_type: SuperType,
    semi_major_axis: Fixed,
    eccentricity: Fixed,
    mass: Fixed,
    parent_mass_in_earths: Fixed,
) -> Fixed {
    if super_type <= SuperType::Star {
        return Fixed::ZERO;
    }
    let a = semi_major_axis.convert::<48>();
    let e = eccentricity.convert::<48>();
    let ratio = mass.div_to::<48>(parent_mass_in_earths * 3);
    let one = units::Fixed48::ONE;

    (a * (one - e) * ratio.cbrt()).convert::<32>()
}
