use fake::Fake;
use fake::faker::address::en::CityName;
use rand::RngCore;

/// Source of pseudo-realistic locality names for the `area` field.
///
/// Injected rather than read from ambient global state so tests can pin
/// names and every draw flows through the caller's seeded RNG.
pub trait LocalityNames {
    fn locality(&self, rng: &mut dyn RngCore) -> String;
}

/// Default name source backed by the `fake` city catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeLocalityNames;

impl LocalityNames for FakeLocalityNames {
    fn locality(&self, rng: &mut dyn RngCore) -> String {
        CityName().fake_with_rng(rng)
    }
}
