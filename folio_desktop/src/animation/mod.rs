mod states;

pub use states::ParticleLayer;
