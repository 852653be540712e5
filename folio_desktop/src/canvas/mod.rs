mod particle_canvas;
mod surface;

pub use particle_canvas::ParticleCanvas;
pub use surface::FrameSurface;
