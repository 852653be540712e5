use crate::animation::ParticleLayer;
use iced::mouse;
use iced::widget::canvas::{self, Geometry};
use iced::{Rectangle, Theme};
use std::marker::PhantomData;

use super::surface::FrameSurface;

/// Canvas program that draws one particle layer.
pub struct ParticleCanvas<'a, Message> {
    pub layer: &'a ParticleLayer,
    pub _marker: PhantomData<Message>,
}

impl<'a, Message> ParticleCanvas<'a, Message> {
    pub fn new(layer: &'a ParticleLayer) -> Self {
        Self {
            layer,
            _marker: PhantomData,
        }
    }
}

impl<'a, Message> canvas::Program<Message> for ParticleCanvas<'a, Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.layer.cache.draw(renderer, bounds.size(), |frame| {
            let mut surface = FrameSurface::new(frame);
            self.layer.engine().render(Some(&mut surface));
        });
        vec![geometry]
    }
}
