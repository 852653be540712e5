//! Folio Desktop - Entry point for the Iced GUI application.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use folio_core::contact::{is_valid_email, ContactError, ContactService, SubmissionResult};
use folio_core::particles::{Bounds, EngineConfig, ListenerKind};
use folio_core::utils::logging::init_logging;
use folio_core::Config;
use folio_desktop::canvas::ParticleCanvas;
use folio_desktop::styles::{
    card_style, input_style, nav_button_style, primary_button_style, status_banner_style,
    top_bar_style,
};
use folio_desktop::{
    app_theme_with_mode, palette_from_mode, ContactForm, Field, FormStatus, FrameHost,
    PaletteColors, ParticleLayer, BODY_TEXT_SIZE, CONTENT_PADDING, FORM_MAX_WIDTH,
    HERO_MAX_WIDTH, HERO_TITLE_SIZE, HINT_TEXT_SIZE, PAGE_TITLE_SIZE, WINDOW_HEIGHT,
    WINDOW_WIDTH,
};
use iced::widget::canvas::Canvas;
use iced::widget::{button, column, container, row, text, text_input, Space, Stack};
use iced::{event, mouse, touch, window};
use iced::{Alignment, Element, Event, Length, Point, Size, Subscription, Task, Theme};
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Page {
    #[default]
    Home,
    Contact,
}

/// Application state.
struct App {
    config: Config,
    host: FrameHost,
    bounds: Bounds,
    ambient: ParticleLayer,
    /// Only mounted while the home page is shown
    hero: Option<ParticleLayer>,
    trail: Option<ParticleLayer>,
    page: Page,
    contact: ContactForm,
    service: Option<Arc<ContactService>>,
}

/// Application messages.
#[derive(Debug, Clone)]
enum Message {
    Frame(Instant),
    WindowResized(Size),
    CursorMoved(Point),
    FingerMoved(Point),
    ToggleTheme,
    Navigate(Page),
    FieldChanged(Field, String),
    SubmitContact,
    ContactSubmitted(SubmissionResult),
}

impl App {
    fn init() -> (Self, Task<Message>) {
        let config = Config::load_or_default().unwrap_or_else(|err| {
            warn!(error = %err, "using default config");
            Config::default()
        });
        let service = match ContactService::from_config(&config.contact) {
            Ok(service) => {
                info!(provider = service.provider_name(), "contact service ready");
                Some(Arc::new(service))
            }
            Err(err) => {
                error!(error = %err, "contact service unavailable");
                None
            }
        };

        let mut host = FrameHost::new();
        let bounds = Bounds::new(WINDOW_WIDTH, WINDOW_HEIGHT);
        let theme = config.theme;
        let ambient =
            ParticleLayer::mount(config.effects.ambient.clone(), bounds, theme, &mut host);
        let hero = ParticleLayer::mount(config.effects.hero.clone(), bounds, theme, &mut host);
        let trail = config
            .effects
            .trail_enabled
            .then(|| ParticleLayer::mount(config.effects.trail.clone(), bounds, theme, &mut host));

        let app = Self {
            config,
            host,
            bounds,
            ambient,
            hero: Some(hero),
            trail,
            page: Page::Home,
            contact: ContactForm::default(),
            service,
        };
        (app, Task::none())
    }

    fn mount_layer(&mut self, config: EngineConfig) -> ParticleLayer {
        ParticleLayer::mount(config, self.bounds, self.config.theme, &mut self.host)
    }

    fn layers_mut(&mut self) -> impl Iterator<Item = &mut ParticleLayer> {
        std::iter::once(&mut self.ambient)
            .chain(self.hero.as_mut())
            .chain(self.trail.as_mut())
    }

    fn persist_theme(&self) -> anyhow::Result<()> {
        self.config
            .save()
            .context("failed to save theme preference")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Frame(now) => {
                self.host.begin_frame();
                let Self {
                    ambient,
                    hero,
                    trail,
                    host,
                    ..
                } = self;
                for layer in std::iter::once(ambient)
                    .chain(hero.as_mut())
                    .chain(trail.as_mut())
                {
                    layer.advance(&mut *host, now);
                }
            }
            Message::WindowResized(size) => {
                self.bounds = Bounds::new(size.width, size.height);
                for layer in self.layers_mut() {
                    layer.resize(size.width, size.height);
                }
            }
            Message::CursorMoved(position) => {
                let now = Instant::now();
                for layer in self.layers_mut() {
                    layer.pointer_moved(position, now);
                }
            }
            Message::FingerMoved(position) => {
                let now = Instant::now();
                for layer in self.layers_mut() {
                    layer.touch_moved(position, now);
                }
            }
            Message::ToggleTheme => {
                let theme = self.config.theme.toggled();
                self.config.set_theme(theme);
                for layer in self.layers_mut() {
                    layer.set_theme(theme);
                }
                info!(theme = theme.name(), "theme changed");
                if let Err(err) = self.persist_theme() {
                    warn!("{err:#}");
                }
            }
            Message::Navigate(page) => {
                if page == self.page {
                    return Task::none();
                }
                if let Some(mut hero) = self.hero.take() {
                    hero.teardown(&mut self.host);
                }
                if page == Page::Home {
                    self.hero = Some(self.mount_layer(self.config.effects.hero.clone()));
                }
                self.page = page;
            }
            Message::FieldChanged(field, value) => self.contact.set_field(field, value),
            Message::SubmitContact => {
                let Some(payload) = self.contact.begin_submit() else {
                    return Task::none();
                };
                let Some(service) = self.service.clone() else {
                    let err = ContactError::Unexpected("contact service unavailable".into());
                    self.contact.finish(SubmissionResult::failed(&err));
                    return Task::none();
                };
                return Task::perform(
                    async move { service.submit(&payload).await },
                    Message::ContactSubmitted,
                );
            }
            Message::ContactSubmitted(result) => self.contact.finish(result),
        }
        Task::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = Vec::new();
        if self.host.frame_requested() {
            subscriptions.push(window::frames().map(Message::Frame));
        }
        if self.host.is_attached(ListenerKind::Resize) {
            subscriptions.push(event::listen_with(resize_event));
        }
        if self.host.is_attached(ListenerKind::PointerMove) {
            subscriptions.push(event::listen_with(cursor_event));
        }
        if self.host.is_attached(ListenerKind::TouchMove) {
            subscriptions.push(event::listen_with(finger_event));
        }
        Subscription::batch(subscriptions)
    }

    fn theme(&self) -> Theme {
        app_theme_with_mode(self.config.theme)
    }

    fn view(&self) -> Element<'_, Message> {
        let pal = palette_from_mode(self.config.theme);

        let mut layers: Vec<Element<'_, Message>> = Vec::new();
        if let Some(hero) = &self.hero {
            layers.push(layer_canvas(hero));
        }
        layers.push(layer_canvas(&self.ambient));
        if let Some(trail) = &self.trail {
            layers.push(layer_canvas(trail));
        }

        let page = match self.page {
            Page::Home => self.home_page(pal),
            Page::Contact => self.contact_page(pal),
        };
        layers.push(
            column![self.top_bar(pal), page]
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
        );

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn top_bar(&self, pal: PaletteColors) -> Element<'_, Message> {
        let nav = |label: &'static str, page: Page| {
            button(text(label).size(BODY_TEXT_SIZE))
                .on_press(Message::Navigate(page))
                .padding([6, 14])
                .style(nav_button_style(pal, self.page == page))
        };
        let theme_label = if self.config.theme.is_dark() {
            "Light mode"
        } else {
            "Dark mode"
        };

        container(
            row![
                text("Folio").size(22).color(pal.accent),
                Space::new().width(Length::Fill),
                nav("Home", Page::Home),
                nav("Contact", Page::Contact),
                button(text(theme_label).size(BODY_TEXT_SIZE))
                    .on_press(Message::ToggleTheme)
                    .padding([6, 14])
                    .style(nav_button_style(pal, false)),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
        )
        .padding([12, 24])
        .width(Length::Fill)
        .style(top_bar_style(pal))
        .into()
    }

    fn home_page(&self, pal: PaletteColors) -> Element<'_, Message> {
        let intro = column![
            text("Building software that feels alive")
                .size(HERO_TITLE_SIZE)
                .color(pal.text),
            text("Systems, tools and interfaces. Move the pointer around and say hello.")
                .size(BODY_TEXT_SIZE)
                .color(pal.muted),
            button(text("Get in touch").size(BODY_TEXT_SIZE))
                .on_press(Message::Navigate(Page::Contact))
                .padding([12, 28])
                .style(primary_button_style(pal)),
        ]
        .spacing(24)
        .max_width(HERO_MAX_WIDTH)
        .align_x(Alignment::Center);

        container(intro)
            .padding(CONTENT_PADDING)
            .center(Length::Fill)
            .into()
    }

    fn contact_page(&self, pal: PaletteColors) -> Element<'_, Message> {
        let busy = self.contact.is_submitting();
        let failed = matches!(self.contact.status(), FormStatus::Failed(_));

        let field = |placeholder: &str, value: &str, kind: Field, invalid: bool| {
            form_field(pal, placeholder, value, kind, failed && invalid)
        };
        let blank = |value: &str| value.trim().is_empty();

        let submit_label = if busy { "Sending..." } else { "Send message" };
        let mut form = column![
            text("Get in touch").size(PAGE_TITLE_SIZE).color(pal.text),
            text("All fields are required.")
                .size(HINT_TEXT_SIZE)
                .color(pal.muted),
            field("Name", &self.contact.name, Field::Name, blank(&self.contact.name)),
            field(
                "Email",
                &self.contact.email,
                Field::Email,
                !is_valid_email(self.contact.email.trim()),
            ),
            field(
                "Subject",
                &self.contact.subject,
                Field::Subject,
                blank(&self.contact.subject)
            ),
            field(
                "Message",
                &self.contact.message,
                Field::Message,
                blank(&self.contact.message)
            ),
            button(text(submit_label).size(BODY_TEXT_SIZE))
                .on_press_maybe((!busy).then_some(Message::SubmitContact))
                .padding([12, 28])
                .style(primary_button_style(pal)),
        ]
        .spacing(14);

        let banner = match self.contact.status() {
            FormStatus::Sent => Some(("Thanks! Your message has been sent.".to_string(), true)),
            FormStatus::Failed(message) => Some((message.clone(), false)),
            FormStatus::Editing | FormStatus::Submitting => None,
        };
        if let Some((message, success)) = banner {
            form = form.push(
                container(text(message).size(BODY_TEXT_SIZE))
                    .padding(12)
                    .width(Length::Fill)
                    .style(status_banner_style(pal, success)),
            );
        }

        container(
            container(form)
                .padding(CONTENT_PADDING)
                .max_width(FORM_MAX_WIDTH)
                .style(card_style(pal)),
        )
        .padding(CONTENT_PADDING)
        .center(Length::Fill)
        .into()
    }
}

fn form_field<'a>(
    pal: PaletteColors,
    placeholder: &str,
    value: &str,
    kind: Field,
    invalid: bool,
) -> Element<'a, Message> {
    text_input(placeholder, value)
        .on_input(move |value| Message::FieldChanged(kind, value))
        .padding(12)
        .size(BODY_TEXT_SIZE)
        .style(input_style(pal, invalid))
        .into()
}

fn layer_canvas(layer: &ParticleLayer) -> Element<'_, Message> {
    Canvas::new(ParticleCanvas::<Message>::new(layer))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn resize_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    }
}

fn cursor_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(position))
        }
        _ => None,
    }
}

fn finger_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            Some(Message::FingerMoved(position))
        }
        _ => None,
    }
}

fn main() -> iced::Result {
    if let Err(err) = init_logging() {
        eprintln!("{err}");
    }

    iced::application(App::init, App::update, App::view)
        .title("Folio")
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .run()
}
