//! The color picker state machine.
//!
//! A [`Picker`] edits one field at a time. The host reports what happened
//! through [`Event`]s and writes back whatever [`PickerMessage`]s come out of
//! [`Picker::handle`]: `ColorChanged` carries the field's new value while the
//! user is editing, `Committed` is sent once on close when the value differs
//! from the one the picker opened with.

mod active;
pub mod placement;
mod state;


pub use active::ActiveColor;
pub use placement::{Placement, PlacementRequest, Rect, ScrollContainer, Size, place};
pub use state::{DragTarget, PickerState};

use tinct_color::{
    ColorFormat, ColorNormalizer, CssNormalizer, Direction, Point, clamp_to_area, detect_format,
    hsva_to_position, nudge, parse_color_string_with, position_to_hsva,
};

use crate::config::{PickerConfig, PickerOptions};
use crate::constants::{ALPHA_STEPS, HUE_MAX};
use crate::event::{Event, FieldId, Key, PickerLayout, Target};
use crate::message::PickerMessage;

/// Editing session for the field the picker is bound to.
#[derive(Debug, Clone)]
struct Session {
    field: FieldId,
    /// Field value when the picker opened
    original: String,
    /// Field value as last written
    value: String,
    /// Format the field was in, or the one the user toggled to
    format: ColorFormat,
    layout: PickerLayout,
    /// Marker position, local to the gradient area
    marker: Point,
    /// Hue slider, 0-360
    hue: f64,
    /// Alpha slider, 0.0-1.0
    alpha: f64,
}

/// A headless color picker.
#[derive(Debug)]
pub struct Picker<N = CssNormalizer> {
    config: PickerConfig,
    normalizer: N,
    color: ActiveColor,
    state: PickerState,
    session: Option<Session>,
    /// Contents of the picker's own text box
    text: String,
}

impl Picker<CssNormalizer> {
    /// Create a picker using the built-in CSS normalizer.
    pub fn new(config: PickerConfig) -> Self {
        Self::with_normalizer(config, CssNormalizer)
    }
}

impl Default for Picker<CssNormalizer> {
    fn default() -> Self {
        Self::new(PickerConfig::default())
    }
}

impl<N: ColorNormalizer> Picker<N> {
    /// Create a picker that resolves color strings with `normalizer`.
    pub fn with_normalizer(config: PickerConfig, normalizer: N) -> Self {
        let mut picker = Self {
            config,
            normalizer,
            color: ActiveColor::default(),
            state: PickerState::Closed,
            session: None,
            text: String::new(),
        };
        picker.reset_to_default_color();
        picker
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Apply a partial configuration update.
    pub fn configure(&mut self, options: PickerOptions) {
        let default_changed = options.default_color.is_some();
        self.config.apply(options);

        if default_changed && self.session.is_none() {
            self.reset_to_default_color();
        } else {
            self.update_text();
        }
    }

    pub fn state(&self) -> PickerState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn color(&self) -> &ActiveColor {
        &self.color
    }

    /// Contents of the picker's text box.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The field being edited, if open.
    pub fn field(&self) -> Option<&FieldId> {
        self.session.as_ref().map(|session| &session.field)
    }

    /// Current value of the field being edited, if open.
    pub fn field_value(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.value.as_str())
    }

    /// Marker position inside the gradient area, if open.
    pub fn marker(&self) -> Option<Point> {
        self.session.as_ref().map(|session| session.marker)
    }

    /// Hue slider position in degrees.
    pub fn hue(&self) -> f64 {
        self.session
            .as_ref()
            .map_or(self.color.hsva().h, |session| session.hue)
    }

    /// Alpha slider position, 0.0-1.0.
    pub fn alpha(&self) -> f64 {
        self.session
            .as_ref()
            .map_or(self.color.rgba().a, |session| session.alpha)
    }

    /// Where to put the picker for a field, using the configured margin.
    pub fn placement(&self, request: &PlacementRequest) -> Placement {
        place(request, self.config.margin)
    }

    /// Bind the picker to a field and show it.
    pub fn open(
        &mut self,
        field: FieldId,
        value: impl Into<String>,
        layout: PickerLayout,
    ) -> Vec<PickerMessage> {
        self.handle(Event::Open {
            field,
            value: value.into(),
            layout,
        })
    }

    /// Close the picker, optionally restoring the field's original value.
    pub fn close(&mut self, revert: bool) -> Vec<PickerMessage> {
        self.handle(Event::Close { revert })
    }

    /// Run one event to completion and return the resulting notifications.
    pub fn handle(&mut self, event: Event) -> Vec<PickerMessage> {
        let mut messages = Vec::new();

        match event {
            Event::Open {
                field,
                value,
                layout,
            } => self.open_session(field, value, layout, &mut messages),
            event if !self.state.is_open() => {
                log::trace!("Picker: ignoring {:?} while closed", event);
            }
            Event::PointerPressed { target, position } => {
                self.pointer_pressed(target, position, &mut messages)
            }
            Event::PointerMoved { position } => self.pointer_moved(position, &mut messages),
            Event::PointerReleased => {
                if let Some(target) = self.state.dragging() {
                    log::debug!("Picker: stopped dragging {:?}", target);
                }
                self.state.stop_drag();
            }
            Event::KeyPressed { key } => self.key_pressed(key, &mut messages),
            Event::HueChanged { hue } => self.set_hue(hue, &mut messages),
            Event::AlphaChanged { alpha } => self.set_alpha(alpha, &mut messages),
            Event::TextCommitted { value } => {
                self.set_color_from_str(&value);
                self.pick_color(&mut messages);
            }
            Event::SwatchClicked { index } => match self.config.swatches.get(index).cloned() {
                Some(swatch) => {
                    self.set_color_from_str(&swatch);
                    self.pick_color(&mut messages);
                }
                None => log::warn!("Picker: no swatch at index {}", index),
            },
            Event::FormatToggled { format } => {
                if let Some(session) = self.session.as_mut() {
                    session.format = format;
                }
                self.update_text();
                self.pick_color(&mut messages);
            }
            Event::ClearClicked => {
                if self.config.clear_button.show {
                    self.write_field(String::new(), &mut messages);
                    self.close_session(false, &mut messages);
                } else {
                    log::debug!("Picker: clear button is hidden, ignoring click");
                }
            }
            Event::PreviewClicked => {
                self.pick_color(&mut messages);
                self.close_session(false, &mut messages);
            }
            Event::Close { revert } => self.close_session(revert, &mut messages),
        }

        messages
    }

    fn open_session(
        &mut self,
        field: FieldId,
        value: String,
        layout: PickerLayout,
        messages: &mut Vec<PickerMessage>,
    ) {
        self.close_session(false, messages);

        log::debug!("Picker: opening on field '{}' with {:?}", field, value);

        self.session = Some(Session {
            field: field.clone(),
            format: detect_format(&value),
            original: value.clone(),
            value: value.clone(),
            layout,
            marker: Point::default(),
            hue: 0.0,
            alpha: 1.0,
        });
        self.state = PickerState::Open { dragging: None };
        self.set_color_from_str(&value);

        messages.push(PickerMessage::Opened { field });
    }

    fn close_session(&mut self, revert: bool, messages: &mut Vec<PickerMessage>) {
        let Some(mut session) = self.session.take() else {
            return;
        };
        self.state = PickerState::Closed;

        if revert && session.value != session.original {
            session.value = session.original.clone();
            messages.push(PickerMessage::ColorChanged {
                field: session.field.clone(),
                value: session.value.clone(),
            });
        }

        if session.value != session.original {
            messages.push(PickerMessage::Committed {
                field: session.field.clone(),
                value: session.value.clone(),
            });
        }

        log::debug!(
            "Picker: closed field '{}' (revert={}) with {:?}",
            session.field,
            revert,
            session.value
        );
        messages.push(PickerMessage::Closed {
            field: session.field,
        });
    }

    fn pointer_pressed(
        &mut self,
        target: Target,
        position: Point,
        messages: &mut Vec<PickerMessage>,
    ) {
        match target {
            Target::Gradient => {
                self.start_drag(DragTarget::Gradient);
                self.move_marker(position, messages);
            }
            Target::Marker => self.start_drag(DragTarget::Gradient),
            Target::HueSlider => {
                self.start_drag(DragTarget::Hue);
                self.drag_hue(position, messages);
            }
            Target::AlphaSlider => {
                self.start_drag(DragTarget::Alpha);
                self.drag_alpha(position, messages);
            }
            Target::Picker => {}
            Target::Outside => self.close_session(false, messages),
        }
    }

    fn pointer_moved(&mut self, position: Point, messages: &mut Vec<PickerMessage>) {
        match self.state.dragging() {
            Some(DragTarget::Gradient) => self.move_marker(position, messages),
            Some(DragTarget::Hue) => self.drag_hue(position, messages),
            Some(DragTarget::Alpha) => self.drag_alpha(position, messages),
            None => {}
        }
    }

    fn key_pressed(&mut self, key: Key, messages: &mut Vec<PickerMessage>) {
        if key == Key::Escape {
            self.close_session(true, messages);
        } else if let Some(direction) = key.direction() {
            self.nudge_marker(direction, messages);
        }
    }

    fn start_drag(&mut self, target: DragTarget) {
        log::debug!("Picker: started dragging {:?}", target);
        self.state.start_drag(target);
    }

    /// Move the marker to a page position and take the color under it.
    fn move_marker(&mut self, position: Point, messages: &mut Vec<PickerMessage>) {
        if let Some(session) = self.session.as_mut() {
            let layout = session.layout;
            session.marker = clamp_to_area(
                position.x,
                position.y,
                &layout.gradient,
                layout.scroll_top,
            );
        }
        self.set_color_at_marker(messages);
    }

    fn nudge_marker(&mut self, direction: Direction, messages: &mut Vec<PickerMessage>) {
        if let Some(session) = self.session.as_mut() {
            session.marker = nudge(session.marker, direction, &session.layout.gradient);
        }
        self.set_color_at_marker(messages);
    }

    fn drag_hue(&mut self, position: Point, messages: &mut Vec<PickerMessage>) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let ratio = session.layout.hue_track.horizontal_ratio(position.x);
        self.set_hue((ratio * HUE_MAX).round(), messages);
    }

    fn drag_alpha(&mut self, position: Point, messages: &mut Vec<PickerMessage>) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let ratio = session.layout.alpha_track.horizontal_ratio(position.x);
        self.set_alpha((ratio * ALPHA_STEPS).round() / ALPHA_STEPS, messages);
    }

    fn set_hue(&mut self, hue: f64, messages: &mut Vec<PickerMessage>) {
        if let Some(session) = self.session.as_mut() {
            session.hue = if hue.is_nan() { 0.0 } else { hue.clamp(0.0, HUE_MAX) };
        }
        self.set_color_at_marker(messages);
    }

    fn set_alpha(&mut self, alpha: f64, messages: &mut Vec<PickerMessage>) {
        self.color.set_alpha(alpha);
        if let Some(session) = self.session.as_mut() {
            session.alpha = self.color.rgba().a;
        }
        self.update_text();
        self.pick_color(messages);
    }

    /// Recompute the color from the marker, hue slider and alpha slider.
    fn set_color_at_marker(&mut self, messages: &mut Vec<PickerMessage>) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let hsva = position_to_hsva(
            session.marker.x,
            session.marker.y,
            &session.layout.gradient,
            // The slider reaches 360, the color's hue stays in [0, 360)
            session.hue.rem_euclid(HUE_MAX),
            session.alpha,
        );
        log::trace!("Picker: color at marker {:?} is {:?}", session.marker, hsva);

        self.color = ActiveColor::from_hsva(hsva);
        self.update_text();
        self.pick_color(messages);
    }

    /// Parse a string into the active color and move every control to match.
    fn set_color_from_str(&mut self, input: &str) {
        let rgba = parse_color_string_with(input, &self.normalizer, self.config.alpha_rounding);
        self.color = ActiveColor::from_rgba(rgba);

        let hsva = self.color.hsva();
        if let Some(session) = self.session.as_mut() {
            session.hue = hsva.h;
            session.alpha = hsva.a;
            session.marker = hsva_to_position(hsva, &session.layout.gradient);
        }
        self.update_text();
    }

    fn reset_to_default_color(&mut self) {
        let default_color = self.config.default_color.clone();
        self.set_color_from_str(&default_color);
    }

    /// Reformat the text box from the active color.
    fn update_text(&mut self) {
        let detected = self
            .session
            .as_ref()
            .map_or(ColorFormat::default(), |session| session.format);
        let format = self.config.format.resolve(self.color.rgba().a, detected);
        self.text = self.color.format(format, self.config.format_options());
    }

    /// Copy the text box into the bound field.
    fn pick_color(&mut self, messages: &mut Vec<PickerMessage>) {
        let text = self.text.clone();
        self.write_field(text, messages);
    }

    fn write_field(&mut self, value: String, messages: &mut Vec<PickerMessage>) {
        if let Some(session) = self.session.as_mut() {
            session.value = value.clone();
            messages.push(PickerMessage::ColorChanged {
                field: session.field.clone(),
                value,
            });
        }
    }
}
