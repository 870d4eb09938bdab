use egui::{Area, Button, Frame, InnerResponse, Order, Response, RichText, Ui, Widget, vec2};

use super::{DatePicker, popup::DatePickerPopup};

const FIELD_WIDTH: f32 = 176.0;
const POPUP_WIDTH: f32 = 256.0;

/// Shows the selected date, and opens a calendar popup when clicked.
///
/// ```
/// # egui::__run_test_ui(|ui| {
/// # let mut picker = date_picker::DatePicker::new();
/// ui.add(date_picker::DatePickerButton::new(&mut picker));
/// # });
/// ```
pub struct DatePickerButton<'a> {
    picker: &'a mut DatePicker,
    id_salt: Option<&'a str>,
    format: String,
    placeholder: String,
    show_icon: bool,
}

impl<'a> DatePickerButton<'a> {
    pub fn new(picker: &'a mut DatePicker) -> Self {
        Self {
            picker,
            id_salt: None,
            format: "%-m/%-d/%Y".to_owned(),
            placeholder: "Select date".to_owned(),
            show_icon: false,
        }
    }

    /// Add id source.
    /// Must be set if multiple date pickers are in the same Ui.
    #[inline]
    pub fn id_salt(mut self, id_salt: &'a str) -> Self {
        self.id_salt = Some(id_salt);
        self
    }

    /// Change the format of the selected date. (Default: `%-m/%-d/%Y`)
    /// See [`chrono::format::strftime`] for valid formats.
    #[inline]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Text shown while no date is selected. (Default: `Select date`)
    #[inline]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Show a calendar icon after the date. (Default: false)
    #[inline]
    pub fn show_icon(mut self, show_icon: bool) -> Self {
        self.show_icon = show_icon;
        self
    }
}

impl Widget for DatePickerButton<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let Self {
            picker,
            id_salt,
            format,
            placeholder,
            show_icon,
        } = self;
        let id = ui.make_persistent_id(id_salt);

        let label = match picker.selected() {
            Some(date) => date.format(&format).to_string(),
            None => placeholder,
        };
        let label = if show_icon {
            format!("{label} 📆")
        } else {
            label
        };
        let mut text = RichText::new(label);
        if picker.selected().is_none() {
            text = text.weak();
        }

        let visuals = ui.visuals().widgets.open;
        let mut button = Button::new(text).min_size(vec2(FIELD_WIDTH, 0.0));
        if picker.is_open() {
            button = button.fill(visuals.weak_bg_fill).stroke(visuals.bg_stroke);
        }
        let mut button_response = ui.add(button);
        if button_response.clicked() {
            picker.toggle_open();
        }

        if picker.is_open() {
            let selected_before = picker.selected();

            let mut pos =
                button_response.rect.left_bottom() + vec2(0.0, ui.spacing().item_spacing.y);
            let width_with_padding = POPUP_WIDTH
                + ui.style().spacing.window_margin.leftf()
                + ui.style().spacing.window_margin.rightf();
            if pos.x + width_with_padding > ui.clip_rect().right() {
                pos.x = button_response.rect.right() - width_with_padding;
            }
            pos.x = pos.x.max(ui.style().spacing.window_margin.leftf());

            let InnerResponse {
                response: area_response,
                ..
            } = Area::new(id.with("popup"))
                .kind(egui::UiKind::Picker)
                .order(Order::Foreground)
                .fixed_pos(pos)
                .show(ui.ctx(), |ui| {
                    Frame::popup(ui.style()).show(ui, |ui| {
                        ui.set_min_width(POPUP_WIDTH);
                        ui.set_max_width(POPUP_WIDTH);
                        DatePickerPopup {
                            picker: &mut *picker,
                            id,
                        }
                        .draw(ui);
                    })
                });

            // Only looked at while we are being drawn, so the listener goes away with the widget.
            if !button_response.clicked()
                && ui.input(|i| i.pointer.any_click())
                && let Some(pos) = ui.input(|i| i.pointer.interact_pos())
            {
                picker.dismiss_if_outside(&[button_response.rect, area_response.rect], pos);
            }

            if picker.selected() != selected_before {
                button_response.mark_changed();
            }
        }

        button_response
    }
}
