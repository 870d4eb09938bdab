use chrono::Datelike as _;
use egui::{Align, Button, Color32, Grid, Id, Layout, RichText, Ui, vec2};

use crate::{
    DatePicker,
    calendar::{CalendarDay, WEEKDAY_LABELS, month_name},
    state::Navigation,
};

const DAY_SIZE: f32 = 28.0;

/// What the user asked for this frame. Applied once drawing is done.
enum Action {
    Navigate(Navigation),
    Select(CalendarDay),
    Today,
}

pub(crate) struct DatePickerPopup<'a> {
    pub picker: &'a mut DatePicker,
    pub id: Id,
}

impl DatePickerPopup<'_> {
    pub fn draw(self, ui: &mut Ui) {
        let Self { picker, id } = self;
        let view: &DatePicker = picker;
        let mut action = None;

        ui.spacing_mut().item_spacing = vec2(2.0, 2.0);

        ui.columns(3, |columns| {
            if columns[0]
                .button("‹")
                .on_hover_text("Previous month")
                .clicked()
            {
                action = Some(Action::Navigate(Navigation::Previous));
            }

            columns[1].vertical_centered(|ui| {
                ui.label(RichText::new(view.visible_year().to_string()).small().weak());
                ui.label(RichText::new(month_name(view.visible_month())).strong());
            });

            columns[2].with_layout(Layout::right_to_left(Align::Min), |ui| {
                if ui.button("›").on_hover_text("Next month").clicked() {
                    action = Some(Action::Navigate(Navigation::Next));
                }
            });
        });

        ui.add_space(4.0);

        Grid::new(id.with("days"))
            .num_columns(7)
            .min_col_width(DAY_SIZE)
            .spacing(vec2(4.0, 4.0))
            .show(ui, |ui| {
                for name in WEEKDAY_LABELS {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(name).small().weak());
                    });
                }
                ui.end_row();

                for week in view.grid().weeks() {
                    for day in week {
                        if day_button(ui, view, day).clicked() {
                            action = Some(Action::Select(*day));
                        }
                    }
                    ui.end_row();
                }
            });

        ui.add_space(4.0);

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("Today").clicked() {
                action = Some(Action::Today);
            }
        });

        match action {
            Some(Action::Navigate(direction)) => picker.navigate(direction),
            Some(Action::Select(day)) => picker.select(day),
            Some(Action::Today) => picker.jump_to_today(),
            None => {}
        }
    }
}

fn day_button(ui: &mut Ui, picker: &DatePicker, day: &CalendarDay) -> egui::Response {
    let selected = picker.is_selected(day);

    let mut text = RichText::new(day.date.day().to_string());
    let fill = if selected {
        text = text.color(ui.visuals().selection.stroke.color);
        ui.visuals().selection.bg_fill
    } else {
        Color32::TRANSPARENT
    };

    let button = Button::new(text)
        .fill(fill)
        .corner_radius(DAY_SIZE / 2.0)
        .min_size(vec2(DAY_SIZE, DAY_SIZE));

    // Days of the neighboring months are shown greyed out and can't be picked.
    ui.add_enabled(day.in_displayed_month, button)
}
