//! Application shell hosting a single [`date_picker::DatePickerButton`].

use date_picker::{DatePicker, DatePickerButton};
use egui::{Button, Color32, RichText};

const PRIMARY: Color32 = Color32::from_rgb(37, 99, 235);

#[derive(Default)]
pub struct DatePickerApp {
    picker: DatePicker,
}

impl DatePickerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    pub fn picker(&self) -> &DatePicker {
        &self.picker
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.heading(RichText::new("Hello World").strong().color(PRIMARY));
            ui.label("A small egui app with a calendar date picker.");
            ui.add_space(12.0);

            if ui
                .add(DatePickerButton::new(&mut self.picker).id_salt("app_date_picker"))
                .changed()
            {
                log::info!("Picked {:?}", self.picker.selected());
            }
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                _ = ui.add(
                    Button::new(RichText::new("Primary").color(Color32::WHITE)).fill(PRIMARY),
                );
                _ = ui.button("Secondary");
            });
        });
    }
}

impl eframe::App for DatePickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| self.ui(ui));
    }
}
