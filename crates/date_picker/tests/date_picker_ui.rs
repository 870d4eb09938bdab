use chrono::{Month, NaiveDate};
use date_picker::{DatePicker, DatePickerButton};
use egui::{Event, Modifiers, PointerButton, Pos2, pos2};
use egui_kittest::Harness;
use egui_kittest::kittest::Queryable as _;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A 400×400 harness with a picker showing January 2024 in the top-left corner.
fn harness() -> Harness<'static, DatePicker> {
    Harness::builder()
        .with_size((400.0, 400.0))
        .build_ui_state(
            |ui, picker: &mut DatePicker| {
                ui.add(DatePickerButton::new(picker));
            },
            DatePicker::starting_at(ymd(2024, 1, 15)),
        )
}

fn open(harness: &mut Harness<'_, DatePicker>) {
    harness.get_by_label("Select date").click();
    harness.run();
    assert!(harness.state().is_open(), "Clicking the field should open the popup");
}

/// Press and release the primary button at `pos` using raw pointer events.
fn click_at(harness: &mut Harness<'_, DatePicker>, pos: Pos2) {
    let events = &mut harness.input_mut().events;
    events.push(Event::PointerMoved(pos));
    for pressed in [true, false] {
        events.push(Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        });
    }
    harness.run();
}

#[test]
fn popup_is_hidden_until_the_field_is_clicked() {
    let mut harness = harness();
    assert!(harness.query_by_label("Today").is_none());
    assert!(!harness.state().is_open());

    open(&mut harness);
    harness.get_by_label("Today");
    harness.get_by_label("January");
    harness.get_by_label("2024");
    harness.get_by_label("Su");
    harness.get_by_label("Sa");
}

#[test]
fn clicking_the_field_again_closes_the_popup() {
    let mut harness = harness();
    open(&mut harness);

    harness.get_by_label("Select date").click();
    harness.run();
    assert!(!harness.state().is_open());
    assert!(harness.query_by_label("Today").is_none());
}

#[test]
fn picking_a_day_selects_it_and_closes() {
    let mut harness = harness();
    open(&mut harness);

    // Only January has a 20th in this grid.
    harness.get_by_label("20").click();
    harness.run();

    assert_eq!(harness.state().selected(), Some(ymd(2024, 1, 20)));
    assert!(!harness.state().is_open());
    harness.get_by_label("1/20/2024");
    assert!(harness.query_by_label("Select date").is_none());
}

#[test]
fn arrows_page_through_months() {
    let mut harness = harness();
    open(&mut harness);

    harness.get_by_label("‹").click();
    harness.run();
    harness.get_by_label("December");
    harness.get_by_label("2023");
    assert_eq!(harness.state().visible_month(), Month::December);
    assert_eq!(harness.state().visible_year(), 2023);

    harness.get_by_label("›").click();
    harness.run();
    harness.get_by_label("›").click();
    harness.run();
    harness.get_by_label("February");
    assert_eq!(harness.state().visible_year(), 2024);
    assert!(harness.state().is_open(), "Navigating keeps the popup open");
}

#[test]
fn today_button_selects_today_and_closes() {
    let mut harness = harness();
    open(&mut harness);

    harness.get_by_label("Today").click();
    harness.run();

    let picker = harness.state();
    let today = date_picker::local_today();
    let selected = picker.selected().unwrap();
    assert!(
        selected == today || selected.succ_opt() == Some(today),
        "Expected today, got {selected}"
    );
    assert!(!picker.is_open());
}

#[test]
fn click_outside_dismisses_the_popup() {
    let mut harness = harness();
    open(&mut harness);

    click_at(&mut harness, pos2(395.0, 395.0));

    assert!(!harness.state().is_open());
    assert_eq!(harness.state().selected(), None);
    assert!(harness.query_by_label("Today").is_none());
}

#[test]
fn click_inside_the_popup_keeps_it_open() {
    let mut harness = harness();
    open(&mut harness);

    let header = harness.get_by_label("January").rect().center();
    click_at(&mut harness, header);

    assert!(harness.state().is_open());
    harness.get_by_label("Today");
}

#[test]
fn custom_format_and_placeholder() {
    let mut harness = Harness::new_ui_state(
        |ui, picker: &mut DatePicker| {
            ui.add(
                DatePickerButton::new(picker)
                    .format("%Y-%m-%d")
                    .placeholder("Pick a day"),
            );
        },
        DatePicker::starting_at(ymd(2024, 3, 1)),
    );

    harness.get_by_label("Pick a day");

    harness.state_mut().jump_to_today();
    harness.run();
    let today = harness.state().selected().unwrap();
    harness.get_by_label(&today.format("%Y-%m-%d").to_string());
}
