//! Frame UI
//!
//! The whole interface is one button, centered both ways in the window.

use tinyfront_core::GreetingAction;

/// Label of the greeting button.
pub const BUTTON_LABEL: &str = "Say Hello";

/// Minimum size of the greeting button, in logical pixels.
pub const BUTTON_SIZE: egui::Vec2 = egui::Vec2::new(240.0, 80.0);

/// Point size of the button label.
pub const BUTTON_TEXT_SIZE: f32 = 24.0;

/// Draws one frame of the UI.
///
/// Runs inside the egui pass on the GUI thread, so the click handler may
/// invoke the greeting synchronously.
pub fn draw(ctx: &egui::Context, greeting: &GreetingAction) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let free_height = (ui.available_height() - BUTTON_SIZE.y).max(0.0);
        ui.add_space(free_height / 2.0);
        ui.vertical_centered(|ui| {
            let label = egui::RichText::new(BUTTON_LABEL)
                .size(BUTTON_TEXT_SIZE)
                .strong();
            let button = egui::Button::new(label).min_size(BUTTON_SIZE);
            if ui.add(button).clicked() {
                greeting.invoke();
            }
        });
    });
}
