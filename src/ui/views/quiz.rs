use egui::{Color32, Context, RichText, ScrollArea};
use crate::CourseApp;
use crate::ui::helpers::big_button;
use crate::ui::layout::simple_panel;

pub fn ui_quiz(app: &mut CourseApp, ctx: &Context) {
    simple_panel(ctx, 650.0, egui::Margin::symmetric(24, 16), |ui| {
        ui.heading("📝 Chapter Quiz");
        ui.add_space(10.0);

        let Some(form) = app.quiz_form.as_mut() else {
            ui.label("Open the quiz from the menu to start.");
            return;
        };

        let mut clicked: Option<(usize, usize)> = None;
        ScrollArea::vertical()
            .max_height((ui.available_height() - 120.0).max(200.0))
            .show(ui, |ui| {
                for (gi, group) in form.groups.iter().enumerate() {
                    ui.label(RichText::new(&group.heading).strong());
                    for (oi, option) in group.options.iter().enumerate() {
                        if ui.radio(group.selected == Some(oi), option).clicked() {
                            clicked = Some((gi, oi));
                        }
                    }
                    ui.add_space(10.0);
                }
            });
        if let Some((gi, oi)) = clicked {
            form.select(gi, oi);
        }

        ui.add_space(8.0);
        let width = ui.available_width();
        if big_button(ui, "Submit", width, 36.0, true) {
            app.submit_quiz();
        }

        if let Some(result) = app.last_score {
            ui.add_space(8.0);
            let color = if result.percentage >= app.config.pass_threshold {
                Color32::GREEN
            } else {
                Color32::RED
            };
            ui.label(
                RichText::new(format!("Your score: {}%", result.percentage))
                    .color(color)
                    .heading(),
            );
        }
    });
}
