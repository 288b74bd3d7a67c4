use egui::{CentralPanel, Color32, Context, Frame, RichText, Ui, Visuals};
use crate::CourseApp;
use crate::model::Section;

pub fn top_panel(app: &mut CourseApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.heading("💰 Financial Literacy Course");
            ui.add_space(16.0);
            for section in Section::ALL {
                let selected = app.section == section;
                if ui.selectable_label(selected, section.label()).clicked() {
                    app.open_section(section);
                }
            }
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.weak(format!("v{}", env!("CARGO_PKG_VERSION")));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // un solo botón que alterna el tema
                let dark = ctx.style().visuals.dark_mode;
                let label = if dark { "☀ Light mode" } else { "🌙 Dark mode" };
                if ui.button(label).clicked() {
                    ctx.set_visuals(if dark { Visuals::light() } else { Visuals::dark() });
                }
            });
        });
    });
}

/// Banner del aviso del quiz, encima del panel central
pub fn prompt_banner(app: &CourseApp, ctx: &Context) {
    let Some(text) = &app.prompt_message else {
        return;
    };
    egui::TopBottomPanel::top("quiz_prompt").show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("⏸ {text}"))
                    .color(Color32::YELLOW)
                    .heading()
                    .strong(),
            );
            ui.add_space(6.0);
        });
    });
}

/// Panel centrado horizontalmente con un ancho de contenido máximo
pub fn simple_panel(
    ctx: &Context,
    max_width: f32,
    margin: egui::Margin,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        let w = ui.available_width().min(max_width);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(margin)
                .show(ui, |ui| {
                    ui.set_width(w);
                    inner(ui);
                });
        });
    });
}
