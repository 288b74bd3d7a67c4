use egui::{Align2, Color32, Context, FontId, ProgressBar, Sense, vec2};
use crate::CourseApp;
use crate::ui::helpers::big_button;
use crate::ui::layout::simple_panel;

fn mmss(secs: f64) -> String {
    let total = secs.max(0.0) as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

pub fn ui_video(app: &mut CourseApp, ctx: &Context) {
    simple_panel(ctx, 720.0, egui::Margin::symmetric(16, 16), |ui| {
        ui.heading(&app.config.video_title);
        ui.add_space(10.0);

        // "Pantalla" del reproductor
        let width = ui.available_width();
        let (rect, _) = ui.allocate_exact_size(vec2(width, width * 9.0 / 16.0), Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 8.0, Color32::from_rgb(16, 18, 31));
        let icon = if app.video.is_paused() { "▶" } else { "⏸" };
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            icon,
            FontId::proportional(48.0),
            Color32::WHITE,
        );

        ui.add_space(8.0);
        let current = app.video.current_time();
        let duration = app.video.duration();
        let fraction = if duration > 0.0 { (current / duration) as f32 } else { 0.0 };
        ui.add(ProgressBar::new(fraction).text(format!("{} / {}", mmss(current), mmss(duration))));

        ui.add_space(8.0);
        let btn_w = (width - 8.0) / 2.0;
        ui.horizontal(|ui| {
            let label = if app.video.is_paused() { "▶ Play" } else { "⏸ Pause" };
            if big_button(ui, label, btn_w, 36.0, true) {
                app.toggle_playback();
            }
            if big_button(ui, "⟲ Restart", btn_w, 36.0, true) {
                app.restart_video();
            }
        });
    });
}
