use super::*;

impl CourseApp {
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Aviso modal con el resultado del quiz; bloquea hasta pulsar OK
    pub fn show_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.alert.clone() else {
            return;
        };
        let modal = egui::Modal::new(egui::Id::new("outcome_alert")).show(ctx, |ui| {
            ui.set_width(320.0);
            ui.label(&message);
            ui.add_space(12.0);
            ui.vertical_centered(|ui| ui.button("OK").clicked()).inner
        });
        if modal.inner || modal.should_close() {
            self.dismiss_alert();
        }
    }
}
