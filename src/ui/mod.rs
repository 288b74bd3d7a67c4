mod helpers;
pub mod layout;
pub mod views;

use crate::app::CourseApp;
use crate::model::Section;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, prompt_banner, top_panel};

impl App for CourseApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = ctx.input(|i| i.time);
        self.on_frame(now);

        // MENÚ SUPERIOR (enlaces a cada sección)
        top_panel(self, ctx);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Banner del quiz gate, visible desde cualquier sección
        prompt_banner(self, ctx);

        // Dispatch por sección
        match self.section {
            Section::Video => views::video::ui_video(self, ctx),
            Section::Infographic => views::infographic::ui_infographic(self, ctx, now),
            Section::Calculators => views::calculators::ui_calculators(self, ctx),
            Section::Quiz => views::quiz::ui_quiz(self, ctx),
        }

        if self.alert.is_some() {
            self.show_alert(ctx);
        }

        if self.needs_repaint(now) {
            ctx.request_repaint();
        }
    }
}
