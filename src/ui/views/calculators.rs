use egui::{Context, Grid};
use crate::CourseApp;
use crate::ui::helpers::{big_button, number_field, result_area};
use crate::ui::layout::simple_panel;

pub fn ui_calculators(app: &mut CourseApp, ctx: &Context) {
    simple_panel(ctx, 560.0, egui::Margin::symmetric(24, 16), |ui| {
        let width = ui.available_width();

        // ---------- PRÉSTAMO ----------
        ui.heading("🏠 Loan Calculator");
        ui.add_space(6.0);
        Grid::new("loan_grid").num_columns(2).spacing([12.0, 6.0]).show(ui, |ui| {
            number_field(ui, "Loan amount ($)", "200000", &mut app.loan_form.amount);
            number_field(ui, "Term (years)", "30", &mut app.loan_form.term);
            number_field(ui, "Annual rate (%)", "6", &mut app.loan_form.rate);
        });
        ui.add_space(6.0);
        if big_button(ui, "Calculate loan", width, 32.0, true) {
            app.calculate_loan_clicked();
        }
        result_area(ui, &app.loan_result);

        ui.add_space(16.0);
        ui.separator();
        ui.add_space(16.0);

        // ---------- AHORRO ----------
        ui.heading("🐷 Savings Calculator");
        ui.add_space(6.0);
        Grid::new("savings_grid").num_columns(2).spacing([12.0, 6.0]).show(ui, |ui| {
            number_field(ui, "Initial savings ($)", "1000", &mut app.savings_form.initial);
            number_field(ui, "Monthly contribution ($)", "100", &mut app.savings_form.monthly);
            number_field(ui, "Annual rate (%)", "5", &mut app.savings_form.rate);
            number_field(ui, "Years", "10", &mut app.savings_form.years);
        });
        ui.add_space(6.0);
        if big_button(ui, "Calculate savings", width, 32.0, true) {
            app.calculate_savings_clicked();
        }
        result_area(ui, &app.savings_result);
    });
}
