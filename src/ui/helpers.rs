// src/ui/helpers.rs
use egui::{Button, RichText, TextEdit, Ui, Vec2};

pub fn big_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height))).clicked()
}

/// Fila "etiqueta: [campo]" de un formulario numérico
pub fn number_field(ui: &mut Ui, label: &str, hint: &str, value: &mut String) {
    ui.label(label);
    ui.add(TextEdit::singleline(value).hint_text(hint).desired_width(180.0));
    ui.end_row();
}

/// Área de resultado de una calculadora; vacía hasta el primer cálculo
pub fn result_area(ui: &mut Ui, text: &str) {
    if text.is_empty() {
        return;
    }
    ui.add_space(6.0);
    ui.label(RichText::new(text).strong());
}
