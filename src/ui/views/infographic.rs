use egui::{Color32, Context, Mesh, Pos2, RichText, Sense, Shape, Stroke, Ui, pos2, vec2};
use crate::CourseApp;
use crate::chart::{LegendPosition, PieChartSpec};
use crate::ui::layout::simple_panel;

fn color(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

fn arc_point(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    pos2(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

fn legend(ui: &mut Ui, spec: &PieChartSpec) {
    ui.horizontal_wrapped(|ui| {
        for (label, rgb) in spec.labels.iter().zip(&spec.colors) {
            let (swatch, _) = ui.allocate_exact_size(vec2(14.0, 14.0), Sense::hover());
            ui.painter().rect_filled(swatch, 2.0, color(*rgb));
            ui.label(label);
            ui.add_space(8.0);
        }
    });
}

fn pie(ui: &mut Ui, spec: &PieChartSpec, progress: f32) {
    let size = ui.available_width().min(360.0);
    let (rect, _) = ui.allocate_exact_size(vec2(size, size), Sense::hover());
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = spec.radius_at(size / 2.0 - spec.border_width, progress);
    let border = Stroke::new(spec.border_width, color(spec.border_color));

    for slice in spec.slices_at(progress) {
        // abanico de triángulos: vale también para sectores > 180°
        let steps = ((slice.sweep / 0.05).ceil() as usize).max(1);
        let fill = color(slice.color);
        let mut mesh = Mesh::default();
        mesh.colored_vertex(center, fill);
        let mut outline = vec![center];
        for k in 0..=steps {
            let angle = slice.start + slice.sweep * k as f32 / steps as f32;
            let p = arc_point(center, radius, angle);
            mesh.colored_vertex(p, fill);
            outline.push(p);
            if k > 0 {
                mesh.add_triangle(0, k as u32, k as u32 + 1);
            }
        }
        painter.add(Shape::mesh(mesh));
        outline.push(center);
        painter.add(Shape::line(outline, border));
    }
}

/// Se dibuja una vez; solo cambia durante la animación de entrada
pub fn ui_infographic(app: &mut CourseApp, ctx: &Context, now: f64) {
    let started = *app.chart_started_at.get_or_insert(now);
    let spec = &app.chart;
    let progress = spec.progress(now - started);

    simple_panel(ctx, 480.0, egui::Margin::symmetric(16, 16), |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&spec.title).heading().strong());
            ui.add_space(8.0);
            if spec.legend == LegendPosition::Top {
                legend(ui, spec);
                ui.add_space(8.0);
            }
            pie(ui, spec, progress);
            if spec.legend == LegendPosition::Bottom {
                ui.add_space(8.0);
                legend(ui, spec);
            }
        });
    });
}
