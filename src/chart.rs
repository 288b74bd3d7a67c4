// src/chart.rs
//
// Infografía: especificación declarativa del gráfico circular y su geometría.

use std::f32::consts::{FRAC_PI_2, TAU};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Pie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub dataset_label: String,
    pub labels: Vec<String>,
    pub values: Vec<f32>,
    pub colors: Vec<[u8; 3]>,
    pub border_color: [u8; 3],
    pub border_width: f32,
    pub legend: LegendPosition,
    pub animate_scale: bool,
    pub animate_rotate: bool,
    /// Duración de la animación de entrada
    pub animation_secs: f64,
}

/// Un sector ya calculado (ángulos en radianes, sentido horario)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub start: f32,
    pub sweep: f32,
    pub color: [u8; 3],
}

impl PieChartSpec {
    /// El reparto financiero que muestra la página
    pub fn financial_distribution() -> Self {
        Self {
            kind: ChartKind::Pie,
            title: "Your Financial Distribution".to_string(),
            dataset_label: "Financial Distribution".to_string(),
            labels: vec![
                "Savings (40%)".to_string(),
                "Investments (30%)".to_string(),
                "Debt (20%)".to_string(),
                "Emergency Fund (10%)".to_string(),
            ],
            values: vec![40.0, 30.0, 20.0, 10.0],
            colors: vec![
                hex_rgb(0x4caf50),
                hex_rgb(0xff9800),
                hex_rgb(0xf44336),
                hex_rgb(0x2196f3),
            ],
            border_color: hex_rgb(0xffffff),
            border_width: 2.0,
            legend: LegendPosition::Top,
            animate_scale: true,
            animate_rotate: true,
            animation_secs: 1.0,
        }
    }

    pub fn slices(&self) -> Vec<Slice> {
        self.slices_at(1.0)
    }

    /// Sectores en un instante de la animación de entrada (`progress` en 0..=1).
    /// Empieza a las 12 en punto.
    pub fn slices_at(&self, progress: f32) -> Vec<Slice> {
        let total: f32 = self.values.iter().sum();
        if total <= 0.0 {
            return Vec::new();
        }
        let turn = if self.animate_rotate {
            TAU * progress.clamp(0.0, 1.0)
        } else {
            TAU
        };
        let mut start = -FRAC_PI_2;
        self.values
            .iter()
            .zip(&self.colors)
            .map(|(value, color)| {
                let sweep = turn * value / total;
                let slice = Slice {
                    start,
                    sweep,
                    color: *color,
                };
                start += sweep;
                slice
            })
            .collect()
    }

    pub fn radius_at(&self, full_radius: f32, progress: f32) -> f32 {
        if self.animate_scale {
            full_radius * progress.clamp(0.0, 1.0)
        } else {
            full_radius
        }
    }

    pub fn progress(&self, elapsed_secs: f64) -> f32 {
        if self.animation_secs <= 0.0 {
            return 1.0;
        }
        (elapsed_secs / self.animation_secs).clamp(0.0, 1.0) as f32
    }
}

fn hex_rgb(hex: u32) -> [u8; 3] {
    [(hex >> 16) as u8, (hex >> 8) as u8, hex as u8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribution_is_fixed() {
        let spec = PieChartSpec::financial_distribution();
        assert_eq!(spec.kind, ChartKind::Pie);
        assert_eq!(spec.values, vec![40.0, 30.0, 20.0, 10.0]);
        assert_eq!(spec.colors[0], [0x4c, 0xaf, 0x50]);
        assert_eq!(spec.colors[3], [0x21, 0x96, 0xf3]);
        assert_eq!(spec.legend, LegendPosition::Top);
        assert_eq!(spec.labels.len(), spec.values.len());
    }

    #[test]
    fn slices_cover_full_turn_in_order() {
        let slices = PieChartSpec::financial_distribution().slices();
        assert_eq!(slices.len(), 4);
        assert!((slices[0].start + FRAC_PI_2).abs() < 1e-6);
        assert!((slices[0].sweep - TAU * 0.4).abs() < 1e-5);
        let last = slices[3];
        assert!((last.start + last.sweep - (TAU - FRAC_PI_2)).abs() < 1e-5);
    }

    #[test]
    fn entrance_animation_grows_and_rotates() {
        let spec = PieChartSpec::financial_distribution();
        let half: f32 = spec.slices_at(0.5).iter().map(|s| s.sweep).sum();
        assert!((half - TAU / 2.0).abs() < 1e-5);
        assert_eq!(spec.radius_at(100.0, 0.25), 25.0);
        assert_eq!(spec.progress(2.0), 1.0);
        assert_eq!(spec.progress(0.5), 0.5);
    }
}
