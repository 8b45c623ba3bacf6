// ============================================================================
// CHART VIEWMODEL - Geometría de barras y pastel del dashboard
// ============================================================================
// SOLO cálculos puros - Sin estado ni DOM
// ============================================================================

use crate::models::LabeledTotal;
use crate::utils::constants::CHART_COLORS;

/// Centro y radio del pastel dentro de un viewBox 200x200
pub const PIE_CENTER: f64 = 100.0;
pub const PIE_RADIUS: f64 = 90.0;
pub const PIE_LABEL_RADIUS: f64 = 60.0;

/// Largo máximo de etiquetas de preguntas
pub const MAX_LABEL_CHARS: usize = 40;

/// Barra lista para renderizar
#[derive(Debug, Clone, PartialEq)]
pub struct BarItem {
    pub label: String,
    pub value: f64,
    /// Ancho en % respecto al máximo de la misma colección
    pub width_percent: f64,
}

/// Porción del pastel lista para renderizar
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub percentage: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub path: String,
    pub label_x: f64,
    pub label_y: f64,
    pub color: &'static str,
}

pub struct ChartViewModel;

impl ChartViewModel {
    /// Anchos de barra: valor / máximo local * 100
    pub fn bar_items(items: &[LabeledTotal]) -> Vec<BarItem> {
        let max = items.iter().map(|i| i.total).fold(f64::NEG_INFINITY, f64::max);
        items
            .iter()
            .map(|item| BarItem {
                label: item.label.clone(),
                value: item.total,
                width_percent: if max > 0.0 { item.total / max * 100.0 } else { 0.0 },
            })
            .collect()
    }

    /// Porciones del pastel; vacío si el total es 0
    pub fn pie_slices(items: &[LabeledTotal]) -> Vec<PieSlice> {
        let total: f64 = items.iter().map(|i| i.total).sum();
        if total <= 0.0 {
            return Vec::new();
        }

        let mut cumulative = 0.0;
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let percentage = item.total / total * 100.0;
                let start_angle = cumulative / total * 360.0;
                let end_angle = start_angle + percentage / 100.0 * 360.0;
                let mid_angle = (cumulative + item.total / 2.0) / total * 360.0;
                cumulative += item.total;

                let (label_x, label_y) = Self::project(mid_angle, PIE_LABEL_RADIUS);

                PieSlice {
                    label: item.label.clone(),
                    value: item.total,
                    percentage,
                    start_angle,
                    end_angle,
                    path: Self::slice_path(start_angle, end_angle, percentage),
                    label_x,
                    label_y,
                    color: Self::color(index),
                }
            })
            .collect()
    }

    pub fn color(index: usize) -> &'static str {
        CHART_COLORS[index % CHART_COLORS.len()]
    }

    /// Punto sobre la circunferencia; 0° apunta hacia arriba
    pub fn project(angle_deg: f64, radius: f64) -> (f64, f64) {
        let rad = (angle_deg - 90.0).to_radians();
        (PIE_CENTER + radius * rad.cos(), PIE_CENTER + radius * rad.sin())
    }

    fn slice_path(start_angle: f64, end_angle: f64, percentage: f64) -> String {
        // Un arco de 360° tiene extremos iguales y SVG no lo dibuja
        if percentage >= 100.0 {
            let top = PIE_CENTER - PIE_RADIUS;
            let bottom = PIE_CENTER + PIE_RADIUS;
            return format!(
                "M {c} {top} A {r} {r} 0 1 1 {c} {bottom} A {r} {r} 0 1 1 {c} {top} Z",
                c = PIE_CENTER,
                r = PIE_RADIUS,
                top = top,
                bottom = bottom,
            );
        }

        let (x1, y1) = Self::project(start_angle, PIE_RADIUS);
        let (x2, y2) = Self::project(end_angle, PIE_RADIUS);
        let large_arc = if percentage > 50.0 { 1 } else { 0 };
        format!(
            "M {c} {c} L {x1} {y1} A {r} {r} 0 {large_arc} 1 {x2} {y2} Z",
            c = PIE_CENTER,
            r = PIE_RADIUS,
            x1 = x1,
            y1 = y1,
            x2 = x2,
            y2 = y2,
            large_arc = large_arc,
        )
    }
}

/// Recorta etiquetas largas a `max` caracteres + "..."
pub fn truncate_label(label: &str, max: usize) -> String {
    if label.chars().count() > max {
        let cut: String = label.chars().take(max).collect();
        format!("{}...", cut)
    } else {
        label.to_string()
    }
}

/// Conteos sin decimales innecesarios
pub fn format_count(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &[(&str, f64)]) -> Vec<LabeledTotal> {
        values.iter().map(|(l, v)| LabeledTotal::new(l, *v)).collect()
    }

    #[test]
    fn max_bar_is_full_width() {
        let bars = ChartViewModel::bar_items(&items(&[("A", 15.0), ("B", 30.0), ("C", 6.0)]));
        assert_eq!(bars[1].width_percent, 100.0);
        assert_eq!(bars[0].width_percent, 50.0);
        assert_eq!(bars[2].width_percent, 20.0);
    }

    #[test]
    fn bar_width_is_monotonic() {
        let bars = ChartViewModel::bar_items(&items(&[("A", 3.0), ("B", 7.0), ("C", 5.0), ("D", 0.0)]));
        for a in &bars {
            for b in &bars {
                if a.value > b.value {
                    assert!(a.width_percent > b.width_percent);
                }
            }
        }
    }

    #[test]
    fn zero_maximum_gives_zero_width() {
        let bars = ChartViewModel::bar_items(&items(&[("A", 0.0), ("B", 0.0)]));
        assert!(bars.iter().all(|b| b.width_percent == 0.0));
        assert!(ChartViewModel::bar_items(&[]).is_empty());
    }

    #[test]
    fn pie_angles_cover_full_circle() {
        let slices = ChartViewModel::pie_slices(&items(&[
            ("Guatemala", 1250.0),
            ("Honduras", 980.0),
            ("El Salvador", 620.0),
            ("Nicaragua", 412.0),
            ("Costa Rica", 280.0),
        ]));
        let swept: f64 = slices.iter().map(|s| s.end_angle - s.start_angle).sum();
        assert!((swept - 360.0).abs() < 1e-9);
        assert_eq!(slices[0].start_angle, 0.0);
        for pair in slices.windows(2) {
            assert!((pair[0].end_angle - pair[1].start_angle).abs() < 1e-9);
        }
        assert_eq!(slices[5 % 5].color, "#10b981");
    }

    #[test]
    fn zero_total_renders_nothing() {
        assert!(ChartViewModel::pie_slices(&items(&[("A", 0.0), ("B", 0.0)])).is_empty());
        assert!(ChartViewModel::pie_slices(&[]).is_empty());
    }

    #[test]
    fn first_slice_starts_at_top() {
        let slices = ChartViewModel::pie_slices(&items(&[("A", 1.0), ("B", 3.0)]));
        assert!(slices[0].path.starts_with("M 100 100 L 100 10 A 90 90 0 0 1"));
        // B ocupa 75%: arco largo
        assert!(slices[1].path.contains(" 0 1 1 "));
    }

    #[test]
    fn label_sits_on_slice_midpoint() {
        let slices = ChartViewModel::pie_slices(&items(&[("A", 1.0), ("B", 1.0)]));
        // A: mitad en 90° → a la derecha del centro
        assert!((slices[0].label_x - 160.0).abs() < 1e-9);
        assert!((slices[0].label_y - 100.0).abs() < 1e-9);
        // B: mitad en 270° → a la izquierda
        assert!((slices[1].label_x - 40.0).abs() < 1e-9);
    }

    #[test]
    fn single_slice_draws_full_circle() {
        let slices = ChartViewModel::pie_slices(&items(&[("Solo", 10.0), ("Nada", 0.0)]));
        assert_eq!(slices[0].percentage, 100.0);
        assert!(slices[0].path.starts_with("M 100 10 A 90 90 0 1 1 100 190"));
    }

    #[test]
    fn truncates_long_questions() {
        let long = "¿Cuántas personas viven en su hogar actualmente incluyendo niños?";
        let cut = truncate_label(long, MAX_LABEL_CHARS);
        assert_eq!(cut.chars().count(), MAX_LABEL_CHARS + 3);
        assert!(cut.ends_with("..."));
        assert_eq!(truncate_label("¿Edad?", MAX_LABEL_CHARS), "¿Edad?");
    }

    #[test]
    fn formats_counts() {
        assert_eq!(format_count(3542.0), "3542");
        assert_eq!(format_count(16.3), "16.3");
    }
}
