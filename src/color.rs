use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Series colors
// ---------------------------------------------------------------------------

/// Hue of the first series; later series step around the wheel. The step is
/// chosen so the default two-dataset layout comes out blue then red.
const BASE_HUE: f32 = 222.0;
const HUE_STEP: f32 = 138.0;

/// Color for dataset slot `index`, shared by the interactive plot and the
/// PDF export so both render the same series identity.
pub fn series_color(index: usize) -> Color32 {
    let hue = (BASE_HUE + index as f32 * HUE_STEP) % 360.0;
    let hsl = Hsl::new(hue, 0.72, 0.45);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_get_distinct_stable_colors() {
        assert_eq!(series_color(0), series_color(0));
        assert_ne!(series_color(0), series_color(1));
    }

    #[test]
    fn first_slot_leans_blue_second_leans_red() {
        let a = series_color(0);
        let b = series_color(1);
        assert!(a.b() > a.r());
        assert!(b.r() > b.b());
    }
}
