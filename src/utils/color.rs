use eframe::egui::Color32;

const ACCENT: &str = "#a159e1";
const SUCCESS: &str = "#00b400";
const ERROR: &str = "#dc3232";
const MUTED: &str = "#969696";

pub trait ColorExt {
    fn from_hex(hex: &str) -> Option<Self>
    where
        Self: Sized;
}

impl ColorExt for Color32 {
    fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Color32::from_rgb(r, g, b))
    }
}

fn palette(hex: &str) -> Color32 {
    <Color32 as ColorExt>::from_hex(hex).unwrap_or(Color32::GRAY)
}

pub fn accent() -> Color32 {
    palette(ACCENT)
}

pub fn success() -> Color32 {
    palette(SUCCESS)
}

pub fn error() -> Color32 {
    palette(ERROR)
}

pub fn muted() -> Color32 {
    palette(MUTED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(
            <Color32 as ColorExt>::from_hex("#a159e1"),
            Some(Color32::from_rgb(161, 89, 225))
        );
        assert_eq!(
            <Color32 as ColorExt>::from_hex("dc3232"),
            Some(Color32::from_rgb(220, 50, 50))
        );
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(<Color32 as ColorExt>::from_hex("#abc"), None);
        assert_eq!(<Color32 as ColorExt>::from_hex("zzzzzz"), None);
    }
}
