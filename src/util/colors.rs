use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x003b82f6);
pub const NEUTRAL: Color = Color::from_u32(0x00404040);
pub const BACKGROUND: Color = Color::from_u32(0x000d0d0d);
pub const ACCENT: Color = Color::from_u32(0x00fbbf24);
pub const MARKER: Color = Color::from_u32(0x00ef4444);
pub const ERROR: Color = Color::from_u32(0x00f87171);

/// Mixes `color` into the background, standing in for opacity on a terminal.
pub fn fade(color: Color, opacity: f32) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity >= 1.0 {
        return color;
    }

    let (Some(fg), Some(bg)) = (rgb(color), rgb(BACKGROUND)) else {
        return color;
    };
    let mix = |f: u8, b: u8| (f as f32 * opacity + b as f32 * (1.0 - opacity)).round() as u8;
    Color::Rgb(mix(fg.0, bg.0), mix(fg.1, bg.1), mix(fg.2, bg.2))
}

fn rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_blends_towards_background() {
        assert_eq!(fade(PRIMARY, 1.0), PRIMARY);
        assert_eq!(fade(Color::Rgb(255, 255, 255), 0.0), BACKGROUND);
        assert_eq!(fade(Color::Rgb(113, 113, 113), 0.5), Color::Rgb(63, 63, 63));
        assert_eq!(fade(Color::Red, 0.3), Color::Red);
    }
}
