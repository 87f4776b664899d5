//! Terminal color capability handling.
//!
//! Palettes are authored as truecolor RGB. Terminals without truecolor get
//! the nearest ANSI-256 or ANSI-16 index instead.

use ratatui::style::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

/// Detect what the current terminal supports, with an env override.
pub fn detect_color_support() -> ColorSupport {
    if let Ok(value) = std::env::var("MXCODE_COLOR_SUPPORT") {
        match value.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" | "rgb" => return ColorSupport::TrueColor,
            "256" | "ansi256" => return ColorSupport::Ansi256,
            "16" | "ansi16" | "basic" => return ColorSupport::Ansi16,
            _ => {}
        }
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return ColorSupport::TrueColor;
    }

    let term = std::env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term.contains("truecolor") || term.contains("direct") {
        return ColorSupport::TrueColor;
    }
    if term.contains("256color") {
        return ColorSupport::Ansi256;
    }

    ColorSupport::Ansi16
}

/// Map a palette color onto what the terminal can show.
pub fn downgrade(color: Color, support: ColorSupport) -> Color {
    match (support, color) {
        (ColorSupport::TrueColor, value) => value,
        (_, Color::Reset) => Color::Reset,
        (ColorSupport::Ansi256, Color::Rgb(r, g, b)) => Color::Indexed(nearest_ansi256(r, g, b)),
        (ColorSupport::Ansi256, other) => other,
        (ColorSupport::Ansi16, Color::Rgb(r, g, b)) => Color::Indexed(nearest_ansi16(r, g, b)),
        (ColorSupport::Ansi16, Color::Indexed(i)) if i <= 15 => Color::Indexed(i),
        (ColorSupport::Ansi16, other) => other,
    }
}

/// Nearest entry in the 256-color table: the 6x6x6 cube candidate against
/// the grayscale-ramp candidate, whichever is closer.
fn nearest_ansi256(r: u8, g: u8, b: u8) -> u8 {
    const LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

    let level_index = |v: u8| -> usize {
        let mut best = 0;
        for (i, &l) in LEVELS.iter().enumerate() {
            if v.abs_diff(l) < v.abs_diff(LEVELS[best]) {
                best = i;
            }
        }
        best
    };

    let (ri, gi, bi) = (level_index(r), level_index(g), level_index(b));
    let cube_index = 16 + 36 * ri + 6 * gi + bi;
    let cube_rgb = (LEVELS[ri], LEVELS[gi], LEVELS[bi]);

    // gray ramp: indices 232..=255, values 8, 18, ... 248
    let gray_step = ((u16::from(r) + u16::from(g) + u16::from(b)) / 3).saturating_sub(8) / 10;
    let gray_step = gray_step.min(23) as u8;
    let gray_value = 8 + gray_step * 10;
    let gray_index = 232 + gray_step;

    let cube_dist = distance_sq(r, g, b, cube_rgb.0, cube_rgb.1, cube_rgb.2);
    let gray_dist = distance_sq(r, g, b, gray_value, gray_value, gray_value);

    if gray_dist < cube_dist {
        gray_index
    } else {
        cube_index as u8
    }
}

fn nearest_ansi16(r: u8, g: u8, b: u8) -> u8 {
    let mut best = 0u8;
    let mut best_dist = u32::MAX;
    for (i, &(pr, pg, pb)) in ANSI16_RGB.iter().enumerate() {
        let dist = distance_sq(r, g, b, pr, pg, pb);
        if dist < best_dist {
            best_dist = dist;
            best = i as u8;
        }
    }
    best
}

fn distance_sq(r1: u8, g1: u8, b1: u8, r2: u8, g2: u8, b2: u8) -> u32 {
    let dr = i32::from(r1) - i32::from(r2);
    let dg = i32::from(g1) - i32::from(g2);
    let db = i32::from(b1) - i32::from(b2);
    (dr * dr + dg * dg + db * db) as u32
}

const ANSI16_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truecolor_passes_through() {
        let c = Color::Rgb(0x00, 0xff, 0x41);
        assert_eq!(downgrade(c, ColorSupport::TrueColor), c);
    }

    #[test]
    fn test_primaries_map_to_bright_ansi16() {
        assert_eq!(
            downgrade(Color::Rgb(255, 0, 0), ColorSupport::Ansi16),
            Color::Indexed(9)
        );
        assert_eq!(
            downgrade(Color::Rgb(0, 255, 0), ColorSupport::Ansi16),
            Color::Indexed(10)
        );
        assert_eq!(
            downgrade(Color::Rgb(255, 255, 255), ColorSupport::Ansi16),
            Color::Indexed(15)
        );
    }

    #[test]
    fn test_ansi256_cube_corners() {
        assert_eq!(
            downgrade(Color::Rgb(0, 0, 0), ColorSupport::Ansi256),
            Color::Indexed(16)
        );
        assert_eq!(
            downgrade(Color::Rgb(255, 255, 255), ColorSupport::Ansi256),
            Color::Indexed(231)
        );
    }

    #[test]
    fn test_gray_prefers_gray_ramp() {
        let Color::Indexed(i) = downgrade(Color::Rgb(0x66, 0x66, 0x66), ColorSupport::Ansi256)
        else {
            panic!("expected indexed color");
        };
        assert!((232..=255).contains(&i));
    }

    #[test]
    fn test_reset_is_never_mapped() {
        assert_eq!(downgrade(Color::Reset, ColorSupport::Ansi16), Color::Reset);
    }
}
