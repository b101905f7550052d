//! Terminal color support
//!
//! ANSI output with terminal capability detection.

/// Terminal color capability mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// True color (24-bit RGB)
    TrueColor,
    /// 256 color palette
    Color256,
    /// 16 color palette
    Color16,
    /// No color (monochrome)
    #[default]
    Mono,
}

impl ColorMode {
    /// Detect terminal color capability from environment
    pub fn detect() -> Self {
        Self::detect_with_env(
            std::env::var("COLORTERM").ok().as_deref(),
            std::env::var("TERM").ok().as_deref(),
            std::env::var("NO_COLOR").ok().as_deref(),
        )
    }

    /// Detect with explicit environment values (for testing)
    pub fn detect_with_env(
        colorterm: Option<&str>,
        term: Option<&str>,
        no_color: Option<&str>,
    ) -> Self {
        if no_color.is_some() {
            return Self::Mono;
        }

        if let Some(ct) = colorterm {
            if ct.contains("truecolor") || ct.contains("24bit") {
                return Self::TrueColor;
            }
        }

        match term {
            Some(t) if t.contains("256color") => Self::Color256,
            Some("dumb" | "") | None => Self::Mono,
            Some(_) => Self::Color16,
        }
    }

    /// SGR foreground parameters for `rgb`, `None` when colors are off
    pub fn foreground(self, rgb: Rgb) -> Option<String> {
        match self {
            Self::TrueColor => Some(format!("38;2;{};{};{}", rgb.r, rgb.g, rgb.b)),
            Self::Color256 => Some(format!("38;5;{}", rgb.to_256())),
            Self::Color16 => match rgb.to_16() {
                code @ 8.. => Some(format!("9{}", code - 8)),
                code => Some(format!("3{code}")),
            },
            Self::Mono => None,
        }
    }
}

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to ANSI 256-color index (approximate)
    pub fn to_256(self) -> u8 {
        // 6x6x6 cube at indices 16-231
        let r6 = (u16::from(self.r) * 5 / 255) as u8;
        let g6 = (u16::from(self.g) * 5 / 255) as u8;
        let b6 = (u16::from(self.b) * 5 / 255) as u8;
        16 + 36 * r6 + 6 * g6 + b6
    }

    /// Convert to ANSI 16-color index (approximate)
    pub fn to_16(self) -> u8 {
        let base = u8::from(self.r > 85) | (u8::from(self.g > 85) << 1) | (u8::from(self.b > 85) << 2);
        let bright = self.r.max(self.g).max(self.b) > 180;
        if bright {
            base + 8
        } else {
            base
        }
    }
}

/// Accent for keys (cyan)
pub const KEY: Rgb = Rgb::new(0, 188, 212);

/// Muted/secondary text (gray)
pub const MUTED: Rgb = Rgb::new(158, 158, 158);

/// Values and scores (green)
pub const VALUE: Rgb = Rgb::new(40, 200, 80);
