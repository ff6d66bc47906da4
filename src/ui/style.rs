//! Colors, fonts and container/button styles shared by all screens

use iced::widget::{button, container};
use iced::{font, Background, Border, Color, Font, Shadow, Theme, Vector};

pub const BACKGROUND: Color = Color::from_rgb(0.992, 0.965, 0.925); // #FDF6EC
pub const CARD: Color = Color::from_rgb(1.0, 0.984, 0.961); // #FFFBF5
pub const SURFACE: Color = Color::WHITE;
pub const PRIMARY: Color = Color::from_rgb(0.753, 0.224, 0.169); // #C0392B
pub const BADGE: Color = Color::from_rgb(0.906, 0.298, 0.235); // #E74C3C
pub const ACCENT: Color = Color::from_rgb(0.961, 0.690, 0.255); // #F5B041
pub const BURNT: Color = Color::from_rgb(0.827, 0.329, 0.0); // #D35400
pub const TEXT: Color = Color::from_rgb(0.173, 0.243, 0.314); // #2C3E50
pub const MUTED: Color = Color::from_rgb(0.498, 0.549, 0.553); // #7F8C8D
pub const SUBTLE: Color = Color::from_rgb(0.584, 0.647, 0.651); // #95A5A6
pub const DESCRIPTION: Color = Color::from_rgb(0.365, 0.427, 0.494); // #5D6D7E
pub const DESCRIPTION_BG: Color = Color::from_rgb(0.992, 0.922, 0.816); // #FDEBD0
pub const TIPS_BG: Color = Color::from_rgb(0.996, 0.976, 0.906); // #FEF9E7
pub const TIPS_TEXT: Color = Color::from_rgb(0.490, 0.400, 0.031); // #7D6608
pub const HEADER_SUBTITLE: Color = Color::from_rgb(0.980, 0.859, 0.847); // #FADBD8
pub const FOOTER: Color = Color::from_rgb(0.741, 0.765, 0.780); // #BDC3C7
pub const PLACEHOLDER: Color = Color::from_rgb(0.945, 0.831, 0.706);

pub const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

pub const HEAVY: Font = Font {
    weight: font::Weight::ExtraBold,
    ..Font::DEFAULT
};

pub const ITALIC: Font = Font {
    style: font::Style::Italic,
    ..Font::DEFAULT
};

/// Application theme built on the recipe palette
pub fn theme() -> Theme {
    Theme::custom(
        "MikaBites".to_string(),
        iced::theme::Palette {
            background: BACKGROUND,
            text: TEXT,
            primary: PRIMARY,
            success: Color::from_rgb(0.153, 0.682, 0.376),
            danger: BADGE,
        },
    )
}

/// Rounded filled box with an optional soft shadow
pub fn filled(color: Color, radius: f32, elevation: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius.into(),
            ..Border::default()
        },
        shadow: Shadow {
            color: Color {
                a: 0.12,
                ..BURNT
            },
            offset: Vector::new(0.0, elevation / 2.0),
            blur_radius: elevation * 2.0,
        },
        ..container::Style::default()
    }
}

/// Header band with rounded bottom corners
pub fn header(radius: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(PRIMARY)),
        border: Border {
            radius: iced::border::Radius {
                top_left: 0.0,
                top_right: 0.0,
                bottom_right: radius,
                bottom_left: radius,
            },
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Translucent black layer over images and behind the modal
pub fn scrim(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(Color { a: alpha, ..Color::BLACK })),
        ..container::Style::default()
    }
}

/// Button without chrome, used to make whole cards and rows pressable
pub fn bare_button(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Disabled => MUTED,
        _ => TEXT,
    };

    button::Style {
        background: None,
        text_color,
        ..button::Style::default()
    }
}

/// Solid rounded button
pub fn pill_button(
    background: Color,
    foreground: Color,
    radius: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let alpha = match status {
            button::Status::Hovered | button::Status::Pressed => 0.85,
            _ => 1.0,
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: background.a * alpha,
                ..background
            })),
            text_color: foreground,
            border: Border {
                radius: radius.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}
