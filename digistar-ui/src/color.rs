use iced::Color;

pub const BLACK: Color = iced::Color::BLACK;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;
pub const WHITE: Color = iced::Color::WHITE;

// Background of every screen.
pub const NIGHT: Color = Color::from_rgb(
    0x12 as f32 / 255.0,
    0x13 as f32 / 255.0,
    0x17 as f32 / 255.0,
);

// Background of cards and inputs.
pub const CHARCOAL: Color = Color::from_rgb(
    0x1C as f32 / 255.0,
    0x1E as f32 / 255.0,
    0x24 as f32 / 255.0,
);

pub const GREY_6: Color = Color::from_rgb(
    0x26 as f32 / 255.0,
    0x29 as f32 / 255.0,
    0x30 as f32 / 255.0,
);
pub const GREY_5: Color = Color::from_rgb(
    0x32 as f32 / 255.0,
    0x36 as f32 / 255.0,
    0x3E as f32 / 255.0,
);
pub const GREY_4: Color = Color::from_rgb(
    0x45 as f32 / 255.0,
    0x4A as f32 / 255.0,
    0x54 as f32 / 255.0,
);
pub const GREY_3: Color = Color::from_rgb(
    0x6E as f32 / 255.0,
    0x74 as f32 / 255.0,
    0x80 as f32 / 255.0,
);
pub const GREY_2: Color = Color::from_rgb(
    0xB4 as f32 / 255.0,
    0xB9 as f32 / 255.0,
    0xC2 as f32 / 255.0,
);
pub const GREY_1: Color = Color::from_rgb(
    0xE9 as f32 / 255.0,
    0xEA as f32 / 255.0,
    0xEE as f32 / 255.0,
);

// Brand red of the Digistar program.
pub const RED: Color = Color::from_rgb(
    0xEE as f32 / 255.0,
    0x31 as f32 / 255.0,
    0x24 as f32 / 255.0,
);
pub const DARK_RED: Color = Color::from_rgb(
    0xC4 as f32 / 255.0,
    0x28 as f32 / 255.0,
    0x1E as f32 / 255.0,
);
pub const TRANSPARENT_RED: Color = Color::from_rgba(
    0xEE as f32 / 255.0,
    0x31 as f32 / 255.0,
    0x24 as f32 / 255.0,
    0.3,
);

pub const GREEN: Color = Color::from_rgb(
    0x29 as f32 / 255.0,
    0xA3 as f32 / 255.0,
    0x6A as f32 / 255.0,
);

pub const ORANGE: Color =
    Color::from_rgb(0xFF as f32 / 255.0, 0xA7 as f32 / 255.0, 0x0 as f32 / 255.0);

pub const BLUE: Color = Color::from_rgb(
    0x7D as f32 / 255.0,
    0xD3 as f32 / 255.0,
    0xFC as f32 / 255.0,
);
