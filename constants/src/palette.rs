use bevy::color::Color;

pub const EMERALD: u32 = 0x004225;
pub const GOLD: u32 = 0xFFD700;
pub const SILVER: u32 = 0xECEFF1;
pub const RED: u32 = 0xD32F2F;
pub const WHITE: u32 = 0xFFFFFF;
pub const WARM_LIGHT: u32 = 0xFFD54F;

/// Polaroid border colour pool (soft retro tones).
pub const PLACARD_BORDER_COLORS: &[u32] = &[
    0xFFFAF0, 0xF0E68C, 0xE6E6FA, 0xFFB6C1, 0x98FB98, 0x87CEFA, 0xFFDAB9,
];

/// Fairy light bulb colours.
pub const FAIRY_LIGHT_COLORS: &[u32] = &[0xFF0000, 0x00FF00, 0x0000FF, 0xFFFF00];

/// Gift wrap colours, shared by bauble gift boxes and ground gifts.
pub const GIFT_COLORS: &[u32] = &[0xD32F2F, 0xFFD700, 0x1976D2, 0x2E7D32];

/// Candy cane stripe colours.
pub const CANDY_COLORS: &[u32] = &[0xFF0000, 0xFFFFFF];

/// Expand a packed sRGB hex value into a Bevy colour.
pub fn srgb(hex: u32) -> Color {
    Color::srgb_u8(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}
