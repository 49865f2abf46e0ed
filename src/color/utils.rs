use crate::color::Rgb;

/// Pack a color into a 24-bit word in WS2812 wire order (0x00GGRRBB)
pub const fn pack_grb(color: Rgb) -> u32 {
    ((color.g as u32) << 16) | ((color.r as u32) << 8) | color.b as u32
}

/// Unpack a 24-bit GRB word back into a color. The top byte is ignored.
pub const fn unpack_grb(word: u32) -> Rgb {
    Rgb {
        r: ((word >> 8) & 0xFF) as u8,
        g: ((word >> 16) & 0xFF) as u8,
        b: (word & 0xFF) as u8,
    }
}
