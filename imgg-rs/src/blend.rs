/// Mix `color` into a raw RGBA pixel, keeping `alpha / 256` of what is there.
///
/// Color channels become `(c * alpha + C * (255 - alpha)) >> 8` and the alpha
/// channel `(a * alpha) >> 8`, with integer truncation. The arithmetic works
/// on the buffer bytes as stored, without any premultiplication step.
pub fn blend(existing: [u8; 4], color: [u8; 3], alpha: u8) -> [u8; 4] {
    let keep = alpha as u32;
    let add = 255 - keep;
    let mix = |c: u8, n: u8| ((c as u32 * keep + n as u32 * add) >> 8) as u8;
    [
        mix(existing[0], color[0]),
        mix(existing[1], color[1]),
        mix(existing[2], color[2]),
        ((existing[3] as u32 * keep) >> 8) as u8,
    ]
}
