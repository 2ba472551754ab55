//! Alpha flattening.
//!
//! JPEG has no alpha channel, so an RGBA buffer is composited source-over an
//! opaque white background before encoding. Without this, transparent regions
//! come out black (or whatever color happened to sit under alpha = 0).

/// Composite RGBA pixels over opaque white, returning RGB pixels.
///
/// For each channel: `out = (c * a + 255 * (255 - a)) / 255`, rounded.
/// Fully transparent pixels become `[255, 255, 255]`; fully opaque pixels are
/// unchanged.
///
/// # Arguments
///
/// * `rgba` - RGBA pixel data (4 bytes per pixel). A trailing partial pixel
///   is ignored.
pub fn flatten_onto_white(rgba: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);

    for px in rgba.chunks_exact(4) {
        let alpha = px[3] as u32;
        if alpha == 255 {
            rgb.extend_from_slice(&px[..3]);
            continue;
        }
        let background = 255 * (255 - alpha);
        for &c in &px[..3] {
            rgb.push(((c as u32 * alpha + background + 127) / 255) as u8);
        }
    }

    rgb
}
