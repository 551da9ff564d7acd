use std::io::Cursor;

use image::ImageFormat;

use crate::errors::DecodeError;

// the face occupies the (8,8)-(16,16) square of the skin layout
const FACE_X: u32 = 8;
const FACE_Y: u32 = 8;
const FACE_SIZE: u32 = 8;

/// Decodes a PNG skin and re-encodes its 8x8 face as a PNG.
pub fn extract_face(skin: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let skin = image::load_from_memory_with_format(skin, ImageFormat::Png)
        .map_err(DecodeError::InvalidImage)?;

    if skin.width() < FACE_X + FACE_SIZE || skin.height() < FACE_Y + FACE_SIZE {
        return Err(DecodeError::TooSmall {
            width: skin.width(),
            height: skin.height(),
        });
    }

    let face = skin.crop_imm(FACE_X, FACE_Y, FACE_SIZE, FACE_SIZE);

    let mut buffer = Cursor::new(Vec::new());
    face.write_to(&mut buffer, ImageFormat::Png)
        .map_err(DecodeError::Encode)?;

    Ok(buffer.into_inner())
}
