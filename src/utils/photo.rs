use image::{GenericImageView, ImageFormat};
use std::path::Path;

use super::error::{AppError, AppResult};
use super::path::is_photo_file;

/// Största tillåtna fotostorlek i byte
pub const MAX_PHOTO_BYTES: usize = 10 * 1024 * 1024;

/// Läs ett foto från disk och kontrollera att det är en JPEG eller PNG.
///
/// Bytes returneras oförändrade så att exakt samma data kan sparas.
pub fn read_photo(path: &Path) -> AppResult<Vec<u8>> {
    if !is_photo_file(path) {
        return Err(AppError::invalid_photo(format!(
            "{} is not a jpg, jpeg or png file",
            path.display()
        )));
    }

    let bytes = std::fs::read(path)?;
    check_photo_bytes(&bytes)?;

    Ok(bytes)
}

/// Kontrollera att bytes är en avkodningsbar JPEG/PNG och returnera dimensionerna
pub fn check_photo_bytes(bytes: &[u8]) -> AppResult<(u32, u32)> {
    if bytes.is_empty() {
        return Err(AppError::invalid_photo("file is empty"));
    }

    if bytes.len() > MAX_PHOTO_BYTES {
        return Err(AppError::invalid_photo(format!(
            "file is larger than {} MB",
            MAX_PHOTO_BYTES / (1024 * 1024)
        )));
    }

    let format = image::guess_format(bytes)
        .map_err(|e| AppError::invalid_photo(e.to_string()))?;

    if !matches!(format, ImageFormat::Jpeg | ImageFormat::Png) {
        return Err(AppError::invalid_photo(format!("unsupported format {:?}", format)));
    }

    let image = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| AppError::invalid_photo(e.to_string()))?;

    Ok(image.dimensions())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img: ImageBuffer<Rgb<u8>, Vec<u8>> =
            ImageBuffer::from_pixel(width, height, Rgb([200, 30, 30]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_check_photo_bytes_png() {
        let bytes = png_bytes(4, 3);
        assert_eq!(check_photo_bytes(&bytes).unwrap(), (4, 3));
    }

    #[test]
    fn test_check_photo_bytes_rejects_garbage() {
        assert!(matches!(
            check_photo_bytes(b"definitely not an image"),
            Err(AppError::InvalidPhoto(_))
        ));
        assert!(matches!(check_photo_bytes(&[]), Err(AppError::InvalidPhoto(_))));
    }

    #[test]
    fn test_read_photo_returns_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proof.png");
        let bytes = png_bytes(2, 2);
        std::fs::write(&path, &bytes).unwrap();

        assert_eq!(read_photo(&path).unwrap(), bytes);
    }

    #[test]
    fn test_read_photo_rejects_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proof.gif");
        std::fs::write(&path, png_bytes(2, 2)).unwrap();

        let err = read_photo(&path).unwrap_err();
        assert!(err.is_user_error());
    }
}
