//! Attachment media classification
//!
//! The provider needs to know whether an attachment is an image, video,
//! audio clip or generic file. The declared `Content-Type` of media hosts is
//! unreliable, so the bytes themselves are sniffed.

use domain::MediaCategory;

/// Classify a media buffer by its magic bytes
///
/// Empty or unrecognized buffers are `MediaCategory::File`.
pub fn probe_media(bytes: &[u8]) -> MediaCategory {
    infer::get(bytes).map_or(MediaCategory::File, |kind| {
        MediaCategory::from_mime(kind.mime_type())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52,
    ];
    const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46];
    const MP4: &[u8] = &[
        0x00, 0x00, 0x00, 0x18, b'f', b't', b'y', b'p', b'i', b's', b'o', b'm', 0x00, 0x00, 0x02,
        0x00,
    ];
    const MP3: &[u8] = &[b'I', b'D', b'3', 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x21];
    const PDF: &[u8] = b"%PDF-1.7\n%\xE2\xE3\xCF\xD3";

    #[test]
    fn png_is_image() {
        assert_eq!(probe_media(PNG), MediaCategory::Image);
    }

    #[test]
    fn jpeg_is_image() {
        assert_eq!(probe_media(JPEG), MediaCategory::Image);
    }

    #[test]
    fn mp4_is_video() {
        assert_eq!(probe_media(MP4), MediaCategory::Video);
    }

    #[test]
    fn mp3_is_audio() {
        assert_eq!(probe_media(MP3), MediaCategory::Audio);
    }

    #[test]
    fn pdf_is_file() {
        assert_eq!(probe_media(PDF), MediaCategory::File);
    }

    #[test]
    fn empty_buffer_is_file() {
        assert_eq!(probe_media(&[]), MediaCategory::File);
    }

    #[test]
    fn unknown_bytes_are_file() {
        assert_eq!(probe_media(b"just some text"), MediaCategory::File);
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn png_signature_wins_over_any_tail(tail in proptest::collection::vec(any::<u8>(), 0..256)) {
                let mut bytes = PNG.to_vec();
                bytes.extend(tail);
                prop_assert_eq!(probe_media(&bytes), MediaCategory::Image);
            }

            #[test]
            fn any_buffer_is_classified(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
                let category = probe_media(&bytes);
                prop_assert!(matches!(
                    category,
                    MediaCategory::Image | MediaCategory::Video | MediaCategory::Audio | MediaCategory::File
                ));
            }
        }
    }
}
