use crate::utils::luma_601;
use crate::Image;
use image::{Luma, Rgba};

/// 前景とみなす最小の強度（反転輝度またはアルファ値）
const FOREGROUND_THRESHOLD: u8 = 20;

/// マスク値：前景
pub const FOREGROUND: Luma<u8> = Luma([255]);
/// マスク値：背景
pub const BACKGROUND: Luma<u8> = Luma([0]);

/// マスクの生成方法を表す列挙型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskSource {
    /// アルファ値がしきい値を超える画素を前景とする
    Alpha,
    /// 不透明画像：白背景を仮定し、反転輝度がしきい値を超える画素を前景とする
    Brightness,
}

/// 画像から前景マスクを生成する機能を提供するトレイト
pub trait ForegroundMask {
    /// 前景マスクを生成します
    ///
    /// 全画素のアルファ値が最大値の場合は輝度を反転して判定し、
    /// それ以外の場合はアルファ値で判定します。
    ///
    /// # Returns
    ///
    /// 前景が255、背景が0のマスクと、使用した判定方法のタプル
    ///
    /// # Examples
    ///
    /// ```
    /// use image::Rgba;
    /// use logoops::{ForegroundMask, Image, MaskSource};
    ///
    /// let mut image: Image<Rgba<u8>> = Image::from_pixel(3, 3, Rgba([255, 255, 255, 255]));
    /// image.put_pixel(1, 1, Rgba([0, 0, 0, 255]));
    ///
    /// let (mask, source) = image.foreground_mask();
    /// assert_eq!(source, MaskSource::Brightness);
    /// assert_eq!(mask.get_pixel(1, 1)[0], 255);
    /// assert_eq!(mask.get_pixel(0, 0)[0], 0);
    /// ```
    fn foreground_mask(&self) -> (Image<Luma<u8>>, MaskSource);
}

impl ForegroundMask for Image<Rgba<u8>> {
    fn foreground_mask(&self) -> (Image<Luma<u8>>, MaskSource) {
        let source = detect_mask_source(self);
        let mask = match source {
            MaskSource::Brightness => imageproc::map::map_colors(self, |Rgba([r, g, b, _])| {
                let inverted = u8::MAX - luma_601(r, g, b);
                to_mask(inverted > FOREGROUND_THRESHOLD)
            }),
            MaskSource::Alpha => imageproc::map::map_colors(self, |Rgba([_, _, _, a])| {
                to_mask(a > FOREGROUND_THRESHOLD)
            }),
        };
        (mask, source)
    }
}

/// 全画素が不透明かどうかで判定方法を決定する
///
/// 画素が存在しない画像は不透明として扱う。
pub fn detect_mask_source(image: &Image<Rgba<u8>>) -> MaskSource {
    if image.pixels().all(|pixel| pixel[3] == u8::MAX) {
        MaskSource::Brightness
    } else {
        MaskSource::Alpha
    }
}

#[inline]
fn to_mask(is_foreground: bool) -> Luma<u8> {
    if is_foreground {
        FOREGROUND
    } else {
        BACKGROUND
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_rgba_image_with_pattern, create_test_rgba_image};

    #[test]
    fn foreground_mask_with_opaque_image_uses_brightness() {
        let image = create_rgba_image_with_pattern(3, 1, |x, _| match x {
            0 => Rgba([255, 255, 255, 255]),
            // luma 235 -> inverted 20, not above the threshold
            1 => Rgba([235, 235, 235, 255]),
            _ => Rgba([234, 234, 234, 255]),
        });

        let (mask, source) = image.foreground_mask();
        assert_eq!(source, MaskSource::Brightness);
        assert_eq!(*mask.get_pixel(0, 0), BACKGROUND);
        assert_eq!(*mask.get_pixel(1, 0), BACKGROUND);
        assert_eq!(*mask.get_pixel(2, 0), FOREGROUND);
    }

    #[test]
    fn foreground_mask_with_transparency_uses_alpha() {
        let image = create_rgba_image_with_pattern(3, 1, |x, _| match x {
            0 => Rgba([0, 0, 0, 20]),
            1 => Rgba([255, 255, 255, 21]),
            _ => Rgba([0, 0, 0, 255]),
        });

        let (mask, source) = image.foreground_mask();
        assert_eq!(source, MaskSource::Alpha);
        assert_eq!(*mask.get_pixel(0, 0), BACKGROUND);
        // white ink still counts under the alpha strategy
        assert_eq!(*mask.get_pixel(1, 0), FOREGROUND);
        assert_eq!(*mask.get_pixel(2, 0), FOREGROUND);
    }

    #[test]
    fn detect_mask_source_with_single_translucent_pixel_uses_alpha() {
        let image = create_test_rgba_image();
        assert_eq!(detect_mask_source(&image), MaskSource::Alpha);

        let mut opaque: Image<Rgba<u8>> = Image::from_pixel(4, 4, Rgba([9, 9, 9, 255]));
        assert_eq!(detect_mask_source(&opaque), MaskSource::Brightness);
        opaque.put_pixel(3, 3, Rgba([9, 9, 9, 254]));
        assert_eq!(detect_mask_source(&opaque), MaskSource::Alpha);
    }

    #[test]
    fn detect_mask_source_with_empty_image_is_brightness() {
        let image: Image<Rgba<u8>> = Image::new(0, 0);
        assert_eq!(detect_mask_source(&image), MaskSource::Brightness);
    }
}
