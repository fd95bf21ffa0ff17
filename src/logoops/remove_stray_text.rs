use crate::error::Error;
use crate::logoops::classify::{classify_components, Classification, KeepSet};
use crate::logoops::components::segment;
use crate::logoops::foreground_mask::MaskSource;
use crate::logoops::trim_transparent::TrimTransparent;
use crate::utils::validate_matching_dimensions;
use crate::Image;
use image::{ImageBuffer, Luma, Rgba};
use tracing::info;

/// 除去された画素に設定する値
const CLEARED: [u8; 4] = [0, 0, 0, 0];

/// 文字除去処理の結果型
pub type StrayTextResult<T> = Result<T, Error>;

/// 文字除去処理の結果
#[derive(Debug, Clone, PartialEq)]
pub enum StrayTextRemoval {
    /// 前景が存在しない（白一色または透明な画像）
    Empty,
    /// 除去と切り抜きが完了した
    Cropped {
        /// 切り抜き後の画像
        image: Image<Rgba<u8>>,
        /// 成分の分類結果
        classification: Classification,
        /// マスクの生成方法
        source: MaskSource,
    },
}

/// 主題の下にある小さな文字を除去して切り抜く機能を提供するトレイト
pub trait RemoveStrayText {
    /// 文字と判定された成分を透明にし、残った内容で切り抜きます
    ///
    /// # Returns
    ///
    /// 前景が存在しない場合は `StrayTextRemoval::Empty`、
    /// それ以外は切り抜かれた画像を含む `StrayTextRemoval::Cropped`
    ///
    /// # Errors
    ///
    /// * `Error::EmptyResult` - 合成後にすべての画素が透明になった場合
    /// * `Error::ImageBufferCreationFailed` - 結果画像の作成に失敗した場合
    ///
    /// # Examples
    ///
    /// ```
    /// use image::Rgba;
    /// use logoops::{Image, RemoveStrayText, StrayTextRemoval};
    ///
    /// # fn example() -> Result<(), logoops::Error> {
    /// let mut logo: Image<Rgba<u8>> = Image::new(20, 20);
    /// for y in 2..12 {
    ///     for x in 4..14 {
    ///         logo.put_pixel(x, y, Rgba([240, 120, 30, 255]));
    ///     }
    /// }
    /// // caption below the icon
    /// logo.put_pixel(5, 17, Rgba([0, 0, 0, 255]));
    ///
    /// match logo.remove_stray_text()? {
    ///     StrayTextRemoval::Cropped { image, .. } => assert_eq!(image.dimensions(), (10, 10)),
    ///     StrayTextRemoval::Empty => unreachable!(),
    /// }
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    fn remove_stray_text(&self) -> StrayTextResult<StrayTextRemoval>;
}

impl RemoveStrayText for Image<Rgba<u8>> {
    fn remove_stray_text(&self) -> StrayTextResult<StrayTextRemoval> {
        let segmentation = segment(self);
        match segmentation.source {
            MaskSource::Brightness => {
                info!("Detected opaque image, using brightness threshold for mask.")
            }
            MaskSource::Alpha => {
                info!("Detected transparent image, using alpha channel for mask.")
            }
        }

        let components = segmentation.components();
        let Some(classification) = classify_components(&components) else {
            info!("Image appears empty (all white/transparent).");
            return Ok(StrayTextRemoval::Empty);
        };

        info!("Found {} connected components.", segmentation.count);
        info!("Main component area: {}", classification.main.area);
        for component in &classification.dropped {
            info!(
                "Dropping component at y={} (area={}) - likely text",
                component.rows.start, component.area
            );
        }

        let composited = composite(self, &segmentation.labels, &classification.kept)?;
        let image = composited.trim_transparent().ok_or(Error::EmptyResult)?;

        Ok(StrayTextRemoval::Cropped {
            image,
            classification,
            source: segmentation.source,
        })
    }
}

/// 保持する成分以外の画素を透明にした画像を作成する
///
/// ラベルが0（背景）の画素も透明になる。
///
/// # Errors
///
/// * `Error::DimensionMismatch` - 画像とラベルの寸法が一致しない場合
/// * `Error::ImageBufferCreationFailed` - 結果画像の作成に失敗した場合
pub fn composite(
    image: &Image<Rgba<u8>>,
    labels: &Image<Luma<u32>>,
    kept: &KeepSet,
) -> StrayTextResult<Image<Rgba<u8>>> {
    validate_matching_dimensions(image.dimensions(), labels.dimensions())
        .map_err(|(expected, actual)| Error::DimensionMismatch { expected, actual })?;

    let processed_pixels = image
        .pixels()
        .zip(labels.pixels())
        .flat_map(|(pixel, Luma([label]))| {
            if kept.contains(*label) {
                pixel.0
            } else {
                CLEARED
            }
        })
        .collect();

    ImageBuffer::from_raw(image.width(), image.height(), processed_pixels)
        .ok_or(Error::ImageBufferCreationFailed)
}
