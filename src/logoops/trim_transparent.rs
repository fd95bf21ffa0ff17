use crate::Image;
use image::{imageops, Rgba};

/// 透明な余白を切り詰める機能を提供するトレイト
///
/// アルファ値が0でない画素をすべて含む最小の矩形を求め、
/// その矩形で画像を切り抜きます。
pub trait TrimTransparent: Sized {
    /// 不透明な内容を囲む矩形 `[x, y, width, height]` を返す
    ///
    /// 完全に透明な画像の場合は `None` を返す。
    fn content_bounds(&self) -> Option<[u32; 4]>;

    /// 内容を囲む矩形で切り抜いた画像を返す
    ///
    /// 完全に透明な画像の場合は `None` を返す。
    fn trim_transparent(&self) -> Option<Self>;
}

impl TrimTransparent for Image<Rgba<u8>> {
    fn content_bounds(&self) -> Option<[u32; 4]> {
        let (width, height) = self.dimensions();
        let mut bounds = [width, height, 0, 0]; // [x1, y1, x2, y2]
        let mut found = false;

        for (x, y, pixel) in self.enumerate_pixels() {
            if pixel[3] != 0 {
                update_bounds(&mut bounds, x, y);
                found = true;
            }
        }

        found.then(|| {
            [
                bounds[0],
                bounds[1],
                bounds[2] - bounds[0] + 1,
                bounds[3] - bounds[1] + 1,
            ]
        })
    }

    fn trim_transparent(&self) -> Option<Self> {
        let [x, y, w, h] = self.content_bounds()?;
        Some(imageops::crop_imm(self, x, y, w, h).to_image())
    }
}

fn update_bounds(bounds: &mut [u32; 4], x: u32, y: u32) {
    bounds[0] = bounds[0].min(x);
    bounds[1] = bounds[1].min(y);
    bounds[2] = bounds[2].max(x);
    bounds[3] = bounds[3].max(y);
}
