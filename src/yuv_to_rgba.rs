/*
 * Copyright (c) Radzivon Bartoshyk, 10/2026. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::images::{PixelBuffer, Yuv420Image, YuvFrameDescriptor};
use crate::numerics::{pack_argb, qrshr};
use crate::plane_locator::PlaneLocator;
use crate::yuv_error::check_destination;
use crate::yuv_support::*;
use crate::YuvError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;
use tracing::{debug, trace};

const PRECISION: i32 = 12;

/// Destination storage of one converted pixel.
pub(crate) trait RgbaStore: Copy + Send + Sync {
    /// Elements per pixel
    const CHANNELS: usize;

    fn store(dst: &mut [Self], r: u8, g: u8, b: u8);
}

impl RgbaStore for u8 {
    const CHANNELS: usize = 4;

    #[inline(always)]
    fn store(dst: &mut [u8], r: u8, g: u8, b: u8) {
        dst[0] = r;
        dst[1] = g;
        dst[2] = b;
        dst[3] = 255;
    }
}

impl RgbaStore for u32 {
    const CHANNELS: usize = 1;

    #[inline(always)]
    fn store(dst: &mut [u32], r: u8, g: u8, b: u8) {
        dst[0] = pack_argb(r, g, b);
    }
}

fn yuv420_to_rgbx<V: RgbaStore>(
    image: &Yuv420Image,
    dst: &mut [V],
    options: YuvConversionOptions,
) -> Result<(), YuvError> {
    let descriptor = image.descriptor;
    trace!(
        width = descriptor.width,
        height = descriptor.height,
        layout = ?descriptor.layout,
        range = ?options.range,
        matrix = ?options.matrix,
        channels = V::CHANNELS,
        "yuv420 to rgba"
    );

    image
        .check_constraints()
        .inspect_err(|err| debug!(%err, "yuv420 source rejected"))?;
    check_destination(dst, descriptor.width, descriptor.height, V::CHANNELS)
        .inspect_err(|err| debug!(%err, "rgba destination rejected"))?;

    let chroma_range = get_yuv_range(options.range);
    let kr_kb = options.matrix.get_kr_kb();
    let transform = get_inverse_transform(
        255,
        chroma_range.range_y,
        chroma_range.range_uv,
        kr_kb.kr,
        kr_kb.kb,
    )?;
    let inverse_transform = transform.to_integers(PRECISION as u32);
    let cr_coef = inverse_transform.cr_coef;
    let cb_coef = inverse_transform.cb_coef;
    let y_coef = inverse_transform.y_coef;
    let g_coef_1 = inverse_transform.g_coeff_1;
    let g_coef_2 = inverse_transform.g_coeff_2;

    let bias_y = chroma_range.bias_y as i32;
    let bias_uv = chroma_range.bias_uv as i32;

    let locator = PlaneLocator::new(&descriptor);
    let data = image.data;
    let width = descriptor.width as usize;

    let convert = |rgba: &mut [V], y_src: u8, cb_value: i32, cr_value: i32| {
        // Footroom below the luma bias is treated as black
        let y_value = (y_src as i32 - bias_y).max(0) * y_coef;

        let r = qrshr::<PRECISION, 8>(y_value + cr_coef * cr_value);
        let b = qrshr::<PRECISION, 8>(y_value + cb_coef * cb_value);
        let g = qrshr::<PRECISION, 8>(y_value - g_coef_1 * cr_value - g_coef_2 * cb_value);

        V::store(rgba, r as u8, g as u8, b as u8);
    };

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst.par_chunks_exact_mut(width * V::CHANNELS);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst.chunks_exact_mut(width * V::CHANNELS);
    }

    iter.enumerate().for_each(|(y, rgba)| {
        let y_start = locator.luma_row(y);
        let y_plane = &data[y_start..y_start + width];
        let (first_row, second_row) = locator.chroma_rows(y);
        let (u_row, v_row) = locator.order(first_row, second_row);

        // Each pair of luma samples shares one chroma pair
        for (cx, (rgba, y_src)) in rgba
            .chunks_exact_mut(V::CHANNELS * 2)
            .zip(y_plane.chunks_exact(2))
            .enumerate()
        {
            let column = locator.chroma_column(cx * 2);
            let cb_value = data[u_row + column] as i32 - bias_uv;
            let cr_value = data[v_row + column] as i32 - bias_uv;

            let (rgba0, rgba1) = rgba.split_at_mut(V::CHANNELS);
            convert(rgba0, y_src[0], cb_value, cr_value);
            convert(rgba1, y_src[1], cb_value, cr_value);
        }

        if width & 1 != 0 {
            let column = locator.chroma_column(width - 1);
            let cb_value = data[u_row + column] as i32 - bias_uv;
            let cr_value = data[v_row + column] as i32 - bias_uv;
            let rgba = rgba.chunks_exact_mut(V::CHANNELS * 2).into_remainder();
            convert(rgba, y_plane[width - 1], cb_value, cr_value);
        }
    });

    Ok(())
}

/// Convert YUV 4:2:0 frame in any of I420, YV12, NV12, NV21 layouts to RGBA.
///
/// This function takes YUV 420 data with 8-bit precision, located through the
/// frame descriptor strides, and writes RGBA with 8-bit per channel precision,
/// alpha always 255.
///
/// # Arguments
///
/// * `image` - Source frame.
/// * `rgba` - Destination, must be exactly `width * height * 4` bytes.
/// * `options` - The YUV range and matrix, default is full range BT.601.
///
/// Nothing is written to `rgba` when an error is returned.
pub fn yuv420_to_rgba(
    image: &Yuv420Image,
    rgba: &mut [u8],
    options: YuvConversionOptions,
) -> Result<(), YuvError> {
    yuv420_to_rgbx(image, rgba, options)
}

/// Convert YUV 4:2:0 frame in any of I420, YV12, NV12, NV21 layouts to packed ARGB.
///
/// Each pixel is one `u32` laid out `0xAARRGGBB`, which is the packing
/// expected by `ARGB_8888` bitmaps.
///
/// # Arguments
///
/// * `image` - Source frame.
/// * `argb` - Destination, must be exactly `width * height` words.
/// * `options` - The YUV range and matrix, default is full range BT.601.
///
/// Nothing is written to `argb` when an error is returned.
pub fn yuv420_to_argb(
    image: &Yuv420Image,
    argb: &mut [u32],
    options: YuvConversionOptions,
) -> Result<(), YuvError> {
    yuv420_to_rgbx(image, argb, options)
}

/// Converts a raw sensor buffer into a newly allocated [PixelBuffer] using full range BT.601.
pub fn convert_to_rgba(
    src: &[u8],
    descriptor: &YuvFrameDescriptor,
    kind: PixelBufferKind,
) -> Result<PixelBuffer, YuvError> {
    convert_to_rgba_with(src, descriptor, kind, YuvConversionOptions::default())
}

/// Converts a raw sensor buffer into a newly allocated [PixelBuffer].
pub fn convert_to_rgba_with(
    src: &[u8],
    descriptor: &YuvFrameDescriptor,
    kind: PixelBufferKind,
    options: YuvConversionOptions,
) -> Result<PixelBuffer, YuvError> {
    let image = Yuv420Image::new(src, *descriptor);
    // Validate before allocating the destination
    image.check_constraints()?;
    let mut buffer = PixelBuffer::alloc(descriptor.width, descriptor.height, kind)?;
    match &mut buffer {
        PixelBuffer::Interleaved(rgba) => yuv420_to_rgba(&image, rgba, options)?,
        PixelBuffer::Packed(argb) => yuv420_to_argb(&image, argb, options)?,
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::YuvErrorKind;
    use rand::Rng;

    const LAYOUTS: [Yuv420Layout; 4] = [
        Yuv420Layout::PlanarUV,
        Yuv420Layout::PlanarVU,
        Yuv420Layout::SemiPlanarUV,
        Yuv420Layout::SemiPlanarVU,
    ];

    struct LogicalImage {
        width: usize,
        height: usize,
        y: Vec<u8>,
        u: Vec<u8>,
        v: Vec<u8>,
    }

    impl LogicalImage {
        fn random(width: usize, height: usize) -> Self {
            let mut rng = rand::rng();
            let chroma = width.div_ceil(2) * height.div_ceil(2);
            let mut y = vec![0u8; width * height];
            let mut u = vec![0u8; chroma];
            let mut v = vec![0u8; chroma];
            rng.fill(&mut y[..]);
            rng.fill(&mut u[..]);
            rng.fill(&mut v[..]);
            LogicalImage {
                width,
                height,
                y,
                u,
                v,
            }
        }

        fn uniform(width: usize, height: usize, y: u8, u: u8, v: u8) -> Self {
            let chroma = width.div_ceil(2) * height.div_ceil(2);
            LogicalImage {
                width,
                height,
                y: vec![y; width * height],
                u: vec![u; chroma],
                v: vec![v; chroma],
            }
        }

        fn chroma_index(&self, x: usize, y: usize) -> usize {
            (y / 2) * self.width.div_ceil(2) + x / 2
        }

        /// Lays the image out as `descriptor` says, padding filled with junk
        fn encode(&self, descriptor: &YuvFrameDescriptor) -> Vec<u8> {
            let mut data = vec![0xA5u8; descriptor.min_buffer_len().unwrap()];
            let locator = PlaneLocator::new(descriptor);
            for y in 0..self.height {
                for x in 0..self.width {
                    data[locator.luma_offset(x, y)] = self.y[y * self.width + x];
                    let (u_offset, v_offset) = locator.uv_offsets(x, y);
                    data[u_offset] = self.u[self.chroma_index(x, y)];
                    data[v_offset] = self.v[self.chroma_index(x, y)];
                }
            }
            data
        }
    }

    fn reference(y: u8, u: u8, v: u8) -> [i32; 3] {
        let y = y as f64;
        let u = u as f64 - 128.;
        let v = v as f64 - 128.;
        let r = y + 1.402 * v;
        let g = y - 0.344136 * u - 0.714136 * v;
        let b = y + 1.772 * u;
        [r, g, b].map(|c| c.round().clamp(0., 255.) as i32)
    }

    fn convert_bytes(data: &[u8], descriptor: &YuvFrameDescriptor) -> Vec<u8> {
        match convert_to_rgba(data, descriptor, PixelBufferKind::InterleavedByte).unwrap() {
            PixelBuffer::Interleaved(rgba) => rgba,
            PixelBuffer::Packed(_) => unreachable!(),
        }
    }

    #[test]
    fn test_mid_gray() {
        for layout in LAYOUTS {
            let image = LogicalImage::uniform(8, 6, 128, 128, 128);
            let descriptor = YuvFrameDescriptor::dense(8, 6, layout);
            let rgba = convert_bytes(&image.encode(&descriptor), &descriptor);
            for px in rgba.chunks_exact(4) {
                for &c in &px[..3] {
                    assert!((c as i32 - 128).abs() <= 1, "Gray drifted to {:?}", px);
                }
                assert_eq!(px[3], 255);
            }
        }
    }

    #[test]
    fn test_matches_reference_formula() {
        let image = LogicalImage::random(37, 23);
        let descriptor = YuvFrameDescriptor::dense(37, 23, Yuv420Layout::PlanarUV);
        let rgba = convert_bytes(&image.encode(&descriptor), &descriptor);
        for y in 0..image.height {
            for x in 0..image.width {
                let chroma = image.chroma_index(x, y);
                let expected = reference(
                    image.y[y * image.width + x],
                    image.u[chroma],
                    image.v[chroma],
                );
                let px = &rgba[(y * image.width + x) * 4..][..4];
                for c in 0..3 {
                    let diff = (px[c] as i32 - expected[c]).abs();
                    assert!(
                        diff <= 1,
                        "Pixel ({}, {}) expected {:?}, converted {:?}",
                        x,
                        y,
                        expected,
                        px
                    );
                }
            }
        }
    }

    #[test]
    fn test_alpha_is_opaque() {
        for layout in LAYOUTS {
            let image = LogicalImage::random(15, 9);
            let descriptor = YuvFrameDescriptor::dense(15, 9, layout);
            let data = image.encode(&descriptor);
            let rgba = convert_bytes(&data, &descriptor);
            assert!(rgba.chunks_exact(4).all(|px| px[3] == 255));
            let packed = convert_to_rgba(&data, &descriptor, PixelBufferKind::PackedInt).unwrap();
            match packed {
                PixelBuffer::Packed(argb) => assert!(argb.iter().all(|&px| px >> 24 == 0xFF)),
                PixelBuffer::Interleaved(_) => unreachable!(),
            }
        }
    }

    #[test]
    fn test_saturates_instead_of_wrapping() {
        let descriptor = YuvFrameDescriptor::dense(2, 2, Yuv420Layout::SemiPlanarVU);

        let bright = LogicalImage::uniform(2, 2, 255, 255, 255);
        let rgba = convert_bytes(&bright.encode(&descriptor), &descriptor);
        assert_eq!(rgba[0], 255);
        assert!((120..=122).contains(&rgba[1]));
        assert_eq!(rgba[2], 255);

        let dark = LogicalImage::uniform(2, 2, 0, 0, 0);
        let rgba = convert_bytes(&dark.encode(&descriptor), &descriptor);
        assert_eq!(rgba[0], 0);
        assert!((134..=136).contains(&rgba[1]));
        assert_eq!(rgba[2], 0);
    }

    #[test]
    fn test_chroma_shared_by_2x2_block() {
        let width = 4;
        let height = 4;
        let mut image = LogicalImage::uniform(width, height, 0, 0, 0);
        for (i, y) in image.y.iter_mut().enumerate() {
            *y = 60 + (i as u8) * 8;
        }
        image.u = vec![100, 140, 120, 150];
        image.v = vec![150, 110, 130, 105];
        let descriptor = YuvFrameDescriptor::dense(4, 4, Yuv420Layout::PlanarUV);
        let rgba = convert_bytes(&image.encode(&descriptor), &descriptor);

        for block_y in 0..2 {
            for block_x in 0..2 {
                let mut deltas = Vec::new();
                for dy in 0..2 {
                    for dx in 0..2 {
                        let x = block_x * 2 + dx;
                        let y = block_y * 2 + dy;
                        let luma = image.y[y * width + x] as i32;
                        let px = &rgba[(y * width + x) * 4..][..3];
                        deltas.push([
                            px[0] as i32 - luma,
                            px[1] as i32 - luma,
                            px[2] as i32 - luma,
                        ]);
                    }
                }
                assert!(
                    deltas.iter().all(|d| *d == deltas[0]),
                    "Block ({}, {}) chroma terms differ: {:?}",
                    block_x,
                    block_y,
                    deltas
                );
            }
        }
    }

    #[test]
    fn test_layouts_are_equivalent() {
        let image = LogicalImage::random(21, 14);
        let reference_descriptor = YuvFrameDescriptor::dense(21, 14, Yuv420Layout::PlanarUV);
        let expected = convert_bytes(&image.encode(&reference_descriptor), &reference_descriptor);
        for layout in LAYOUTS {
            let descriptor = YuvFrameDescriptor::dense(21, 14, layout);
            let rgba = convert_bytes(&image.encode(&descriptor), &descriptor);
            assert_eq!(rgba, expected, "Layout {:?} diverged", layout);
        }
    }

    #[test]
    fn test_padded_strides_are_skipped() {
        let image = LogicalImage::random(13, 7);
        let dense = YuvFrameDescriptor::dense(13, 7, Yuv420Layout::SemiPlanarVU);
        let expected = convert_bytes(&image.encode(&dense), &dense);
        for layout in LAYOUTS {
            let padded = YuvFrameDescriptor::new(13, 7, layout, 16, 24, 2);
            let rgba = convert_bytes(&image.encode(&padded), &padded);
            assert_eq!(rgba, expected, "Layout {:?} diverged", layout);
        }
    }

    #[test]
    fn test_packed_matches_interleaved() {
        let image = LogicalImage::random(10, 10);
        let descriptor = YuvFrameDescriptor::dense(10, 10, Yuv420Layout::SemiPlanarUV);
        let data = image.encode(&descriptor);
        let interleaved = convert_to_rgba(&data, &descriptor, PixelBufferKind::InterleavedByte)
            .unwrap()
            .into_rgba_bytes();
        let packed = convert_to_rgba(&data, &descriptor, PixelBufferKind::PackedInt)
            .unwrap()
            .into_rgba_bytes();
        assert_eq!(interleaved, packed);
    }

    #[test]
    fn test_limited_range() {
        let descriptor = YuvFrameDescriptor::dense(2, 2, Yuv420Layout::SemiPlanarVU);
        let options = YuvConversionOptions::new(YuvRange::Limited, YuvStandardMatrix::Bt601);

        let black = LogicalImage::uniform(2, 2, 16, 128, 128).encode(&descriptor);
        let rgba = convert_to_rgba_with(&black, &descriptor, PixelBufferKind::InterleavedByte, options)
            .unwrap()
            .into_rgba_bytes();
        assert_eq!(&rgba[..4], &[0, 0, 0, 255]);

        let white = LogicalImage::uniform(2, 2, 235, 128, 128).encode(&descriptor);
        let rgba = convert_to_rgba_with(&white, &descriptor, PixelBufferKind::InterleavedByte, options)
            .unwrap()
            .into_rgba_bytes();
        assert_eq!(&rgba[..4], &[255, 255, 255, 255]);
    }

    #[test]
    fn test_limited_range_footroom_clamped() {
        let descriptor = YuvFrameDescriptor::dense(2, 2, Yuv420Layout::SemiPlanarVU);
        let options = YuvConversionOptions::new(YuvRange::Limited, YuvStandardMatrix::Bt601);
        let convert = |y: u8| {
            let data = LogicalImage::uniform(2, 2, y, 128, 255).encode(&descriptor);
            convert_to_rgba_with(&data, &descriptor, PixelBufferKind::InterleavedByte, options)
                .unwrap()
                .into_rgba_bytes()
        };

        let black_level = convert(16);
        assert!((202..=204).contains(&black_level[0]), "{:?}", &black_level[..4]);
        assert_eq!(&black_level[1..4], &[0, 0, 255]);
        for y in [0u8, 8, 15] {
            assert_eq!(convert(y), black_level, "Y={} went below black", y);
        }
    }

    #[test]
    fn test_one_byte_short_source_rejected() {
        for layout in LAYOUTS {
            let descriptor = YuvFrameDescriptor::new(6, 4, layout, 8, 8, layout.chroma_pixel_stride());
            let data = vec![128u8; descriptor.min_buffer_len().unwrap() - 1];
            let mut rgba = vec![7u8; 6 * 4 * 4];
            let err = yuv420_to_rgba(
                &Yuv420Image::new(&data, descriptor),
                &mut rgba,
                YuvConversionOptions::default(),
            )
            .unwrap_err();
            assert_eq!(err.kind(), YuvErrorKind::InvalidArgument);
            assert!(rgba.iter().all(|&v| v == 7), "Destination was touched");

            let err = convert_to_rgba(&data, &descriptor, PixelBufferKind::PackedInt).unwrap_err();
            assert_eq!(err.kind(), YuvErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn test_invalid_requests() {
        let data = vec![0u8; 64];
        let zero = YuvFrameDescriptor::dense(0, 4, Yuv420Layout::PlanarUV);
        assert_eq!(
            convert_to_rgba(&data, &zero, PixelBufferKind::InterleavedByte),
            Err(YuvError::ZeroBaseSize)
        );

        let descriptor = YuvFrameDescriptor::dense(4, 4, Yuv420Layout::PlanarUV);
        let mut short_rgba = vec![0u8; 4 * 4 * 4 - 1];
        let err = yuv420_to_rgba(
            &Yuv420Image::new(&data, descriptor),
            &mut short_rgba,
            YuvConversionOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), YuvErrorKind::InvalidArgument);

        let degenerate = YuvConversionOptions::new(YuvRange::Full, YuvStandardMatrix::Custom(0.5, 0.5));
        assert_eq!(
            convert_to_rgba_with(&data, &descriptor, PixelBufferKind::PackedInt, degenerate),
            Err(YuvError::InvalidMatrix)
        );
    }
}
