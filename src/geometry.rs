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
use crate::images::{PixelBuffer, YuvFrameDescriptor};
use crate::yuv_error::{check_dimensions, check_overflow_v3, check_source, MismatchedSize};
use crate::yuv_support::Yuv420Layout;
use crate::YuvError;
use fast_transpose::{
    rotate180_plane, rotate180_plane_with_alpha, rotate180_rgb, rotate180_rgba, transpose_plane,
    transpose_plane_with_alpha, transpose_rgb, transpose_rgba, FlipMode, FlopMode,
    TransposeError,
};
use num_traits::Zero;
use tracing::{debug, trace};

/// Declares clockwise rotation mode, 90, 180, 270
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum RotationMode {
    Rotate90,
    Rotate180,
    Rotate270,
}

impl RotationMode {
    /// Only exact right angles are accepted, `-90` or `360` are rejected as well.
    pub const fn from_degrees(degrees: i32) -> Result<Self, YuvError> {
        match degrees {
            90 => Ok(RotationMode::Rotate90),
            180 => Ok(RotationMode::Rotate180),
            270 => Ok(RotationMode::Rotate270),
            _ => Err(YuvError::UnsupportedRotation(degrees)),
        }
    }

    pub const fn degrees(self) -> i32 {
        match self {
            RotationMode::Rotate90 => 90,
            RotationMode::Rotate180 => 180,
            RotationMode::Rotate270 => 270,
        }
    }

    /// Rotation that undoes this one
    pub const fn inverse(self) -> Self {
        match self {
            RotationMode::Rotate90 => RotationMode::Rotate270,
            RotationMode::Rotate180 => RotationMode::Rotate180,
            RotationMode::Rotate270 => RotationMode::Rotate90,
        }
    }

    /// `(width, height)` of the image after rotation
    pub const fn rotated_dimensions(self, width: usize, height: usize) -> (usize, usize) {
        match self {
            RotationMode::Rotate180 => (width, height),
            RotationMode::Rotate90 | RotationMode::Rotate270 => (height, width),
        }
    }
}

impl TryFrom<i32> for RotationMode {
    type Error = YuvError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        RotationMode::from_degrees(value)
    }
}

/// Camera orientation APIs commonly report degrees as floats.
impl TryFrom<f32> for RotationMode {
    type Error = YuvError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        if value.fract() != 0. {
            return Err(YuvError::UnsupportedRotation(value as i32));
        }
        RotationMode::from_degrees(value as i32)
    }
}

pub(crate) fn map_ft_result(result: Result<(), TransposeError>) -> Result<(), YuvError> {
    match result {
        Ok(_) => Ok(()),
        Err(err) => match err {
            TransposeError::MismatchDimensions => Err(YuvError::ImageDimensionsNotMatch),
            TransposeError::InvalidArraySize => Err(YuvError::ImagesSizesNotMatch),
        },
    }
}

/// Both rasters are dense and must hold exactly `width * height * channels` elements.
fn check_rotation<T>(
    src: &[T],
    dst: &[T],
    width: usize,
    height: usize,
    channels: usize,
    mode: RotationMode,
) -> Result<(), YuvError> {
    trace!(width, height, channels, degrees = mode.degrees(), "rotate");

    if width == 0 || height == 0 {
        return Err(YuvError::ZeroBaseSize);
    }
    let expected = check_overflow_v3(width, height, channels)?;
    check_source(src, expected).inspect_err(|err| debug!(%err, "rotation source rejected"))?;
    if dst.len() != expected {
        let err = YuvError::DestinationSizeMismatch(MismatchedSize {
            expected,
            received: dst.len(),
        });
        debug!(%err, "rotation destination rejected");
        return Err(err);
    }
    Ok(())
}

fn rotate_to_vec<T: Copy + Zero>(
    src: &[T],
    width: usize,
    height: usize,
    channels: usize,
    rotate: impl FnOnce(&[T], &mut [T]) -> Result<(), YuvError>,
) -> Result<Vec<T>, YuvError> {
    let len = check_overflow_v3(width, height, channels)?;
    check_source(src, len)?;
    let mut dst = vec![T::zero(); len];
    rotate(src, &mut dst)?;
    Ok(dst)
}

/// Rotates RGBA 8 bit image.
///
/// This rotates any 4 channels image, channel order does not matter.
/// Rows are dense, `src` holds `width * height * 4` bytes and `dst` must be sized
/// for the rotated image, which has the same length.
///
/// # Arguments
///
/// * `src`: Source image
/// * `dst`: Destination image
/// * `width`: Image width
/// * `height`: Image Height
/// * `mode`: Refer to [RotationMode] for mode info
///
/// returns: Result<(), [YuvError]>
///
pub fn rotate_rgba(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    mode: RotationMode,
) -> Result<(), YuvError> {
    check_rotation(src, dst, width, height, 4, mode)?;
    let (dst_width, _) = mode.rotated_dimensions(width, height);
    let src_stride = width * 4;
    let dst_stride = dst_width * 4;
    let rs = match mode {
        RotationMode::Rotate90 => transpose_rgba(
            src,
            src_stride,
            dst,
            dst_stride,
            width,
            height,
            FlipMode::Flip,
            FlopMode::Flop,
        ),
        RotationMode::Rotate180 => rotate180_rgba(src, src_stride, dst, dst_stride, width, height),
        RotationMode::Rotate270 => transpose_rgba(
            src,
            src_stride,
            dst,
            dst_stride,
            width,
            height,
            FlipMode::NoFlip,
            FlopMode::NoFlop,
        ),
    };
    map_ft_result(rs)
}

/// Rotates RGB 8 bit image.
///
/// This rotates any 3 channels image, channel order does not matter.
///
/// # Arguments
///
/// * `src`: Source image
/// * `dst`: Destination image
/// * `width`: Image width
/// * `height`: Image Height
/// * `mode`: Refer to [RotationMode] for mode info
///
/// returns: Result<(), [YuvError]>
///
pub fn rotate_rgb(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    mode: RotationMode,
) -> Result<(), YuvError> {
    check_rotation(src, dst, width, height, 3, mode)?;
    let (dst_width, _) = mode.rotated_dimensions(width, height);
    let src_stride = width * 3;
    let dst_stride = dst_width * 3;
    let rs = match mode {
        RotationMode::Rotate90 => transpose_rgb(
            src,
            src_stride,
            dst,
            dst_stride,
            width,
            height,
            FlipMode::Flip,
            FlopMode::Flop,
        ),
        RotationMode::Rotate180 => rotate180_rgb(src, src_stride, dst, dst_stride, width, height),
        RotationMode::Rotate270 => transpose_rgb(
            src,
            src_stride,
            dst,
            dst_stride,
            width,
            height,
            FlipMode::NoFlip,
            FlopMode::NoFlop,
        ),
    };
    map_ft_result(rs)
}

/// Rotates packed ARGB image, one `u32` per pixel.
///
/// Words are moved whole, so the result does not depend on host endianness.
///
/// # Arguments
///
/// * `src`: Source image
/// * `dst`: Destination image
/// * `width`: Image width
/// * `height`: Image Height
/// * `mode`: Refer to [RotationMode] for mode info
///
/// returns: Result<(), [YuvError]>
///
pub fn rotate_argb(
    src: &[u32],
    dst: &mut [u32],
    width: usize,
    height: usize,
    mode: RotationMode,
) -> Result<(), YuvError> {
    check_rotation(src, dst, width, height, 1, mode)?;
    rotate_rgba(
        bytemuck::cast_slice(src),
        bytemuck::cast_slice_mut(dst),
        width,
        height,
        mode,
    )
}

/// Rotates CbCr 8 bit image.
///
/// This rotates any 2 channels image, channel order does not matter. Both
/// bytes of a pair always move together.
///
/// # Arguments
///
/// * `src`: Source image
/// * `dst`: Destination image
/// * `width`: Image width in pairs
/// * `height`: Image Height
/// * `mode`: Refer to [RotationMode] for mode info
///
/// returns: Result<(), [YuvError]>
///
pub fn rotate_cbcr(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    mode: RotationMode,
) -> Result<(), YuvError> {
    check_rotation(src, dst, width, height, 2, mode)?;
    let (dst_width, _) = mode.rotated_dimensions(width, height);
    let src_stride = width * 2;
    let dst_stride = dst_width * 2;
    let rs = match mode {
        RotationMode::Rotate90 => transpose_plane_with_alpha(
            src,
            src_stride,
            dst,
            dst_stride,
            width,
            height,
            FlipMode::Flip,
            FlopMode::Flop,
        ),
        RotationMode::Rotate180 => {
            rotate180_plane_with_alpha(src, src_stride, dst, dst_stride, width, height)
        }
        RotationMode::Rotate270 => transpose_plane_with_alpha(
            src,
            src_stride,
            dst,
            dst_stride,
            width,
            height,
            FlipMode::NoFlip,
            FlopMode::NoFlop,
        ),
    };
    map_ft_result(rs)
}

/// Rotates Planar 8 bit image.
///
/// # Arguments
///
/// * `src`: Source image
/// * `dst`: Destination image
/// * `width`: Image width
/// * `height`: Image Height
/// * `mode`: Refer to [RotationMode] for mode info
///
/// returns: Result<(), [YuvError]>
///
pub fn rotate_plane(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    mode: RotationMode,
) -> Result<(), YuvError> {
    check_rotation(src, dst, width, height, 1, mode)?;
    let (dst_width, _) = mode.rotated_dimensions(width, height);
    let rs = match mode {
        RotationMode::Rotate90 => transpose_plane(
            src,
            width,
            dst,
            dst_width,
            width,
            height,
            FlipMode::Flip,
            FlopMode::Flop,
        ),
        RotationMode::Rotate180 => rotate180_plane(src, width, dst, dst_width, width, height),
        RotationMode::Rotate270 => transpose_plane(
            src,
            width,
            dst,
            dst_width,
            width,
            height,
            FlipMode::NoFlip,
            FlopMode::NoFlop,
        ),
    };
    map_ft_result(rs)
}

/// Rotates a converted image into a newly allocated buffer of the same kind.
///
/// The result is `height x width` for 90 and 270 degrees.
pub fn rotate_pixel_buffer(
    src: &PixelBuffer,
    width: usize,
    height: usize,
    mode: RotationMode,
) -> Result<PixelBuffer, YuvError> {
    match src {
        PixelBuffer::Interleaved(rgba) => Ok(PixelBuffer::Interleaved(rotate_to_vec(
            rgba,
            width,
            height,
            4,
            |src, dst| rotate_rgba(src, dst, width, height, mode),
        )?)),
        PixelBuffer::Packed(argb) => Ok(PixelBuffer::Packed(rotate_to_vec(
            argb,
            width,
            height,
            1,
            |src, dst| rotate_argb(src, dst, width, height, mode),
        )?)),
    }
}

fn dense_descriptor(
    width: usize,
    height: usize,
    layout: Yuv420Layout,
) -> Result<YuvFrameDescriptor, YuvError> {
    let width = u32::try_from(width).map_err(|_| YuvError::PointerOverflow)?;
    let height = u32::try_from(height).map_err(|_| YuvError::PointerOverflow)?;
    check_dimensions(width, height)?;
    Ok(YuvFrameDescriptor::dense(width, height, layout))
}

/// Rotates unpadded YUV 4:2:0 frame in any of I420, YV12, NV12, NV21 layouts.
///
/// Both buffers are laid out as [YuvFrameDescriptor::dense] describes, the
/// destination with the rotated dimensions. Luma is rotated at full
/// resolution, chroma on the `ceil(width / 2) x ceil(height / 2)` grid.
/// Interleaved chroma pairs are never split, planar U and V stay aligned.
///
/// # Arguments
///
/// * `src`: Source frame
/// * `dst`: Destination frame, same length as the source
/// * `width`: Source width
/// * `height`: Source height
/// * `layout`: Memory layout of both frames
/// * `mode`: Refer to [RotationMode] for mode info
///
/// returns: Result<(), [YuvError]>
///
pub fn rotate_yuv420(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    layout: Yuv420Layout,
    mode: RotationMode,
) -> Result<(), YuvError> {
    trace!(width, height, ?layout, degrees = mode.degrees(), "rotate yuv420");

    let descriptor = dense_descriptor(width, height, layout)?;
    let frame_len = descriptor.min_buffer_len()?;
    check_source(src, frame_len).inspect_err(|err| debug!(%err, "yuv420 source rejected"))?;
    if dst.len() != frame_len {
        let err = YuvError::DestinationSizeMismatch(MismatchedSize {
            expected: frame_len,
            received: dst.len(),
        });
        debug!(%err, "yuv420 destination rejected");
        return Err(err);
    }

    let luma_len = descriptor.luma_plane_len()?;
    let (src_y, src_chroma) = src.split_at(luma_len);
    let (dst_y, dst_chroma) = dst.split_at_mut(luma_len);
    rotate_plane(src_y, dst_y, width, height, mode)?;

    let chroma_width = descriptor.chroma_width() as usize;
    let chroma_height = descriptor.chroma_height() as usize;
    if layout.is_semi_planar() {
        rotate_cbcr(src_chroma, dst_chroma, chroma_width, chroma_height, mode)?;
    } else {
        let plane_len = chroma_width * chroma_height;
        let (src_first, src_second) = src_chroma.split_at(plane_len);
        let (dst_first, dst_second) = dst_chroma.split_at_mut(plane_len);
        rotate_plane(src_first, dst_first, chroma_width, chroma_height, mode)?;
        rotate_plane(src_second, dst_second, chroma_width, chroma_height, mode)?;
    }
    Ok(())
}

/// Rotates unpadded YUV 4:2:0 frame into a newly allocated buffer.
pub fn rotate_yuv420_to_vec(
    src: &[u8],
    width: usize,
    height: usize,
    layout: Yuv420Layout,
    mode: RotationMode,
) -> Result<Vec<u8>, YuvError> {
    let frame_len = dense_descriptor(width, height, layout)?.min_buffer_len()?;
    check_source(src, frame_len)?;
    let mut dst = vec![0u8; frame_len];
    rotate_yuv420(src, &mut dst, width, height, layout, mode)?;
    Ok(dst)
}
