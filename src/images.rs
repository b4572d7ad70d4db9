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
use crate::yuv_error::{
    check_dimensions, check_min_source, check_overflow_v2, InvalidStrideKind,
};
use crate::yuv_support::{PixelBufferKind, Yuv420Layout};
use crate::YuvError;

/// Geometry of a YUV 4:2:0 source buffer.
///
/// Strides are counted in bytes. Chroma planes are never assumed to be
/// contiguous with luma; everything is located through the strides.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct YuvFrameDescriptor {
    pub width: u32,
    pub height: u32,
    pub layout: Yuv420Layout,
    /// Bytes between successive luma rows
    pub y_stride: u32,
    /// Bytes between successive chroma rows
    pub uv_stride: u32,
    /// Bytes between successive chroma samples in a row, 1 for planar, 2 for interleaved
    pub uv_pixel_stride: u32,
}

impl YuvFrameDescriptor {
    pub const fn new(
        width: u32,
        height: u32,
        layout: Yuv420Layout,
        y_stride: u32,
        uv_stride: u32,
        uv_pixel_stride: u32,
    ) -> Self {
        Self {
            width,
            height,
            layout,
            y_stride,
            uv_stride,
            uv_pixel_stride,
        }
    }

    /// Descriptor of an unpadded frame, as produced by rotation and plane packing.
    pub const fn dense(width: u32, height: u32, layout: Yuv420Layout) -> Self {
        let pixel_stride = layout.chroma_pixel_stride();
        Self {
            width,
            height,
            layout,
            y_stride: width,
            uv_stride: width.div_ceil(2) * pixel_stride,
            uv_pixel_stride: pixel_stride,
        }
    }

    #[inline]
    pub const fn chroma_width(&self) -> u32 {
        self.width.div_ceil(2)
    }

    #[inline]
    pub const fn chroma_height(&self) -> u32 {
        self.height.div_ceil(2)
    }

    /// Size of the luma plane including row padding
    pub fn luma_plane_len(&self) -> Result<usize, YuvError> {
        check_overflow_v2(self.y_stride as usize, self.height as usize)
    }

    /// Size of one stored chroma plane including row padding
    pub fn chroma_plane_len(&self) -> Result<usize, YuvError> {
        check_overflow_v2(self.uv_stride as usize, self.chroma_height() as usize)
    }

    /// Smallest buffer that covers luma and every chroma plane under the strides.
    pub fn min_buffer_len(&self) -> Result<usize, YuvError> {
        let chroma = check_overflow_v2(self.chroma_plane_len()?, self.layout.chroma_planes())?;
        self.luma_plane_len()?
            .checked_add(chroma)
            .ok_or(YuvError::PointerOverflow)
    }

    /// Validates dimensions and strides, not the buffer itself.
    pub fn check_constraints(&self) -> Result<(), YuvError> {
        check_dimensions(self.width, self.height)?;
        if self.y_stride < self.width {
            return Err(YuvError::InvalidStride(InvalidStrideKind::LumaRow {
                stride: self.y_stride,
                width: self.width,
            }));
        }
        // The partner byte of an interleaved pair sits at +1
        let sample_bytes = self.layout.chroma_pixel_stride();
        if self.uv_pixel_stride < sample_bytes {
            return Err(YuvError::InvalidStride(InvalidStrideKind::ChromaPixel {
                stride: self.uv_pixel_stride,
                minimum: sample_bytes,
            }));
        }
        let min_uv_stride = (self.chroma_width() as u64 - 1) * self.uv_pixel_stride as u64
            + sample_bytes as u64;
        if (self.uv_stride as u64) < min_uv_stride {
            return Err(YuvError::InvalidStride(InvalidStrideKind::ChromaRow {
                stride: self.uv_stride,
                minimum: u32::try_from(min_uv_stride).unwrap_or(u32::MAX),
            }));
        }
        self.min_buffer_len()?;
        Ok(())
    }
}

#[derive(Debug, Copy, Clone)]
/// Non-mutable YUV 4:2:0 frame: a raw sensor buffer bound to its descriptor
pub struct Yuv420Image<'a> {
    pub data: &'a [u8],
    pub descriptor: YuvFrameDescriptor,
}

impl<'a> Yuv420Image<'a> {
    pub const fn new(data: &'a [u8], descriptor: YuvFrameDescriptor) -> Self {
        Self { data, descriptor }
    }

    pub fn check_constraints(&self) -> Result<(), YuvError> {
        self.descriptor.check_constraints()?;
        check_min_source(self.data, self.descriptor.min_buffer_len()?)
    }
}

/// Three separately stored camera planes, e.g. the planes of an Android
/// `YUV_420_888` image.
///
/// Chroma planes share row and pixel stride. A pixel stride of 2 means the
/// planes are views into an interleaved buffer.
#[derive(Debug, Copy, Clone)]
pub struct YuvPlanesImage<'a> {
    pub y_plane: &'a [u8],
    pub y_stride: u32,
    pub u_plane: &'a [u8],
    pub v_plane: &'a [u8],
    pub uv_stride: u32,
    pub uv_pixel_stride: u32,
    pub width: u32,
    pub height: u32,
}

impl YuvPlanesImage<'_> {
    pub fn check_constraints(&self) -> Result<(), YuvError> {
        check_dimensions(self.width, self.height)?;
        if self.y_stride < self.width {
            return Err(YuvError::InvalidStride(InvalidStrideKind::LumaRow {
                stride: self.y_stride,
                width: self.width,
            }));
        }
        if self.uv_pixel_stride == 0 {
            return Err(YuvError::InvalidStride(InvalidStrideKind::ChromaPixel {
                stride: 0,
                minimum: 1,
            }));
        }
        let chroma_width = self.width.div_ceil(2) as usize;
        let chroma_height = self.height.div_ceil(2) as usize;
        let uv_row_bytes = (chroma_width - 1) * self.uv_pixel_stride as usize + 1;
        if (self.uv_stride as usize) < uv_row_bytes {
            return Err(YuvError::InvalidStride(InvalidStrideKind::ChromaRow {
                stride: self.uv_stride,
                minimum: uv_row_bytes as u32,
            }));
        }
        // Camera planes commonly omit the padding after the last row
        let y_min =
            check_overflow_v2(self.y_stride as usize, self.height as usize - 1)? + self.width as usize;
        check_min_source(self.y_plane, y_min)?;
        let uv_min = check_overflow_v2(self.uv_stride as usize, chroma_height - 1)? + uv_row_bytes;
        check_min_source(self.u_plane, uv_min)?;
        check_min_source(self.v_plane, uv_min)?;
        Ok(())
    }
}

/// Converted or rotated RGBA pixels, dense, `width * height` pixels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PixelBuffer {
    /// Bytes R, G, B, A per pixel
    Interleaved(Vec<u8>),
    /// One `0xAARRGGBB` word per pixel, matches platform bitmap packing
    Packed(Vec<u32>),
}

impl PixelBuffer {
    pub fn alloc(width: u32, height: u32, kind: PixelBufferKind) -> Result<Self, YuvError> {
        let pixels = check_overflow_v2(width as usize, height as usize)?;
        let len = check_overflow_v2(pixels, kind.get_channels_count())?;
        Ok(match kind {
            PixelBufferKind::InterleavedByte => PixelBuffer::Interleaved(vec![0u8; len]),
            PixelBufferKind::PackedInt => PixelBuffer::Packed(vec![0u32; len]),
        })
    }

    pub const fn kind(&self) -> PixelBufferKind {
        match self {
            PixelBuffer::Interleaved(_) => PixelBufferKind::InterleavedByte,
            PixelBuffer::Packed(_) => PixelBufferKind::PackedInt,
        }
    }

    /// Number of pixels held
    pub fn pixel_count(&self) -> usize {
        let channels = self.kind().get_channels_count();
        match self {
            PixelBuffer::Interleaved(bytes) => bytes.len() / channels,
            PixelBuffer::Packed(words) => words.len() / channels,
        }
    }

    /// Returns pixel as `[R, G, B, A]`
    pub fn pixel(&self, index: usize) -> Option<[u8; 4]> {
        match self {
            PixelBuffer::Interleaved(bytes) => index
                .checked_mul(4)
                .and_then(|start| bytes.get(start..start.checked_add(4)?))
                .map(|px| [px[0], px[1], px[2], px[3]]),
            PixelBuffer::Packed(words) => words.get(index).map(|&argb| {
                let [a, r, g, b] = argb.to_be_bytes();
                [r, g, b, a]
            }),
        }
    }

    /// Converts to byte order R, G, B, A, consuming the buffer.
    pub fn into_rgba_bytes(self) -> Vec<u8> {
        match self {
            PixelBuffer::Interleaved(bytes) => bytes,
            PixelBuffer::Packed(words) => words
                .iter()
                .flat_map(|&argb| {
                    let [a, r, g, b] = argb.to_be_bytes();
                    [r, g, b, a]
                })
                .collect(),
        }
    }
}
