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
use crate::images::YuvFrameDescriptor;

/// Byte offsets of the two chroma samples serving one pixel.
///
/// `first` is the sample stored first in memory: U for `*UV` layouts, V for `*VU`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ChromaOffsets {
    pub first: usize,
    pub second: usize,
}

/// Resolves pixel coordinates into byte offsets of a YUV 4:2:0 buffer.
///
/// Built from a descriptor that already passed
/// [YuvFrameDescriptor::check_constraints], so none of the offset arithmetic
/// below overflows for in-bounds coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PlaneLocator {
    y_stride: usize,
    uv_stride: usize,
    uv_pixel_stride: usize,
    first_base: usize,
    /// Base of the second plane, or `first_base + 1` for interleaved chroma
    second_base: usize,
    u_first: bool,
}

impl PlaneLocator {
    pub fn new(descriptor: &YuvFrameDescriptor) -> Self {
        let y_stride = descriptor.y_stride as usize;
        let uv_stride = descriptor.uv_stride as usize;
        let first_base = y_stride * descriptor.height as usize;
        let second_base = if descriptor.layout.is_semi_planar() {
            first_base + 1
        } else {
            first_base + uv_stride * descriptor.chroma_height() as usize
        };
        Self {
            y_stride,
            uv_stride,
            uv_pixel_stride: descriptor.uv_pixel_stride as usize,
            first_base,
            second_base,
            u_first: descriptor.layout.is_u_first(),
        }
    }

    #[inline(always)]
    pub fn luma_row(&self, y: usize) -> usize {
        y * self.y_stride
    }

    #[inline(always)]
    pub fn luma_offset(&self, x: usize, y: usize) -> usize {
        self.luma_row(y) + x
    }

    /// Start offsets of the chroma row serving luma row `y`, as `(first, second)`
    #[inline(always)]
    pub fn chroma_rows(&self, y: usize) -> (usize, usize) {
        let row = (y >> 1) * self.uv_stride;
        (self.first_base + row, self.second_base + row)
    }

    #[inline(always)]
    pub fn chroma_column(&self, x: usize) -> usize {
        (x >> 1) * self.uv_pixel_stride
    }

    #[inline(always)]
    pub fn chroma_offsets(&self, x: usize, y: usize) -> ChromaOffsets {
        let (first, second) = self.chroma_rows(y);
        let column = self.chroma_column(x);
        ChromaOffsets {
            first: first + column,
            second: second + column,
        }
    }

    /// Offsets of the `(U, V)` samples for pixel `(x, y)`
    #[inline(always)]
    pub fn uv_offsets(&self, x: usize, y: usize) -> (usize, usize) {
        let offsets = self.chroma_offsets(x, y);
        self.order(offsets.first, offsets.second)
    }

    /// Orders a `(first, second)` pair into `(U, V)`
    #[inline(always)]
    pub fn order(&self, first: usize, second: usize) -> (usize, usize) {
        if self.u_first {
            (first, second)
        } else {
            (second, first)
        }
    }
}
