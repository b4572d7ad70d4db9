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
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

/// Which stride of a frame descriptor was rejected.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum InvalidStrideKind {
    /// Luma row stride is less than the image width
    LumaRow { stride: u32, width: u32 },
    /// Chroma row stride can't hold one row of chroma samples
    ChromaRow { stride: u32, minimum: u32 },
    /// Chroma pixel stride is zero, or too small to keep interleaved pairs apart
    ChromaPixel { stride: u32, minimum: u32 },
}

/// Coarse classification of [YuvError], useful for callers that only care
/// whether a request was malformed or asked for something not supported.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum YuvErrorKind {
    InvalidArgument,
    UnsupportedLayout,
}

#[derive(Debug, Clone, PartialEq)]
pub enum YuvError {
    ZeroBaseSize,
    PointerOverflow,
    InvalidStride(InvalidStrideKind),
    SourceSizeMismatch(MismatchedSize),
    DestinationSizeMismatch(MismatchedSize),
    UnsupportedRotation(i32),
    UnsupportedLayout(u32),
    InvalidMatrix,
    ImageDimensionsNotMatch,
    ImagesSizesNotMatch,
}

impl YuvError {
    pub const fn kind(&self) -> YuvErrorKind {
        match self {
            YuvError::UnsupportedLayout(_) => YuvErrorKind::UnsupportedLayout,
            YuvError::ZeroBaseSize
            | YuvError::PointerOverflow
            | YuvError::InvalidStride(_)
            | YuvError::SourceSizeMismatch(_)
            | YuvError::DestinationSizeMismatch(_)
            | YuvError::UnsupportedRotation(_)
            | YuvError::InvalidMatrix
            | YuvError::ImageDimensionsNotMatch
            | YuvError::ImagesSizesNotMatch => YuvErrorKind::InvalidArgument,
        }
    }
}

impl Display for InvalidStrideKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidStrideKind::LumaRow { stride, width } => f.write_fmt(format_args!(
                "Luma row stride {} is less than image width {}",
                stride, width
            )),
            InvalidStrideKind::ChromaRow { stride, minimum } => f.write_fmt(format_args!(
                "Chroma row stride must be at least {}, but it was {}",
                minimum, stride
            )),
            InvalidStrideKind::ChromaPixel { stride, minimum } => f.write_fmt(format_args!(
                "Chroma pixel stride must be at least {}, but it was {}",
                minimum, stride
            )),
        }
    }
}

impl Display for YuvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            YuvError::ZeroBaseSize => f.write_str("Zero sized images is not supported"),
            YuvError::PointerOverflow => f.write_str("Image size overflow pointer capabilities"),
            YuvError::InvalidStride(kind) => Display::fmt(kind, f),
            YuvError::SourceSizeMismatch(size) => f.write_fmt(format_args!(
                "Source size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            YuvError::DestinationSizeMismatch(size) => f.write_fmt(format_args!(
                "Destination size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            YuvError::UnsupportedRotation(degrees) => f.write_fmt(format_args!(
                "Rotation by {} degrees is not supported, expected 90, 180 or 270",
                degrees
            )),
            YuvError::UnsupportedLayout(code) => {
                f.write_fmt(format_args!("Unknown YUV 4:2:0 layout code {}", code))
            }
            YuvError::InvalidMatrix => f.write_str("Matrix coefficients must satisfy kr + kb != 1"),
            YuvError::ImageDimensionsNotMatch => {
                f.write_str("Source and destination image dimensions do not match")
            }
            YuvError::ImagesSizesNotMatch => {
                f.write_str("Image buffer does not match its stride and dimensions")
            }
        }
    }
}

impl Error for YuvError {}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<usize, YuvError> {
    v0.checked_mul(v1).ok_or(YuvError::PointerOverflow)
}

#[inline]
pub(crate) fn check_overflow_v3(v0: usize, v1: usize, v2: usize) -> Result<usize, YuvError> {
    check_overflow_v2(v0, v1)?
        .checked_mul(v2)
        .ok_or(YuvError::PointerOverflow)
}

#[inline]
pub(crate) fn check_dimensions(width: u32, height: u32) -> Result<(), YuvError> {
    if width == 0 || height == 0 {
        return Err(YuvError::ZeroBaseSize);
    }
    Ok(())
}

/// Destination buffers are never padded, so the length must match exactly.
#[inline]
pub(crate) fn check_destination<V>(
    arr: &[V],
    width: u32,
    height: u32,
    channels: usize,
) -> Result<(), YuvError> {
    let expected = check_overflow_v3(width as usize, height as usize, channels)?;
    if arr.len() != expected {
        return Err(YuvError::DestinationSizeMismatch(MismatchedSize {
            expected,
            received: arr.len(),
        }));
    }
    Ok(())
}

/// Dense sources must match their geometry exactly.
#[inline]
pub(crate) fn check_source<V>(arr: &[V], expected: usize) -> Result<(), YuvError> {
    if arr.len() != expected {
        return Err(YuvError::SourceSizeMismatch(MismatchedSize {
            expected,
            received: arr.len(),
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_min_source<V>(arr: &[V], minimum: usize) -> Result<(), YuvError> {
    if arr.len() < minimum {
        return Err(YuvError::SourceSizeMismatch(MismatchedSize {
            expected: minimum,
            received: arr.len(),
        }));
    }
    Ok(())
}
