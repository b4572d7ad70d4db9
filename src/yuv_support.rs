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
use crate::YuvError;

#[derive(Debug, Copy, Clone)]
pub struct CbCrInverseTransform<T> {
    pub y_coef: T,
    pub cr_coef: T,
    pub cb_coef: T,
    pub g_coeff_1: T,
    pub g_coeff_2: T,
}

impl<T> CbCrInverseTransform<T> {
    pub fn new(
        y_coef: T,
        cr_coef: T,
        cb_coef: T,
        g_coeff_1: T,
        g_coeff_2: T,
    ) -> CbCrInverseTransform<T> {
        CbCrInverseTransform {
            y_coef,
            cr_coef,
            cb_coef,
            g_coeff_1,
            g_coeff_2,
        }
    }
}

impl CbCrInverseTransform<f32> {
    /// Integral transformation adds an error not less than 1%
    pub fn to_integers(&self, precision: u32) -> CbCrInverseTransform<i32> {
        let precision_scale: i32 = 1i32 << (precision as i32);
        let cr_coef = (self.cr_coef * precision_scale as f32).round() as i32;
        let cb_coef = (self.cb_coef * precision_scale as f32).round() as i32;
        let y_coef = (self.y_coef * precision_scale as f32).round() as i32;
        let g_coef_1 = (self.g_coeff_1 * precision_scale as f32).round() as i32;
        let g_coef_2 = (self.g_coeff_2 * precision_scale as f32).round() as i32;
        CbCrInverseTransform::<i32> {
            y_coef,
            cr_coef,
            cb_coef,
            g_coeff_1: g_coef_1,
            g_coeff_2: g_coef_2,
        }
    }
}

/// Transformation YUV to RGB with coefficients as specified in [ITU-R](https://www.itu.int/rec/T-REC-H.273/en)
///
/// For full range BT.601 this yields R = Y + 1.402 V', G = Y - 0.344136 U' - 0.714136 V',
/// B = Y + 1.772 U'.
pub fn get_inverse_transform(
    range_rgba: u32,
    range_y: u32,
    range_uv: u32,
    kr: f32,
    kb: f32,
) -> Result<CbCrInverseTransform<f32>, YuvError> {
    let range_uv = range_rgba as f32 / range_uv as f32;
    let y_coef = range_rgba as f32 / range_y as f32;
    let cr_coeff = (2f32 * (1f32 - kr)) * range_uv;
    let cb_coeff = (2f32 * (1f32 - kb)) * range_uv;
    let kg = 1.0f32 - kr - kb;
    if kg == 0f32 {
        return Err(YuvError::InvalidMatrix);
    }
    let g_coeff_1 = (2f32 * ((1f32 - kr) * kr / kg)) * range_uv;
    let g_coeff_2 = (2f32 * ((1f32 - kb) * kb / kg)) * range_uv;
    Ok(CbCrInverseTransform::new(
        y_coef, cr_coeff, cb_coeff, g_coeff_1, g_coeff_2,
    ))
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Eq, Hash, Default)]
/// Declares YUV range TV (limited) or Full
pub enum YuvRange {
    /// Limited range Y ∈ [16, 235], UV ∈ [16, 240], as most camera HALs deliver NV21.
    /// Luma below 16 converts as 16.
    Limited,
    /// Full range Y ∈ [0, 255], UV ∈ [0, 255]
    #[default]
    Full,
}

#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub struct YuvChromaRange {
    pub bias_y: u32,
    pub bias_uv: u32,
    pub range_y: u32,
    pub range_uv: u32,
    pub range: YuvRange,
}

pub const fn get_yuv_range(range: YuvRange) -> YuvChromaRange {
    match range {
        YuvRange::Limited => YuvChromaRange {
            bias_y: 16,
            bias_uv: 128,
            range_y: 219,
            range_uv: 224,
            range,
        },
        YuvRange::Full => YuvChromaRange {
            bias_y: 0,
            bias_uv: 128,
            range_uv: 255,
            range_y: 255,
            range,
        },
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Default)]
/// Declares standard prebuilt YUV conversion matrices, check [ITU-R](https://www.itu.int/rec/T-REC-H.273/en) information for more info
pub enum YuvStandardMatrix {
    #[default]
    Bt601,
    Bt709,
    Bt2020,
    /// Custom parameters first goes for kr, second for kb.
    /// Conversion fails with [YuvError::InvalidMatrix] if 1.0f32 - kr - kb == 0
    Custom(f32, f32),
}

#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub struct YuvBias {
    pub kr: f32,
    pub kb: f32,
}

impl YuvStandardMatrix {
    pub const fn get_kr_kb(self) -> YuvBias {
        match self {
            YuvStandardMatrix::Bt601 => YuvBias {
                kr: 0.299f32,
                kb: 0.114f32,
            },
            YuvStandardMatrix::Bt709 => YuvBias {
                kr: 0.2126f32,
                kb: 0.0722f32,
            },
            YuvStandardMatrix::Bt2020 => YuvBias {
                kr: 0.2627f32,
                kb: 0.0593f32,
            },
            YuvStandardMatrix::Custom(kr, kb) => YuvBias { kr, kb },
        }
    }
}

/// Conversion settings.
///
/// Default is full range BT.601.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct YuvConversionOptions {
    pub range: YuvRange,
    pub matrix: YuvStandardMatrix,
}

impl YuvConversionOptions {
    pub const fn new(range: YuvRange, matrix: YuvStandardMatrix) -> Self {
        Self { range, matrix }
    }
}

/// Memory arrangement of a YUV 4:2:0 frame.
///
/// Luma always comes first; layouts differ in how the two quarter-size chroma
/// planes follow it.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Yuv420Layout {
    /// I420: Y, then U plane, then V plane
    PlanarUV = 0,
    /// YV12: Y, then V plane, then U plane
    PlanarVU = 1,
    /// NV12: Y, then interleaved UVUV...
    SemiPlanarUV = 2,
    /// NV21: Y, then interleaved VUVU...
    SemiPlanarVU = 3,
}

/// Accepts format codes `1 = I420, 2 = YV12, 3 = NV12, 4 = NV21` used by
/// camera glue code.
impl TryFrom<u32> for Yuv420Layout {
    type Error = YuvError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Yuv420Layout::PlanarUV),
            2 => Ok(Yuv420Layout::PlanarVU),
            3 => Ok(Yuv420Layout::SemiPlanarUV),
            4 => Ok(Yuv420Layout::SemiPlanarVU),
            _ => Err(YuvError::UnsupportedLayout(value)),
        }
    }
}

impl Yuv420Layout {
    pub const fn format_code(self) -> u32 {
        self as u32 + 1
    }

    #[inline(always)]
    pub const fn is_semi_planar(self) -> bool {
        match self {
            Yuv420Layout::PlanarUV | Yuv420Layout::PlanarVU => false,
            Yuv420Layout::SemiPlanarUV | Yuv420Layout::SemiPlanarVU => true,
        }
    }

    /// Whether U is stored before V, either as the first plane or as the
    /// first byte of an interleaved pair.
    #[inline(always)]
    pub const fn is_u_first(self) -> bool {
        match self {
            Yuv420Layout::PlanarUV | Yuv420Layout::SemiPlanarUV => true,
            Yuv420Layout::PlanarVU | Yuv420Layout::SemiPlanarVU => false,
        }
    }

    /// Number of separately stored chroma planes
    #[inline(always)]
    pub const fn chroma_planes(self) -> usize {
        if self.is_semi_planar() {
            1
        } else {
            2
        }
    }

    /// Bytes one chroma pixel occupies in a dense chroma row
    #[inline(always)]
    pub const fn chroma_pixel_stride(self) -> u32 {
        if self.is_semi_planar() {
            2
        } else {
            1
        }
    }
}

/// Output pixel packing of the color converter.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PixelBufferKind {
    /// 4 bytes per pixel in order R, G, B, A
    InterleavedByte = 0,
    /// One `u32` per pixel, `0xAARRGGBB`
    PackedInt = 1,
}

impl PixelBufferKind {
    /// Storage elements per pixel
    #[inline(always)]
    pub const fn get_channels_count(&self) -> usize {
        match self {
            PixelBufferKind::InterleavedByte => 4,
            PixelBufferKind::PackedInt => 1,
        }
    }
}
