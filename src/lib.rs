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
#![allow(clippy::too_many_arguments)]
mod geometry;
mod images;
mod numerics;
mod packing;
mod plane_locator;
mod yuv_error;
mod yuv_support;
mod yuv_to_rgba;

pub use yuv_error::{InvalidStrideKind, MismatchedSize, YuvError, YuvErrorKind};

pub use yuv_support::get_inverse_transform;
pub use yuv_support::CbCrInverseTransform;
pub use yuv_support::PixelBufferKind;
pub use yuv_support::Yuv420Layout;
pub use yuv_support::YuvChromaRange;
pub use yuv_support::YuvConversionOptions;
pub use yuv_support::YuvRange;
pub use yuv_support::YuvStandardMatrix;
pub use yuv_support::{get_yuv_range, YuvBias};

pub use images::{PixelBuffer, Yuv420Image, YuvFrameDescriptor, YuvPlanesImage};

pub use yuv_to_rgba::convert_to_rgba;
pub use yuv_to_rgba::convert_to_rgba_with;
pub use yuv_to_rgba::yuv420_to_argb;
pub use yuv_to_rgba::yuv420_to_rgba;

pub use geometry::{
    rotate_argb, rotate_cbcr, rotate_pixel_buffer, rotate_plane, rotate_rgb, rotate_rgba,
    rotate_yuv420, rotate_yuv420_to_vec, RotationMode,
};

pub use packing::pack_yuv420;
