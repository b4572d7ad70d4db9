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
use crate::images::{YuvFrameDescriptor, YuvPlanesImage};
use crate::yuv_support::Yuv420Layout;
use crate::YuvError;
use tracing::{debug, trace};

#[inline]
fn gather_row(src_row: &[u8], pixel_stride: usize, dst_row: &mut [u8]) {
    for (dst, &src) in dst_row.iter_mut().zip(src_row.iter().step_by(pixel_stride)) {
        *dst = src;
    }
}

/// Assembles three camera planes into one dense YUV 4:2:0 frame.
///
/// Row and pixel padding is stripped, the result is laid out as
/// [YuvFrameDescriptor::dense] describes for the requested `layout`.
/// Planes may omit the padding after their last row.
///
/// # Arguments
///
/// * `image`: Source planes, see [YuvPlanesImage] for info
/// * `layout`: Target memory layout
///
/// returns: Result<Vec<u8>, [YuvError]>
///
pub fn pack_yuv420(image: &YuvPlanesImage, layout: Yuv420Layout) -> Result<Vec<u8>, YuvError> {
    trace!(
        width = image.width,
        height = image.height,
        ?layout,
        "pack yuv420 planes"
    );
    image
        .check_constraints()
        .inspect_err(|err| debug!(%err, "yuv420 planes rejected"))?;

    let descriptor = YuvFrameDescriptor::dense(image.width, image.height, layout);
    let mut dst = vec![0u8; descriptor.min_buffer_len()?];

    let width = image.width as usize;
    let y_stride = image.y_stride as usize;
    let chroma_width = descriptor.chroma_width() as usize;
    let uv_stride = image.uv_stride as usize;
    let uv_pixel_stride = image.uv_pixel_stride as usize;

    let (dst_y, dst_chroma) = dst.split_at_mut(descriptor.luma_plane_len()?);

    for (dst_row, src_row) in dst_y
        .chunks_exact_mut(width)
        .zip(image.y_plane.chunks(y_stride))
    {
        dst_row.copy_from_slice(&src_row[..width]);
    }

    let (first_plane, second_plane) = if layout.is_u_first() {
        (image.u_plane, image.v_plane)
    } else {
        (image.v_plane, image.u_plane)
    };

    if layout.is_semi_planar() {
        for (cy, dst_row) in dst_chroma.chunks_exact_mut(chroma_width * 2).enumerate() {
            let first_row = &first_plane[cy * uv_stride..];
            let second_row = &second_plane[cy * uv_stride..];
            for (cx, pair) in dst_row.chunks_exact_mut(2).enumerate() {
                pair[0] = first_row[cx * uv_pixel_stride];
                pair[1] = second_row[cx * uv_pixel_stride];
            }
        }
    } else {
        let plane_len = descriptor.chroma_plane_len()?;
        let (dst_first, dst_second) = dst_chroma.split_at_mut(plane_len);
        for (dst_plane, src_plane) in [(dst_first, first_plane), (dst_second, second_plane)] {
            for (cy, dst_row) in dst_plane.chunks_exact_mut(chroma_width).enumerate() {
                gather_row(&src_plane[cy * uv_stride..], uv_pixel_stride, dst_row);
            }
        }
    }

    Ok(dst)
}
