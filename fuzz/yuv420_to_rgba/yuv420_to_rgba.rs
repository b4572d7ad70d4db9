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

#![no_main]

use libfuzzer_sys::fuzz_target;
use yuv420_rgba::{
    yuv420_to_argb, yuv420_to_rgba, Yuv420Image, Yuv420Layout, YuvConversionOptions,
    YuvFrameDescriptor, YuvRange, YuvStandardMatrix,
};

fuzz_target!(|data: (u8, u8, u8, u8, u8, u8, bool, Vec<u8>)| {
    fuzz_yuv_420(data.0, data.1, data.2, data.3, data.4, data.5, data.6, &data.7);
});

fn fuzz_yuv_420(
    i_width: u8,
    i_height: u8,
    layout_code: u8,
    y_stride: u8,
    uv_stride: u8,
    uv_pixel_stride: u8,
    limited: bool,
    frame: &[u8],
) {
    let Ok(layout) = Yuv420Layout::try_from(layout_code as u32 % 5) else {
        return;
    };
    let descriptor = YuvFrameDescriptor::new(
        i_width as u32,
        i_height as u32,
        layout,
        y_stride as u32,
        uv_stride as u32,
        uv_pixel_stride as u32,
    );
    let image = Yuv420Image::new(frame, descriptor);
    let range = if limited {
        YuvRange::Limited
    } else {
        YuvRange::Full
    };
    let options = YuvConversionOptions::new(range, YuvStandardMatrix::Bt601);

    let pixels = i_width as usize * i_height as usize;
    let mut rgba = vec![0u8; pixels * 4];
    let accepted = yuv420_to_rgba(&image, &mut rgba, options).is_ok();

    let mut argb = vec![0u32; pixels];
    assert_eq!(yuv420_to_argb(&image, &mut argb, options).is_ok(), accepted);

    if accepted {
        for (argb, rgba) in argb.iter().zip(rgba.chunks_exact(4)) {
            let [a, r, g, b] = argb.to_be_bytes();
            assert_eq!([r, g, b, a], rgba);
        }
    }
}
