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
    rotate_argb, rotate_rgba, rotate_yuv420_to_vec, RotationMode, Yuv420Layout,
    YuvFrameDescriptor,
};

fuzz_target!(|data: (u8, u8, u8, u8, Vec<u8>)| {
    let Ok(mode) = RotationMode::from_degrees((data.2 % 3 + 1) as i32 * 90) else {
        return;
    };
    fuzz_rotate_rgba(data.0, data.1, mode, &data.4);
    fuzz_rotate_yuv420(data.0, data.1, data.3, mode, &data.4);
});

fn fuzz_rotate_rgba(i_width: u8, i_height: u8, mode: RotationMode, seed: &[u8]) {
    if i_width == 0 || i_height == 0 || seed.is_empty() {
        return;
    }
    let (width, height) = (i_width as usize, i_height as usize);
    let src: Vec<u8> = seed.iter().copied().cycle().take(width * height * 4).collect();

    let mut rotated = vec![0u8; src.len()];
    rotate_rgba(&src, &mut rotated, width, height, mode).unwrap();
    let (w, h) = mode.rotated_dimensions(width, height);
    let mut restored = vec![0u8; src.len()];
    rotate_rgba(&rotated, &mut restored, w, h, mode.inverse()).unwrap();
    assert_eq!(restored, src);

    let argb: Vec<u32> = src
        .chunks_exact(4)
        .map(|px| u32::from_be_bytes([px[0], px[1], px[2], px[3]]))
        .collect();
    let mut rotated_argb = vec![0u32; argb.len()];
    rotate_argb(&argb, &mut rotated_argb, width, height, mode).unwrap();
    for (word, px) in rotated_argb.iter().zip(rotated.chunks_exact(4)) {
        assert_eq!(word.to_be_bytes(), px);
    }
}

fn fuzz_rotate_yuv420(i_width: u8, i_height: u8, layout_code: u8, mode: RotationMode, seed: &[u8]) {
    if i_width == 0 || i_height == 0 || seed.is_empty() {
        return;
    }
    let Ok(layout) = Yuv420Layout::try_from(layout_code as u32 % 4 + 1) else {
        return;
    };
    let (width, height) = (i_width as usize, i_height as usize);
    let frame_len = YuvFrameDescriptor::dense(width as u32, height as u32, layout)
        .min_buffer_len()
        .unwrap();
    let src: Vec<u8> = seed.iter().copied().cycle().take(frame_len).collect();

    let rotated = rotate_yuv420_to_vec(&src, width, height, layout, mode).unwrap();
    let (w, h) = mode.rotated_dimensions(width, height);
    let restored = rotate_yuv420_to_vec(&rotated, w, h, layout, mode.inverse()).unwrap();
    assert_eq!(restored, src);
}
