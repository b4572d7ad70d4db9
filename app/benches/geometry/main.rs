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
use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use yuv420_rgba::{
    rotate_argb, rotate_plane, rotate_rgba, rotate_yuv420, RotationMode, Yuv420Layout,
    YuvFrameDescriptor,
};

const WIDTH: usize = 1920;
const HEIGHT: usize = 1080;

fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rand::rng().fill(&mut bytes[..]);
    bytes
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let rgba_src = random_bytes(WIDTH * HEIGHT * 4);
    let plane_src = random_bytes(WIDTH * HEIGHT);
    let mut rng = rand::rng();
    let argb_src: Vec<u32> = (0..WIDTH * HEIGHT).map(|_| rng.random()).collect();

    for (name, mode) in [
        ("90", RotationMode::Rotate90),
        ("180", RotationMode::Rotate180),
        ("270", RotationMode::Rotate270),
    ] {
        c.bench_function(&format!("yuv420_rgba: Rotate {} RGBA8", name), |b| {
            let mut dst = vec![0u8; rgba_src.len()];
            b.iter(|| {
                rotate_rgba(&rgba_src, &mut dst, WIDTH, HEIGHT, mode).unwrap();
            })
        });

        c.bench_function(&format!("yuv420_rgba: Rotate {} ARGB u32", name), |b| {
            let mut dst = vec![0u32; argb_src.len()];
            b.iter(|| {
                rotate_argb(&argb_src, &mut dst, WIDTH, HEIGHT, mode).unwrap();
            })
        });

        c.bench_function(&format!("yuv420_rgba: Rotate {} Plane8", name), |b| {
            let mut dst = vec![0u8; plane_src.len()];
            b.iter(|| {
                rotate_plane(&plane_src, &mut dst, WIDTH, HEIGHT, mode).unwrap();
            })
        });
    }

    for (name, layout) in [
        ("I420", Yuv420Layout::PlanarUV),
        ("NV21", Yuv420Layout::SemiPlanarVU),
    ] {
        let frame_len = YuvFrameDescriptor::dense(WIDTH as u32, HEIGHT as u32, layout)
            .min_buffer_len()
            .unwrap();
        let frame = random_bytes(frame_len);
        c.bench_function(&format!("yuv420_rgba: Rotate 90 {}", name), |b| {
            let mut dst = vec![0u8; frame_len];
            b.iter(|| {
                rotate_yuv420(&frame, &mut dst, WIDTH, HEIGHT, layout, RotationMode::Rotate90)
                    .unwrap();
            })
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
