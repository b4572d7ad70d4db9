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
    yuv420_to_argb, yuv420_to_rgba, Yuv420Image, Yuv420Layout, YuvConversionOptions,
    YuvFrameDescriptor, YuvRange, YuvStandardMatrix,
};

const WIDTH: u32 = 1920;
const HEIGHT: u32 = 1080;

fn random_frame(descriptor: &YuvFrameDescriptor) -> Vec<u8> {
    let mut frame = vec![0u8; descriptor.min_buffer_len().unwrap()];
    rand::rng().fill(&mut frame[..]);
    frame
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let options = YuvConversionOptions::default();

    for (name, layout) in [
        ("I420", Yuv420Layout::PlanarUV),
        ("YV12", Yuv420Layout::PlanarVU),
        ("NV12", Yuv420Layout::SemiPlanarUV),
        ("NV21", Yuv420Layout::SemiPlanarVU),
    ] {
        let descriptor = YuvFrameDescriptor::dense(WIDTH, HEIGHT, layout);
        let frame = random_frame(&descriptor);
        let image = Yuv420Image::new(&frame, descriptor);

        c.bench_function(&format!("yuv420_rgba: {} -> RGBA", name), |b| {
            let mut rgba = vec![0u8; WIDTH as usize * HEIGHT as usize * 4];
            b.iter(|| {
                yuv420_to_rgba(&image, &mut rgba, options).unwrap();
            })
        });

        c.bench_function(&format!("yuv420_rgba: {} -> ARGB u32", name), |b| {
            let mut argb = vec![0u32; WIDTH as usize * HEIGHT as usize];
            b.iter(|| {
                yuv420_to_argb(&image, &mut argb, options).unwrap();
            })
        });
    }

    // Android camera planes: NV21 with padded rows
    let descriptor = YuvFrameDescriptor::new(
        WIDTH,
        HEIGHT,
        Yuv420Layout::SemiPlanarVU,
        WIDTH + 64,
        WIDTH + 64,
        2,
    );
    let frame = random_frame(&descriptor);
    let image = Yuv420Image::new(&frame, descriptor);
    let limited = YuvConversionOptions::new(YuvRange::Limited, YuvStandardMatrix::Bt601);

    c.bench_function("yuv420_rgba: NV21 padded limited -> RGBA", |b| {
        let mut rgba = vec![0u8; WIDTH as usize * HEIGHT as usize * 4];
        b.iter(|| {
            yuv420_to_rgba(&image, &mut rgba, limited).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
