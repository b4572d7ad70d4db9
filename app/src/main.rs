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
use clap::Parser;
use image::RgbaImage;
use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;
use yuv420_rgba::{
    convert_to_rgba_with, rotate_pixel_buffer, PixelBufferKind, RotationMode, Yuv420Layout,
    YuvConversionOptions, YuvFrameDescriptor, YuvRange, YuvStandardMatrix,
};

#[derive(clap::ValueEnum, Clone, Debug, PartialEq, Copy)]
enum LayoutArg {
    /// Planar, U plane before V plane
    I420,
    /// Planar, V plane before U plane
    Yv12,
    /// Interleaved chroma, U first
    Nv12,
    /// Interleaved chroma, V first, the Android camera default
    Nv21,
}

impl From<LayoutArg> for Yuv420Layout {
    fn from(value: LayoutArg) -> Self {
        match value {
            LayoutArg::I420 => Yuv420Layout::PlanarUV,
            LayoutArg::Yv12 => Yuv420Layout::PlanarVU,
            LayoutArg::Nv12 => Yuv420Layout::SemiPlanarUV,
            LayoutArg::Nv21 => Yuv420Layout::SemiPlanarVU,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Debug, PartialEq, Copy)]
enum RangeArg {
    Full,
    Limited,
}

/// Converts a raw YUV 4:2:0 frame into a PNG image.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Raw frame file
    #[arg(short, long)]
    input: PathBuf,

    #[arg(long)]
    width: u32,

    #[arg(long)]
    height: u32,

    #[arg(short, long, value_enum, default_value = "nv21")]
    layout: LayoutArg,

    /// Bytes between luma rows, defaults to width
    #[arg(long)]
    y_stride: Option<u32>,

    /// Bytes between chroma rows, defaults to the unpadded row
    #[arg(long)]
    uv_stride: Option<u32>,

    /// Bytes between chroma samples, defaults to 1 for planar and 2 for interleaved layouts
    #[arg(long)]
    uv_pixel_stride: Option<u32>,

    /// Clockwise rotation in degrees: 90, 180 or 270
    #[arg(short, long)]
    rotate: Option<i32>,

    #[arg(long, value_enum, default_value = "full")]
    range: RangeArg,

    /// Output PNG path
    #[arg(short, long)]
    output: PathBuf,
}

impl Args {
    fn descriptor(&self) -> YuvFrameDescriptor {
        let dense = YuvFrameDescriptor::dense(self.width, self.height, self.layout.into());
        YuvFrameDescriptor::new(
            self.width,
            self.height,
            dense.layout,
            self.y_stride.unwrap_or(dense.y_stride),
            self.uv_stride.unwrap_or(dense.uv_stride),
            self.uv_pixel_stride.unwrap_or(dense.uv_pixel_stride),
        )
    }

    fn options(&self) -> YuvConversionOptions {
        let range = match self.range {
            RangeArg::Full => YuvRange::Full,
            RangeArg::Limited => YuvRange::Limited,
        };
        YuvConversionOptions::new(range, YuvStandardMatrix::Bt601)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let rotation = args.rotate.map(RotationMode::from_degrees).transpose()?;
    let descriptor = args.descriptor();

    let src = std::fs::read(&args.input)?;
    info!(
        path = %args.input.display(),
        bytes = src.len(),
        ?descriptor,
        "read frame"
    );

    let start = Instant::now();
    let mut pixels = convert_to_rgba_with(
        &src,
        &descriptor,
        PixelBufferKind::InterleavedByte,
        args.options(),
    )?;
    info!(elapsed = ?start.elapsed(), "converted");

    let (mut width, mut height) = (args.width as usize, args.height as usize);
    if let Some(mode) = rotation {
        let start = Instant::now();
        pixels = rotate_pixel_buffer(&pixels, width, height, mode)?;
        (width, height) = mode.rotated_dimensions(width, height);
        info!(degrees = mode.degrees(), elapsed = ?start.elapsed(), "rotated");
    }

    let image = RgbaImage::from_raw(width as u32, height as u32, pixels.into_rgba_bytes())
        .ok_or("converted buffer does not match image dimensions")?;
    image.save(&args.output)?;
    info!(path = %args.output.display(), width, height, "saved");

    Ok(())
}
