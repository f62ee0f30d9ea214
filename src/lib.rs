#![allow(clippy::many_single_char_names)]

pub mod camera;
pub mod config;
pub mod description;
pub mod lighting;
pub mod material;
pub mod math;
pub mod object;
pub mod perlin;
pub mod preview;
pub mod scene;
