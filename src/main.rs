use std::{process, time::Instant};

use clap::{App, Arg, ArgMatches};
use log::{error, info};
use shading::{
    description::{DescriptionError, SceneDescription},
    material::RecordingState,
    preview::PreviewPass,
};
use thiserror::Error;

const DEMO_SCENE: &str = include_str!("../scenes/demo.ron");

#[derive(Debug, Error)]
enum AppError {
    #[error("{0}")]
    Description(#[from] DescriptionError),

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),

    #[error("argument {0} must be a positive integer, got {1}")]
    InvalidSize(&'static str, String),
}

fn size_arg(matches: &ArgMatches, name: &'static str) -> Result<Option<u32>, AppError> {
    match matches.value_of(name) {
        Some(v) => match v.parse::<u32>() {
            Ok(n) if n > 0 => Ok(Some(n)),
            _ => Err(AppError::InvalidSize(name, v.to_owned())),
        },
        None => Ok(None),
    }
}

fn run(matches: &ArgMatches) -> Result<(), AppError> {
    let now = Instant::now();

    let mut description = match matches.value_of("SCENE") {
        Some(path) => {
            info!("loading scene {}", path);
            SceneDescription::load(path)?
        }
        None => {
            info!("no scene given, using the built-in demo");
            SceneDescription::parse(DEMO_SCENE)?
        }
    };

    if let Some(w) = size_arg(matches, "width")? {
        description.camera.vw = w;
    }
    if let Some(h) = size_arg(matches, "height")? {
        description.camera.vh = h;
    }
    let options = &mut description.options;
    if matches.is_present("mirror") {
        options.shading.blinn = false;
    }
    if matches.is_present("double-sided") {
        options.shading.single_sided = false;
    }
    if matches.is_present("clamp-blend") {
        options.shading.clamp_blend = true;
    }
    if matches.is_present("specular-fix") {
        options.specular_fix = true;
    }

    let scene = description.build()?;
    info!("scene constructed in {}s", now.elapsed().as_secs_f32());

    if matches.is_present("preview") {
        let mut state = RecordingState::default();
        PreviewPass::new(scene.options.specular_fix).run(&scene.objects, &mut state);
        for draw in state.draws.iter() {
            info!(
                "preview draw surface {}: diffuse {:?} ambient {:?} specular {:?} shininess {}",
                draw.surface,
                draw.state.diffuse,
                draw.state.ambient,
                draw.state.specular,
                draw.state.shininess
            );
        }
    }

    let output = matches.value_of("output").unwrap_or("render.png");
    scene.render_to(output, image::ImageFormat::Png)?;
    info!("operation complete in {}s", now.elapsed().as_secs_f32());

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = App::new("Material shading renderer")
        .version("0.1")
        .about("Renders a RON scene description with Phong and procedural materials")
        .arg(
            Arg::with_name("SCENE")
                .help("The scene description file, the built-in demo when omitted")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .long("output")
                .short("o")
                .help("The output file")
                .default_value("render.png"),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .takes_value(true)
                .help("Override the camera's image width"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .takes_value(true)
                .help("Override the camera's image height"),
        )
        .arg(
            Arg::with_name("mirror")
                .long("mirror")
                .help("Use mirror reflection highlights instead of Blinn half vectors"),
        )
        .arg(
            Arg::with_name("double-sided")
                .long("double-sided")
                .help("Light surfaces from both sides"),
        )
        .arg(
            Arg::with_name("clamp-blend")
                .long("clamp-blend")
                .help("Clamp noise and marble blend factors to 0-1"),
        )
        .arg(
            Arg::with_name("preview")
                .long("preview")
                .help("Log the preview pass material bindings"),
        )
        .arg(
            Arg::with_name("specular-fix")
                .long("specular-fix")
                .help("Split the preview pass into three draws per surface"),
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        error!("failed to render: {}", e);
        process::exit(1);
    }
}
