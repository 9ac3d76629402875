use std::process::ExitCode;

const INPUT_PATH: &str = "gym_photo.jpg";
const OUTPUT_PATH: &str = "Rep_Club_Gym.webp";
const QUALITY: f32 = 95.0;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    match rewebp::convert(INPUT_PATH, OUTPUT_PATH, QUALITY) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e.error());
            log::debug!("{:?}", e);
            ExitCode::FAILURE
        }
    }
}
