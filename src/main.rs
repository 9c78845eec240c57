use clap::Parser;
use radar_assets::radar;
use std::{path::PathBuf, process::ExitCode};

#[derive(Debug, Parser)]
#[clap(
    name = "radar-assets",
    about = "Render the radar app icon (1024x1024) and splash screen (200x200) as PNG files"
)]
struct Args {
    /// Output directory. Defaults to `public/` one level above the executable.
    #[clap(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let out_dir = match args.output_dir {
        Some(dir) => dir,
        None => match radar_assets::default_output_dir() {
            Ok(dir) => dir,
            Err(err) => {
                println!("Error: {:#}", err);
                return ExitCode::from(radar_assets::FAILURE as u8);
            }
        },
    };

    let mut stdout = std::io::stdout().lock();
    let code = radar_assets::run(&out_dir, radar::png_support_available(), &mut stdout);
    ExitCode::from(code as u8)
}
