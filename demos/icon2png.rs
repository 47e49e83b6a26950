use clap::{App, Arg};
use std::fs;
use std::path::{Path, PathBuf};

//===========================================================================//

fn main() {
    let matches = App::new("icon2png")
        .about("Extracts the images of ICO files to PNG files")
        .arg(
            Arg::with_name("dir")
                .takes_value(true)
                .value_name("PATH")
                .short("d")
                .long("dir")
                .help("Sets destination directory"),
        )
        .arg(Arg::with_name("ico").multiple(true).required(true))
        .get_matches();
    let dest_dir = PathBuf::from(matches.value_of("dir").unwrap_or("."));
    for path in matches.values_of("ico").unwrap() {
        if let Err(error) = process_file(&dest_dir, Path::new(path)) {
            eprintln!("{}: {}", path, error);
        }
    }
}

fn process_file(
    dest_dir: &Path,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = fs::File::open(path)?;
    let icon = winicon::Icon::read(file)?;
    let base = path.file_stem().and_then(|stem| stem.to_str()).unwrap_or("icon");
    for image in icon.images() {
        let name =
            format!("{}_{}x{}.png", base, image.width(), image.height());
        let out_file = fs::File::create(dest_dir.join(name))?;
        image.write_png(out_file)?;
    }
    Ok(())
}

//===========================================================================//
