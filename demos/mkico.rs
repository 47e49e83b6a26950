use clap::{App, Arg};
use std::fs;

//===========================================================================//

fn main() {
    let matches = App::new("mkico")
        .about("Assembles PNG images into a Windows ICO file")
        .arg(
            Arg::with_name("output")
                .takes_value(true)
                .value_name("PATH")
                .short("o")
                .long("output")
                .required(true)
                .help("Sets the icon file to create"),
        )
        .arg(
            Arg::with_name("prefer-png")
                .long("prefer-png")
                .help("Uses PNG encoding whenever it is smaller"),
        )
        .arg(Arg::with_name("image").multiple(true).required(true))
        .get_matches();
    let mut icon = winicon::Icon::new();
    for path in matches.values_of("image").unwrap() {
        println!("Adding {:?}", path);
        let file = fs::File::open(path).unwrap();
        let image = winicon::IconImage::read_png(file).unwrap();
        icon.add(image);
    }
    let options = winicon::WriteOptions {
        prefer_png: matches.is_present("prefer-png"),
        ..winicon::WriteOptions::new()
    };
    let out_path = matches.value_of("output").unwrap();
    let out_file = fs::File::create(out_path).unwrap();
    icon.write(out_file, options).unwrap();
}

//===========================================================================//
