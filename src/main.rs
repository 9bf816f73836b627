#[macro_use]
extern crate log;
extern crate env_logger;
extern crate rgen;

fn main() {
    env_logger::init();

    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: rgen <manifest.json>");
            std::process::exit(2);
        }
    };

    match rgen::generate(&path) {
        Ok(generated) => info!("{} template(s) processed", generated.len()),
        Err(e) => {
            for cause in e.iter() {
                error!("{}", cause);
            }
            std::process::exit(1);
        }
    }
}
