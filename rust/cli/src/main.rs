use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = pokerview_bot::init_logging("warn") {
        eprintln!("WARNING: logging disabled: {}", e);
    }
    let code = pokerview_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    ExitCode::from(code as u8)
}
