use std::io;

fn main() {
    railbird_cli::logging::init_logging();
    let args: Vec<String> = std::env::args().collect();
    let code = railbird_cli::run(args, &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
