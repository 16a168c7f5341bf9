fn main() {

    // 1. Parse commandline arguments to get the targets
    let targets = match trivec::handle_cli_args(trivec::args::parse_cli_args()) {
        Ok(targets) => targets,
        Err(err) => {
            eprintln!("CLI ERROR!\n{}", err);
            std::process::exit(1);
        },
    };

    // 2. Run the targets
    if let Err(err) = trivec::run_process(targets) {
        eprintln!("PROCESS ERROR!\n{}", err);
        std::process::exit(1);
    };
}
