use clap::Parser;
use libwalk::options::Options;
use libwalk::traverse::Walker;
use std::io::BufWriter;
use std::process::ExitCode;

mod logging;

fn main() -> ExitCode {
    let opt = match Options::try_parse() {
        Ok(opt) => opt,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
        // --help, --version
        Err(e) => e.exit(),
    };

    logging::set_up_logging();
    tracing::debug!(?opt, "starting");

    let stdout = std::io::stdout();
    let mut t = Walker::new(
        BufWriter::new(stdout.lock()),
        std::io::stderr(),
        opt.separator(),
    );

    match t.walk_roots(&opt.roots()) {
        Ok(code) => ExitCode::from(code),
        // reader is gone, nothing left to say
        Err(e) if e.is_broken_pipe() => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("walk: {}", e);
            ExitCode::FAILURE
        }
    }
}
