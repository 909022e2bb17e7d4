//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

#[expect(
    clippy::print_stderr,
    reason = "the binary entry point reports fatal errors on stderr"
)]
fn main() {
    if let Err(err) = marquee_cli::run() {
        eprintln!("marquee: {err}");
        std::process::exit(1);
    }
}
