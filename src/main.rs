fn main() {
    if let Err(e) = holdfast::cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
