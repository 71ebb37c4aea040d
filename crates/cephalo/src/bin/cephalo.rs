fn main() {
    if let Err(err) = cephalo::run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
